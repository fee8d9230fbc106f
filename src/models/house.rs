use serde::{Deserialize, Serialize};

/// Square-footage bands offered for pricing lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum HouseSizeBand {
    #[serde(rename = "1000-1500")]
    Sqft1000To1500,
    #[serde(rename = "1500-2000")]
    Sqft1500To2000,
    #[serde(rename = "2000-2500")]
    Sqft2000To2500,
    #[serde(rename = "2500-3000")]
    Sqft2500To3000,
    #[serde(rename = "3000-3500")]
    Sqft3000To3500,
    #[serde(rename = "3500-4000")]
    Sqft3500To4000,
    #[serde(rename = "4000-4500")]
    Sqft4000To4500,
    #[serde(rename = "5000+")]
    Sqft5000Plus,
}

impl HouseSizeBand {
    pub const ALL: [HouseSizeBand; 8] = [
        HouseSizeBand::Sqft1000To1500,
        HouseSizeBand::Sqft1500To2000,
        HouseSizeBand::Sqft2000To2500,
        HouseSizeBand::Sqft2500To3000,
        HouseSizeBand::Sqft3000To3500,
        HouseSizeBand::Sqft3500To4000,
        HouseSizeBand::Sqft4000To4500,
        HouseSizeBand::Sqft5000Plus,
    ];

    /// The range string used in pricing URLs and submission payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            HouseSizeBand::Sqft1000To1500 => "1000-1500",
            HouseSizeBand::Sqft1500To2000 => "1500-2000",
            HouseSizeBand::Sqft2000To2500 => "2000-2500",
            HouseSizeBand::Sqft2500To3000 => "2500-3000",
            HouseSizeBand::Sqft3000To3500 => "3000-3500",
            HouseSizeBand::Sqft3500To4000 => "3500-4000",
            HouseSizeBand::Sqft4000To4500 => "4000-4500",
            HouseSizeBand::Sqft5000Plus => "5000+",
        }
    }

    pub fn label(&self) -> String {
        format!("{} sq ft", self.as_str())
    }
}

/// How often the home is cleaned. Drives the base-price lookup together
/// with the size band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    OneTime,
    Monthly,
    #[serde(rename = "every_3_weeks")]
    Every3Weeks,
    BiWeekly,
    Weekly,
}

impl Frequency {
    pub const ALL: [Frequency; 5] = [
        Frequency::OneTime,
        Frequency::Monthly,
        Frequency::Every3Weeks,
        Frequency::BiWeekly,
        Frequency::Weekly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::OneTime => "one_time",
            Frequency::Monthly => "monthly",
            Frequency::Every3Weeks => "every_3_weeks",
            Frequency::BiWeekly => "bi_weekly",
            Frequency::Weekly => "weekly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::OneTime => "One Time Deep Clean / Move Out",
            Frequency::Monthly => "Monthly",
            Frequency::Every3Weeks => "Every 3 Weeks",
            Frequency::BiWeekly => "Bi-Weekly",
            Frequency::Weekly => "Weekly",
        }
    }
}
