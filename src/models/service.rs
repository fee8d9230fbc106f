use serde::{Deserialize, Serialize};

/// One entry of the service catalog, as returned by `GET /services`.
/// Loaded once per wizard session and treated as immutable afterwards.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceCatalogEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_a_la_carte: bool,
    #[serde(default)]
    pub a_la_carte_price: Option<f64>,
    #[serde(default)]
    pub duration_hours: Option<f64>,
}

impl ServiceCatalogEntry {
    pub fn unit_price(&self) -> f64 {
        self.a_la_carte_price.unwrap_or(0.0)
    }
}

/// A standard service the customer toggled on. Quantity is always 1 for
/// standard services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedService {
    pub service_id: String,
    pub service_name: String,
    pub quantity: u32,
}

/// An à-la-carte cart entry. Never present with quantity 0; removal happens
/// instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub service_id: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl CartEntry {
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// Wire form of a selected service inside a booking submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceLine {
    pub service_id: String,
    pub quantity: u32,
}
