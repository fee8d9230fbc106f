use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

/// A promo code as the backend describes it. `minimum_order_amount` and
/// `usage_limit` are enforced server-side; the client only carries them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PromoCode {
    pub code: String,
    #[serde(default)]
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    #[serde(default)]
    pub minimum_order_amount: Option<f64>,
    #[serde(default)]
    pub maximum_discount_amount: Option<f64>,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Body of `POST /validate-promo-code`. The subtotal at apply time rides
/// along so the server can check minimum-order rules.
#[derive(Debug, Clone, Serialize)]
pub struct PromoValidationRequest {
    pub code: String,
    pub subtotal: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromoValidationResponse {
    pub valid: bool,
    #[serde(default)]
    pub promo: Option<PromoCode>,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A promo the wizard accepted, with the discount fixed at apply time.
/// The discount is not recomputed when the cart changes afterwards; callers
/// re-validate explicitly if they want a fresh amount.
#[derive(Debug, Clone)]
pub struct AppliedPromo {
    pub promo: PromoCode,
    pub discount: f64,
}
