use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::promo::DiscountType;

/// Headline numbers for the admin dashboard (`GET /admin/stats`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_bookings: u64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_cleaners: u64,
    #[serde(default)]
    pub open_tickets: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Cleaner {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub total_jobs: u32,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CleanerCreate {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqCreate {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub is_active: bool,
}

/// Body of `POST /admin/services`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceCreate {
    pub name: String,
    pub category: String,
    pub description: String,
    pub is_a_la_carte: bool,
    pub a_la_carte_price: Option<f64>,
    pub duration_hours: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupportTicket {
    pub id: String,
    #[serde(default)]
    pub customer_id: Option<String>,
    pub subject: String,
    #[serde(default)]
    pub message: String,
    pub status: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /admin/promo-codes`.
#[derive(Debug, Clone, Serialize)]
pub struct PromoCodeCreate {
    pub code: String,
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub minimum_order_amount: Option<f64>,
    pub maximum_discount_amount: Option<f64>,
    pub usage_limit: Option<u32>,
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}
