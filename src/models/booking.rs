use serde::{Deserialize, Serialize};

use super::customer::CustomerInput;
use super::house::{Frequency, HouseSizeBand};
use super::rooms::RoomSelection;
use super::service::ServiceLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Pending
    }
}

/// Full payload of `POST /bookings` and `POST /bookings/guest`. Assembled by
/// the wizard controller from the booking draft on confirm.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookingSubmission {
    pub customer: CustomerInput,
    pub house_size: HouseSizeBand,
    pub frequency: Frequency,
    pub base_price: f64,
    pub rooms: RoomSelection,
    pub services: Vec<ServiceLine>,
    pub a_la_carte_services: Vec<ServiceLine>,
    pub booking_date: String,
    pub time_slot: String,
    pub special_instructions: Option<String>,
    pub promo_code: Option<String>,
}

/// A booking as the backend reports it back, both right after creation and
/// from the confirmation view (`GET /bookings/{id}`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookingRecord {
    pub id: String,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub house_size: Option<HouseSizeBand>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
    #[serde(default)]
    pub booking_date: String,
    #[serde(default)]
    pub time_slot: String,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub cleaner_id: Option<String>,
    #[serde(default)]
    pub special_instructions: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Body of `POST /process-payment/{booking_id}`. Payment is simulated; the
/// method string is fixed.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRequest {
    pub amount: f64,
    pub payment_method: String,
}

pub const MOCK_PAYMENT_METHOD: &str = "mock_card";

impl PaymentRequest {
    pub fn mock_card(amount: f64) -> Self {
        Self {
            amount,
            payment_method: MOCK_PAYMENT_METHOD.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentOutcome {
    pub success: bool,
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default)]
    pub booking_status: Option<BookingStatus>,
    #[serde(default)]
    pub transaction_id: Option<String>,
}
