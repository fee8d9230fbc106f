use std::fmt;

use crate::models::booking::{BookingRecord, BookingSubmission, PaymentOutcome, PaymentRequest};
use crate::models::house::{Frequency, HouseSizeBand};
use crate::models::promo::{PromoValidationRequest, PromoValidationResponse};
use crate::models::schedule::TimeSlot;
use crate::models::service::ServiceCatalogEntry;

#[derive(Debug)]
pub enum BackendError {
    /// The request never produced a response (connect, timeout, body IO).
    Request(String),
    /// The backend answered with a non-success status.
    Status(u16, String),
    /// The response body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Request(msg) => write!(f, "request failed: {}", msg),
            BackendError::Status(code, body) => {
                write!(f, "backend returned status {}: {}", code, body)
            }
            BackendError::Decode(msg) => write!(f, "failed to decode response: {}", msg),
        }
    }
}

impl std::error::Error for BackendError {}

/// The backend REST contract the wizard consumes.
pub trait BookingBackend {
    async fn fetch_services(&self) -> Result<Vec<ServiceCatalogEntry>, BackendError>;

    async fn fetch_available_dates(&self) -> Result<Vec<String>, BackendError>;

    async fn fetch_time_slots(&self, date: &str) -> Result<Vec<TimeSlot>, BackendError>;

    async fn fetch_base_price(
        &self,
        house_size: HouseSizeBand,
        frequency: Frequency,
    ) -> Result<f64, BackendError>;

    async fn validate_promo(
        &self,
        request: &PromoValidationRequest,
    ) -> Result<PromoValidationResponse, BackendError>;

    /// Routes to `/bookings/guest` or `/bookings` depending on
    /// `submission.customer.is_guest`.
    async fn submit_booking(
        &self,
        submission: &BookingSubmission,
    ) -> Result<BookingRecord, BackendError>;

    async fn fetch_booking(&self, booking_id: &str) -> Result<BookingRecord, BackendError>;

    async fn process_payment(
        &self,
        booking_id: &str,
        request: &PaymentRequest,
    ) -> Result<PaymentOutcome, BackendError>;
}
