use std::fmt;

use crate::models::booking::{BookingRecord, PaymentOutcome, PaymentRequest};
use crate::models::customer::ContactInfo;
use crate::models::house::{Frequency, HouseSizeBand};
use crate::models::promo::{AppliedPromo, PromoValidationRequest};
use crate::models::rooms::RoomSelection;
use crate::models::schedule::TimeSlot;
use crate::models::service::ServiceCatalogEntry;
use crate::services::backend::{BackendError, BookingBackend};
use crate::services::pricing_service::{PriceQuote, PricingService, MINIMUM_BASE_PRICE};
use crate::wizard::draft::BookingDraft;
use crate::wizard::steps::BookingStep;

#[derive(Debug)]
pub enum PromoError {
    /// The backend rejected the code (invalid, expired, below minimum...).
    Rejected(String),
    Backend(BackendError),
}

impl fmt::Display for PromoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromoError::Rejected(msg) => write!(f, "{}", msg),
            PromoError::Backend(err) => write!(f, "promo validation failed: {}", err),
        }
    }
}

#[derive(Debug)]
pub enum SubmitError {
    /// A submission is already outstanding; the call was ignored.
    InFlight,
    /// Submission is only reachable from the review step.
    NotOnReview,
    /// Required selections are missing from the draft.
    Incomplete,
    Backend(BackendError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::InFlight => write!(f, "a submission is already in progress"),
            SubmitError::NotOnReview => write!(f, "submission is only available from the review step"),
            SubmitError::Incomplete => write!(f, "the booking draft is missing required selections"),
            SubmitError::Backend(err) => write!(f, "booking failed: {}", err),
        }
    }
}

/// What a confirmed submission produced. The booking exists server-side even
/// when the payment simulation afterwards fails; there is no rollback.
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub booking: BookingRecord,
    pub amount_charged: f64,
    pub payment: Result<PaymentOutcome, BackendError>,
}

/// Owns one booking session: the current step, the draft, the catalog data
/// fetched from the backend, and the submission guard.
pub struct BookingWizard<B: BookingBackend> {
    backend: B,
    step: BookingStep,
    draft: BookingDraft,
    catalog: Vec<ServiceCatalogEntry>,
    available_dates: Vec<String>,
    time_slots: Vec<TimeSlot>,
    submitting: bool,
}

impl<B: BookingBackend> BookingWizard<B> {
    pub fn new(backend: B, is_guest: bool) -> Self {
        Self {
            backend,
            step: BookingStep::ServiceAndSize,
            draft: BookingDraft::new(is_guest),
            catalog: Vec::new(),
            available_dates: Vec::new(),
            time_slots: Vec::new(),
            submitting: false,
        }
    }

    pub fn current_step(&self) -> BookingStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn catalog(&self) -> &[ServiceCatalogEntry] {
        &self.catalog
    }

    pub fn standard_services(&self) -> impl Iterator<Item = &ServiceCatalogEntry> {
        self.catalog.iter().filter(|s| !s.is_a_la_carte)
    }

    pub fn a_la_carte_services(&self) -> impl Iterator<Item = &ServiceCatalogEntry> {
        self.catalog.iter().filter(|s| s.is_a_la_carte)
    }

    pub fn available_dates(&self) -> &[String] {
        &self.available_dates
    }

    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Load the service catalog and the available dates. The two fetches run
    /// concurrently and fail independently; a failure leaves the matching
    /// list empty and produces a user-facing warning instead of aborting the
    /// session.
    pub async fn load_initial_data(&mut self) -> Vec<String> {
        let (services, dates) = futures::join!(
            self.backend.fetch_services(),
            self.backend.fetch_available_dates()
        );

        let mut warnings = Vec::new();
        match services {
            Ok(list) => self.catalog = list,
            Err(err) => {
                eprintln!("Failed to load services: {}", err);
                warnings.push("Failed to load services".to_string());
            }
        }
        match dates {
            Ok(list) => self.available_dates = list,
            Err(err) => {
                eprintln!("Failed to load available dates: {}", err);
                warnings.push("Failed to load available dates".to_string());
            }
        }
        warnings
    }

    pub async fn set_house_size(&mut self, band: HouseSizeBand) {
        self.draft.set_house_size(band);
        self.refresh_pricing().await;
    }

    pub async fn set_frequency(&mut self, frequency: Frequency) {
        self.draft.set_frequency(frequency);
        self.refresh_pricing().await;
    }

    /// Re-fetch the base price once both size and frequency are chosen. A
    /// lookup failure falls back to the minimum charge instead of surfacing
    /// an error.
    pub async fn refresh_pricing(&mut self) {
        let (band, frequency) = match (self.draft.house_size(), self.draft.frequency()) {
            (Some(band), Some(frequency)) => (band, frequency),
            _ => return,
        };
        match self.backend.fetch_base_price(band, frequency).await {
            Ok(price) => self.draft.set_base_price(price),
            Err(err) => {
                eprintln!("Failed to fetch pricing, using minimum: {}", err);
                self.draft.set_base_price(MINIMUM_BASE_PRICE);
            }
        }
    }

    pub fn toggle_standard_service(&mut self, entry: &ServiceCatalogEntry) -> bool {
        self.draft.toggle_standard_service(entry)
    }

    pub fn add_a_la_carte(&mut self, entry: &ServiceCatalogEntry) {
        self.draft.add_a_la_carte(entry);
    }

    pub fn set_cart_quantity(&mut self, service_id: &str, quantity: u32) {
        self.draft.set_cart_quantity(service_id, quantity);
    }

    pub fn rooms_mut(&mut self) -> &mut RoomSelection {
        self.draft.rooms_mut()
    }

    /// Select a date and fetch its time slots. The previously selected slot
    /// is cleared regardless of whether the fetch succeeds.
    pub async fn select_date(&mut self, date: &str) -> Result<(), BackendError> {
        self.draft.select_date(date);
        self.time_slots.clear();
        match self.backend.fetch_time_slots(date).await {
            Ok(slots) => {
                self.time_slots = slots;
                Ok(())
            }
            Err(err) => {
                eprintln!("Failed to load time slots: {}", err);
                Err(err)
            }
        }
    }

    pub fn select_time_slot(&mut self, slot: TimeSlot) {
        self.draft.select_time_slot(slot);
    }

    pub fn set_contact(&mut self, contact: ContactInfo) {
        self.draft.set_contact(contact);
    }

    pub fn set_special_instructions(&mut self, instructions: impl Into<String>) {
        self.draft.set_special_instructions(instructions);
    }

    /// Validate a promo code against the current subtotal and apply it.
    /// Codes are upper-cased before validation. A rejection leaves any
    /// previously applied promo untouched.
    pub async fn apply_promo(&mut self, code: &str) -> Result<AppliedPromo, PromoError> {
        let code = code.trim().to_uppercase();
        let subtotal = self.quote().subtotal;
        let request = PromoValidationRequest {
            code: code.clone(),
            subtotal,
        };

        let response = self
            .backend
            .validate_promo(&request)
            .await
            .map_err(PromoError::Backend)?;

        if !response.valid {
            return Err(PromoError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Invalid promo code".to_string()),
            ));
        }
        let promo = response.promo.ok_or_else(|| {
            PromoError::Rejected("Promo code response was missing the promo".to_string())
        })?;

        let discount = response
            .discount
            .unwrap_or_else(|| PricingService::discount_amount(&promo, subtotal));
        let applied = AppliedPromo { promo, discount };
        self.draft.apply_promo(applied.clone());
        Ok(applied)
    }

    pub fn remove_promo(&mut self) {
        self.draft.clear_promo();
    }

    pub fn quote(&self) -> PriceQuote {
        PricingService::quote(
            self.draft.base_price(),
            self.draft.cart(),
            self.draft.applied_promo(),
        )
    }

    pub fn can_proceed(&self, step: BookingStep) -> bool {
        self.draft.can_enter(step)
    }

    /// Advance one step if the target step's gate is open. Returns whether
    /// the step changed; a closed gate is a strict no-op.
    pub fn next(&mut self) -> bool {
        match self.step.next() {
            Some(target) if self.draft.can_enter(target) => {
                self.step = target;
                true
            }
            _ => false,
        }
    }

    /// Go back one step, flooring at the first. Backward navigation is never
    /// gated.
    pub fn previous(&mut self) -> bool {
        match self.step.previous() {
            Some(target) => {
                self.step = target;
                true
            }
            None => false,
        }
    }

    /// Submit the booking and run the payment simulation. On success the
    /// draft is discarded and the wizard resets for a fresh session; on a
    /// booking failure the draft and step are preserved so the customer can
    /// retry.
    pub async fn submit(&mut self) -> Result<SubmissionOutcome, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        if self.step != BookingStep::Review {
            return Err(SubmitError::NotOnReview);
        }
        let submission = self.draft.to_submission().ok_or(SubmitError::Incomplete)?;
        let quote = self.quote();

        self.submitting = true;
        let booking = match self.backend.submit_booking(&submission).await {
            Ok(booking) => booking,
            Err(err) => {
                self.submitting = false;
                return Err(SubmitError::Backend(err));
            }
        };

        // The booking exists server-side; the draft is done regardless of
        // how the payment simulation goes.
        let is_guest = self.draft.is_guest();
        self.draft = BookingDraft::new(is_guest);
        self.time_slots.clear();
        self.step = BookingStep::ServiceAndSize;

        let payment = self
            .backend
            .process_payment(&booking.id, &PaymentRequest::mock_card(quote.total))
            .await;
        self.submitting = false;

        Ok(SubmissionOutcome {
            booking,
            amount_charged: quote.total,
            payment,
        })
    }

    /// Confirmation view data for a created booking.
    pub async fn fetch_confirmation(&self, booking_id: &str) -> Result<BookingRecord, BackendError> {
        self.backend.fetch_booking(booking_id).await
    }
}
