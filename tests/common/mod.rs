use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use cyfair_booking::models::booking::{
    BookingRecord, BookingStatus, BookingSubmission, PaymentOutcome, PaymentRequest, PaymentStatus,
};
use cyfair_booking::models::house::{Frequency, HouseSizeBand};
use cyfair_booking::models::promo::{
    DiscountType, PromoCode, PromoValidationRequest, PromoValidationResponse,
};
use cyfair_booking::models::schedule::TimeSlot;
use cyfair_booking::models::service::ServiceCatalogEntry;
use cyfair_booking::services::backend::{BackendError, BookingBackend};
use cyfair_booking::services::pricing_service::PricingService;

/// In-process backend double. Failure toggles are atomic so a test can flip
/// them between attempts; requests are recorded for payload assertions.
pub struct StubBackend {
    pub services: Vec<ServiceCatalogEntry>,
    pub dates: Vec<String>,
    pub slots: Vec<TimeSlot>,
    pub base_price: f64,
    pub promo: Option<PromoCode>,
    pub booking_id: String,
    pub fail_catalog: AtomicBool,
    pub fail_dates: AtomicBool,
    pub fail_slots: AtomicBool,
    pub fail_pricing: AtomicBool,
    pub fail_submit: AtomicBool,
    pub payment_success: bool,
    pub submissions: Mutex<Vec<BookingSubmission>>,
    pub promo_requests: Mutex<Vec<PromoValidationRequest>>,
    pub payment_requests: Mutex<Vec<PaymentRequest>>,
}

impl StubBackend {
    pub fn with_fixtures() -> Self {
        Self {
            services: vec![
                catalog_entry("standard_cleaning", "Standard Cleaning", false, None),
                catalog_entry("fridge_clean", "Inside Fridge", true, Some(35.0)),
                catalog_entry("oven_clean", "Inside Oven", true, Some(25.0)),
            ],
            dates: vec!["2026-09-01".to_string(), "2026-09-02".to_string()],
            slots: vec![
                TimeSlot {
                    start_time: "08:00".to_string(),
                    end_time: "10:00".to_string(),
                },
                TimeSlot {
                    start_time: "10:00".to_string(),
                    end_time: "12:00".to_string(),
                },
            ],
            base_price: 150.0,
            promo: Some(PromoCode {
                code: "SAVE10".to_string(),
                description: "10% off, capped".to_string(),
                discount_type: DiscountType::Percentage,
                discount_value: 10.0,
                minimum_order_amount: None,
                maximum_discount_amount: Some(15.0),
                usage_limit: None,
                is_active: true,
            }),
            booking_id: "abc123".to_string(),
            fail_catalog: AtomicBool::new(false),
            fail_dates: AtomicBool::new(false),
            fail_slots: AtomicBool::new(false),
            fail_pricing: AtomicBool::new(false),
            fail_submit: AtomicBool::new(false),
            payment_success: true,
            submissions: Mutex::new(Vec::new()),
            promo_requests: Mutex::new(Vec::new()),
            payment_requests: Mutex::new(Vec::new()),
        }
    }

    fn unavailable() -> BackendError {
        BackendError::Status(503, "service unavailable".to_string())
    }

    fn record(&self, submission: &BookingSubmission) -> BookingRecord {
        BookingRecord {
            id: self.booking_id.clone(),
            customer_id: Some("cust-1".to_string()),
            house_size: Some(submission.house_size),
            frequency: Some(submission.frequency),
            booking_date: submission.booking_date.clone(),
            time_slot: submission.time_slot.clone(),
            total_amount: submission.base_price,
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Pending,
            cleaner_id: None,
            special_instructions: submission.special_instructions.clone(),
            created_at: None,
        }
    }
}

pub fn catalog_entry(
    id: &str,
    name: &str,
    a_la_carte: bool,
    price: Option<f64>,
) -> ServiceCatalogEntry {
    ServiceCatalogEntry {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        category: None,
        is_a_la_carte: a_la_carte,
        a_la_carte_price: price,
        duration_hours: None,
    }
}

impl BookingBackend for &StubBackend {
    async fn fetch_services(&self) -> Result<Vec<ServiceCatalogEntry>, BackendError> {
        if self.fail_catalog.load(Ordering::SeqCst) {
            return Err(StubBackend::unavailable());
        }
        Ok(self.services.clone())
    }

    async fn fetch_available_dates(&self) -> Result<Vec<String>, BackendError> {
        if self.fail_dates.load(Ordering::SeqCst) {
            return Err(StubBackend::unavailable());
        }
        Ok(self.dates.clone())
    }

    async fn fetch_time_slots(&self, _date: &str) -> Result<Vec<TimeSlot>, BackendError> {
        if self.fail_slots.load(Ordering::SeqCst) {
            return Err(StubBackend::unavailable());
        }
        Ok(self.slots.clone())
    }

    async fn fetch_base_price(
        &self,
        _house_size: HouseSizeBand,
        _frequency: Frequency,
    ) -> Result<f64, BackendError> {
        if self.fail_pricing.load(Ordering::SeqCst) {
            return Err(StubBackend::unavailable());
        }
        Ok(self.base_price)
    }

    async fn validate_promo(
        &self,
        request: &PromoValidationRequest,
    ) -> Result<PromoValidationResponse, BackendError> {
        self.promo_requests
            .lock()
            .unwrap()
            .push(PromoValidationRequest {
                code: request.code.clone(),
                subtotal: request.subtotal,
            });

        match &self.promo {
            Some(promo) if promo.code == request.code => Ok(PromoValidationResponse {
                valid: true,
                discount: Some(PricingService::discount_amount(promo, request.subtotal)),
                promo: Some(promo.clone()),
                message: None,
            }),
            _ => Ok(PromoValidationResponse {
                valid: false,
                promo: None,
                discount: None,
                message: Some("Invalid promo code".to_string()),
            }),
        }
    }

    async fn submit_booking(
        &self,
        submission: &BookingSubmission,
    ) -> Result<BookingRecord, BackendError> {
        if self.fail_submit.load(Ordering::SeqCst) {
            return Err(StubBackend::unavailable());
        }
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(self.record(submission))
    }

    async fn fetch_booking(&self, booking_id: &str) -> Result<BookingRecord, BackendError> {
        let submissions = self.submissions.lock().unwrap();
        match submissions.last() {
            Some(submission) if booking_id == self.booking_id => Ok(self.record(submission)),
            _ => Err(BackendError::Status(404, "Booking not found".to_string())),
        }
    }

    async fn process_payment(
        &self,
        _booking_id: &str,
        request: &PaymentRequest,
    ) -> Result<PaymentOutcome, BackendError> {
        self.payment_requests.lock().unwrap().push(PaymentRequest {
            amount: request.amount,
            payment_method: request.payment_method.clone(),
        });
        Ok(PaymentOutcome {
            success: self.payment_success,
            payment_status: Some(if self.payment_success {
                PaymentStatus::Paid
            } else {
                PaymentStatus::Failed
            }),
            booking_status: Some(if self.payment_success {
                BookingStatus::Confirmed
            } else {
                BookingStatus::Cancelled
            }),
            transaction_id: self.payment_success.then(|| "txn-1".to_string()),
        })
    }
}
