pub mod controller;
pub mod draft;
pub mod steps;

pub use controller::{BookingWizard, PromoError, SubmissionOutcome, SubmitError};
pub use draft::BookingDraft;
pub use steps::BookingStep;
