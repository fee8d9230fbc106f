//! Client for the Maids of Cyfair booking system: the multi-step booking
//! wizard (house profile, services, schedule, contact details, promo codes,
//! payment simulation) and thin bindings for the admin console endpoints.
//! The backend REST API is consumed, never implemented, here.

pub mod models;
pub mod services;
pub mod wizard;
