pub mod admin;
pub mod client;
pub mod interface;

pub use admin::AdminApi;
pub use client::BackendClient;
pub use interface::{BackendError, BookingBackend};
