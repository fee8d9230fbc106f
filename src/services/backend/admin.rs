use serde_json::json;

use super::client::BackendClient;
use super::interface::BackendError;
use crate::models::admin::{
    Cleaner, CleanerCreate, DashboardStats, Faq, FaqCreate, PromoCodeCreate, ServiceCreate,
    SupportTicket,
};
use crate::models::booking::{BookingRecord, BookingStatus};
use crate::models::promo::PromoCode;
use crate::models::service::ServiceCatalogEntry;

/// Thin wrappers over the admin console endpoints. Pure list/create/patch/
/// delete calls; all business rules live server-side. Requires a client
/// constructed with an auth token.
#[derive(Debug, Clone)]
pub struct AdminApi {
    client: BackendClient,
}

impl AdminApi {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    pub async fn stats(&self) -> Result<DashboardStats, BackendError> {
        self.client.get_json("admin/stats", &[]).await
    }

    pub async fn bookings(&self) -> Result<Vec<BookingRecord>, BackendError> {
        self.client.get_json("admin/bookings", &[]).await
    }

    pub async fn update_booking_status(
        &self,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<BookingRecord, BackendError> {
        self.client
            .patch_json(
                &format!("admin/bookings/{}", booking_id),
                &json!({ "status": status }),
            )
            .await
    }

    pub async fn assign_cleaner(
        &self,
        booking_id: &str,
        cleaner_id: &str,
    ) -> Result<BookingRecord, BackendError> {
        self.client
            .patch_json(
                &format!("admin/bookings/{}", booking_id),
                &json!({ "cleaner_id": cleaner_id }),
            )
            .await
    }

    pub async fn cleaners(&self) -> Result<Vec<Cleaner>, BackendError> {
        self.client.get_json("admin/cleaners", &[]).await
    }

    pub async fn create_cleaner(&self, cleaner: &CleanerCreate) -> Result<Cleaner, BackendError> {
        self.client.post_json("admin/cleaners", cleaner).await
    }

    pub async fn delete_cleaner(&self, cleaner_id: &str) -> Result<(), BackendError> {
        self.client
            .delete(&format!("admin/cleaners/{}", cleaner_id))
            .await
    }

    pub async fn faqs(&self) -> Result<Vec<Faq>, BackendError> {
        self.client.get_json("admin/faqs", &[]).await
    }

    pub async fn create_faq(&self, faq: &FaqCreate) -> Result<Faq, BackendError> {
        self.client.post_json("admin/faqs", faq).await
    }

    pub async fn delete_faq(&self, faq_id: &str) -> Result<(), BackendError> {
        self.client.delete(&format!("admin/faqs/{}", faq_id)).await
    }

    pub async fn services(&self) -> Result<Vec<ServiceCatalogEntry>, BackendError> {
        self.client.get_json("services", &[]).await
    }

    pub async fn create_service(
        &self,
        service: &ServiceCreate,
    ) -> Result<ServiceCatalogEntry, BackendError> {
        self.client.post_json("admin/services", service).await
    }

    pub async fn delete_service(&self, service_id: &str) -> Result<(), BackendError> {
        self.client
            .delete(&format!("admin/services/{}", service_id))
            .await
    }

    pub async fn tickets(&self) -> Result<Vec<SupportTicket>, BackendError> {
        self.client.get_json("admin/tickets", &[]).await
    }

    pub async fn update_ticket_status(
        &self,
        ticket_id: &str,
        status: &str,
    ) -> Result<SupportTicket, BackendError> {
        self.client
            .patch_json(
                &format!("admin/tickets/{}", ticket_id),
                &json!({ "status": status }),
            )
            .await
    }

    pub async fn promo_codes(&self) -> Result<Vec<PromoCode>, BackendError> {
        self.client.get_json("admin/promo-codes", &[]).await
    }

    pub async fn create_promo_code(
        &self,
        promo: &PromoCodeCreate,
    ) -> Result<PromoCode, BackendError> {
        self.client.post_json("admin/promo-codes", promo).await
    }

    /// CSV export of all bookings, returned as raw text.
    pub async fn export_bookings_csv(&self) -> Result<String, BackendError> {
        self.client.get_text("admin/export/bookings").await
    }
}
