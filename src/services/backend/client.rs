use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use super::interface::{BackendError, BookingBackend};
use crate::models::booking::{BookingRecord, BookingSubmission, PaymentOutcome, PaymentRequest};
use crate::models::house::{Frequency, HouseSizeBand};
use crate::models::promo::{PromoValidationRequest, PromoValidationResponse};
use crate::models::schedule::TimeSlot;
use crate::models::service::ServiceCatalogEntry;

/// HTTP implementation of the booking backend contract. One value per
/// session; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: ReqwestClient,
    base_url: String,
    auth_token: Option<String>,
}

impl BackendClient {
    /// `base_url` is the API root, e.g. `http://localhost:8000/api`.
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| BackendError::Request(format!("invalid backend URL: {}", e)))?;
        Ok(Self {
            http: ReqwestClient::new(),
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            auth_token: None,
        })
    }

    /// Attach a bearer token for authenticated sessions. The token is
    /// carried opaquely; obtaining it is out of scope here.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth_token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status(status.as_u16(), body));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, BackendError> {
        let request = self.apply_auth(self.http.get(self.endpoint(path)).query(query));
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        Self::read_json(response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        let request = self.apply_auth(self.http.post(self.endpoint(path)).json(body));
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        Self::read_json(response).await
    }

    pub(crate) async fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        let request = self.apply_auth(self.http.patch(self.endpoint(path)).json(body));
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        Self::read_json(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), BackendError> {
        let request = self.apply_auth(self.http.delete(self.endpoint(path)));
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status(status.as_u16(), body));
        }
        Ok(())
    }

    pub(crate) async fn get_text(&self, path: &str) -> Result<String, BackendError> {
        let request = self.apply_auth(self.http.get(self.endpoint(path)));
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status(status.as_u16(), body));
        }
        response
            .text()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}

#[derive(Debug, serde::Deserialize)]
struct PricingResponse {
    base_price: f64,
}

impl BookingBackend for BackendClient {
    async fn fetch_services(&self) -> Result<Vec<ServiceCatalogEntry>, BackendError> {
        self.get_json("services", &[]).await
    }

    async fn fetch_available_dates(&self) -> Result<Vec<String>, BackendError> {
        self.get_json("available-dates", &[]).await
    }

    async fn fetch_time_slots(&self, date: &str) -> Result<Vec<TimeSlot>, BackendError> {
        self.get_json("time-slots", &[("date", date)]).await
    }

    async fn fetch_base_price(
        &self,
        house_size: HouseSizeBand,
        frequency: Frequency,
    ) -> Result<f64, BackendError> {
        let path = format!("pricing/{}/{}", house_size.as_str(), frequency.as_str());
        let pricing: PricingResponse = self.get_json(&path, &[]).await?;
        Ok(pricing.base_price)
    }

    async fn validate_promo(
        &self,
        request: &PromoValidationRequest,
    ) -> Result<PromoValidationResponse, BackendError> {
        self.post_json("validate-promo-code", request).await
    }

    async fn submit_booking(
        &self,
        submission: &BookingSubmission,
    ) -> Result<BookingRecord, BackendError> {
        let path = if submission.customer.is_guest {
            "bookings/guest"
        } else {
            "bookings"
        };
        self.post_json(path, submission).await
    }

    async fn fetch_booking(&self, booking_id: &str) -> Result<BookingRecord, BackendError> {
        self.get_json(&format!("bookings/{}", booking_id), &[]).await
    }

    async fn process_payment(
        &self,
        booking_id: &str,
        request: &PaymentRequest,
    ) -> Result<PaymentOutcome, BackendError> {
        self.post_json(&format!("process-payment/{}", booking_id), request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let client = BackendClient::new("http://localhost:8000/api/").unwrap();
        assert_eq!(
            client.endpoint("/services"),
            "http://localhost:8000/api/services"
        );
        assert_eq!(
            client.endpoint("pricing/1500-2000/weekly"),
            "http://localhost:8000/api/pricing/1500-2000/weekly"
        );
    }

    #[test]
    fn rejects_unparseable_base_url() {
        assert!(BackendClient::new("not a url").is_err());
    }
}
