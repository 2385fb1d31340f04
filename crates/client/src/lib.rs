//! Async SDK for the tour operator REST surface.
//!
//! Covers `POST /authentication`, `GET /locations`, `POST /quotations` and
//! `POST /bookings`. Every call after login carries the session token in the
//! `tokenValue` header. Requests are strongly typed; quotation and booking
//! responses stay as raw JSON because their shape is vendor-defined.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("authentication rejected: {0}")]
    AuthRejected(String),
    #[error("call authenticate() before using the API")]
    NotAuthenticated,
    #[error("unexpected status {status}: {detail}")]
    Status { status: u16, detail: String },
}

#[derive(Debug, Serialize)]
struct AuthPayload<'a> {
    #[serde(rename = "UserId")]
    user_id: &'a str,
    #[serde(rename = "Password")]
    password: &'a str,
    #[serde(rename = "companyCode")]
    company_code: &'a str,
}

#[derive(Debug, Deserialize)]
struct AuthReply {
    #[serde(default)]
    status: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    result: Option<AuthResult>,
}

#[derive(Debug, Deserialize)]
struct AuthResult {
    #[serde(rename = "tokenValue")]
    token_value: String,
}

/// Quotation request parameters, serialized to the wire payload names.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationParams {
    pub pickup_location: String,
    pub drop_off_location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    pub show_pics: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreement_coupon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_value_without_vat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macro_description: Option<String>,
}

/// Minimum required booking fields; `customer` is passed through as-is.
#[derive(Clone, Debug, Serialize)]
pub struct BookingParams {
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    #[serde(rename = "pickupLocation")]
    pub pickup_location: String,
    #[serde(rename = "dropOffLocation")]
    pub drop_off_location: String,
    #[serde(rename = "Customer")]
    pub customer: Value,
    #[serde(rename = "VehicleCode")]
    pub vehicle_code: String,
    pub channel: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LocationRecord {
    #[serde(rename = "locationCode")]
    pub location_code: String,
    #[serde(rename = "locationName")]
    pub location_name: String,
    #[serde(rename = "isAirport", default)]
    pub is_airport: bool,
    #[serde(rename = "isRailway", default)]
    pub is_railway: bool,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

pub struct RentquoteClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl RentquoteClient {
    /// `base_url` is the tour operator root, e.g.
    /// `https://host/api/v1/touroperator`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, base_url: base_url.into().trim_end_matches('/').to_string(), token: None })
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Logs in and stores the session token for subsequent calls.
    pub async fn authenticate(
        &mut self,
        user_id: &str,
        password: &str,
        company_code: &str,
    ) -> Result<String, ClientError> {
        let url = format!("{}/authentication", self.base_url);
        let payload = AuthPayload { user_id, password, company_code };

        let response = self.http.post(&url).json(&payload).send().await?;
        let reply: AuthReply = Self::check(response).await?.json().await?;

        if !reply.status {
            return Err(ClientError::AuthRejected(
                reply.message.unwrap_or_else(|| "no reason given".to_string()),
            ));
        }
        let token = reply
            .result
            .map(|result| result.token_value)
            .ok_or_else(|| ClientError::AuthRejected("missing tokenValue".to_string()))?;

        debug!(event_name = "client.authenticated", "session token stored");
        self.token = Some(token.clone());
        Ok(token)
    }

    pub async fn locations(&self) -> Result<Vec<LocationRecord>, ClientError> {
        let url = format!("{}/locations", self.base_url);
        let response = self.http.get(&url).header("tokenValue", self.token()?).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn quotations(&self, params: &QuotationParams) -> Result<Value, ClientError> {
        let url = format!("{}/quotations", self.base_url);
        let response = self
            .http
            .post(&url)
            .header("tokenValue", self.token()?)
            .json(params)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn create_booking(&self, params: &BookingParams) -> Result<Value, ClientError> {
        let url = format!("{}/bookings", self.base_url);
        let response = self
            .http
            .post(&url)
            .header("tokenValue", self.token()?)
            .json(params)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    fn token(&self) -> Result<&str, ClientError> {
        self.token.as_deref().ok_or(ClientError::NotAuthenticated)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = response.text().await.unwrap_or_default();
        Err(ClientError::Status { status: status.as_u16(), detail })
    }
}
