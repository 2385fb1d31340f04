use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failures the quotation core can surface to its caller.
///
/// Business-level emptiness (no eligible groups, no available offers) is
/// represented in [`crate::domain::offer::QuotationResult`] data, never as an
/// error variant.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("return date {return_at} must be strictly after pickup date {pickup_at}")]
    InvalidWindow { pickup_at: DateTime<Utc>, return_at: DateTime<Utc> },
}
