use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::QuoteError;

/// A normalized quote request as the core consumes it.
///
/// Syntactic concerns (date parsing, numeric coercion of age, wire field
/// aliases) belong to the calling layer; by the time a request reaches the
/// core every field is already typed. The core still re-checks the
/// end-after-start invariant before pricing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub pickup_location: String,
    pub drop_off_location: String,
    pub pickup_at: DateTime<Utc>,
    pub return_at: DateTime<Utc>,
    pub driver_age: Option<i64>,
    pub channel: Option<String>,
    pub coupon: Option<String>,
    pub discount_amount: Option<Decimal>,
    pub macro_category: Option<String>,
    pub young_driver: Option<bool>,
    pub senior_driver: Option<bool>,
}

impl QuoteRequest {
    /// Minimal request for the given window and locations; all optional
    /// driver/discount attributes unset.
    pub fn new(
        pickup_location: impl Into<String>,
        drop_off_location: impl Into<String>,
        pickup_at: DateTime<Utc>,
        return_at: DateTime<Utc>,
    ) -> Self {
        Self {
            pickup_location: pickup_location.into(),
            drop_off_location: drop_off_location.into(),
            pickup_at,
            return_at,
            driver_age: None,
            channel: None,
            coupon: None,
            discount_amount: None,
            macro_category: None,
            young_driver: None,
            senior_driver: None,
        }
    }

    /// Enforces the rental window ordering invariant. A violation is a
    /// request error, never silently swapped or clamped.
    pub fn validate_window(&self) -> Result<(), QuoteError> {
        if self.return_at <= self.pickup_at {
            return Err(QuoteError::InvalidWindow {
                pickup_at: self.pickup_at,
                return_at: self.return_at,
            });
        }
        Ok(())
    }

    pub fn is_one_way(&self) -> bool {
        self.pickup_location != self.drop_off_location
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::errors::QuoteError;

    use super::QuoteRequest;

    #[test]
    fn window_must_end_after_it_starts() {
        let start = Utc.with_ymd_and_hms(2025, 10, 12, 10, 0, 0).unwrap();
        let request = QuoteRequest::new("FCO", "FCO", start, start);

        let error = request.validate_window().expect_err("equal endpoints should fail");
        assert!(matches!(error, QuoteError::InvalidWindow { .. }));
    }

    #[test]
    fn forward_window_passes_validation() {
        let start = Utc.with_ymd_and_hms(2025, 10, 12, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 10, 12, 11, 0, 0).unwrap();

        QuoteRequest::new("FCO", "MXP", start, end).validate_window().expect("valid window");
    }

    #[test]
    fn one_way_compares_codes_case_sensitively() {
        let start = Utc.with_ymd_and_hms(2025, 10, 12, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 10, 13, 10, 0, 0).unwrap();

        assert!(!QuoteRequest::new("FCO", "FCO", start, end).is_one_way());
        assert!(QuoteRequest::new("FCO", "fco", start, end).is_one_way());
    }
}
