use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::vehicle::VehicleGroup;

/// Availability verdict for one group on one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    pub fn is_available(self) -> bool {
        matches!(self, Availability::Available)
    }

    /// Wire label used by the quotation response (`Status` field).
    pub fn as_str(self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Unavailable => "Unavailable",
        }
    }
}

/// Full price breakdown for one offer. Values keep full precision; callers
/// round to two fraction digits at the point of external exposure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub days: i64,
    pub base_daily: Decimal,
    pub pre_vat: Decimal,
    pub vat_pct: Decimal,
    pub total: Decimal,
}

/// One vehicle group priced for one request. Transient: constructed fresh
/// per request, never cached. Unavailable groups are still emitted, only
/// annotated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub group: VehicleGroup,
    pub availability: Availability,
    pub price: PriceBreakdown,
}

/// Cheapest available offer's totals, paired so the response can echo both
/// the tax-inclusive amount and its pre-VAT counterpart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestPrice {
    pub total: Decimal,
    pub pre_vat: Decimal,
}

/// Ordered offer set plus response-level aggregates for one request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuotationResult {
    pub pickup_location: String,
    pub drop_off_location: String,
    pub pickup_at: DateTime<Utc>,
    pub return_at: DateTime<Utc>,
    pub offers: Vec<Offer>,
    pub best_price: Option<BestPrice>,
}

impl QuotationResult {
    pub fn offer_count(&self) -> usize {
        self.offers.len()
    }

    /// Minimum tax-inclusive total among available offers, zero when none.
    pub fn minimum_total(&self) -> Decimal {
        self.best_price.map(|best| best.total).unwrap_or(Decimal::ZERO)
    }

    /// Pre-VAT amount paired with [`Self::minimum_total`], zero when none.
    pub fn minimum_pre_vat(&self) -> Decimal {
        self.best_price.map(|best| best.pre_vat).unwrap_or(Decimal::ZERO)
    }
}
