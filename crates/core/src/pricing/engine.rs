use rust_decimal::Decimal;

use crate::catalog::CatalogSnapshot;
use crate::domain::offer::{Availability, BestPrice, Offer, PriceBreakdown, QuotationResult};
use crate::domain::request::QuoteRequest;
use crate::domain::vehicle::VehicleGroup;
use crate::errors::QuoteError;
use crate::pricing::availability::{AvailabilityOracle, FingerprintOracle};
use crate::pricing::{discounts, surcharges, temporal};

/// Orchestrates the per-group pricing pipeline into a [`QuotationResult`].
///
/// Pure function of (catalog snapshot, request): no shared mutable state, no
/// I/O, safe to run fully in parallel across requests. The oracle is the
/// only pluggable seam.
pub struct QuotationEngine<O = FingerprintOracle> {
    oracle: O,
}

impl QuotationEngine<FingerprintOracle> {
    pub fn new() -> Self {
        Self { oracle: FingerprintOracle }
    }
}

impl Default for QuotationEngine<FingerprintOracle> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: AvailabilityOracle> QuotationEngine<O> {
    pub fn with_oracle(oracle: O) -> Self {
        Self { oracle }
    }

    /// Prices every eligible group and aggregates the response-level totals.
    ///
    /// Groups are visited in catalog order and never re-sorted. Unavailable
    /// offers are annotated, not dropped; only available offers feed the
    /// minimum-total aggregate. The only error is an inverted rental window.
    pub fn compute(
        &self,
        catalog: &CatalogSnapshot,
        request: &QuoteRequest,
    ) -> Result<QuotationResult, QuoteError> {
        request.validate_window()?;

        let days = temporal::billable_days(request.pickup_at, request.return_at);
        let multiplier = temporal::season_multiplier(request.pickup_at);
        let fees = surcharges::compute(request, days);
        let pickup_date = request.pickup_at.date_naive();

        let mut offers = Vec::new();
        let mut best_price: Option<BestPrice> = None;

        for group in catalog.eligible_for(&request.pickup_location) {
            if let Some(filter) = request.macro_category.as_deref() {
                if !filter.trim().is_empty() && !group.matches_macro(filter) {
                    continue;
                }
            }

            let price = self.price_group(group, request, days, multiplier, &fees, catalog);
            let availability =
                if self.oracle.is_available(&group.code, &request.pickup_location, pickup_date) {
                    Availability::Available
                } else {
                    Availability::Unavailable
                };

            if availability.is_available()
                && best_price.map_or(true, |best| price.total < best.total)
            {
                best_price = Some(BestPrice { total: price.total, pre_vat: price.pre_vat });
            }

            offers.push(Offer { group: group.clone(), availability, price });
        }

        Ok(QuotationResult {
            pickup_location: request.pickup_location.clone(),
            drop_off_location: request.drop_off_location.clone(),
            pickup_at: request.pickup_at,
            return_at: request.return_at,
            offers,
            best_price,
        })
    }

    fn price_group(
        &self,
        group: &VehicleGroup,
        request: &QuoteRequest,
        days: i64,
        multiplier: Decimal,
        fees: &surcharges::Surcharges,
        catalog: &CatalogSnapshot,
    ) -> PriceBreakdown {
        let base_daily = group.daily_rate * multiplier;
        let base = base_daily * Decimal::from(days) + fees.total();

        let pre_vat = discounts::apply(
            base,
            discounts::DiscountInput {
                channel: request.channel.as_deref(),
                coupon: request.coupon.as_deref(),
                explicit_amount: request.discount_amount,
            },
        );

        let vat_pct = catalog.vat_pct();
        let total = pre_vat * (Decimal::ONE + vat_pct / Decimal::ONE_HUNDRED);

        PriceBreakdown { days, base_daily, pre_vat, vat_pct, total }
    }
}

/// One-shot entry point with the production oracle.
pub fn compute_quotation(
    catalog: &CatalogSnapshot,
    request: &QuoteRequest,
) -> Result<QuotationResult, QuoteError> {
    QuotationEngine::new().compute(catalog, request)
}
