use chrono::{DateTime, Timelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::request::QuoteRequest;

const YOUNG_DRIVER_AGE_LIMIT: i64 = 25;
const SENIOR_DRIVER_AGE_FLOOR: i64 = 70;

/// Additive fees on top of the seasonal daily base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surcharges {
    /// Flat fee for pickups outside the 08:00-20:00 desk window.
    pub out_of_hours: Decimal,
    /// Flat fee when the drop-off station differs from the pickup station.
    pub one_way: Decimal,
    /// Young/senior driver fee, already multiplied by the billable days.
    pub driver_age: Decimal,
}

impl Surcharges {
    pub fn total(&self) -> Decimal {
        self.out_of_hours + self.one_way + self.driver_age
    }
}

/// Computes every surcharge for one request and day count.
///
/// The hour check uses the naive hour component of the pickup timestamp, not
/// station opening hours. Young and senior additions stack when both apply
/// (an under-25 driver with a senior override pays both); that is the
/// documented contract, not an accident.
pub fn compute(request: &QuoteRequest, days: i64) -> Surcharges {
    Surcharges {
        out_of_hours: out_of_hours_fee(request.pickup_at),
        one_way: one_way_fee(request),
        driver_age: driver_age_fee(request, days),
    }
}

fn out_of_hours_fee(pickup_at: DateTime<Utc>) -> Decimal {
    let hour = pickup_at.hour();
    if hour < 8 || hour >= 20 {
        Decimal::new(40, 0)
    } else {
        Decimal::ZERO
    }
}

fn one_way_fee(request: &QuoteRequest) -> Decimal {
    if request.is_one_way() {
        Decimal::new(60, 0)
    } else {
        Decimal::ZERO
    }
}

fn driver_age_fee(request: &QuoteRequest, days: i64) -> Decimal {
    let young = request.young_driver == Some(true)
        || request.driver_age.is_some_and(|age| age < YOUNG_DRIVER_AGE_LIMIT);
    let senior = request.senior_driver == Some(true)
        || request.driver_age.is_some_and(|age| age >= SENIOR_DRIVER_AGE_FLOOR);

    let mut per_day = Decimal::ZERO;
    if young {
        per_day += Decimal::new(15, 0);
    }
    if senior {
        per_day += Decimal::new(10, 0);
    }
    per_day * Decimal::from(days)
}
