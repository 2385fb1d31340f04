use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;

const SECONDS_PER_DAY: i64 = 86_400;

/// Billable day count for a rental window: ceiling of the elapsed hours over
/// 24, floored at one day. Callers validate the window ordering first.
pub fn billable_days(pickup_at: DateTime<Utc>, return_at: DateTime<Utc>) -> i64 {
    let seconds = (return_at - pickup_at).num_seconds();
    let days = (seconds + SECONDS_PER_DAY - 1).div_euclid(SECONDS_PER_DAY);
    days.max(1)
}

/// Seasonal rate multiplier keyed on the pickup month and day.
///
/// July/August peak at 1.25, the late-December holiday window (20th-31st)
/// at 1.20, April at 1.10; every other date is neutral.
pub fn season_multiplier(pickup_at: DateTime<Utc>) -> Decimal {
    match (pickup_at.month(), pickup_at.day()) {
        (7 | 8, _) => Decimal::new(125, 2),
        (12, day) if day >= 20 => Decimal::new(120, 2),
        (4, _) => Decimal::new(110, 2),
        _ => Decimal::ONE,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use super::{billable_days, season_multiplier};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn one_hour_window_bills_one_day() {
        assert_eq!(billable_days(at(2025, 10, 12, 10, 0), at(2025, 10, 12, 11, 0)), 1);
    }

    #[test]
    fn exactly_twenty_four_hours_bills_one_day() {
        assert_eq!(billable_days(at(2025, 10, 12, 10, 0), at(2025, 10, 13, 10, 0)), 1);
    }

    #[test]
    fn twenty_five_hours_rounds_up_to_two_days() {
        assert_eq!(billable_days(at(2025, 10, 12, 10, 0), at(2025, 10, 13, 11, 0)), 2);
    }

    #[test]
    fn seventy_four_hours_rounds_up_to_four_days() {
        assert_eq!(billable_days(at(2025, 7, 2, 10, 0), at(2025, 7, 5, 12, 0)), 4);
    }

    #[test]
    fn summer_months_price_at_peak() {
        assert_eq!(season_multiplier(at(2025, 7, 1, 0, 0)), Decimal::new(125, 2));
        assert_eq!(season_multiplier(at(2025, 8, 31, 23, 59)), Decimal::new(125, 2));
    }

    #[test]
    fn december_holiday_window_starts_on_the_twentieth() {
        assert_eq!(season_multiplier(at(2025, 12, 19, 12, 0)), Decimal::ONE);
        assert_eq!(season_multiplier(at(2025, 12, 20, 0, 0)), Decimal::new(120, 2));
        assert_eq!(season_multiplier(at(2025, 12, 31, 23, 0)), Decimal::new(120, 2));
    }

    #[test]
    fn april_and_off_season_multipliers() {
        assert_eq!(season_multiplier(at(2025, 4, 15, 9, 0)), Decimal::new(110, 2));
        assert_eq!(season_multiplier(at(2025, 10, 15, 9, 0)), Decimal::ONE);
    }
}
