use rust_decimal::Decimal;

/// Discount inputs as they arrive on the request; all three sources are
/// independent and additive.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscountInput<'a> {
    pub channel: Option<&'a str>,
    pub coupon: Option<&'a str>,
    pub explicit_amount: Option<Decimal>,
}

/// Combined discount for `base`, clamped to `[0, base]`.
///
/// Channel codes prefixed `WEB` (case-sensitive) earn 3% of the base, a
/// non-empty coupon earns 5%, and an explicit amount contributes its
/// absolute value. The clamp guarantees a discount can never push the
/// pre-VAT amount negative, and a negative explicit amount never raises
/// the price.
pub fn discount_total(base: Decimal, input: DiscountInput<'_>) -> Decimal {
    let mut discount = Decimal::ZERO;

    if input.channel.is_some_and(|channel| channel.starts_with("WEB")) {
        discount += base * Decimal::new(3, 2);
    }
    if input.coupon.is_some_and(|coupon| !coupon.is_empty()) {
        discount += base * Decimal::new(5, 2);
    }
    if let Some(amount) = input.explicit_amount {
        discount += amount.abs();
    }

    discount.clamp(Decimal::ZERO, base)
}

/// Pre-VAT amount after applying the clamped discount to `base`.
pub fn apply(base: Decimal, input: DiscountInput<'_>) -> Decimal {
    base - discount_total(base, input)
}
