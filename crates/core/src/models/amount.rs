use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::trace;

/// Fee charged on secondary-currency revenue: exactly 1%.
pub const FEE_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Parse a monetary amount from its textual form.
///
/// Total function: accepts plain decimals (`"10.005"`), scientific notation
/// (`"1e3"`) and anything `f64` understands, trimming whitespace first.
/// Missing, empty, non-numeric and non-finite inputs all yield zero.
pub fn parse_amount(raw: Option<&str>) -> Decimal {
    let Some(text) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
        return Decimal::ZERO;
    };

    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
        .or_else(|| text.parse::<f64>().ok().and_then(Decimal::from_f64))
        .unwrap_or(Decimal::ZERO)
}

/// Add `amount` to a running `total`, leaving the total unchanged when the
/// sum would leave `Decimal`'s range.
pub fn accumulate(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        trace!(%total, %amount, "amount overflows the running total, not added");
        total
    })
}

/// Round to 2 decimal places, midpoints away from zero (`15.005` → `15.01`).
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Fee owed on an already-rounded revenue figure, itself rounded to 2 dp.
pub fn fee_for(revenue: Decimal) -> Decimal {
    round2(revenue * FEE_RATE)
}

/// Convert a finished decimal into the `f64` the chart contract carries.
/// Goes through the decimal string so `15.01` becomes the nearest `f64`.
pub fn to_number(value: Decimal) -> f64 {
    value.normalize().to_string().parse().unwrap_or(0.0)
}

