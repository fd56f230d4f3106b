use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places every monetary amount is carried at
pub const MONEY_SCALE: u32 = 2;

/// Round an amount to cents, half away from zero.
///
/// Applied at every stage boundary of the billing pipeline, not only on the final total,
/// so that a breakdown can be reproduced field by field.
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// `round2(base × percent / 100)`; zero or negative percentages contribute nothing.
///
/// Saturates at `Decimal::MAX` instead of overflowing.
pub fn percent_of(base: Decimal, percent: Decimal) -> Decimal {
    if percent <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round2(base.saturating_mul(percent) / Decimal::ONE_HUNDRED)
}

/// Saturating sum of stage amounts
pub fn sum_amounts(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |acc, amount| acc.saturating_add(amount))
}

/// Clamp a percentage or flat amount so that negative input behaves like zero
pub fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}
