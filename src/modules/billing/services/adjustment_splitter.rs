use rust_decimal::Decimal;

use crate::core::round2;
use crate::modules::billing::models::{Adjustment, AdjustmentSplit};

/// Partition adjustments by sign.
///
/// Positive amounts add up to `extras_total`; the absolute values of negative amounts add
/// up to `more_discounts_total`; zero amounts are ignored. Sums are exact before rounding,
/// so within range the result does not depend on input order. An amount that would overflow its
/// running total is skipped, like an unusable amount.
pub fn split_adjustments(adjustments: &[Adjustment]) -> AdjustmentSplit {
    let (extras, discounts) = adjustments.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(extras, discounts), adjustment| {
            if adjustment.amount > Decimal::ZERO {
                (checked_accumulate(extras, adjustment), discounts)
            } else if adjustment.amount < Decimal::ZERO {
                (extras, checked_accumulate(discounts, adjustment))
            } else {
                (extras, discounts)
            }
        },
    );

    AdjustmentSplit {
        extras_total: round2(extras),
        more_discounts_total: round2(discounts),
    }
}

fn checked_accumulate(total: Decimal, adjustment: &Adjustment) -> Decimal {
    total
        .checked_add(adjustment.amount.abs())
        .unwrap_or_else(|| {
            tracing::warn!(label = %adjustment.label, "Adjustment out of range, ignored");
            total
        })
}
