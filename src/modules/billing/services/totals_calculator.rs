use rust_decimal::Decimal;

use crate::core::money::non_negative;
use crate::core::{percent_of, round2, sum_amounts};
use crate::modules::billing::models::{Adjustment, TaxLine, TotalsBreakdown, TotalsOverrides};
use crate::modules::billing::services::adjustment_splitter::split_adjustments;
use crate::modules::pricing::models::PricingConfig;

/// Compute the itemized totals of a bill.
///
/// Stages run in a fixed order and every stage's output is rounded to cents before the
/// next stage reads it:
///
/// 1. discount = subtotal × discount%
/// 2. after discount = max(0, subtotal − discount − additional flat discount)
/// 3. service charge = after discount × service charge%
/// 4. taxable value = after discount + service charge
/// 5. each tax = taxable value × rate, in config order
/// 6. tax amount = Σ taxes
/// 7. adjustments split into extras and more discounts
/// 8. total = taxable value + tax amount + extras − more discounts
///
/// Negative percentages act as zero and are reported as zero. Stage arithmetic saturates
/// rather than overflowing.
pub fn compute_totals(
    subtotal: Decimal,
    config: &PricingConfig,
    adjustments: &[Adjustment],
    overrides: &TotalsOverrides,
) -> TotalsBreakdown {
    let subtotal = round2(subtotal);

    let discount_percent = non_negative(
        overrides
            .discount_percent
            .unwrap_or(config.discount_percent),
    );
    let discount_amount = percent_of(subtotal, discount_percent);

    let additional_discount_amount =
        round2(non_negative(overrides.additional_discount_amount.unwrap_or_default()));
    let after_discount = non_negative(round2(
        subtotal
            .saturating_sub(discount_amount)
            .saturating_sub(additional_discount_amount),
    ));

    let service_charge_percent = non_negative(
        overrides
            .service_charge_percent
            .unwrap_or(config.service_charge_percent),
    );
    let service_charge_amount = percent_of(after_discount, service_charge_percent);

    let taxable_value = round2(after_discount.saturating_add(service_charge_amount));

    let tax_breakdown: Vec<TaxLine> = config
        .taxes
        .iter()
        .map(|tax| TaxLine {
            name: tax.name.clone(),
            code: tax.resolved_code(),
            rate: non_negative(tax.percent),
            amount: percent_of(taxable_value, tax.percent),
        })
        .collect();
    let tax_amount = round2(sum_amounts(tax_breakdown.iter().map(|line| line.amount)));

    let split = split_adjustments(adjustments);

    let total = round2(
        taxable_value
            .saturating_add(tax_amount)
            .saturating_add(split.extras_total)
            .saturating_sub(split.more_discounts_total),
    );

    TotalsBreakdown {
        subtotal,
        discount_percent,
        discount_amount,
        additional_discount_amount,
        after_discount,
        service_charge_percent,
        service_charge_amount,
        taxable_value,
        tax_breakdown,
        tax_amount,
        extras_total: split.extras_total,
        more_discounts_total: split.more_discounts_total,
        total,
        config_version: config.version,
    }
}
