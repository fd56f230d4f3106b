use rust_decimal::Decimal;

use crate::core::money::non_negative;
use crate::core::{percent_of, round2, sum_amounts};
use crate::modules::billing::models::{PreBill, TaxLine};
use crate::modules::pricing::models::PricingConfig;

/// Preview an order's total at placement time.
///
/// Reduced pipeline with no adjustments: taxes and service charge are both computed on
/// the discounted amount (not on amount + service charge as a bill does), and the
/// discounted amount is not floored at zero.
pub fn project_pre_bill(subtotal: Decimal, config: &PricingConfig) -> PreBill {
    let subtotal = round2(subtotal);

    let discount = percent_of(subtotal, config.discount_percent);
    let amount_after_discount = subtotal.saturating_sub(discount);

    let taxes: Vec<TaxLine> = config
        .taxes
        .iter()
        .map(|tax| TaxLine {
            name: tax.name.clone(),
            code: tax.resolved_code(),
            rate: non_negative(tax.percent),
            amount: percent_of(amount_after_discount, tax.percent),
        })
        .collect();
    let tax_total = sum_amounts(taxes.iter().map(|line| line.amount));

    let service_charge = percent_of(amount_after_discount, config.service_charge_percent);

    // Every addend is already at cents, so rounding here does not change the sum
    let total = round2(sum_amounts([amount_after_discount, tax_total, service_charge]));

    PreBill {
        subtotal,
        discount,
        taxes,
        tax_total,
        service_charge,
        total,
        config_version: config.version,
    }
}
