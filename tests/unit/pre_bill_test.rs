// Tests for the order-placement pre-bill projection

use orderdesk::core::round2;
use orderdesk::modules::billing::models::TotalsOverrides;
use orderdesk::modules::billing::services::{compute_totals, project_pre_bill};
use orderdesk::modules::pricing::models::{FlatSettings, PricingConfig, TaxRule};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_pre_bill_for_standard_order() {
    let config = PricingConfig::versioned("rest-001", 2)
        .with_discount_percent(dec!(10))
        .with_service_charge_percent(dec!(5))
        .with_taxes(vec![
            TaxRule::new("CGST", dec!(9)),
            TaxRule::new("SGST", dec!(9)),
        ]);

    let pre_bill = project_pre_bill(dec!(1000), &config);

    assert_eq!(pre_bill.subtotal, dec!(1000));
    assert_eq!(pre_bill.discount, dec!(100.00));
    assert_eq!(pre_bill.taxes.len(), 2);
    assert_eq!(pre_bill.taxes[0].amount, dec!(81.00));
    assert_eq!(pre_bill.taxes[1].amount, dec!(81.00));
    assert_eq!(pre_bill.tax_total, dec!(162.00));
    assert_eq!(pre_bill.service_charge, dec!(45.00));
    assert_eq!(pre_bill.total, dec!(1107.00));
}

#[test]
fn test_pre_bill_differs_from_bill_by_service_charge_tax() {
    let config = PricingConfig::versioned("rest-001", 2)
        .with_discount_percent(dec!(10))
        .with_service_charge_percent(dec!(5))
        .with_taxes(vec![TaxRule::new("GST", dec!(18))]);

    let pre_bill = project_pre_bill(dec!(1000), &config);
    let bill = compute_totals(dec!(1000), &config, &[], &TotalsOverrides::default());

    // The bill also taxes the service charge: 45.00 × 18% = 8.10
    assert_eq!(bill.total - pre_bill.total, dec!(8.10));
}

#[test]
fn test_pre_bill_from_flat_settings_has_no_discount() {
    let config = FlatSettings {
        tax_percent: Some(dec!(5)),
        service_charge: Some(dec!(10)),
        global_discount_percent: Some(dec!(25)),
    }
    .into_pricing_config("rest-flat");

    let pre_bill = project_pre_bill(dec!(200), &config);

    assert_eq!(pre_bill.discount, Decimal::ZERO);
    assert_eq!(pre_bill.taxes[0].name, "GST");
    assert_eq!(pre_bill.tax_total, dec!(10.00));
    assert_eq!(pre_bill.service_charge, dec!(20.00));
    assert_eq!(pre_bill.total, dec!(230.00));
    assert_eq!(pre_bill.config_version, None);
}

proptest! {
    #[test]
    fn test_pre_bill_total_is_sum_of_parts(
        subtotal in 0i64..10_000_000i64,
        discount in 0i64..=10_000i64,
        service in 0i64..=3_000i64,
        tax in 0i64..=3_000i64
    ) {
        let config = PricingConfig::versioned("rest-prop", 1)
            .with_discount_percent(Decimal::new(discount, 2))
            .with_service_charge_percent(Decimal::new(service, 2))
            .with_taxes(vec![TaxRule::new("GST", Decimal::new(tax, 2))]);

        let pre_bill = project_pre_bill(Decimal::new(subtotal, 2), &config);
        let parts = pre_bill.subtotal - pre_bill.discount + pre_bill.tax_total + pre_bill.service_charge;

        prop_assert_eq!(pre_bill.total, parts);
        prop_assert_eq!(round2(pre_bill.total), pre_bill.total);
    }
}
