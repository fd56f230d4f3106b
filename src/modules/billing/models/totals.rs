use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::lenient;

/// Per-bill overrides of the resolved config
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsOverrides {
    #[serde(default, deserialize_with = "lenient::optional_decimal")]
    pub discount_percent: Option<Decimal>,

    #[serde(default, deserialize_with = "lenient::optional_decimal")]
    pub service_charge_percent: Option<Decimal>,

    /// Flat amount taken off together with the percentage discount
    #[serde(default, deserialize_with = "lenient::optional_decimal")]
    pub additional_discount_amount: Option<Decimal>,
}

/// One itemized tax of a bill or pre-bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxLine {
    pub name: String,
    pub code: String,
    pub rate: Decimal,
    pub amount: Decimal,
}

/// Fully itemized bill totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsBreakdown {
    pub subtotal: Decimal,
    pub discount_percent: Decimal,
    pub discount_amount: Decimal,
    pub additional_discount_amount: Decimal,
    pub after_discount: Decimal,
    pub service_charge_percent: Decimal,
    pub service_charge_amount: Decimal,
    pub taxable_value: Decimal,
    pub tax_breakdown: Vec<TaxLine>,
    pub tax_amount: Decimal,
    pub extras_total: Decimal,
    pub more_discounts_total: Decimal,
    pub total: Decimal,
    /// Version of the config the bill was priced with, for traceability
    pub config_version: Option<i64>,
}

/// Preview computed when an order is placed, before a bill exists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreBill {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub taxes: Vec<TaxLine>,
    pub tax_total: Decimal,
    pub service_charge: Decimal,
    pub total: Decimal,
    pub config_version: Option<i64>,
}
