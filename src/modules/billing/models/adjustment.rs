use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::lenient;

/// A named flat amount added to a bill after tax.
///
/// Positive amounts are extras (packaging, delivery); negative amounts are additional
/// discounts on top of the percentage discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustment {
    #[serde(default)]
    pub label: String,

    #[serde(default, deserialize_with = "lenient::decimal_or_zero")]
    pub amount: Decimal,
}

impl Adjustment {
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentSplit {
    pub extras_total: Decimal,
    pub more_discounts_total: Decimal,
}
