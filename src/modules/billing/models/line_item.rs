// Order line items as they arrive from the frontends, and their canonical form.
//
// The staff dashboard sends `quantity`/`unitPrice` while the customer app sends
// `qty`/`price`; values may be numbers or numeric strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A line item exactly as received
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_item_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<Value>,

    #[serde(default, alias = "unit_price", skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
}

impl RawLineItem {
    pub fn new(quantity: impl Into<Value>, unit_price: impl Into<Value>) -> Self {
        Self {
            quantity: Some(quantity.into()),
            unit_price: Some(unit_price.into()),
            ..Default::default()
        }
    }

    /// Quantity candidates in precedence order
    pub(crate) fn quantity_fields(&self) -> [Option<&Value>; 2] {
        [self.quantity.as_ref(), self.qty.as_ref()]
    }

    /// Price candidates in precedence order
    pub(crate) fn price_fields(&self) -> [Option<&Value>; 2] {
        [self.unit_price.as_ref(), self.price.as_ref()]
    }
}

/// Canonical line item: quantity >= 1, unit price >= 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_item_id: Option<String>,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl LineItem {
    /// Unrounded quantity × unit price; `None` when the product does not fit a `Decimal`
    pub fn line_total(&self) -> Option<Decimal> {
        Decimal::from(self.quantity).checked_mul(self.unit_price)
    }
}

/// Output of the normalizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedItems {
    pub items: Vec<LineItem>,
    pub subtotal: Decimal,
}
