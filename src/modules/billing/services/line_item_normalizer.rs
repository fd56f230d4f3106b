use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::core::lenient::coerce_decimal;
use crate::core::{round2, AppError, Result};
use crate::modules::billing::models::{LineItem, NormalizedItems, RawLineItem};

/// Converts raw order items into canonical `{quantity, unit_price}` pairs.
///
/// Permissive by default: a missing or unusable quantity becomes 1 and a missing or
/// unusable price becomes 0. In strict mode the same inputs are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineItemNormalizer {
    strict: bool,
}

impl LineItemNormalizer {
    pub fn new() -> Self {
        Self { strict: false }
    }

    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn with_strict(strict: bool) -> Self {
        Self { strict }
    }

    pub fn normalize(&self, raw_items: &[RawLineItem]) -> Result<NormalizedItems> {
        if self.strict {
            for (index, raw) in raw_items.iter().enumerate() {
                validate_item(index, raw)?;
            }
        }

        let (normalized, overflowed) = normalize_checked(raw_items);
        if let Some(index) = overflowed.first().filter(|_| self.strict) {
            return Err(AppError::validation(format!(
                "Item {}: line total is out of range",
                index
            )));
        }

        Ok(normalized)
    }
}

fn validate_item(index: usize, raw: &RawLineItem) -> Result<()> {
    let quantities: Vec<&Value> = raw.quantity_fields().into_iter().flatten().collect();

    // An absent quantity means one; a present one has to be usable
    if !quantities.is_empty() && !quantities.iter().any(|v| valid_quantity(v).is_some()) {
        return Err(AppError::validation(format!(
            "Item {}: quantity must be a positive whole number",
            index
        )));
    }

    if !raw
        .price_fields()
        .into_iter()
        .flatten()
        .any(|v| valid_price(v).is_some())
    {
        return Err(AppError::validation(format!(
            "Item {}: unit price must be a non-negative number",
            index
        )));
    }

    Ok(())
}

fn valid_quantity(value: &Value) -> Option<u32> {
    let quantity = coerce_decimal(value)?;
    if quantity < Decimal::ONE || !quantity.fract().is_zero() {
        return None;
    }
    quantity.to_u32()
}

fn valid_price(value: &Value) -> Option<Decimal> {
    coerce_decimal(value).filter(|price| *price >= Decimal::ZERO)
}

/// Permissive normalization; never fails.
///
/// The first synonym that holds a usable value wins, so `{"quantity": null, "qty": 2}`
/// is read as two.
pub fn normalize_items(raw_items: &[RawLineItem]) -> NormalizedItems {
    normalize_checked(raw_items).0
}

/// Items whose line total would overflow the running subtotal are kept with a zero price,
/// like any other unusable price. Their indices are returned alongside.
fn normalize_checked(raw_items: &[RawLineItem]) -> (NormalizedItems, Vec<usize>) {
    let mut items: Vec<LineItem> = raw_items
        .iter()
        .map(|raw| LineItem {
            menu_item_id: raw.menu_item_id.clone(),
            quantity: raw
                .quantity_fields()
                .into_iter()
                .flatten()
                .find_map(valid_quantity)
                .unwrap_or(1),
            unit_price: raw
                .price_fields()
                .into_iter()
                .flatten()
                .find_map(valid_price)
                .unwrap_or(Decimal::ZERO),
        })
        .collect();

    let mut subtotal = Decimal::ZERO;
    let mut overflowed = Vec::new();
    for (index, item) in items.iter_mut().enumerate() {
        match item.line_total().and_then(|line| subtotal.checked_add(line)) {
            Some(sum) => subtotal = sum,
            None => {
                tracing::warn!(index, "Line total out of range, item priced at zero");
                item.unit_price = Decimal::ZERO;
                overflowed.push(index);
            }
        }
    }

    (
        NormalizedItems {
            items,
            subtotal: round2(subtotal),
        },
        overflowed,
    )
}
