// Pricing configuration for a restaurant.
//
// A restaurant either keeps versioned configs (one or more, each active or not) or a
// single flat settings record. Both are mapped into `PricingConfig` before any billing
// arithmetic runs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax name used when the flat settings record is mapped into a config
pub const FLAT_SETTINGS_TAX_NAME: &str = "GST";

/// One tax line of a pricing config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxRule {
    pub name: String,

    /// Percentage, e.g. 5 means 5%
    #[serde(alias = "rate")]
    pub percent: Decimal,

    /// Explicit tax code; derived from the name when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl TaxRule {
    pub fn new(name: impl Into<String>, percent: Decimal) -> Self {
        Self {
            name: name.into(),
            percent,
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// The explicit code if one is set, otherwise the name as an UPPER_SNAKE slug
    pub fn resolved_code(&self) -> String {
        match self.code.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => code.to_string(),
            _ => slugify_tax_code(&self.name),
        }
    }
}

/// "Service Tax (5%)" -> "SERVICE_TAX_5"
pub fn slugify_tax_code(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.extend(ch.to_uppercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Where a resolved config came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigSource {
    Versioned,
    FlatSettings,
}

/// The effective pricing configuration for one computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    pub restaurant_id: String,

    /// Monotonic per restaurant; `None` for configs mapped from flat settings
    #[serde(default)]
    pub version: Option<i64>,

    /// Only active configs are eligible for automatic selection
    #[serde(default)]
    pub active: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub taxes: Vec<TaxRule>,

    /// Global discount, applied to the subtotal before other charges
    #[serde(default, alias = "globalDiscountPercent")]
    pub discount_percent: Decimal,

    #[serde(default, alias = "serviceCharge")]
    pub service_charge_percent: Decimal,

    #[serde(default = "default_source")]
    pub source: ConfigSource,
}

fn default_source() -> ConfigSource {
    ConfigSource::Versioned
}

impl PricingConfig {
    /// A versioned, active config created now
    pub fn versioned(restaurant_id: impl Into<String>, version: i64) -> Self {
        Self {
            restaurant_id: restaurant_id.into(),
            version: Some(version),
            active: true,
            created_at: Some(Utc::now()),
            taxes: Vec::new(),
            discount_percent: Decimal::ZERO,
            service_charge_percent: Decimal::ZERO,
            source: ConfigSource::Versioned,
        }
    }

    pub fn with_taxes(mut self, taxes: Vec<TaxRule>) -> Self {
        self.taxes = taxes;
        self
    }

    pub fn with_discount_percent(mut self, percent: Decimal) -> Self {
        self.discount_percent = percent;
        self
    }

    pub fn with_service_charge_percent(mut self, percent: Decimal) -> Self {
        self.service_charge_percent = percent;
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// The simpler per-restaurant settings record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatSettings {
    /// Single GST-style percentage
    #[serde(default)]
    pub tax_percent: Option<Decimal>,

    #[serde(default)]
    pub service_charge: Option<Decimal>,

    /// Stored by the admin dashboard but not honoured by the flat fallback
    #[serde(default)]
    pub global_discount_percent: Option<Decimal>,
}

impl FlatSettings {
    /// Map into the common config shape: one tax line, the flat service charge, and no
    /// global discount.
    pub fn into_pricing_config(self, restaurant_id: impl Into<String>) -> PricingConfig {
        PricingConfig {
            restaurant_id: restaurant_id.into(),
            version: None,
            active: true,
            created_at: None,
            taxes: vec![TaxRule::new(
                FLAT_SETTINGS_TAX_NAME,
                self.tax_percent.unwrap_or(Decimal::ZERO),
            )],
            discount_percent: Decimal::ZERO,
            service_charge_percent: self.service_charge.unwrap_or(Decimal::ZERO),
            source: ConfigSource::FlatSettings,
        }
    }
}
