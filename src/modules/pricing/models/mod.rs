mod pricing_config;

pub use pricing_config::{
    slugify_tax_code, ConfigSource, FlatSettings, PricingConfig, TaxRule, FLAT_SETTINGS_TAX_NAME,
};
