// Pricing module: per-restaurant tax/discount/service-charge configuration

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{ConfigSource, FlatSettings, PricingConfig, TaxRule};
pub use repositories::{ConfigStore, InMemoryConfigStore, InMemoryMenuCatalog, MenuCatalog};
pub use services::{ConfigResolver, VersionPolicy};
