// Integration tests for pricing config resolution against the in-memory store
//
// Covers pinned versions, unmatched versions (automatic fallback), latest-active
// selection, the flat settings fallback and the two resolution errors.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use helpers::*;
use orderdesk::core::AppError;
use orderdesk::modules::pricing::models::{ConfigSource, PricingConfig};
use orderdesk::modules::pricing::repositories::InMemoryConfigStore;
use orderdesk::modules::pricing::services::{ConfigResolver, VersionPolicy};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_latest_active_config_selected_without_version() {
    let resolver = ConfigResolver::new(seeded_store().await);

    let config = resolver.resolve(RESTAURANT_ID, None).await.unwrap();

    // Version 3 is newer but inactive
    assert_eq!(config.version, Some(2));
    assert_eq!(config.discount_percent, dec!(10));
    assert_eq!(config.source, ConfigSource::Versioned);
}

#[tokio::test]
async fn test_pinned_version_is_honoured() {
    let resolver = ConfigResolver::new(seeded_store().await);

    let config = resolver.resolve(RESTAURANT_ID, Some(1)).await.unwrap();
    assert_eq!(config.version, Some(1));
    assert_eq!(config.taxes[0].name, "VAT");

    // Pinning bypasses the active filter
    let inactive = resolver.resolve(RESTAURANT_ID, Some(3)).await.unwrap();
    assert_eq!(inactive.version, Some(3));
    assert!(!inactive.active);
}

#[tokio::test]
async fn test_unknown_version_falls_back_to_automatic_selection() {
    let resolver = ConfigResolver::new(seeded_store().await);

    let config = resolver.resolve(RESTAURANT_ID, Some(99)).await.unwrap();

    assert_eq!(config.version, Some(2));
}

#[tokio::test]
async fn test_unknown_version_rejected_under_reject_policy() {
    let resolver =
        ConfigResolver::new(seeded_store().await).with_version_policy(VersionPolicy::Reject);

    let err = resolver.resolve(RESTAURANT_ID, Some(99)).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::ConfigVersionNotFound { version: 99, .. }
    ));
}

#[tokio::test]
async fn test_flat_settings_fallback() {
    let resolver = ConfigResolver::new(seeded_store().await);

    let config = resolver.resolve(FLAT_RESTAURANT_ID, None).await.unwrap();

    assert_eq!(config.source, ConfigSource::FlatSettings);
    assert_eq!(config.version, None);
    assert_eq!(config.taxes.len(), 1);
    assert_eq!(config.taxes[0].percent, dec!(5));
    assert_eq!(config.service_charge_percent, dec!(10));
    // The flat record's global discount is not carried over
    assert_eq!(config.discount_percent, Decimal::ZERO);
}

#[tokio::test]
async fn test_flat_settings_used_when_all_configs_inactive() {
    let store = InMemoryConfigStore::new();
    store
        .insert_config(PricingConfig::versioned("rest-mixed", 1).with_active(false))
        .await;
    store
        .set_flat_settings("rest-mixed", Default::default())
        .await;

    let resolver = ConfigResolver::new(Arc::new(store));
    let config = resolver.resolve("rest-mixed", None).await.unwrap();

    assert_eq!(config.source, ConfigSource::FlatSettings);
    assert_eq!(config.taxes[0].percent, Decimal::ZERO);
}

#[tokio::test]
async fn test_missing_configuration_is_reported() {
    let resolver = ConfigResolver::new(seeded_store().await);

    let err = resolver
        .resolve(UNCONFIGURED_RESTAURANT_ID, None)
        .await
        .unwrap_err();

    match err {
        AppError::ConfigNotFound { restaurant_id } => {
            assert_eq!(restaurant_id, UNCONFIGURED_RESTAURANT_ID)
        }
        other => panic!("expected ConfigNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_blank_restaurant_id_rejected() {
    let resolver = ConfigResolver::new(seeded_store().await);

    for id in ["", "   "] {
        let err = resolver.resolve(id, None).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidRestaurantId(_)));
    }
}

#[tokio::test]
async fn test_equal_timestamps_prefer_higher_version() {
    let created = chrono::Utc::now();
    let store = InMemoryConfigStore::new();
    store
        .insert_config(PricingConfig::versioned("rest-tie", 5).with_created_at(created))
        .await;
    store
        .insert_config(PricingConfig::versioned("rest-tie", 4).with_created_at(created))
        .await;

    let resolver = ConfigResolver::new(Arc::new(store));
    let config = resolver.resolve("rest-tie", None).await.unwrap();

    assert_eq!(config.version, Some(5));
}
