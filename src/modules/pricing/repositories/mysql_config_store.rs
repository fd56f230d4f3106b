use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::{FromRow, MySqlPool};

use crate::core::Result;
use crate::modules::pricing::models::{ConfigSource, FlatSettings, PricingConfig, TaxRule};
use crate::modules::pricing::repositories::ConfigStore;

#[derive(Debug, FromRow)]
struct PricingConfigRow {
    restaurant_id: String,
    version: Option<i64>,
    active: bool,
    created_at: DateTime<Utc>,
    taxes: Json<Vec<TaxRule>>,
    discount_percent: Decimal,
    service_charge_percent: Decimal,
}

impl From<PricingConfigRow> for PricingConfig {
    fn from(row: PricingConfigRow) -> Self {
        PricingConfig {
            restaurant_id: row.restaurant_id,
            version: row.version,
            active: row.active,
            created_at: Some(row.created_at),
            taxes: row.taxes.0,
            discount_percent: row.discount_percent,
            service_charge_percent: row.service_charge_percent,
            source: ConfigSource::Versioned,
        }
    }
}

#[derive(Debug, FromRow)]
struct FlatSettingsRow {
    tax_percent: Option<Decimal>,
    service_charge: Option<Decimal>,
    global_discount_percent: Option<Decimal>,
}

/// MySQL-backed config store
#[derive(Clone)]
pub struct MySqlConfigStore {
    pool: MySqlPool,
}

impl MySqlConfigStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConfigStore for MySqlConfigStore {
    async fn versioned_configs(&self, restaurant_id: &str) -> Result<Vec<PricingConfig>> {
        let rows = sqlx::query_as::<_, PricingConfigRow>(
            r#"
            SELECT restaurant_id, version, active, created_at, taxes,
                   discount_percent, service_charge_percent
            FROM pricing_configs
            WHERE restaurant_id = ?
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PricingConfig::from).collect())
    }

    async fn flat_settings(&self, restaurant_id: &str) -> Result<Option<FlatSettings>> {
        let row = sqlx::query_as::<_, FlatSettingsRow>(
            r#"
            SELECT tax_percent, service_charge, global_discount_percent
            FROM restaurant_settings
            WHERE restaurant_id = ?
            "#,
        )
        .bind(restaurant_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| FlatSettings {
            tax_percent: row.tax_percent,
            service_charge: row.service_charge,
            global_discount_percent: row.global_discount_percent,
        }))
    }
}
