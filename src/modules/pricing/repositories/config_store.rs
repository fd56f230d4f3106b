use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::Result;
use crate::modules::pricing::models::{FlatSettings, PricingConfig};

/// Read access to a restaurant's stored pricing configuration
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// All versioned configs of the restaurant, active or not, in any order
    async fn versioned_configs(&self, restaurant_id: &str) -> Result<Vec<PricingConfig>>;

    /// The flat settings record, if the restaurant has one
    async fn flat_settings(&self, restaurant_id: &str) -> Result<Option<FlatSettings>>;
}

/// Config store held in memory, for tests and local development
#[derive(Default)]
pub struct InMemoryConfigStore {
    configs: RwLock<HashMap<String, Vec<PricingConfig>>>,
    settings: RwLock<HashMap<String, FlatSettings>>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_config(&self, config: PricingConfig) {
        self.configs
            .write()
            .await
            .entry(config.restaurant_id.clone())
            .or_default()
            .push(config);
    }

    pub async fn set_flat_settings(&self, restaurant_id: &str, settings: FlatSettings) {
        self.settings
            .write()
            .await
            .insert(restaurant_id.to_string(), settings);
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn versioned_configs(&self, restaurant_id: &str) -> Result<Vec<PricingConfig>> {
        Ok(self
            .configs
            .read()
            .await
            .get(restaurant_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn flat_settings(&self, restaurant_id: &str) -> Result<Option<FlatSettings>> {
        Ok(self.settings.read().await.get(restaurant_id).cloned())
    }
}
