use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::pricing::models::PricingConfig;
use crate::modules::pricing::repositories::ConfigStore;

/// What to do when a caller pins a config version that does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionPolicy {
    /// Treat the version as unpinned and select automatically
    #[default]
    Fallback,
    /// Fail with `ConfigVersionNotFound`
    Reject,
}

impl FromStr for VersionPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fallback" => Ok(VersionPolicy::Fallback),
            "reject" => Ok(VersionPolicy::Reject),
            _ => Err(format!("Invalid version policy: {}", s)),
        }
    }
}

impl fmt::Display for VersionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionPolicy::Fallback => write!(f, "fallback"),
            VersionPolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Resolves the single effective pricing config for a restaurant
pub struct ConfigResolver {
    store: Arc<dyn ConfigStore>,
    version_policy: VersionPolicy,
}

impl ConfigResolver {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self {
            store,
            version_policy: VersionPolicy::default(),
        }
    }

    pub fn with_version_policy(mut self, version_policy: VersionPolicy) -> Self {
        self.version_policy = version_policy;
        self
    }

    /// Resolution order:
    /// 1. the config whose version equals `explicit_version`, when given and present
    /// 2. the most recently created active versioned config
    /// 3. the flat settings record, mapped with a single tax line and no discount
    ///
    /// Fails with `ConfigNotFound` when none of these exists.
    pub async fn resolve(
        &self,
        restaurant_id: &str,
        explicit_version: Option<i64>,
    ) -> Result<PricingConfig> {
        if restaurant_id.trim().is_empty() {
            return Err(AppError::InvalidRestaurantId(restaurant_id.to_string()));
        }

        let configs = self.store.versioned_configs(restaurant_id).await?;

        if let Some(version) = explicit_version {
            if let Some(config) = configs.iter().find(|c| c.version == Some(version)) {
                tracing::debug!(restaurant_id, version, "Using pinned pricing config");
                return Ok(config.clone());
            }

            match self.version_policy {
                VersionPolicy::Reject => {
                    return Err(AppError::ConfigVersionNotFound {
                        restaurant_id: restaurant_id.to_string(),
                        version,
                    });
                }
                VersionPolicy::Fallback => {
                    tracing::info!(
                        restaurant_id,
                        version,
                        "Pinned pricing config version not found, selecting automatically"
                    );
                }
            }
        }

        if let Some(config) = latest_active(configs) {
            tracing::debug!(
                restaurant_id,
                version = ?config.version,
                "Using latest active pricing config"
            );
            return Ok(config);
        }

        if let Some(settings) = self.store.flat_settings(restaurant_id).await? {
            tracing::info!(restaurant_id, "Falling back to flat restaurant settings");
            return Ok(settings.into_pricing_config(restaurant_id));
        }

        tracing::error!(restaurant_id, "No pricing configuration for restaurant");
        Err(AppError::config_not_found(restaurant_id))
    }
}

/// Latest `created_at` among active configs; version breaks exact ties
fn latest_active(configs: Vec<PricingConfig>) -> Option<PricingConfig> {
    configs
        .into_iter()
        .filter(|c| c.active)
        .max_by_key(|c| (c.created_at, c.version))
}
