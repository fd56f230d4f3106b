use crate::core::{AppError, Result};
use crate::modules::pricing::services::VersionPolicy;
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub billing: BillingConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BillingConfig {
    /// Reject malformed line items instead of coercing them
    pub strict_line_items: bool,
    pub version_policy: VersionPolicy,
    pub event_bus_capacity: usize,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            strict_line_items: false,
            version_policy: VersionPolicy::Fallback,
            event_bus_capacity: 256,
        }
    }
}

impl BillingConfig {
    pub fn from_env() -> Result<Self> {
        Ok(BillingConfig {
            strict_line_items: parse_bool(
                "BILLING_STRICT_LINE_ITEMS",
                &env::var("BILLING_STRICT_LINE_ITEMS").unwrap_or_else(|_| "false".to_string()),
            )?,
            version_policy: env::var("BILLING_VERSION_POLICY")
                .unwrap_or_else(|_| "fallback".to_string())
                .parse()
                .map_err(AppError::Configuration)?,
            event_bus_capacity: env::var("EVENT_BUS_CAPACITY")
                .unwrap_or_else(|_| "256".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid EVENT_BUS_CAPACITY".to_string()))?,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(AppError::Configuration(format!("Invalid {}", name))),
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT")
                    .unwrap_or_else(|_| "pretty".to_string())
                    .parse()
                    .map_err(AppError::Configuration)?,
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            billing: BillingConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.billing.event_bus_capacity == 0 {
            return Err(AppError::Configuration(
                "Event bus capacity must be greater than 0".to_string(),
            ));
        }

        if self.database.pool_size > self.database.max_connections {
            return Err(AppError::Configuration(
                "DATABASE_POOL_SIZE cannot exceed DATABASE_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(())
    }
}
