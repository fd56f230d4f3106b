use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::MySqlPool;
use tokio::sync::RwLock;

use crate::core::Result;

/// Menu price lookup used when an order is placed
#[async_trait]
pub trait MenuCatalog: Send + Sync {
    async fn menu_price(&self, restaurant_id: &str, menu_item_id: &str) -> Result<Option<Decimal>>;
}

#[derive(Default)]
pub struct InMemoryMenuCatalog {
    prices: RwLock<HashMap<(String, String), Decimal>>,
}

impl InMemoryMenuCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_price(&self, restaurant_id: &str, menu_item_id: &str, price: Decimal) {
        self.prices
            .write()
            .await
            .insert((restaurant_id.to_string(), menu_item_id.to_string()), price);
    }
}

#[async_trait]
impl MenuCatalog for InMemoryMenuCatalog {
    async fn menu_price(&self, restaurant_id: &str, menu_item_id: &str) -> Result<Option<Decimal>> {
        Ok(self
            .prices
            .read()
            .await
            .get(&(restaurant_id.to_string(), menu_item_id.to_string()))
            .copied())
    }
}

/// MySQL-backed menu catalog; unavailable items are not priced
#[derive(Clone)]
pub struct MySqlMenuCatalog {
    pool: MySqlPool,
}

impl MySqlMenuCatalog {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuCatalog for MySqlMenuCatalog {
    async fn menu_price(&self, restaurant_id: &str, menu_item_id: &str) -> Result<Option<Decimal>> {
        let price = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT price
            FROM menu_items
            WHERE restaurant_id = ? AND id = ? AND available = TRUE
            "#,
        )
        .bind(restaurant_id)
        .bind(menu_item_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(price)
    }
}
