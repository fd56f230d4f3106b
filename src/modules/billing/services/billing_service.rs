use std::sync::Arc;

use serde::Serialize;
use serde_json::json;

use crate::core::{EventBus, Result};
use crate::modules::billing::models::{
    ComputeBillRequest, PreBill, PreBillRequest, RawLineItem, TotalsBreakdown,
};
use crate::modules::billing::services::line_item_normalizer::LineItemNormalizer;
use crate::modules::billing::services::pre_bill::project_pre_bill;
use crate::modules::billing::services::totals_calculator::compute_totals;
use crate::modules::pricing::repositories::MenuCatalog;
use crate::modules::pricing::services::ConfigResolver;

pub const BILL_COMPUTED_EVENT: &str = "bill.computed";
pub const PRE_BILL_EVENT: &str = "order.pre_bill";

/// Channel carrying a restaurant's billing notifications
pub fn restaurant_channel(restaurant_id: &str) -> String {
    format!("restaurant:{}", restaurant_id)
}

/// Entry point used by the order and bill creation paths
pub struct BillingService {
    resolver: ConfigResolver,
    normalizer: LineItemNormalizer,
    menu: Option<Arc<dyn MenuCatalog>>,
    events: Arc<dyn EventBus>,
}

impl BillingService {
    pub fn new(resolver: ConfigResolver, events: Arc<dyn EventBus>) -> Self {
        Self {
            resolver,
            normalizer: LineItemNormalizer::new(),
            menu: None,
            events,
        }
    }

    pub fn with_normalizer(mut self, normalizer: LineItemNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_menu_catalog(mut self, menu: Arc<dyn MenuCatalog>) -> Self {
        self.menu = Some(menu);
        self
    }

    /// Price a bill. Item prices are trusted as supplied since bill items are copied
    /// from already-priced orders.
    pub async fn compute_bill(
        &self,
        restaurant_id: &str,
        request: ComputeBillRequest,
    ) -> Result<TotalsBreakdown> {
        let config = self
            .resolver
            .resolve(restaurant_id, request.config_version)
            .await?;

        let normalized = self.normalizer.normalize(&request.items)?;
        let totals = compute_totals(
            normalized.subtotal,
            &config,
            &request.adjustments,
            &request.overrides,
        );

        tracing::info!(
            restaurant_id,
            config_version = ?totals.config_version,
            items = normalized.items.len(),
            total = %totals.total,
            "Bill computed"
        );

        self.notify(restaurant_id, BILL_COMPUTED_EVENT, &totals).await;

        Ok(totals)
    }

    /// Preview an order's total right after it is placed
    pub async fn project_pre_bill(
        &self,
        restaurant_id: &str,
        request: PreBillRequest,
    ) -> Result<PreBill> {
        let config = self.resolver.resolve(restaurant_id, None).await?;

        let items = self.apply_menu_prices(restaurant_id, request.items).await?;
        let normalized = self.normalizer.normalize(&items)?;
        let pre_bill = project_pre_bill(normalized.subtotal, &config);

        tracing::info!(
            restaurant_id,
            config_version = ?pre_bill.config_version,
            items = normalized.items.len(),
            total = %pre_bill.total,
            "Pre-bill projected"
        );

        self.notify(restaurant_id, PRE_BILL_EVENT, &pre_bill).await;

        Ok(pre_bill)
    }

    /// Replace supplied prices with menu prices for items the catalog knows
    async fn apply_menu_prices(
        &self,
        restaurant_id: &str,
        mut items: Vec<RawLineItem>,
    ) -> Result<Vec<RawLineItem>> {
        let Some(menu) = &self.menu else {
            return Ok(items);
        };

        for item in items.iter_mut() {
            let Some(menu_item_id) = item.menu_item_id.as_deref() else {
                continue;
            };

            match menu.menu_price(restaurant_id, menu_item_id).await? {
                Some(price) => {
                    item.unit_price = Some(json!(price.to_string()));
                    item.price = None;
                }
                None => {
                    tracing::warn!(
                        restaurant_id,
                        menu_item_id,
                        "Menu item not in catalog, using supplied price"
                    );
                }
            }
        }

        Ok(items)
    }

    /// Publication failures are logged; the computed result is still returned
    async fn notify<T: Serialize>(&self, restaurant_id: &str, event: &str, payload: &T) {
        let message = json!({
            "type": event,
            "restaurantId": restaurant_id,
            "payload": payload,
        });

        if let Err(err) = self
            .events
            .publish(&restaurant_channel(restaurant_id), message)
            .await
        {
            tracing::warn!(restaurant_id, event, error = %err, "Failed to publish billing event");
        }
    }
}
