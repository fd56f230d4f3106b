use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::broadcast;

use crate::core::{AppError, Result};

/// A message published on the bus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusEvent {
    pub channel: String,
    pub message: Value,
}

/// Outbound notification capability.
///
/// Constructed once at process start and shared by reference with every service that
/// needs to notify dashboards about billing activity.
#[async_trait]
pub trait EventBus: Send + Sync {
    async fn publish(&self, channel: &str, message: Value) -> Result<()>;
}

/// In-process bus backed by a tokio broadcast channel
pub struct BroadcastEventBus {
    sender: broadcast::Sender<BusEvent>,
}

impl BroadcastEventBus {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(AppError::Configuration(
                "Event bus capacity must be greater than 0".to_string(),
            ));
        }
        let (sender, _) = broadcast::channel(capacity);
        Ok(Self { sender })
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BusEvent> {
        self.sender.subscribe()
    }
}

#[async_trait]
impl EventBus for BroadcastEventBus {
    async fn publish(&self, channel: &str, message: Value) -> Result<()> {
        let event = BusEvent {
            channel: channel.to_string(),
            message,
        };

        // No subscribers is a normal state (no dashboard connected)
        match self.sender.send(event) {
            Ok(receivers) => {
                tracing::debug!(channel = %channel, receivers, "Event published");
            }
            Err(_) => {
                tracing::debug!(channel = %channel, "Event dropped, no subscribers");
            }
        }

        Ok(())
    }
}

/// Bus that discards everything
pub struct NoopEventBus;

#[async_trait]
impl EventBus for NoopEventBus {
    async fn publish(&self, _channel: &str, _message: Value) -> Result<()> {
        Ok(())
    }
}
