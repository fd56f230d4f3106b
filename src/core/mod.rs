pub mod error;
pub mod event_bus;
pub mod lenient;
pub mod money;

pub use error::{AppError, Result};
pub use event_bus::{BroadcastEventBus, BusEvent, EventBus, NoopEventBus};
pub use money::{percent_of, round2, sum_amounts};
