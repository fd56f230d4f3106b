pub mod adjustment_splitter;
pub mod billing_service;
pub mod line_item_normalizer;
pub mod pre_bill;
pub mod totals_calculator;

pub use adjustment_splitter::split_adjustments;
pub use billing_service::{restaurant_channel, BillingService, BILL_COMPUTED_EVENT, PRE_BILL_EVENT};
pub use line_item_normalizer::{normalize_items, LineItemNormalizer};
pub use pre_bill::project_pre_bill;
pub use totals_calculator::compute_totals;
