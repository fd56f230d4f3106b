// Billing module: line-item normalization, bill totals and order pre-bills

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{Adjustment, PreBill, RawLineItem, TotalsBreakdown, TotalsOverrides};
pub use services::BillingService;
