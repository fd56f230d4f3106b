pub mod billing;
pub mod pricing;
