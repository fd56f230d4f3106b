//! OrderDesk billing library
//!
//! Pricing configuration resolution and the bill / pre-bill computation engine used by
//! the restaurant ordering backend.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::billing;
pub use modules::pricing;
