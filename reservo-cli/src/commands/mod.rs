//! Command implementations for the reservo CLI

pub mod bootstrap;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use bootstrap::run_bootstrap;
pub use serve::run_serve;
