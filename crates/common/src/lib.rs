//! Shared runtime helpers: logging setup, directory checks, health payload and metrics.

pub mod env;
pub mod metrics;
pub mod types;
pub mod utils;
