//! Configuration module for the budget manager
//!
//! This module provides configuration management including:
//! - Data file path resolution
//! - Logging level selection

pub mod logging;
pub mod paths;

pub use logging::{init_logging, parse_log_level};
pub use paths::BudgetPaths;
