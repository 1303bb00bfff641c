//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.

mod check;

pub use check::{exit_code, run_check, status_line};

// Re-export config types used by handlers
pub use crate::config::CheckConfig;
