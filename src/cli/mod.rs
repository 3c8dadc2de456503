//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod assess;
mod catalog;
mod simulate;
mod template;

pub use assess::{run_assess, threshold_exit_code};
pub use catalog::{run_catalog_check, run_catalog_list};
pub use simulate::run_simulate;
pub use template::{run_export_template, write_session_template};

// Re-export config types used by handlers
pub use crate::config::{AssessConfig, SimulateConfig};
