//! Output module for console output.
//!
//! Provides:
//! - Colored console output
//! - Run statistics reporting

pub mod console;
pub mod stats;

pub use console::{
    print_banner, print_config_summary, print_debug, print_error, print_info, print_success,
    print_warning,
};
pub use stats::print_stats;
