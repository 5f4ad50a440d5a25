//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `utils` - Prefix drawing and size formatting
//! - `tree` - Box-drawing tree formatter, plain or colored
//! - `json` - JSON manifest output

mod config;
mod json;
mod tree;
mod utils;

pub use config::OutputConfig;
pub use json::print_json;
pub use tree::TreeFormatter;
pub use utils::format_size;
