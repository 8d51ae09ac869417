//! Output formatting for subnet data.
//!
//! - [`terminal`] - colored terminal output
//! - [`csv`] - semicolon separated rows
//! - [`markdown`] - Markdown table
//! - [`json`] - JSON document
//! - [`export`] - timestamped export files

mod csv;
mod export;
mod json;
mod markdown;
mod terminal;

pub use csv::write_csv;
pub use export::{export_file_name, export_plan, ExportFormat};
pub use json::{write_json, ExportDocument};
pub use markdown::write_markdown;
pub use terminal::{
    describe_magic, write_analysis, write_headline, write_subnets, write_summary, Ui,
};
