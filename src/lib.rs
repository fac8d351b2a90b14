//! Cleaning pipeline for trade category ("Gewerke") lists.
//!
//! Reads raw lines, normalizes them (trim, lowercase), drops placeholders,
//! numeric noise and too-short entries, removes duplicates and produces the
//! result in ascending code-point order.

pub mod cleaner;
pub mod config;
pub mod constants;
pub mod filter;

pub use cleaner::{normalize, CleanStats, CleanedList, GewerkeCleaner};
pub use config::{Config, ConfigManager};
pub use filter::{is_valid, Rule, ValidityFilter};
