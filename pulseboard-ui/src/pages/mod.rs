//! Pages
//!
//! Top-level page components for each tab.

pub mod reports;
pub mod settings;

pub use reports::Reports;
pub use settings::Settings;
