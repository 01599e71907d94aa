//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod record_form;
pub mod record_table;
pub mod stat_card;
pub mod tab_bar;
pub mod toast;

pub use chart::{Chart, ChartKind};
pub use record_form::RecordForm;
pub use record_table::RecordTable;
pub use stat_card::StatCard;
pub use tab_bar::TabBar;
pub use toast::Toast;
