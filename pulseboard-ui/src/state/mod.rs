//! State Management
//!
//! Dashboard state container and its actions.

pub mod dashboard;

pub use dashboard::{provide_dashboard_state, use_dashboard_state, View};
