//! Dashboard State
//!
//! The single state container for the dashboard. Views read its signals;
//! changes go through the action methods.

use futures_util::future::join_all;
use leptos::*;
use std::collections::HashSet;

use crate::api::{self, ClientError, NewRecord, Record};

/// How long a notice stays on screen
const NOTICE_TIMEOUT_MS: u32 = 4000;

/// Dashboard state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Records as last fetched or mutated
    pub records: RwSignal<Vec<Record>>,
    /// Active tab
    pub view: RwSignal<View>,
    /// Pending add-record form
    pub form: RwSignal<FormDraft>,
    /// User-facing message
    pub notice: RwSignal<Option<Notice>>,
}

/// Top-level tabs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Reports,
    Settings,
}

impl View {
    pub const ALL: [View; 2] = [View::Reports, View::Settings];

    pub fn label(self) -> &'static str {
        match self {
            View::Reports => "Reports",
            View::Settings => "Settings",
        }
    }
}

/// Raw form input, kept as typed by the user
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormDraft {
    pub category: String,
    pub value: String,
}

/// Local form validation failures
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Category and value are required!")]
    Missing,

    #[error("Value must be a number")]
    NotANumber,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Check the form before any network call
pub fn validate_form(form: &FormDraft) -> Result<NewRecord, FormError> {
    if form.category.is_empty() || form.value.is_empty() {
        return Err(FormError::Missing);
    }

    let value: f64 = form
        .value
        .trim()
        .parse()
        .map_err(|_| FormError::NotANumber)?;

    if !value.is_finite() {
        return Err(FormError::NotANumber);
    }

    Ok(NewRecord {
        category: form.category.clone(),
        value,
    })
}

/// Sum of all record values
pub fn total_value(records: &[Record]) -> f64 {
    records.iter().map(|r| r.value).sum()
}

/// Result of deleting every held record one by one
#[derive(Debug, Default)]
pub struct ResetOutcome {
    pub deleted: Vec<String>,
    pub failed: Vec<(String, ClientError)>,
}

impl ResetOutcome {
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = (String, Result<(), ClientError>)>,
    {
        let mut outcome = Self::default();
        for (id, result) in results {
            match result {
                // Already gone on the server counts as deleted
                Ok(()) | Err(ClientError::Status { status: 404, .. }) => outcome.deleted.push(id),
                Err(e) => outcome.failed.push((id, e)),
            }
        }
        outcome
    }

    /// Drop the records whose delete succeeded; failed ones stay visible
    pub fn apply(&self, records: &mut Vec<Record>) {
        let deleted: HashSet<&str> = self.deleted.iter().map(String::as_str).collect();
        records.retain(|r| !deleted.contains(r.id.as_str()));
    }

    pub fn notice(&self) -> Notice {
        if self.failed.is_empty() {
            Notice::success(format!("Deleted {} records", self.deleted.len()))
        } else {
            Notice::error(format!(
                "Deleted {} records, {} failed: {}",
                self.deleted.len(),
                self.failed.len(),
                self.failed[0].1
            ))
        }
    }
}

/// Create the dashboard state and provide it to the component tree
pub fn provide_dashboard_state() -> DashboardState {
    let state = DashboardState {
        records: create_rw_signal(Vec::new()),
        view: create_rw_signal(View::default()),
        form: create_rw_signal(FormDraft::default()),
        notice: create_rw_signal(None),
    };

    provide_context(state);
    state
}

/// Fetch the dashboard state from context
pub fn use_dashboard_state() -> DashboardState {
    expect_context::<DashboardState>()
}

impl DashboardState {
    pub fn total_value(&self) -> f64 {
        self.records.with(|records| total_value(records))
    }

    pub fn select_view(&self, view: View) {
        self.view.set(view);
    }

    /// Show a notice (auto-clears after timeout unless replaced)
    pub fn show_notice(&self, notice: Notice) {
        self.notice.set(Some(notice.clone()));

        let notice_signal = self.notice;
        gloo_timers::callback::Timeout::new(NOTICE_TIMEOUT_MS, move || {
            notice_signal.update(|current| {
                if current.as_ref() == Some(&notice) {
                    *current = None;
                }
            });
        })
        .forget();
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }

    fn report_error(&self, context: &str, error: &ClientError) {
        let message = format!("{}: {}", context, error);
        web_sys::console::error_1(&message.clone().into());
        self.show_notice(Notice::error(message));
    }

    /// Replace local records with the server's collection
    pub fn load(&self) {
        let state = *self;
        spawn_local(async move {
            match api::fetch_records().await {
                Ok(records) => state.records.set(records),
                Err(e) => state.report_error("Failed to fetch records", &e),
            }
        });
    }

    /// Validate the form and create the record it describes
    pub fn submit_form(&self) {
        let record = match validate_form(&self.form.get_untracked()) {
            Ok(record) => record,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };

        let state = *self;
        spawn_local(async move {
            match api::create_record(&record).await {
                Ok(created) => {
                    state.records.update(|records| records.push(created));
                    state.form.set(FormDraft::default());
                }
                Err(e) => state.report_error("Failed to add record", &e),
            }
        });
    }

    /// Delete one record, then drop it locally
    pub fn delete(&self, id: String) {
        let state = *self;
        spawn_local(async move {
            match api::delete_record(&id).await {
                Ok(_) => state.records.update(|records| records.retain(|r| r.id != id)),
                Err(e) => state.report_error("Failed to delete record", &e),
            }
        });
    }

    /// Delete every held record after confirmation
    pub fn reset(&self) {
        if !confirm("Are you sure you want to delete all data?") {
            return;
        }

        let ids: Vec<String> = self
            .records
            .with_untracked(|records| records.iter().map(|r| r.id.clone()).collect());

        let state = *self;
        spawn_local(async move {
            let results = join_all(ids.into_iter().map(|id| async move {
                let result = api::delete_record(&id).await.map(|_| ());
                (id, result)
            }))
            .await;

            let outcome = ResetOutcome::from_results(results);
            state.records.update(|records| outcome.apply(records));

            for (id, e) in &outcome.failed {
                web_sys::console::error_1(&format!("Failed to delete {}: {}", id, e).into());
            }
            state.show_notice(outcome.notice());
        });
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, value: f64) -> Record {
        Record {
            id: id.to_string(),
            category: format!("cat-{}", id),
            value,
        }
    }

    fn draft(category: &str, value: &str) -> FormDraft {
        FormDraft {
            category: category.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_validate_form() {
        let record = validate_form(&draft("sales", "100")).unwrap();
        assert_eq!(record.category, "sales");
        assert_eq!(record.value, 100.0);

        assert_eq!(validate_form(&draft("", "5")), Err(FormError::Missing));
        assert_eq!(validate_form(&draft("sales", "")), Err(FormError::Missing));
        assert_eq!(validate_form(&draft("sales", "abc")), Err(FormError::NotANumber));
        assert_eq!(validate_form(&draft("sales", "inf")), Err(FormError::NotANumber));
    }

    #[test]
    fn test_zero_is_a_valid_value() {
        let record = validate_form(&draft("refunds", "0")).unwrap();
        assert_eq!(record.value, 0.0);
    }

    #[test]
    fn test_total_value() {
        assert_eq!(total_value(&[]), 0.0);
        assert_eq!(total_value(&[record("a", 5.0), record("b", 2.5)]), 7.5);
    }

    #[test]
    fn test_reset_keeps_failed_records() {
        let mut records = vec![record("a", 1.0), record("b", 2.0), record("c", 3.0)];

        let outcome = ResetOutcome::from_results(vec![
            ("a".to_string(), Ok(())),
            (
                "b".to_string(),
                Err(ClientError::Network("offline".to_string())),
            ),
            ("c".to_string(), Ok(())),
        ]);
        outcome.apply(&mut records);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "b");

        let notice = outcome.notice();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.message.contains("1 failed"));
    }

    #[test]
    fn test_reset_treats_missing_records_as_deleted() {
        let mut records = vec![record("a", 1.0), record("b", 2.0), record("c", 3.0)];

        let outcome = ResetOutcome::from_results(vec![
            ("a".to_string(), Ok(())),
            (
                "b".to_string(),
                Err(ClientError::Status {
                    status: 404,
                    message: "Item not found".to_string(),
                }),
            ),
            (
                "c".to_string(),
                Err(ClientError::Status {
                    status: 500,
                    message: "Internal server error".to_string(),
                }),
            ),
        ]);
        outcome.apply(&mut records);

        assert_eq!(outcome.deleted, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "c");
        assert_eq!(outcome.notice().kind, NoticeKind::Error);
    }

    #[test]
    fn test_reset_all_succeeded() {
        let mut records = vec![record("a", 1.0), record("b", 2.0)];
        let outcome = ResetOutcome::from_results(vec![
            ("a".to_string(), Ok(())),
            ("b".to_string(), Ok(())),
        ]);
        outcome.apply(&mut records);

        assert!(records.is_empty());
        assert_eq!(outcome.notice(), Notice::success("Deleted 2 records"));
    }

    #[test]
    fn test_view_labels() {
        assert_eq!(View::default(), View::Reports);
        assert_eq!(
            View::ALL.map(View::label),
            ["Reports", "Settings"]
        );
    }
}
