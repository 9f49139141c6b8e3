//! Sanctioned company dataset: record model, summary fields and detail view.

mod detail;
pub use detail::{use_company_sanction, CompanySanctionDetail, HistoryBack, SanctionDetailBody};

mod fields;
pub use fields::{summary_rows, FieldLabel, FieldSpec, Formatter, SUMMARY_FIELDS};

mod record;
pub use record::CompanySanction;

use api::{ApiClient, ApiError};
use serde_json::{Map, Value};

/// Where a detail view stands with its one fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// Request in flight (or never answered). Renders nothing.
    Pending,
    /// The backend answered with an empty object. Renders nothing.
    Absent,
    Ready(CompanySanction),
    /// Transport, status or decoding failure, with a log-friendly reason.
    Failed(String),
}

impl DetailState {
    /// Classify a decoded response body.
    pub fn from_object(object: Map<String, Value>) -> Self {
        if object.is_empty() {
            return Self::Absent;
        }
        match CompanySanction::from_object(object) {
            Ok(record) => Self::Ready(record),
            Err(err) => {
                let err = ApiError::from(err);
                tracing::warn!(kind = err.kind(), "company sanction body rejected: {err}");
                Self::Failed(err.to_string())
            }
        }
    }

    /// Classify the outcome of a request.
    pub fn from_response(response: Result<Map<String, Value>, ApiError>) -> Self {
        match response {
            Ok(object) => Self::from_object(object),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

/// Fetch one record and classify the outcome.
pub async fn load_company_sanction(api: &ApiClient, id: &str) -> DetailState {
    let response = api.company_sanction(id).await;
    if let Err(err) = &response {
        tracing::warn!(id, kind = err.kind(), "company sanction request failed: {err}");
    }

    let state = DetailState::from_response(response);
    match &state {
        DetailState::Ready(_) => tracing::debug!(id, "company sanction loaded"),
        DetailState::Absent => tracing::info!(id, "company sanction response was empty"),
        DetailState::Failed(_) | DetailState::Pending => {}
    }
    state
}
