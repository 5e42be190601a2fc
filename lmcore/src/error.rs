use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BackendError {
    #[cfg(feature = "reqwest")]
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    /// Non-success status reported by the remote collection.
    #[error("{status}: {}", .problem.summary())]
    Status {
        status: StatusCode,
        problem: Problem,
    },
    #[error("404 Not Found")]
    NotFound,
    #[error("network error: {0}")]
    Network(String),
    /// Denotes custom application invariant; generally informative.
    #[error("application invariant violated: {0}")]
    AppInvariantViolation(String),
}

impl BackendError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            BackendError::Status { status, .. } => Some(*status),
            BackendError::NotFound => Some(StatusCode::NOT_FOUND),
            #[cfg(feature = "reqwest")]
            BackendError::Reqwest(e) => e.status(),
            _ => None,
        }
    }

    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            BackendError::Status { problem, .. } => &problem.field_errors,
            _ => &[],
        }
    }
}

/// The problem document the collection returns alongside an error
/// status.  Every member is optional as servers vary in what they emit.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldError>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    #[serde(default)]
    pub object_name: String,
    pub field: String,
    pub message: String,
}

impl Problem {
    pub fn summary(&self) -> &str {
        self.detail.as_deref()
            .or(self.title.as_deref())
            .or(self.message.as_deref())
            .unwrap_or("request failed")
    }
}
