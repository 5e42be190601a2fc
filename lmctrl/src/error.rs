use http::StatusCode;
use lmcore::error::{
    BackendError,
    FieldError,
};
use thiserror::Error;

/// A failed read of a list or a record.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{message}")]
pub struct FetchError {
    pub status: Option<StatusCode>,
    pub message: String,
}

/// A failed write; `validation_messages` holds the per-field problems
/// reported by the server, if any.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{message}")]
pub struct MutationError {
    pub status: Option<StatusCode>,
    pub message: String,
    pub validation_messages: Vec<FieldError>,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum CtrlError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Mutation(#[from] MutationError),
    #[error("record not found: {0}")]
    NotFound(i64),
}

impl From<BackendError> for FetchError {
    fn from(e: BackendError) -> Self {
        Self {
            status: e.status(),
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        Self {
            status: None,
            message: format!("unexpected record format: {e}"),
        }
    }
}

impl From<BackendError> for MutationError {
    fn from(e: BackendError) -> Self {
        Self {
            status: e.status(),
            validation_messages: e.field_errors().to_vec(),
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for MutationError {
    fn from(e: serde_json::Error) -> Self {
        Self {
            status: None,
            message: format!("unable to encode record: {e}"),
            validation_messages: Vec::new(),
        }
    }
}

impl MutationError {
    pub fn missing_identifier() -> Self {
        Self {
            status: None,
            message: "record has no identifier".to_string(),
            validation_messages: Vec::new(),
        }
    }
}
