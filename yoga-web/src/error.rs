//! Error types for the fallible edges of the crate
//!
//! Per-frame classification and scoring never fail; a missing or degenerate
//! skeleton yields the idle result instead. Errors only come from loading
//! data (reference library, match config) and from driving a sequence with
//! bad ids or indices.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, PoseError>;

#[derive(Error, Debug)]
pub enum PoseError {
    #[error("invalid reference data: {0}")]
    ReferenceData(#[source] serde_json::Error),

    #[error("invalid match config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("invalid match config: {0}")]
    InvalidConfig(&'static str),

    #[error("reference pose '{id}' has {len} landmarks (expected {expected})")]
    LandmarkCount { id: String, len: usize, expected: usize },

    #[error("duplicate reference pose id '{0}'")]
    DuplicatePose(String),

    #[error("unknown pose id '{0}'")]
    UnknownPose(String),

    #[error("pose sequence is empty")]
    EmptySequence,

    #[error("sequence index {index} out of range (sequence has {len} poses)")]
    IndexOutOfRange { index: usize, len: usize },
}

impl From<PoseError> for JsValue {
    fn from(err: PoseError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
