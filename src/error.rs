//! Error types for the tuple catalog

use thiserror::Error;

use crate::definition::TupleKind;
use crate::field::FieldType;

/// Result type for tuple operations
pub type Result<T> = std::result::Result<T, TupleError>;

/// Tuple catalog errors
#[derive(Error, Debug)]
pub enum TupleError {
    #[error("field '{field}' of {tuple} expects {expected}, got {actual}")]
    FieldTypeMismatch {
        tuple: TupleKind,
        field: &'static str,
        expected: FieldType,
        actual: FieldType,
    },

    #[error("field index {index} out of range for {tuple} ({count} fields)")]
    FieldIndexOutOfRange {
        tuple: TupleKind,
        index: usize,
        count: usize,
    },

    #[error("expected a {expected} tuple, got {actual}")]
    KindMismatch {
        expected: TupleKind,
        actual: TupleKind,
    },

    #[error("unknown tuple kind: {0}")]
    UnknownTupleKind(String),

    #[error("tuple {tuple} carries {actual} fields, definition declares {expected}")]
    FieldCountMismatch {
        tuple: TupleKind,
        expected: usize,
        actual: usize,
    },

    #[error("required field '{field}' of {tuple} is unset")]
    RequiredFieldUnset {
        tuple: TupleKind,
        field: &'static str,
    },

    #[error("unsupported intermediate format version {found} (supported: {supported})")]
    UnsupportedFormatVersion { found: String, supported: String },

    #[error("checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Semver error: {0}")]
    Semver(#[from] semver::Error),
}
