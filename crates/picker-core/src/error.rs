// crates/picker-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the picker engine.
///
/// Most of the engine degrades instead of failing (see [`crate::catalog`]),
/// so these mostly reach callers through the loader and the strict lookup
/// helpers.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unknown country code: {0}")]
    UnknownCountryCode(String),

    #[error("Row {row} out of range for section {section}")]
    RowOutOfRange { section: usize, row: usize },
}

pub type Result<T> = std::result::Result<T, PickerError>;
