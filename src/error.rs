//! Crate error type.
//!
//! The normalization pass itself is total: missing optional input degrades to
//! absent output fields rather than failing. Only the serialization seam can
//! error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CasebookError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
