//! Errors raised while rendering a tax-rule document for preview or download.
//!
//! Building a document never fails: every input is accepted as entered. Only
//! serialization and the parsing of externally supplied identifiers or view
//! names can go wrong.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    /// JSON rendering failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV rendering failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV writer produced bytes that are not UTF-8.
    #[error("encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// The CSV writer could not be flushed into its buffer.
    #[error("buffer error: {0}")]
    Buffer(String),

    /// An object identifier was not 24 hex digits.
    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    /// The requested preview view does not exist.
    #[error("unknown view: {0}")]
    UnknownView(String),
}
