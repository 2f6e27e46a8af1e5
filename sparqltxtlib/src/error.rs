//! Error types for sparqltxtlib

use thiserror::Error;

use crate::data::result::ResultKind;

/// Errors that can occur while reading or rendering query results
#[derive(Error, Debug)]
pub enum SparqlTxtError {
    /// The result is not SELECT-shaped and cannot be laid out as a table
    #[error("can only render SELECT results as a table, got a {kind} result")]
    ShapeMismatch { kind: ResultKind },

    /// Malformed JSON in a results document
    #[error("failed to parse results JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed JSON that is not a SPARQL results document
    #[error("invalid results document: {0}")]
    InvalidResults(String),

    /// A prefix binding that cannot be used for compression
    #[error("invalid prefix '{prefix}': {message}")]
    InvalidPrefix { prefix: String, message: String },

    /// Writing to the output sink failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
