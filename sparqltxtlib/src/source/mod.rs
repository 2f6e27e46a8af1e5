//! Result sources: turn serialized query results into a `QueryResult`.
//!
//! This module handles the first stage of the pipeline - reading results
//! produced elsewhere (an endpoint response, a saved file). It provides:
//!
//! - **JSON**: SPARQL 1.1 Query Results JSON (`application/sparql-results+json`)
//!
//! Callers with their own row streams can skip this stage entirely and
//! implement [`ResultSource`](crate::data::ResultSource) instead.
//!
//! ## Example
//!
//! ```rust
//! use sparqltxtlib::source::parse_json_results;
//!
//! let result = parse_json_results(r#"{"head":{"vars":["x"]},"results":{"bindings":[]}}"#)?;
//! assert!(result.is_empty());
//! # Ok::<(), sparqltxtlib::SparqlTxtError>(())
//! ```

pub mod json;

pub use json::{parse_json_results, read_json_results};
