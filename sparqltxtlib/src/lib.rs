//! # sparqltxtlib
//!
//! Render SPARQL SELECT results as deterministic, column-aligned plain-text
//! tables.
//!
//! ## Overview
//!
//! The library is a small pipeline of pure stages:
//!
//! - **Source**: read a results document (SPARQL JSON) into a `QueryResult`,
//!   or implement `ResultSource` over your own row stream
//! - **Terms**: render each bound value in its canonical N3 form, optionally
//!   compressing IRIs against a namespace table (`ex:p` instead of
//!   `<http://example.org/p>`)
//! - **Table**: measure every column, center the header, sort the body
//! - **Sink**: encode the text and write it, falling back to plain text when
//!   the sink or the encoding cannot take bytes
//!
//! Only SELECT-shaped results can be rendered. ASK, CONSTRUCT and DESCRIBE
//! results are rejected with [`SparqlTxtError::ShapeMismatch`] before
//! anything is written.
//!
//! ## Example
//!
//! ```rust
//! use sparqltxtlib::{render_text, PrefixMap, QueryResult, Row, TableOptions, Value};
//!
//! let prefixes = PrefixMap::new().bind("ex", "http://example.org/")?;
//! let result = QueryResult::select(
//!     ["s", "o"],
//!     vec![
//!         Row::new()
//!             .with("s", Value::iri("http://example.org/a"))
//!             .with("o", Value::literal("x")),
//!         Row::new().with("s", Value::iri("http://other.org/b")),
//!     ],
//! );
//!
//! let text = render_text(result, &TableOptions::new().namespaces(&prefixes))?;
//! assert_eq!(
//!     text,
//!     "         s          | o \n\
//!      ------------------------\n\
//!      <http://other.org/b>-  \n\
//!      ex:a                \"x\"\n"
//! );
//! # Ok::<(), sparqltxtlib::SparqlTxtError>(())
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod source;

pub use data::{
    Column, Literal, Namespaces, PrefixMap, QueryResult, ResultKind, ResultSource, Row, Value,
};
pub use error::SparqlTxtError;
pub use options::TableOptions;
pub use output::{
    render_term, render_text, write_table, ByteSink, OutputSink, TextSink, TextTable,
};
pub use source::{parse_json_results, read_json_results};

/// Result type for sparqltxtlib operations
pub type Result<T> = std::result::Result<T, SparqlTxtError>;
