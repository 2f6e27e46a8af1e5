//! Output formatting: present results as text tables.
//!
//! This module handles the final stage of the pipeline - turning a result
//! into display text and writing it out. It provides:
//!
//! - **Terms**: `render_term`, the canonical text for one bound value
//! - **TextTable**: rendered cells plus column widths, and the layout rules
//! - **Sinks**: `OutputSink` targets and encoded emission with text fallback
//!
//! ## Example
//!
//! ```rust
//! use sparqltxtlib::data::{QueryResult, Row, Value};
//! use sparqltxtlib::output::render_text;
//! use sparqltxtlib::TableOptions;
//!
//! let result = QueryResult::select(["x"], vec![Row::new().with("x", Value::literal("hi"))]);
//! let text = render_text(result, &TableOptions::new())?;
//! assert_eq!(text, " x  \n----\n\"hi\"\n");
//! # Ok::<(), sparqltxtlib::SparqlTxtError>(())
//! ```

pub mod sink;
pub mod table;
pub mod term;

pub use sink::{emit, encode_text, ByteSink, EncodeFailure, OutputSink, TextSink};
pub use table::{render_text, write_table, TextTable, NO_RESULTS};
pub use term::{render_term, UNBOUND_CELL};
