//! Data model: the values, rows and namespace tables the renderer consumes.
//!
//! This module is the shared vocabulary of the pipeline:
//!
//! - **Terms**: `Value` (IRI, blank node, literal, or unbound) and `Literal`
//! - **Results**: `Column`, `Row`, `ResultKind`, and the `ResultSource` trait
//! - **Namespaces**: the `Namespaces` capability and the `PrefixMap` table
//!
//! ## Example
//!
//! ```rust
//! use sparqltxtlib::data::{Column, QueryResult, Row, Value};
//!
//! let result = QueryResult::select(
//!     ["s"],
//!     vec![Row::new().with("s", Value::iri("http://example.org/a"))],
//! );
//! assert_eq!(result.columns, vec![Column::new("s")]);
//! ```

pub mod namespace;
pub mod result;
pub mod term;

pub use namespace::{Namespaces, PrefixMap};
pub use result::{Column, QueryResult, ResultKind, ResultSource, Row};
pub use term::{Literal, Value};
