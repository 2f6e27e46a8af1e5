//! Render options for table output.
//!
//! This module contains the configuration that controls how a result is
//! rendered and encoded. Options are passed by reference into each call;
//! nothing is global.

use std::fmt;

use crate::data::Namespaces;
use crate::output::sink::DEFAULT_ENCODING;

/// Options for [`render_text`](crate::render_text) and
/// [`write_table`](crate::write_table).
///
/// ```rust
/// use sparqltxtlib::{PrefixMap, TableOptions};
///
/// let prefixes = PrefixMap::core();
/// let options = TableOptions::new().namespaces(&prefixes).encoding("latin1");
/// assert_eq!(options.encoding, "latin1");
/// ```
#[derive(Clone)]
pub struct TableOptions<'a> {
    /// Namespace table for IRI compression; `None` renders full IRIs
    pub namespaces: Option<&'a dyn Namespaces>,
    /// Output encoding label (any WHATWG label, e.g. `utf-8`, `latin1`)
    pub encoding: String,
}

impl Default for TableOptions<'_> {
    fn default() -> Self {
        Self {
            namespaces: None,
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl<'a> TableOptions<'a> {
    /// Create default options: no namespace table, UTF-8 output
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: compress IRIs with `namespaces`
    pub fn namespaces(mut self, namespaces: &'a dyn Namespaces) -> Self {
        self.namespaces = Some(namespaces);
        self
    }

    /// Builder: set the output encoding label
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = label.into();
        self
    }
}

impl fmt::Debug for TableOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableOptions")
            .field("namespaces", &self.namespaces.is_some())
            .field("encoding", &self.encoding)
            .finish()
    }
}
