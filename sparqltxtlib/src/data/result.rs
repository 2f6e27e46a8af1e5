//! Query result model: columns, rows, and the result shape.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::term::Value;

static UNBOUND: Value = Value::Unbound;

/// A projected variable name, without the leading `?`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Column(String);

impl Column {
    /// Create a column from a variable name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Header text for this column
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Column {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// One solution: the values bound to each column.
///
/// Columns without an entry read back as [`Value::Unbound`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    bindings: BTreeMap<Column, Value>,
}

impl Row {
    /// Create an empty row (every column unbound)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: bind a column
    pub fn with(mut self, column: impl Into<Column>, value: impl Into<Value>) -> Self {
        self.bind(column, value);
        self
    }

    /// Bind a column, replacing any earlier value
    pub fn bind(&mut self, column: impl Into<Column>, value: impl Into<Value>) {
        let value = value.into();
        let column = column.into();
        if value.is_bound() {
            self.bindings.insert(column, value);
        } else {
            self.bindings.remove(&column);
        }
    }

    /// Value bound to `column` in this row
    pub fn get(&self, column: &Column) -> &Value {
        self.bindings.get(column).unwrap_or(&UNBOUND)
    }
}

impl<C: Into<Column>, V: Into<Value>> FromIterator<(C, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.bind(column, value);
        }
        row
    }
}

/// The shape of a query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResultKind {
    /// Variable bindings over named columns
    Select,
    /// A single boolean
    Ask,
    /// A constructed graph
    Construct,
    /// A described graph
    Describe,
}

impl ResultKind {
    /// Whether results of this kind are rows over named columns
    pub fn is_tabular(self) -> bool {
        matches!(self, ResultKind::Select)
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResultKind::Select => "SELECT",
            ResultKind::Ask => "ASK",
            ResultKind::Construct => "CONSTRUCT",
            ResultKind::Describe => "DESCRIBE",
        };
        f.write_str(name)
    }
}

/// Anything the table engine can pull rows from.
///
/// The row iterator is consumed once; implementations may produce rows
/// lazily.
pub trait ResultSource {
    /// Row iterator handed out by [`ResultSource::into_rows`]
    type Rows: Iterator<Item = Row>;

    /// Shape of this result
    fn kind(&self) -> ResultKind;

    /// Projected columns, in header order
    fn columns(&self) -> &[Column];

    /// Consume the source, yielding its rows
    fn into_rows(self) -> Self::Rows;
}

/// An owned, fully materialized query result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Result shape
    pub kind: ResultKind,
    /// Projected columns (empty for non-tabular results)
    #[serde(default)]
    pub columns: Vec<Column>,
    /// Solutions (empty for non-tabular results)
    #[serde(default)]
    pub rows: Vec<Row>,
    /// ASK answer, when `kind` is `Ask`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boolean: Option<bool>,
}

impl QueryResult {
    /// Create a SELECT-shaped result
    pub fn select<C: Into<Column>>(columns: impl IntoIterator<Item = C>, rows: Vec<Row>) -> Self {
        Self {
            kind: ResultKind::Select,
            columns: columns.into_iter().map(Into::into).collect(),
            rows,
            boolean: None,
        }
    }

    /// Create an ASK-shaped result
    pub fn ask(answer: bool) -> Self {
        Self {
            kind: ResultKind::Ask,
            columns: Vec::new(),
            rows: Vec::new(),
            boolean: Some(answer),
        }
    }

    /// Create a result of a graph-producing kind (`Construct` or `Describe`).
    ///
    /// The graph itself is not modelled here; only its shape is carried.
    pub fn graph(kind: ResultKind) -> Self {
        Self {
            kind,
            columns: Vec::new(),
            rows: Vec::new(),
            boolean: None,
        }
    }

    /// Whether the result has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ResultSource for QueryResult {
    type Rows = std::vec::IntoIter<Row>;

    fn kind(&self) -> ResultKind {
        self.kind
    }

    fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn into_rows(self) -> Self::Rows {
        self.rows.into_iter()
    }
}
