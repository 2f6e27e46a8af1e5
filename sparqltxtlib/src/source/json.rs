//! Reader for SPARQL 1.1 Query Results JSON documents.
//!
//! SELECT documents become SELECT-shaped [`QueryResult`]s; ASK documents
//! become ASK-shaped results (which the table engine then rejects).

use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;

use crate::data::{Column, Literal, QueryResult, Row, Value};
use crate::error::SparqlTxtError;
use crate::Result;

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    head: Head,
    results: Option<Results>,
    boolean: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct Head {
    #[serde(default)]
    vars: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Results {
    #[serde(default)]
    bindings: Vec<BTreeMap<String, JsonTerm>>,
}

#[derive(Debug, Deserialize)]
struct JsonTerm {
    #[serde(rename = "type")]
    kind: String,
    value: String,
    #[serde(rename = "xml:lang")]
    lang: Option<String>,
    datatype: Option<String>,
}

impl JsonTerm {
    fn into_value(self) -> Result<Value> {
        match self.kind.as_str() {
            "uri" => Ok(Value::Iri(self.value)),
            "bnode" => Ok(Value::Blank(self.value)),
            "literal" | "typed-literal" => Ok(Value::Literal(Literal {
                lexical: self.value,
                datatype: if self.lang.is_some() {
                    None
                } else {
                    self.datatype
                },
                language: self.lang,
            })),
            other => Err(SparqlTxtError::InvalidResults(format!(
                "unknown term type '{}'",
                other
            ))),
        }
    }
}

/// Parse a results document held in memory.
pub fn parse_json_results(text: &str) -> Result<QueryResult> {
    into_result(serde_json::from_str(text)?)
}

/// Read a results document from `reader`.
pub fn read_json_results<R: Read>(reader: R) -> Result<QueryResult> {
    into_result(serde_json::from_reader(reader)?)
}

fn into_result(doc: Document) -> Result<QueryResult> {
    match (doc.results, doc.boolean) {
        (Some(results), _) => {
            let columns: Vec<Column> = doc.head.vars.into_iter().map(Column::from).collect();
            let rows = results
                .bindings
                .into_iter()
                .map(|binding| {
                    let mut row = Row::new();
                    for (name, term) in binding {
                        row.bind(name, term.into_value()?);
                    }
                    Ok(row)
                })
                .collect::<Result<Vec<Row>>>()?;
            Ok(QueryResult::select(columns, rows))
        }
        (None, Some(answer)) => Ok(QueryResult::ask(answer)),
        (None, None) => Err(SparqlTxtError::InvalidResults(
            "document has neither 'results' nor 'boolean'".to_string(),
        )),
    }
}
