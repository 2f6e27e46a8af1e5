//! Bound values: the terms a query variable can be bound to.

use serde::{Deserialize, Serialize};

/// A literal's lexical form with its optional language tag or datatype.
///
/// Well-formed literals carry at most one of `language` and `datatype`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    /// Lexical form, unescaped
    pub lexical: String,
    /// Language tag without the leading `@`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Full datatype IRI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

impl Literal {
    /// Create a plain literal
    pub fn plain(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            language: None,
            datatype: None,
        }
    }

    /// Create a language-tagged literal
    pub fn lang(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            language: Some(language.into()),
            datatype: None,
        }
    }

    /// Create a typed literal
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            language: None,
            datatype: Some(datatype.into()),
        }
    }
}

/// The value of one variable in one result row.
///
/// `Unbound` is an explicit case: a row has an entry for every column even
/// when the query left the variable without a binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    /// An IRI
    Iri(String),
    /// A blank node with its local identifier
    Blank(String),
    /// A literal
    Literal(Literal),
    /// No binding in this row
    #[default]
    Unbound,
}

impl Value {
    /// Create an IRI value
    pub fn iri(iri: impl Into<String>) -> Self {
        Value::Iri(iri.into())
    }

    /// Create a blank node value
    pub fn blank(id: impl Into<String>) -> Self {
        Value::Blank(id.into())
    }

    /// Create a plain literal value
    pub fn literal(lexical: impl Into<String>) -> Self {
        Value::Literal(Literal::plain(lexical))
    }

    /// Create a language-tagged literal value
    pub fn lang_literal(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Value::Literal(Literal::lang(lexical, language))
    }

    /// Create a typed literal value
    pub fn typed_literal(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Value::Literal(Literal::typed(lexical, datatype))
    }

    /// Check if this value is bound
    pub fn is_bound(&self) -> bool {
        !matches!(self, Value::Unbound)
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        Value::Literal(literal)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Unbound, Into::into)
    }
}
