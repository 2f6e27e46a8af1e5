//! Canonical text for a single bound value.
//!
//! Without a namespace table every value renders in its self-describing
//! N3 form: `<iri>`, `_:id`, `"lexical"@lang` or `"lexical"^^<datatype>`.
//! With a table, IRIs (and literal datatypes) are compressed to
//! `prefix:local` where a bound namespace fits. Blank nodes never are.
//!
//! Rendering is a pure function of its arguments, so cells can be compared
//! and sorted by their rendered text.

use crate::data::{Literal, Namespaces, Value};

/// Cell text for a variable with no binding.
pub const UNBOUND_CELL: &str = "-";

/// Render one value as table cell text.
pub fn render_term(value: &Value, namespaces: Option<&dyn Namespaces>) -> String {
    match value {
        Value::Unbound => UNBOUND_CELL.to_string(),
        Value::Iri(iri) => render_iri(iri, namespaces),
        Value::Blank(id) => format!("_:{}", id),
        Value::Literal(literal) => render_literal(literal, namespaces),
    }
}

fn render_iri(iri: &str, namespaces: Option<&dyn Namespaces>) -> String {
    namespaces
        .and_then(|ns| ns.compress(iri))
        .unwrap_or_else(|| bracket(iri))
}

/// `<iri>`, with characters not allowed in an N-Triples IRI as `\uXXXX`.
fn bracket(iri: &str) -> String {
    let mut out = String::with_capacity(iri.len() + 2);
    out.push('<');
    for c in iri.chars() {
        match c {
            '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' => push_escape(&mut out, c),
            c if c <= ' ' || breaks_line(c) => push_escape(&mut out, c),
            c => out.push(c),
        }
    }
    out.push('>');
    out
}

fn render_literal(literal: &Literal, namespaces: Option<&dyn Namespaces>) -> String {
    let mut out = quote(&literal.lexical);
    if let Some(language) = &literal.language {
        out.push('@');
        out.push_str(language);
    } else if let Some(datatype) = &literal.datatype {
        out.push_str("^^");
        out.push_str(&render_iri(datatype, namespaces));
    }
    out
}

/// Wrap a lexical form in double quotes, escaping so the result stays on one line.
fn quote(lexical: &str) -> String {
    let mut out = String::with_capacity(lexical.len() + 2);
    out.push('"');
    for c in lexical.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if breaks_line(c) => push_escape(&mut out, c),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn breaks_line(c: char) -> bool {
    c.is_control() || c == '\u{2028}' || c == '\u{2029}'
}

fn push_escape(out: &mut String, c: char) {
    out.push_str(&format!("\\u{:04X}", c as u32));
}
