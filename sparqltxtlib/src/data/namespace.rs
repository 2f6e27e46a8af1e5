//! Namespace tables for compressing IRIs into `prefix:local` form.
//!
//! The table engine only needs the [`Namespaces`] capability. [`PrefixMap`]
//! is the table shipped with the crate; any closure mapping an IRI to an
//! optional short form works as well.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SparqlTxtError;
use crate::Result;

pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";
pub const OWL_NS: &str = "http://www.w3.org/2002/07/owl#";
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Read-only IRI compression capability.
pub trait Namespaces {
    /// Compress `iri` to `prefix:local`, or `None` when no bound namespace fits
    fn compress(&self, iri: &str) -> Option<String>;
}

impl<F> Namespaces for F
where
    F: Fn(&str) -> Option<String>,
{
    fn compress(&self, iri: &str) -> Option<String> {
        self(iri)
    }
}

/// Prefix bindings: prefix name -> namespace IRI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefixMap {
    bindings: BTreeMap<String, String>,
}

impl PrefixMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Map preloaded with the `rdf`, `rdfs`, `xsd`, `owl` and `xml` namespaces
    pub fn core() -> Self {
        let mut map = Self::new();
        for (prefix, namespace) in [
            ("rdf", RDF_NS),
            ("rdfs", RDFS_NS),
            ("xsd", XSD_NS),
            ("owl", OWL_NS),
            ("xml", XML_NS),
        ] {
            map.bindings.insert(prefix.to_string(), namespace.to_string());
        }
        map
    }

    /// Builder: bind `prefix` to `namespace`, replacing an earlier binding.
    pub fn bind(mut self, prefix: &str, namespace: &str) -> Result<Self> {
        self.insert(prefix, namespace)?;
        Ok(self)
    }

    /// Bind `prefix` to `namespace` in place.
    pub fn insert(&mut self, prefix: &str, namespace: &str) -> Result<()> {
        validate_prefix(prefix)?;
        if namespace.is_empty() {
            return Err(SparqlTxtError::InvalidPrefix {
                prefix: prefix.to_string(),
                message: "namespace IRI is empty".to_string(),
            });
        }
        self.bindings
            .insert(prefix.to_string(), namespace.to_string());
        Ok(())
    }

    /// Parse a `NAME=IRI` binding, as given on a command line.
    pub fn insert_binding(&mut self, binding: &str) -> Result<()> {
        let (prefix, namespace) =
            binding
                .split_once('=')
                .ok_or_else(|| SparqlTxtError::InvalidPrefix {
                    prefix: binding.to_string(),
                    message: "expected NAME=IRI".to_string(),
                })?;
        self.insert(prefix, namespace)
    }

    /// Namespace bound to `prefix`
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.bindings.get(prefix).map(String::as_str)
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the map has no bindings
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Namespaces for PrefixMap {
    fn compress(&self, iri: &str) -> Option<String> {
        // Longest namespace wins. Equal namespaces keep the first prefix in map order.
        let mut best: Option<(&str, &str)> = None;
        for (prefix, namespace) in &self.bindings {
            let Some(local) = iri.strip_prefix(namespace.as_str()) else {
                continue;
            };
            if !is_local_name(local) {
                continue;
            }
            match best {
                Some((_, best_ns)) if best_ns.len() >= namespace.len() => {}
                _ => best = Some((prefix, namespace)),
            }
        }
        best.map(|(prefix, namespace)| format!("{}:{}", prefix, &iri[namespace.len()..]))
    }
}

fn validate_prefix(prefix: &str) -> Result<()> {
    let invalid = |message: &str| SparqlTxtError::InvalidPrefix {
        prefix: prefix.to_string(),
        message: message.to_string(),
    };

    let Some(first) = prefix.chars().next() else {
        return Ok(());
    };
    if !first.is_ascii_alphabetic() {
        return Err(invalid("must start with a letter"));
    }
    if prefix.ends_with('.') {
        return Err(invalid("must not end with '.'"));
    }
    if let Some(bad) = prefix
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(invalid(&format!("contains '{}'", bad)));
    }
    Ok(())
}

/// Whether `local` can follow `prefix:` without being misread.
fn is_local_name(local: &str) -> bool {
    if local.is_empty() || local.starts_with(['-', '.']) || local.ends_with('.') {
        return false;
    }
    !local.chars().any(|c| {
        c.is_whitespace() || c.is_control() || matches!(c, '/' | '#' | '?' | '<' | '>' | '"')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_simple() {
        let map = PrefixMap::new().bind("ex", "http://example.org/").unwrap();
        assert_eq!(
            map.compress("http://example.org/p"),
            Some("ex:p".to_string())
        );
        assert_eq!(map.compress("http://other.org/p"), None);
    }

    #[test]
    fn test_compress_longest_namespace_wins() {
        let map = PrefixMap::new()
            .bind("ex", "http://example.org/")
            .unwrap()
            .bind("exv", "http://example.org/vocab#")
            .unwrap();
        assert_eq!(
            map.compress("http://example.org/vocab#name"),
            Some("exv:name".to_string())
        );
        assert_eq!(
            map.compress("http://example.org/thing"),
            Some("ex:thing".to_string())
        );
    }

    #[test]
    fn test_compress_rejects_unusable_local_names() {
        let map = PrefixMap::new().bind("ex", "http://example.org/").unwrap();
        assert_eq!(map.compress("http://example.org/"), None);
        assert_eq!(map.compress("http://example.org/a/b"), None);
        assert_eq!(map.compress("http://example.org/a#b"), None);
        assert_eq!(map.compress("http://example.org/a b"), None);
        assert_eq!(map.compress("http://example.org/end."), None);
    }

    #[test]
    fn test_empty_prefix() {
        let map = PrefixMap::new().bind("", "http://example.org/").unwrap();
        assert_eq!(map.compress("http://example.org/x"), Some(":x".to_string()));
    }

    #[test]
    fn test_core_prefixes() {
        let map = PrefixMap::core();
        assert_eq!(
            map.compress("http://www.w3.org/2001/XMLSchema#integer"),
            Some("xsd:integer".to_string())
        );
        assert_eq!(map.namespace("rdf"), Some(RDF_NS));
        assert_eq!(map.len(), 5);
    }

    #[test]
    fn test_rebind_replaces() {
        let map = PrefixMap::new()
            .bind("ex", "http://a.org/")
            .unwrap()
            .bind("ex", "http://b.org/")
            .unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.compress("http://a.org/x"), None);
        assert_eq!(map.compress("http://b.org/x"), Some("ex:x".to_string()));
    }

    #[test]
    fn test_invalid_prefixes() {
        assert!(PrefixMap::new().bind("1ex", "http://a/").is_err());
        assert!(PrefixMap::new().bind("ex.", "http://a/").is_err());
        assert!(PrefixMap::new().bind("e x", "http://a/").is_err());
        assert!(PrefixMap::new().bind("ex", "").is_err());
    }

    #[test]
    fn test_insert_binding() {
        let mut map = PrefixMap::new();
        map.insert_binding("foaf=http://xmlns.com/foaf/0.1/").unwrap();
        assert_eq!(
            map.compress("http://xmlns.com/foaf/0.1/name"),
            Some("foaf:name".to_string())
        );

        let err = map.insert_binding("foaf").unwrap_err();
        assert!(err.to_string().contains("expected NAME=IRI"));
    }

    #[test]
    fn test_closure_as_namespaces() {
        let table = |iri: &str| iri.strip_prefix("urn:x:").map(|l| format!("x:{}", l));
        assert_eq!(table.compress("urn:x:1"), Some("x:1".to_string()));
        assert_eq!(table.compress("urn:y:1"), None);
    }
}
