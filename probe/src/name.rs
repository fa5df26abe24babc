//! Dot-separated qualified names (`cube.digest.TaggedDigest`).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::MalformedName;

static SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// A validated qualified type name.
///
/// Each dot-separated segment must start with an ASCII letter or `_` and
/// continue with ASCII letters, digits, or `_`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualifiedName(String);

impl QualifiedName {
    pub fn parse(raw: &str) -> Result<Self, MalformedName> {
        if let Some(reason) = malformed_reason(raw) {
            return Err(MalformedName {
                name: raw.to_string(),
                reason,
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn malformed_reason(raw: &str) -> Option<&'static str> {
    if raw.is_empty() {
        return Some("name is empty");
    }
    if raw.trim() != raw {
        return Some("name has surrounding whitespace");
    }
    for segment in raw.split('.') {
        if segment.is_empty() {
            return Some("name has an empty segment");
        }
        if !SEGMENT.is_match(segment) {
            return Some("segment is not an identifier");
        }
    }
    None
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dotted_identifiers() {
        let name = QualifiedName::parse("cube.digest.TaggedDigest").expect("valid");
        assert_eq!(name.as_str(), "cube.digest.TaggedDigest");
        assert_eq!(name.to_string(), "cube.digest.TaggedDigest");
    }

    #[test]
    fn single_segment_is_valid() {
        let name = QualifiedName::parse("_Root9").expect("valid");
        assert_eq!(name.as_str(), "_Root9");
    }

    #[test]
    fn names_order_bytewise() {
        let upper = QualifiedName::parse("cube.ExtendedCube").expect("valid");
        let lower = QualifiedName::parse("cube.digest.Engine").expect("valid");
        assert!(upper < lower);
    }

    #[test]
    fn rejects_malformed_names() {
        for raw in ["", " cube.Cube", "cube..Cube", "cube.", ".Cube", "cube.9Lives", "cube.Cu-be"] {
            let err = QualifiedName::parse(raw).expect_err(raw);
            assert_eq!(err.name, raw);
        }
    }

    #[test]
    fn empty_name_reports_reason() {
        let err = QualifiedName::parse("").expect_err("empty");
        assert!(err.to_string().contains("name is empty"));
    }
}
