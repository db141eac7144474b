//! Creature type lines.
//!
//! The dataset's category label may be composite: "Grass/Poison" carries two
//! tags. `TypeLine` parses the slash-joined form and answers the overlap
//! query the fair-fight variant filters opponents with.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A creature's category label, one or more tags.
///
/// Serializes as the slash-joined string it was parsed from, matching the
/// dataset's wire form.
///
/// ## Example
///
/// ```
/// use creature_match::creatures::TypeLine;
///
/// let line = TypeLine::parse("Grass/Poison");
/// assert!(line.has_tag("poison"));
/// assert!(line.shares_tag(&TypeLine::parse("Poison")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TypeLine {
    /// Tags in dataset order. SmallVec: one or two tags is the common case.
    tags: SmallVec<[String; 2]>,
}

impl TypeLine {
    /// Parse a slash-joined label like "Grass/Poison".
    ///
    /// Tags are trimmed; empty segments are dropped. Original casing is
    /// preserved for display, queries ignore it.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let tags = raw
            .split('/')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect();

        Self { tags }
    }

    /// The tags in dataset order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Check whether no tags were given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Check for a tag, ignoring ASCII case.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Check whether two type lines share at least one tag.
    #[must_use]
    pub fn shares_tag(&self, other: &TypeLine) -> bool {
        self.tags.iter().any(|t| other.has_tag(t))
    }
}

impl fmt::Display for TypeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tags.join("/"))
    }
}

impl From<String> for TypeLine {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for TypeLine {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<TypeLine> for String {
    fn from(line: TypeLine) -> Self {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single() {
        let line = TypeLine::parse("Electric");

        assert_eq!(line.tags(), &["Electric".to_string()]);
        assert!(!line.is_empty());
    }

    #[test]
    fn test_parse_composite() {
        let line = TypeLine::parse("Grass/Poison");

        assert_eq!(line.tags().len(), 2);
        assert!(line.has_tag("Grass"));
        assert!(line.has_tag("Poison"));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let line = TypeLine::parse(" Grass / Poison ");

        assert_eq!(line.tags(), &["Grass".to_string(), "Poison".to_string()]);
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let line = TypeLine::parse("Electric");

        assert!(line.has_tag("electric"));
        assert!(line.has_tag("ELECTRIC"));
        assert!(!line.has_tag("Water"));
    }

    #[test]
    fn test_shares_tag() {
        let grass_poison = TypeLine::parse("Grass/Poison");
        let poison = TypeLine::parse("Poison");
        let water = TypeLine::parse("Water");

        assert!(grass_poison.shares_tag(&poison));
        assert!(poison.shares_tag(&grass_poison));
        assert!(!grass_poison.shares_tag(&water));
    }

    #[test]
    fn test_display() {
        assert_eq!(TypeLine::parse("Grass/Poison").to_string(), "Grass/Poison");
        assert_eq!(TypeLine::parse("Fire").to_string(), "Fire");
    }

    #[test]
    fn test_serde_as_string() {
        let line: TypeLine = serde_json::from_str("\"Grass/Poison\"").unwrap();
        assert!(line.has_tag("Poison"));

        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, "\"Grass/Poison\"");
    }
}
