//! Boundary type - a named, whole-line comment delimiter pattern.

use std::fmt;

use regex::Regex;

use crate::errors::PatternError;
use crate::types::BoundaryName;

/// A regex-based matcher for one comment delimiter form such as `/**`, `*/`, `//` or `#`.
///
/// A boundary is matched IFF the entire line matches the pattern. The raw
/// pattern is compiled as `^(?:raw)$`, so partial matches never count, even
/// when the raw pattern itself carries no anchors.
#[derive(Clone)]
pub struct Boundary {
    name: BoundaryName,
    pattern: Regex,
    raw: String,
}

impl Boundary {
    /// Compile a new boundary.
    ///
    /// Fails with `PatternError` if the pattern does not compile on its own or
    /// cannot be wrapped in whole-line anchors; no boundary is produced in
    /// that case.
    pub fn new(name: impl Into<BoundaryName>, pattern: &str) -> Result<Self, PatternError> {
        let name = name.into();

        // Raw pattern must compile alone: a stray `)` would close the anchor group.
        Regex::new(pattern).map_err(|e| PatternError::from_regex(&name, pattern, e))?;

        let anchored = format!("^(?:{pattern})$");
        let compiled = Regex::new(&anchored).map_err(|e| match e {
            regex::Error::CompiledTooBig(_) => PatternError::from_regex(&name, pattern, e),
            other => PatternError::InvalidPattern {
                boundary: name.to_string(),
                pattern: pattern.to_string(),
                message: format!("pattern cannot be anchored to a whole line: {other}"),
            },
        })?;

        Ok(Self {
            name,
            pattern: compiled,
            raw: pattern.to_string(),
        })
    }

    /// Human-readable name for this boundary.
    pub fn name(&self) -> &BoundaryName {
        &self.name
    }

    /// The pattern exactly as supplied at construction.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The compiled, whole-line anchored pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Check if the entire line matches this boundary.
    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }

    /// Returns the line itself when it matches, or an empty string otherwise.
    pub fn find_match<'a>(&self, line: &'a str) -> &'a str {
        if self.matches(line) {
            line
        } else {
            ""
        }
    }
}

// Two boundaries are the same boundary when they share a name and raw pattern.
impl PartialEq for Boundary {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.raw == other.raw
    }
}

impl Eq for Boundary {}

impl fmt::Debug for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Boundary")
            .field("name", &self.name)
            .field("raw", &self.raw)
            .finish()
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unanchored_pattern_is_anchored() {
        let boundary = Boundary::new("Header", r"/\*\*").unwrap();
        assert!(boundary.matches("/**"));
        assert!(!boundary.matches("/**x"));
        assert!(!boundary.matches(" /**"));
        assert_eq!(boundary.raw(), r"/\*\*");
    }

    #[test]
    fn test_alternation_is_anchored_on_both_sides() {
        let boundary = Boundary::new("Quote", r#"^"""|'''$"#).unwrap();
        assert!(boundary.matches(r#"""""#));
        assert!(boundary.matches("'''"));
        assert!(!boundary.matches(r#""""docstring"#));
        assert!(!boundary.matches("x'''"));
    }

    #[test]
    fn test_trailing_newline_is_not_a_match() {
        let boundary = Boundary::new("Hash", "#").unwrap();
        assert!(!boundary.matches("#\n"));
    }

    #[test]
    fn test_unbalanced_group_cannot_escape_anchors() {
        let err = Boundary::new("Sneaky", r"/\*\*)|(?:#").unwrap_err();
        assert_eq!(err.boundary(), "Sneaky");
        assert!(matches!(err, PatternError::InvalidPattern { .. }));

        assert!(Boundary::new("Lua", r"--\[\[)|(?:x").is_err());
    }

    #[test]
    fn test_balanced_alternation_stays_anchored() {
        let boundary = Boundary::new("Either", r"(/\*\*)|(#)").unwrap();
        assert!(boundary.matches("/**"));
        assert!(boundary.matches("#"));
        assert!(!boundary.matches("/**garbage"));
        assert!(!boundary.matches("x#"));
    }

    #[test]
    fn test_verbose_comment_reports_anchoring_failure() {
        let err = Boundary::new("Verbose", r"(?x) /\*\* # javadoc header").unwrap_err();
        match err {
            PatternError::InvalidPattern { message, .. } => {
                assert!(message.contains("whole line"), "{message}");
            }
            other => panic!("Expected InvalidPattern, got: {:?}", other),
        }
    }

    #[test]
    fn test_oversized_pattern_is_too_large() {
        let err = Boundary::new("Huge", r"(?:\w{500}){100}").unwrap_err();
        assert!(matches!(err, PatternError::TooLarge { .. }), "{err:?}");
    }

    #[test]
    fn test_invalid_pattern_fails_construction() {
        let err = Boundary::new("Broken", r"(/\*").unwrap_err();
        assert_eq!(err.boundary(), "Broken");
        assert!(matches!(err, PatternError::InvalidPattern { .. }));
    }
}
