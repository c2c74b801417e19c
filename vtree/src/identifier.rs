use std::fmt;

use thiserror::Error;

/// A validated name for node types and properties.
///
/// Valid identifiers are non-empty, contain only letters, digits, and
/// underscores, and do not start with a digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid identifier: {0:?}")]
pub struct InvalidIdentifier(pub String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidIdentifier> {
        let name = name.into();
        if Self::is_valid(&name) {
            Ok(Self(name))
        } else {
            Err(InvalidIdentifier(name))
        }
    }

    pub fn is_valid(name: &str) -> bool {
        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        if !(first.is_alphabetic() || first == '_') {
            return false;
        }
        chars.all(|c| c.is_alphanumeric() || c == '_')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Identifier {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert!(Identifier::is_valid("child1"));
        assert!(Identifier::is_valid("_private"));
        assert!(Identifier::is_valid("CamelCase"));
        assert!(Identifier::is_valid("snake_case_2"));
    }

    #[test]
    fn rejects_leading_digit() {
        assert!(!Identifier::is_valid("1bad"));
        assert!(!Identifier::is_valid("9"));
    }

    #[test]
    fn rejects_empty_and_punctuation() {
        assert!(!Identifier::is_valid(""));
        assert!(!Identifier::is_valid("has space"));
        assert!(!Identifier::is_valid("dash-ed"));
        assert!(!Identifier::is_valid("dotted.name"));
    }

    #[test]
    fn new_round_trips() {
        let id = Identifier::new("count").unwrap();
        assert_eq!(id.as_str(), "count");
        assert_eq!(id.to_string(), "count");
        assert!(Identifier::new("2fast").is_err());
    }
}
