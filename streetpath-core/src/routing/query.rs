use std::fmt;

use crate::{Error, StreetEdge, StreetName};

/// Case-insensitive substring filter over street names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetQuery {
    raw: String,
    needle: String,
}

impl StreetQuery {
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or only whitespace.
    /// Surrounding whitespace is kept and takes part in matching.
    pub fn new(pattern: &str) -> Result<Self, Error> {
        if pattern.trim().is_empty() {
            return Err(Error::InvalidData(
                "Street query must not be empty".to_string(),
            ));
        }
        Ok(Self {
            raw: pattern.to_string(),
            needle: pattern.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True if any of the names contains the pattern
    pub fn matches(&self, name: &StreetName) -> bool {
        name.names()
            .iter()
            .any(|candidate| candidate.to_lowercase().contains(&self.needle))
    }

    /// Unnamed edges never match
    pub fn matches_edge(&self, edge: &StreetEdge) -> bool {
        edge.name.as_ref().is_some_and(|name| self.matches(name))
    }
}

impl fmt::Display for StreetQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
