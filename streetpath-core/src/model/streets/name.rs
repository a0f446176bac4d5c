use std::fmt;

use serde::{Deserialize, Serialize};

/// Name attribute of a street segment.
///
/// One physical segment may carry several official names, so the attribute
/// is either a single string or an ordered list of aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StreetName {
    Single(String),
    Aliases(Vec<String>),
}

impl StreetName {
    /// All names as a slice, in their original order
    pub fn names(&self) -> &[String] {
        match self {
            StreetName::Single(name) => std::slice::from_ref(name),
            StreetName::Aliases(names) => names,
        }
    }
}

impl fmt::Display for StreetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join(", "))
    }
}

impl From<&str> for StreetName {
    fn from(name: &str) -> Self {
        StreetName::Single(name.to_string())
    }
}

impl From<Vec<String>> for StreetName {
    fn from(names: Vec<String>) -> Self {
        StreetName::Aliases(names)
    }
}
