use std::fmt;

use serde::{Deserialize, Serialize};

/// A documentation domain with its own API index, e.g. `hack` or `hsl`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product(String);

impl Product {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Product {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Product {
    fn from(name: String) -> Self {
        Self(name)
    }
}
