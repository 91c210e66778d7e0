//! Match mode shared by the engine and its callers

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// MatchMode
// ============================================================================

/// Match mode - how query words combine
///
/// Every query word is first expanded to the indexed words it prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// A document must satisfy every distinct query word (default)
    #[default]
    All,
    /// A document must satisfy at least one query word; results are ranked
    Any,
}

impl MatchMode {
    /// Lowercase name used in configuration and parsing
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::All => "all",
            MatchMode::Any => "any",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(MatchMode::All),
            "any" => Ok(MatchMode::Any),
            _ => Err(Error::InvalidMatchMode(s.to_string())),
        }
    }
}
