//! Generation mode
//!
//! Test TINs relax the leading digit rules: they may start with 0 and may
//! use 0 as the repeated digit.

use serde::{Deserialize, Serialize};

/// Whether a TIN is generated for production-like use or for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TinKind {
    /// First digit must not be 0
    #[default]
    Regular,
    /// Any digit may lead
    Test,
}

impl TinKind {
    /// True for [`TinKind::Test`]
    #[must_use]
    pub const fn is_test(self) -> bool {
        matches!(self, Self::Test)
    }
}

impl From<bool> for TinKind {
    fn from(is_test: bool) -> Self {
        if is_test { Self::Test } else { Self::Regular }
    }
}

impl std::fmt::Display for TinKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regular => write!(f, "regular"),
            Self::Test => write!(f, "test"),
        }
    }
}

impl std::str::FromStr for TinKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "regular" => Ok(Self::Regular),
            "test" => Ok(Self::Test),
            _ => Err(format!("Invalid TIN kind: {s}. Use: regular, test")),
        }
    }
}
