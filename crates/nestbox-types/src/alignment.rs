//! Child arrangement policy.

use serde::Deserialize;

/// How a box arranges its own children relative to one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Children sit side by side, left to right.
    #[serde(alias = "h")]
    Horizontal,
    /// Children stack top to bottom.
    #[serde(alias = "v")]
    Vertical,
}

impl Alignment {
    /// The other alignment.
    pub fn flipped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}
