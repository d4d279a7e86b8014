//! Handling categories for classified packages.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The handling category a package is dispatched to.
///
/// This is a closed enumeration; no other values are possible.
///
/// # Examples
///
/// ```
/// use packsort_core::Category;
///
/// assert_eq!(Category::Rejected.to_string(), "REJECTED");
/// assert_eq!("SPECIAL".parse::<Category>().unwrap(), Category::Special);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Category {
    /// Neither bulky nor heavy; handled normally by automated systems.
    Standard,
    /// Bulky or heavy, but not both; requires special handling.
    Special,
    /// Both bulky and heavy; cannot be processed.
    Rejected,
}

impl Category {
    /// All categories, in dispatch-stack order.
    pub const ALL: [Category; 3] = [Category::Standard, Category::Special, Category::Rejected];

    /// The stack name as used on the sorting floor.
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Standard => "STANDARD",
            Category::Special => "SPECIAL",
            Category::Rejected => "REJECTED",
        }
    }

    /// Returns true when the package can enter an automated stack.
    pub const fn is_processable(&self) -> bool {
        !matches!(self, Category::Rejected)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "STANDARD" => Ok(Category::Standard),
            "SPECIAL" => Ok(Category::Special),
            "REJECTED" => Ok(Category::Rejected),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}
