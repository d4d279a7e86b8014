//! The package value type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::classify::{self, PackageAnalysis};
use crate::error::Result;
use crate::Category;

/// A physical package described by its dimensions and mass.
///
/// Dimensions are in centimeters, mass in kilograms. A `Package` is a
/// transient value with no identity beyond a single classification call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Package {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub mass: f64,
}

impl Package {
    /// Creates a new package. Validation happens at classification time.
    pub const fn new(width: f64, height: f64, length: f64, mass: f64) -> Self {
        Package {
            width,
            height,
            length,
            mass,
        }
    }

    /// Volume in cubic centimeters.
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }

    /// Classifies this package into a handling category.
    pub fn classify(&self) -> Result<Category> {
        classify::classify(self.width, self.height, self.length, self.mass)
    }

    /// Classifies this package and returns the derived metrics alongside
    /// the category.
    pub fn analyze(&self) -> Result<PackageAnalysis> {
        classify::analyze(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume() {
        let package = Package::new(10.0, 20.0, 30.0, 5.0);
        assert_eq!(package.volume(), 6000.0);
    }

    #[test]
    fn test_classify_delegates() {
        let package = Package::new(50.0, 50.0, 50.0, 10.0);
        assert_eq!(package.classify().unwrap(), Category::Standard);
    }
}
