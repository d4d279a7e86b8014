//! The classification rules.
//!
//! A package is *bulky* when its volume or any single dimension meets or
//! exceeds its threshold, and *heavy* when its mass does. The two predicates
//! map to a category: both means rejected, exactly one means special, neither
//! means standard. All comparisons are inclusive (`>=`).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PackSortError, Result};
use crate::package::Package;
use crate::Category;

/// Volume at or above this is bulky, in cm³.
pub const VOLUME_THRESHOLD: f64 = 1_000_000.0;

/// Any single dimension at or above this is bulky, in cm.
pub const DIMENSION_THRESHOLD: f64 = 150.0;

/// Mass at or above this is heavy, in kg.
pub const MASS_THRESHOLD: f64 = 20.0;

/// Derived metrics from classifying a single package.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackageAnalysis {
    /// Volume in cm³.
    pub volume: f64,
    pub is_bulky: bool,
    pub is_heavy: bool,
    pub category: Category,
}

/// Classifies a package into a handling category.
///
/// Dimensions are in centimeters, mass in kilograms. All four inputs must be
/// finite and strictly positive, otherwise [`PackSortError::InvalidInput`] is
/// returned and no category is produced.
///
/// # Examples
///
/// ```
/// use packsort_core::{classify, Category};
///
/// assert_eq!(classify(50.0, 50.0, 50.0, 10.0)?, Category::Standard);
/// assert_eq!(classify(200.0, 100.0, 50.0, 30.0)?, Category::Rejected);
/// # packsort_core::Result::Ok(())
/// ```
pub fn classify(width: f64, height: f64, length: f64, mass: f64) -> Result<Category> {
    analyze(&Package::new(width, height, length, mass)).map(|analysis| analysis.category)
}

/// Classifies a package, returning the derived metrics alongside the category.
pub fn analyze(package: &Package) -> Result<PackageAnalysis> {
    validate(package)?;

    let volume = package.volume();
    let is_bulky = volume >= VOLUME_THRESHOLD
        || package.width >= DIMENSION_THRESHOLD
        || package.height >= DIMENSION_THRESHOLD
        || package.length >= DIMENSION_THRESHOLD;
    let is_heavy = package.mass >= MASS_THRESHOLD;

    let category = match (is_bulky, is_heavy) {
        (true, true) => Category::Rejected,
        (true, false) | (false, true) => Category::Special,
        (false, false) => Category::Standard,
    };

    Ok(PackageAnalysis {
        volume,
        is_bulky,
        is_heavy,
        category,
    })
}

fn validate(package: &Package) -> Result<()> {
    let fields = [
        ("width", package.width),
        ("height", package.height),
        ("length", package.length),
        ("mass", package.mass),
    ];

    for (name, value) in fields {
        if !value.is_finite() {
            return Err(PackSortError::InvalidInput(format!(
                "{name} must be a finite number, got {value}"
            )));
        }
        if value <= 0.0 {
            return Err(PackSortError::InvalidInput(format!(
                "{name} must be positive, got {value}"
            )));
        }
    }

    Ok(())
}
