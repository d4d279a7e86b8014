//! PackSort Core - Classification rules for the package dispatcher
//!
//! This crate provides the fundamental pieces of PackSort:
//! - The `Package` value type and its derived metrics
//! - The closed `Category` enumeration for handling decisions
//! - The `classify`/`analyze` entry points with input validation
//! - Bundled example packages usable as fixtures

pub mod category;
pub mod classify;
pub mod error;
pub mod fixtures;
pub mod package;

#[cfg(test)]
mod classify_tests;

pub use category::Category;
pub use classify::{
    classify, PackageAnalysis, DIMENSION_THRESHOLD, MASS_THRESHOLD, VOLUME_THRESHOLD,
};
pub use error::{PackSortError, Result};
pub use fixtures::{ExampleCase, EXAMPLE_PACKAGES};
pub use package::Package;
