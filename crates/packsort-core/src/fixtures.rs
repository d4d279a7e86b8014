//! Bundled example packages.
//!
//! A fixed table of named inputs with their expected categories. The console
//! form offers these as presets, and the tests run the whole table through
//! the classifier.

use crate::package::Package;
use crate::Category;

/// A named example package with its expected classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExampleCase {
    pub name: &'static str,
    pub description: &'static str,
    pub package: Package,
    pub expected: Category,
}

/// The bundled example packages, in the order the form presents them.
pub const EXAMPLE_PACKAGES: &[ExampleCase] = &[
    ExampleCase {
        name: "Small Standard Package",
        description: "Well under every threshold",
        package: Package::new(50.0, 50.0, 50.0, 10.0),
        expected: Category::Standard,
    },
    ExampleCase {
        name: "Edge Case Standard",
        description: "Just below the dimension and mass thresholds",
        package: Package::new(149.0, 10.0, 10.0, 19.9),
        expected: Category::Standard,
    },
    ExampleCase {
        name: "Bulky by Dimension",
        description: "One dimension exactly at 150 cm",
        package: Package::new(150.0, 20.0, 20.0, 15.0),
        expected: Category::Special,
    },
    ExampleCase {
        name: "Bulky by Volume",
        description: "Volume exactly at 1,000,000 cm³",
        package: Package::new(100.0, 100.0, 100.0, 10.0),
        expected: Category::Special,
    },
    ExampleCase {
        name: "Heavy Package",
        description: "Mass over 20 kg, volume well under the threshold",
        package: Package::new(30.0, 30.0, 30.0, 25.0),
        expected: Category::Special,
    },
    ExampleCase {
        name: "Rejected Package",
        description: "Bulky by volume and dimension, and heavy",
        package: Package::new(200.0, 100.0, 50.0, 30.0),
        expected: Category::Rejected,
    },
];
