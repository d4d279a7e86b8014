//! Sorting Line Demo
//!
//! Runs the bundled example packages through the classifier and prints the
//! dispatch decision for each, the way a sorting line would batch a tray of
//! incoming parcels.

use owo_colors::OwoColorize;
use packsort_console::{format_quantity, CategoryStyle};
use packsort_core::{PackSortError, EXAMPLE_PACKAGES};

fn main() -> Result<(), PackSortError> {
    packsort_console::init();

    println!(
        "  {:<26} {:>12} {:>7} {:>7}  {}",
        "Package".bright_white().bold(),
        "Volume cm³",
        "Bulky",
        "Heavy",
        "Category".bright_white().bold()
    );
    println!("  {}", "-".repeat(70));

    for case in EXAMPLE_PACKAGES {
        let analysis = case.package.analyze()?;
        assert_eq!(analysis.category, case.expected);

        println!(
            "  {:<26} {:>12} {:>7} {:>7}  {} {}",
            case.name,
            format_quantity(analysis.volume),
            if analysis.is_bulky { "yes" } else { "no" },
            if analysis.is_heavy { "yes" } else { "no" },
            CategoryStyle::paint(analysis.category, CategoryStyle::of(analysis.category).icon),
            CategoryStyle::paint(analysis.category, analysis.category.name()),
        );
    }

    println!("{}", packsort_console::render_rules());
    Ok(())
}
