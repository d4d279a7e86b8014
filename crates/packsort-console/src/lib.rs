//! Colorful console output for the PackSort dispatcher.
//!
//! Provides the banner, tracing setup, and the rendering of classification
//! results: result panel, package analysis block, and the sorting rule table.
//! Category styling (icon, color, handling note) lives here so the classifier
//! itself stays free of presentation concerns.

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use packsort_core::{
    Category, PackageAnalysis, DIMENSION_THRESHOLD, MASS_THRESHOLD, VOLUME_THRESHOLD,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the PackSort banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive("packsort_cli=info".parse().unwrap())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().without_time().compact())
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
 ____            _    ____             _
|  _ \ __ _  ___| | _/ ___|  ___  _ __| |_
| |_) / _` |/ __| |/ /\___ \ / _ \| '__| __|
|  __/ (_| | (__|   <  ___) | (_) | |  | |_
|_|   \__,_|\___|_|\_\|____/ \___/|_|   \__|
"#;

    let version_line = format!("        v{} - Robotics Package Dispatcher\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// Display metadata for a handling category.
///
/// A closed lookup from `Category` to what the console shows for it.
#[derive(Debug, Clone, Copy)]
pub struct CategoryStyle {
    pub icon: &'static str,
    /// One-line handling note shown under the category name.
    pub note: &'static str,
}

impl CategoryStyle {
    /// Returns the style for a category.
    pub const fn of(category: Category) -> Self {
        match category {
            Category::Standard => CategoryStyle {
                icon: "✔",
                note: "Package can be handled normally by automated systems.",
            },
            Category::Special => CategoryStyle {
                icon: "⚠",
                note: "Package requires special handling due to size or weight.",
            },
            Category::Rejected => CategoryStyle {
                icon: "✖",
                note: "Package is both bulky and heavy - cannot be processed.",
            },
        }
    }

    /// Colors a label with this category's color.
    pub fn paint(category: Category, text: &str) -> String {
        match category {
            Category::Standard => text.bright_green().bold().to_string(),
            Category::Special => text.bright_yellow().bold().to_string(),
            Category::Rejected => text.bright_red().bold().to_string(),
        }
    }
}

/// Renders the result panel for a classified package.
pub fn render_result(analysis: &PackageAnalysis) -> String {
    let category = analysis.category;
    let style = CategoryStyle::of(category);

    let mut output = format!(
        "\n  {} {}\n  {}\n",
        CategoryStyle::paint(category, style.icon),
        CategoryStyle::paint(category, category.name()),
        style.note.bright_black()
    );

    output.push_str(&format!(
        "\n  {}\n",
        "Package Analysis".bright_white().bold()
    ));
    output.push_str(&format!(
        "    Volume:   {} cm³\n",
        format_quantity(analysis.volume).bright_yellow()
    ));
    output.push_str(&format!(
        "    Is Bulky: {}\n",
        format_flag(analysis.is_bulky)
    ));
    output.push_str(&format!(
        "    Is Heavy: {}\n",
        format_flag(analysis.is_heavy)
    ));

    output
}

/// Renders an input error the way the form shows it.
pub fn render_error(message: &str) -> String {
    format!("  {} {}", "✖".bright_red().bold(), message.bright_red())
}

/// Renders the static sorting rule table from the threshold constants.
pub fn render_rules() -> String {
    let mut output = format!("\n  {}\n", "Sorting Rules".bright_white().bold());
    output.push_str(&format!(
        "    {} Volume ≥ {} cm³ OR any dimension ≥ {} cm\n",
        "Bulky:".bright_cyan(),
        format_quantity(VOLUME_THRESHOLD).bright_yellow(),
        format_quantity(DIMENSION_THRESHOLD).bright_yellow()
    ));
    output.push_str(&format!(
        "    {} Mass ≥ {} kg\n",
        "Heavy:".bright_cyan(),
        format_quantity(MASS_THRESHOLD).bright_yellow()
    ));
    for category in Category::ALL {
        output.push_str(&format!(
            "    {} {}\n",
            CategoryStyle::paint(category, &format!("{}:", category.name())),
            rule_line(category)
        ));
    }
    output
}

const fn rule_line(category: Category) -> &'static str {
    match category {
        Category::Standard => "Neither bulky nor heavy",
        Category::Special => "Either bulky or heavy",
        Category::Rejected => "Both bulky AND heavy",
    }
}

fn format_flag(value: bool) -> String {
    if value {
        "Yes".bright_yellow().to_string()
    } else {
        "No".bright_green().to_string()
    }
}

/// Formats a quantity with thousands separators, keeping up to two decimals
/// when the value is not integral.
pub fn format_quantity(value: f64) -> String {
    let whole = value.trunc() as i64;
    let grouped = whole.to_formatted_string(&Locale::en);
    let fraction = value.fract();
    if fraction == 0.0 {
        grouped
    } else {
        let decimals = format!("{:.2}", fraction);
        // "0.25" -> ".25"
        format!("{}{}", grouped, &decimals[1..])
    }
}
