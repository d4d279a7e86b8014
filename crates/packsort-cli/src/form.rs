//! The dimension entry form.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use packsort_core::{ExampleCase, Package};
use tracing::debug;

/// Raw text collected from the four form fields.
struct FormInput {
    width: String,
    height: String,
    length: String,
    mass: String,
}

/// Runs the form once: prompt, parse, classify, render.
///
/// When an example case is given, its values pre-fill the fields and remain
/// editable before submit. Parse failures show a generic message and never
/// reach the classifier.
pub fn run(theme: &ColorfulTheme, example: Option<&'static ExampleCase>) -> dialoguer::Result<()> {
    if let Some(case) = example {
        println!("  Loaded example: {}", case.name);
    }

    let input = prompt_fields(theme, example)?;

    let Some(package) = parse_package(&input) else {
        println!(
            "{}",
            packsort_console::render_error("Please enter valid numbers for all fields")
        );
        return Ok(());
    };

    match package.analyze() {
        Ok(analysis) => {
            debug!(category = %analysis.category, volume = analysis.volume, "classified package");
            println!("{}", packsort_console::render_result(&analysis));
        }
        Err(err) => println!("{}", packsort_console::render_error(&err.to_string())),
    }

    Ok(())
}

fn prompt_fields(
    theme: &ColorfulTheme,
    example: Option<&'static ExampleCase>,
) -> dialoguer::Result<FormInput> {
    let preset = example.map(|case| case.package);

    Ok(FormInput {
        width: prompt_field(theme, "Width (cm)", preset.map(|p| p.width.to_string()))?,
        height: prompt_field(theme, "Height (cm)", preset.map(|p| p.height.to_string()))?,
        length: prompt_field(theme, "Length (cm)", preset.map(|p| p.length.to_string()))?,
        mass: prompt_field(theme, "Mass (kg)", preset.map(|p| p.mass.to_string()))?,
    })
}

fn prompt_field(
    theme: &ColorfulTheme,
    prompt: &str,
    initial: Option<String>,
) -> dialoguer::Result<String> {
    let mut input = Input::<String>::with_theme(theme).with_prompt(prompt);
    if let Some(text) = initial {
        input = input.with_initial_text(text);
    }
    input.interact_text()
}

/// Parses the four fields, or None when any field is not a number.
fn parse_package(input: &FormInput) -> Option<Package> {
    let width = input.width.trim().parse().ok()?;
    let height = input.height.trim().parse().ok()?;
    let length = input.length.trim().parse().ok()?;
    let mass = input.mass.trim().parse().ok()?;
    Some(Package::new(width, height, length, mass))
}
