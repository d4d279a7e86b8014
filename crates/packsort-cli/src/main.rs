//! PackSort interactive form.
//!
//! Collects four numeric inputs (width, height, length, mass), runs the
//! classifier, and shows the category with its derived metrics. Example
//! packages can be loaded to pre-fill the form.

mod form;

use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use owo_colors::OwoColorize;
use packsort_core::EXAMPLE_PACKAGES;

fn main() -> dialoguer::Result<()> {
    packsort_console::init();

    let theme = ColorfulTheme::default();
    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&[
                "Classify a package",
                "Load an example package",
                "Show sorting rules",
                "Quit",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => form::run(&theme, None)?,
            1 => {
                if let Some(case) = pick_example(&theme)? {
                    form::run(&theme, Some(case))?;
                }
            }
            2 => println!("{}", packsort_console::render_rules()),
            _ => break,
        }
    }

    println!("{}", "Goodbye!".bright_cyan());
    Ok(())
}

/// Lets the user pick one of the bundled example packages.
fn pick_example(
    theme: &ColorfulTheme,
) -> dialoguer::Result<Option<&'static packsort_core::ExampleCase>> {
    let labels: Vec<String> = EXAMPLE_PACKAGES
        .iter()
        .map(|case| format!("{} - {}", case.name, case.description))
        .collect();

    let picked = Select::with_theme(theme)
        .with_prompt("Example packages")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(picked.map(|i| &EXAMPLE_PACKAGES[i]))
}
