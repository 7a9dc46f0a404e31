// src/cli/menu.rs
use inquire::{Confirm, CustomType, Password, Select, Text};
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cli::handlers;
use crate::converter::{quick_conversions, Category};
use crate::core::config::Config;
use crate::core::session::{evaluate_favorite, Session};
use crate::exporters::CsvExporter;
use crate::models::Favorite;
use crate::strength::PasswordStrengthMeter;
use crate::utils::format_general;

pub fn run_cli_menu(
    config: &Config,
    meter: &PasswordStrengthMeter,
    should_exit: Arc<AtomicBool>,
) -> Result<(), Box<dyn Error>> {
    println!("🦀🧰 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║          🦀 RUST TOOLBOX             ║");
    println!("╚══════════════════════════════════════╝");

    // History and favorites live only as long as this menu
    let mut session = Session::new();

    // Main application loop
    while !should_exit.load(Ordering::SeqCst) {
        let options = vec![
            "🔄  Unit converter",
            "🔒  Password strength meter",
            "🚪  Exit",
        ];

        let choice = Select::new("Choose an option:", options).prompt()?;

        match choice {
            "🔄  Unit converter" => converter_menu(config, &mut session, &should_exit)?,
            "🔒  Password strength meter" => password_menu(config, meter, &should_exit)?,
            "🚪  Exit" => {
                println!("👋 Goodbye!");
                break;
            }
            _ => {}
        }
    }

    Ok(())
}

fn converter_menu(
    config: &Config,
    session: &mut Session,
    should_exit: &AtomicBool,
) -> Result<(), Box<dyn Error>> {
    let category_names: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{} {}", c.icon(), c.name()))
        .collect();
    let selection = Select::new("Select Category:", category_names).raw_prompt()?;
    let category = Category::ALL[selection.index];

    while !should_exit.load(Ordering::SeqCst) {
        let options = vec![
            "🔁  Convert",
            "⚡  Quick conversions",
            "📖  View conversion formula",
            "📋  Recent conversions",
            "⭐  Favorite conversions",
            "📥  Export history to CSV",
            "🗑️  Clear history",
            "⬅️  Back",
        ];

        let choice = Select::new(&format!("{} {}:", category.icon(), category), options).prompt()?;

        match choice {
            "🔁  Convert" => {
                let units = category.units();
                let from_unit = Select::new("From:", units.clone()).prompt()?;
                let to_unit = Select::new("To:", units).prompt()?;
                let value = Text::new("Enter Value:").with_default("1.0").prompt()?;

                match handlers::handle_convert(session, &value, from_unit, to_unit, category.name(), false) {
                    Ok(record) => {
                        let save = Confirm::new("Save this conversion as a favorite?")
                            .with_default(false)
                            .prompt()?;
                        if save {
                            let favorite = Favorite {
                                category: record.category.clone(),
                                from_unit: record.from_unit.clone(),
                                to_unit: record.to_unit.clone(),
                                value: record.from_value,
                            };
                            if session.add_favorite(favorite) {
                                println!("✅ Added to favorites!");
                            } else {
                                println!("❗ Already in favorites.");
                            }
                        }
                    }
                    Err(e) => {
                        log::warn!("Conversion failed: {}", e);
                        println!("❌ Conversion error: {}", e);
                    }
                }
            }
            "⚡  Quick conversions" => {
                let presets = quick_conversions(category);
                if presets.is_empty() {
                    println!("❗ No quick conversions for {}.", category);
                    continue;
                }

                let labels: Vec<&str> = presets.iter().map(|p| p.label).collect();
                let label = Select::new("Quick conversion:", labels).prompt()?;
                if let Some(preset) = presets.iter().find(|p| p.label == label) {
                    match preset.run(category) {
                        Ok(result) => println!("✅ {:.2} {}", result, preset.to_unit),
                        Err(e) => println!("❌ Conversion error: {}", e),
                    }
                }
            }
            "📖  View conversion formula" => {
                println!("\n{}\n", category.formula());
            }
            "📋  Recent conversions" => {
                if session.history().is_empty() {
                    println!("No conversions yet!");
                    continue;
                }
                println!("\n📋 Recent Conversions");
                for record in session.recent(config.history_display_limit) {
                    handlers::print_record(record);
                }
                println!();
            }
            "⭐  Favorite conversions" => favorites_menu(session)?,
            "📥  Export history to CSV" => {
                if session.history().is_empty() {
                    println!("❗ Nothing to export yet.");
                    continue;
                }

                let default_path = config.history_export_path.display().to_string();
                let path = Text::new("Export to:").with_default(&default_path).prompt()?;

                match CsvExporter::new().export(std::path::Path::new(&path), session.history()) {
                    Ok(count) => println!("✅ Exported {} conversions to {}", count, path),
                    Err(e) => {
                        log::error!("History export failed: {}", e);
                        println!("❌ Failed to export history: {}", e);
                    }
                }
            }
            "🗑️  Clear history" => {
                session.clear_history();
                println!("✅ History cleared!");
            }
            "⬅️  Back" => break,
            _ => {}
        }
    }

    Ok(())
}

fn favorites_menu(session: &mut Session) -> Result<(), Box<dyn Error>> {
    if session.favorites().is_empty() {
        println!("No favorites saved yet!");
        return Ok(());
    }

    let display: Vec<String> = session
        .favorites()
        .iter()
        .map(|fav| {
            let icon = Category::from_name(&fav.category).map(|c| c.icon()).unwrap_or("");
            match evaluate_favorite(fav) {
                Ok(result) => format!(
                    "{} {}: {} {} → {} {}",
                    icon,
                    fav.category,
                    format_general(fav.value, 6),
                    fav.from_unit,
                    format_general(result, 6),
                    fav.to_unit
                ),
                Err(e) => format!("{} {}: {}", icon, fav.category, e),
            }
        })
        .collect();

    for line in &display {
        println!("  {}", line);
    }

    let remove = Confirm::new("Delete a favorite?").with_default(false).prompt()?;
    if remove {
        let selection = Select::new("Select favorite to delete:", display).raw_prompt()?;
        if session.remove_favorite(selection.index).is_some() {
            println!("🗑️ Favorite removed.");
        }
    }

    Ok(())
}

fn password_menu(
    config: &Config,
    meter: &PasswordStrengthMeter,
    should_exit: &AtomicBool,
) -> Result<(), Box<dyn Error>> {
    while !should_exit.load(Ordering::SeqCst) {
        let options = vec![
            "🔍  Check password strength",
            "🎲  Generate strong password",
            "📋  Password requirements",
            "⬅️  Back",
        ];

        let choice = Select::new("Password tools:", options).prompt()?;

        match choice {
            "🔍  Check password strength" => {
                let password = Password::new("Enter your password:")
                    .with_display_mode(inquire::PasswordDisplayMode::Masked)
                    .without_confirmation()
                    .prompt()?;
                handlers::handle_score(meter, &password, false)?;
                println!();
            }
            "🎲  Generate strong password" => {
                let length = CustomType::<usize>::new("Password Length:")
                    .with_default(config.default_password_length)
                    .with_help_message("Longer passwords are more secure. We recommend at least 12 characters.")
                    .prompt()?;
                let include_special = Confirm::new("Include special characters (!@#$%^&*)?")
                    .with_default(config.default_include_special)
                    .prompt()?;

                let generated = handlers::handle_generate(config, meter, Some(length), include_special, false)?;

                let check = Confirm::new("Show the full analysis?").with_default(false).prompt()?;
                if check {
                    handlers::handle_score(meter, &generated, false)?;
                }
            }
            "📋  Password requirements" => {
                println!("\n📋 Password Requirements");
                println!("  • Minimum 8 characters");
                println!("  • Mix of uppercase & lowercase");
                println!("  • At least one number");
                println!("  • Special characters (!@#$%^&*)\n");
            }
            "⬅️  Back" => break,
            _ => {}
        }
    }

    Ok(())
}
