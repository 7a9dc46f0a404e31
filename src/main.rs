use clap::Parser;
use std::error::Error;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

mod cli;
mod converter;
mod core;
mod exporters;
mod generators;
mod models;
mod strength;
mod utils;

use crate::cli::{Args, CliCommand, handlers};
use crate::core::config::Config;
use crate::core::session::Session;
use crate::strength::{CommonPasswordSet, PasswordStrengthMeter};

fn main() {
    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(path) = &args.common_passwords {
        config.common_passwords_file = Some(path.clone());
    }
    if let Some(path) = &args.log_file {
        config.log_file = path.clone();
    }

    init_logging(&config)?;
    log::info!("🧰 Starting rust_toolbox");
    log::debug!("Loaded config: {:?}", config);

    let meter = match &config.common_passwords_file {
        Some(path) => PasswordStrengthMeter::with_common_passwords(CommonPasswordSet::with_file(path)),
        None => PasswordStrengthMeter::new(),
    };

    match args.command {
        Some(CliCommand::Convert { value, from, to, category }) => {
            // One-shot commands get a throwaway session
            let mut session = Session::new();
            handlers::handle_convert(&mut session, &value, &from, &to, &category, args.json)?;
        }
        Some(CliCommand::Units { category }) => {
            handlers::handle_units(category.as_deref())?;
        }
        Some(CliCommand::Quick { category }) => {
            handlers::handle_quick(&category)?;
        }
        Some(CliCommand::Score { password }) => {
            let password = match password {
                Some(password) => password,
                None => inquire::Password::new("Enter your password:")
                    .with_display_mode(inquire::PasswordDisplayMode::Masked)
                    .without_confirmation()
                    .prompt()?,
            };
            handlers::handle_score(&meter, &password, args.json)?;
        }
        Some(CliCommand::Generate { length, special, no_special }) => {
            let include_special = handlers::resolve_include_special(&config, special, no_special);
            handlers::handle_generate(&config, &meter, length, include_special, args.json)?;
        }
        None => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                ctrlc::set_handler(move || {
                    log::info!("🔴 Ctrl+C received. Shutting down...");
                    should_exit.store(true, Ordering::SeqCst);
                    println!("\n👋 Goodbye!");
                    std::process::exit(0);
                })?;
            }

            cli::menu::run_cli_menu(&config, &meter, should_exit)?;
        }
    }

    log::info!("rust_toolbox finished");
    Ok(())
}

// Log to a file so the interactive prompts stay readable
fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = config.log_file.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_env("RUST_LOG")
        .format_timestamp_secs()
        .format_module_path(true)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    Ok(())
}
