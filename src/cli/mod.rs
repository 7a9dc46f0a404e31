// src/cli/mod.rs
use std::path::PathBuf;
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Unit converter and password strength toolbox", long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// File with extra common passwords, one per line
    #[arg(long, env = "COMMON_PASSWORDS_FILE")]
    pub common_passwords: Option<PathBuf>,

    /// Where to write the log
    #[arg(long, env = "LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Command to execute; starts the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_with_negative_value() {
        let args = Args::try_parse_from([
            "rust_toolbox", "convert", "-40", "Celsius", "Fahrenheit", "--category", "Temperature",
        ])
        .unwrap();
        match args.command {
            Some(CliCommand::Convert { value, from, to, category }) => {
                assert_eq!(value, "-40");
                assert_eq!(from, "Celsius");
                assert_eq!(to, "Fahrenheit");
                assert_eq!(category, "Temperature");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_generate_flags() {
        let args = Args::try_parse_from(["rust_toolbox", "--json", "generate", "-l", "20", "--no-special"]).unwrap();
        assert!(args.json);
        match args.command {
            Some(CliCommand::Generate { length, special, no_special }) => {
                assert_eq!(length, Some(20));
                assert!(!special);
                assert!(no_special);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_last_special_flag_wins() {
        let args = Args::try_parse_from(["rust_toolbox", "generate", "--no-special", "--special"]).unwrap();
        match args.command {
            Some(CliCommand::Generate { special, no_special, .. }) => {
                assert!(special);
                assert!(!no_special);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_means_menu() {
        let args = Args::try_parse_from(["rust_toolbox"]).unwrap();
        assert!(args.command.is_none());
    }
}
