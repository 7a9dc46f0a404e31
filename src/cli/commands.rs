// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Convert a value between two units
    Convert {
        /// Value to convert
        #[arg(required = true, allow_hyphen_values = true)]
        value: String,

        /// Unit to convert from (e.g. "Mile")
        #[arg(required = true)]
        from: String,

        /// Unit to convert to (e.g. "Kilometer")
        #[arg(required = true)]
        to: String,

        /// Measurement category
        #[arg(long, short, default_value = "Length")]
        category: String,
    },

    /// List categories and their units
    Units {
        /// Only show this category
        #[arg(long, short)]
        category: Option<String>,
    },

    /// Run the preset conversions for a category
    Quick {
        /// Measurement category
        #[arg(required = true)]
        category: String,
    },

    /// Check how strong a password is
    Score {
        /// Password to check; prompted for when omitted
        password: Option<String>,
    },

    /// Generate a password
    Generate {
        /// Password length (values below 8 fall back to 16)
        #[arg(long, short)]
        length: Option<usize>,

        /// Include special characters even when disabled in the config
        #[arg(long, overrides_with = "no_special")]
        special: bool,

        /// Leave out special characters
        #[arg(long, overrides_with = "special")]
        no_special: bool,
    },
}
