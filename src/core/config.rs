// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

// Runtime configuration for the toolbox shell
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_include_special: bool,

    // Password Scoring
    pub common_passwords_file: Option<PathBuf>,

    // Conversion History
    pub history_display_limit: usize,
    pub history_export_path: PathBuf,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            default_include_special: true,

            // Password Scoring
            common_passwords_file: None,

            // Conversion History
            history_display_limit: 5,
            history_export_path: PathBuf::from("./conversion_history.csv"),

            // Logging
            log_level: LevelFilter::Info,
            log_file: PathBuf::from("./rust_toolbox.log"),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Self::load_from(|key| env::var(key).ok());

        // Fall back to a list kept next to the other app settings
        if config.common_passwords_file.is_none() {
            config.common_passwords_file = crate::utils::get_app_config_dir()
                .map(|dir| dir.join("common_passwords.txt"))
                .filter(|path| path.exists());
        }

        config
    }

    // Build a configuration from any key lookup; unparsable values keep defaults
    pub fn load_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => log::warn!("Invalid DEFAULT_PASSWORD_LENGTH '{}', using default", val),
            }
        }

        if let Some(val) = lookup("DEFAULT_INCLUDE_SPECIAL") {
            match val.parse() {
                Ok(include) => config.default_include_special = include,
                Err(_) => log::warn!("Invalid DEFAULT_INCLUDE_SPECIAL '{}', using default", val),
            }
        }

        // Password Scoring
        if let Some(path) = lookup("COMMON_PASSWORDS_FILE") {
            if !path.trim().is_empty() {
                config.common_passwords_file = Some(PathBuf::from(path));
            }
        }

        // Conversion History
        if let Some(val) = lookup("HISTORY_DISPLAY_LIMIT") {
            match val.parse() {
                Ok(limit) => config.history_display_limit = limit,
                Err(_) => log::warn!("Invalid HISTORY_DISPLAY_LIMIT '{}', using default", val),
            }
        }

        if let Some(path) = lookup("HISTORY_EXPORT_PATH") {
            config.history_export_path = PathBuf::from(path);
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = PathBuf::from(file);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::load_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = load(&[]);
        assert_eq!(config.default_password_length, 16);
        assert!(config.default_include_special);
        assert!(config.common_passwords_file.is_none());
        assert_eq!(config.history_display_limit, 5);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("DEFAULT_PASSWORD_LENGTH", "24"),
            ("DEFAULT_INCLUDE_SPECIAL", "false"),
            ("COMMON_PASSWORDS_FILE", "/tmp/common.txt"),
            ("HISTORY_DISPLAY_LIMIT", "10"),
            ("HISTORY_EXPORT_PATH", "out.csv"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_FILE", "toolbox.log"),
        ]);
        assert_eq!(config.default_password_length, 24);
        assert!(!config.default_include_special);
        assert_eq!(config.common_passwords_file, Some(PathBuf::from("/tmp/common.txt")));
        assert_eq!(config.history_display_limit, 10);
        assert_eq!(config.history_export_path, PathBuf::from("out.csv"));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, PathBuf::from("toolbox.log"));
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = load(&[
            ("DEFAULT_PASSWORD_LENGTH", "long"),
            ("DEFAULT_INCLUDE_SPECIAL", "maybe"),
            ("LOG_LEVEL", "verbose"),
        ]);
        assert_eq!(config.default_password_length, 16);
        assert!(config.default_include_special);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
