// src/utils/io.rs
use std::path::PathBuf;

/// Get the application config directory
pub fn get_app_config_dir() -> Option<PathBuf> {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "rusttoolbox", "rust_toolbox") {
        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            log::debug!("Config directory {} does not exist", config_dir.display());
            return None;
        }

        Some(config_dir.to_path_buf())
    } else {
        log::error!("Could not determine config directory");
        None
    }
}
