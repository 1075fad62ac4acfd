use crate::constants::APP_DIR_NAME;
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_DIR_NAME: &str = "logs";

/// Per-user application directory, or `./liga_futbol` when the platform
/// has no config directory.
pub fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

pub fn get_config_path() -> String {
    app_dir()
        .join(CONFIG_FILE_NAME)
        .to_string_lossy()
        .to_string()
}

pub fn get_log_dir_path() -> String {
    app_dir().join(LOG_DIR_NAME).to_string_lossy().to_string()
}
