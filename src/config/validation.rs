use crate::constants::MAX_NAME_COLUMN_WIDTH;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - League title cannot be blank
/// - Name column width must be between 1 and `MAX_NAME_COLUMN_WIDTH`
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    league_title: &str,
    name_column_width: usize,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if league_title.trim().is_empty() {
        return Err(AppError::config_error("League title cannot be empty"));
    }

    if name_column_width == 0 || name_column_width > MAX_NAME_COLUMN_WIDTH {
        return Err(AppError::config_error(format!(
            "Name column width must be between 1 and {MAX_NAME_COLUMN_WIDTH}, got {name_column_width}"
        )));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Try to create the directory to validate the path
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
