use crate::constants::chart::{MAX_WIDTH, MIN_WIDTH};
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Database path cannot be empty (existence is checked when connecting)
/// - Chart width must be within the supported range
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    database_path: &str,
    log_file_path: &Option<String>,
    chart_width: usize,
) -> Result<(), AppError> {
    if database_path.trim().is_empty() {
        return Err(AppError::config_error("Database path cannot be empty"));
    }

    if !(MIN_WIDTH..=MAX_WIDTH).contains(&chart_width) {
        return Err(AppError::config_error(format!(
            "Chart width must be between {MIN_WIDTH} and {MAX_WIDTH}, got {chart_width}"
        )));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

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
