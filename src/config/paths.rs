use std::path::PathBuf;

const APP_DIR: &str = "goalscope";

/// `<platform config dir>/goalscope`, or `./goalscope` when the platform has
/// no config directory
fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Location of `config.toml`
pub fn get_config_path() -> String {
    app_dir().join("config.toml").to_string_lossy().into_owned()
}

/// Directory for the rolling log files
pub fn get_log_dir_path() -> String {
    app_dir().join("logs").to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_paths_share_app_directory() {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        let config_parent = Path::new(&config_path).parent().unwrap();
        let log_parent = Path::new(&log_dir).parent().unwrap();
        assert_eq!(config_parent, log_parent);
        assert!(config_parent.ends_with(APP_DIR));
        assert!(config_path.ends_with("config.toml"));
        assert!(log_dir.ends_with("logs"));
    }
}
