use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Goal XML errors
    #[error("Malformed goal XML at byte {position}: {message}")]
    XmlParse { message: String, position: u64 },

    // Database errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Match not found: match_api_id={match_id}")]
    MatchNotFound { match_id: i64 },

    #[error("Identifier in column '{column}' is not an integer: {value:?}")]
    InvalidIdentifier { column: String, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a goal XML parse error at the given byte position
    pub fn xml_parse(message: impl Into<String>, position: u64) -> Self {
        Self::XmlParse {
            message: message.into(),
            position,
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a match not found error
    pub fn match_not_found(match_id: i64) -> Self {
        Self::MatchNotFound { match_id }
    }

    /// Create an error for an identifier that cannot be coerced to an integer
    pub fn invalid_identifier(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Check if error indicates data not found (business logic, not technical error)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::MatchNotFound { .. } | AppError::Database(sqlx::Error::RowNotFound)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_parse_helper() {
        let error = AppError::xml_parse("unexpected end of input", 42);
        assert!(matches!(error, AppError::XmlParse { position: 42, .. }));
        assert_eq!(
            error.to_string(),
            "Malformed goal XML at byte 42: unexpected end of input"
        );
    }

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert!(matches!(error, AppError::LogSetup(_)));
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_match_not_found_helper() {
        let error = AppError::match_not_found(489_042);
        assert_eq!(error.to_string(), "Match not found: match_api_id=489042");
    }

    #[test]
    fn test_invalid_identifier_helper() {
        let error = AppError::invalid_identifier("player_id", "abc");
        assert_eq!(
            error.to_string(),
            "Identifier in column 'player_id' is not an integer: \"abc\""
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(AppError::match_not_found(1).is_not_found());
        assert!(AppError::Database(sqlx::Error::RowNotFound).is_not_found());

        assert!(!AppError::xml_parse("bad", 0).is_not_found());
        assert!(!AppError::config_error("message").is_not_found());
        assert!(!AppError::invalid_identifier("team_id", "x").is_not_found());
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_error: AppError = json_error.into();
        assert!(matches!(app_error, AppError::Json(_)));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let toml_error = toml::from_str::<serde_json::Value>("invalid = [toml").unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }
}
