//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Analysis error from the API layer
    AnalysisError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::AnalysisError(msg) => write!(f, "Analysis error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<scriptstat_api::ApiError> for CliError {
    fn from(err: scriptstat_api::ApiError) -> Self {
        match err {
            scriptstat_api::ApiError::Config(msg) => CliError::ConfigError(msg),
            other => CliError::AnalysisError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("test.txt".to_string());
        assert_eq!(error.to_string(), "File not found: test.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown counting unit".to_string());
        assert_eq!(error.to_string(), "Configuration error: unknown counting unit");
    }

    #[test]
    fn test_analysis_error_display() {
        let error = CliError::AnalysisError("invalid UTF-8".to_string());
        assert_eq!(error.to_string(), "Analysis error: invalid UTF-8");
    }

    #[test]
    fn test_from_api_error() {
        let error = CliError::from(scriptstat_api::ApiError::Config("bad".to_string()));
        assert!(matches!(error, CliError::ConfigError(_)));

        let error = CliError::from(scriptstat_api::ApiError::invalid_input("not text"));
        assert_eq!(error.to_string(), "Analysis error: invalid input: not text");
    }

    #[test]
    fn test_cli_result_type_alias() {
        let success: CliResult<String> = Ok("test".to_string());
        assert!(success.is_ok());

        let failure: CliResult<String> = Err(anyhow::anyhow!("test error"));
        assert!(failure.unwrap_err().to_string().contains("test error"));
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("ファイル/test 文件.txt".to_string());
        assert_eq!(error.to_string(), "File not found: ファイル/test 文件.txt");
    }
}
