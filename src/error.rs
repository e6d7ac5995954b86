use thiserror::Error;

use crate::eql::SyntaxError;

/// Unified error type for semver-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Configuration syntax error: {0}")]
    ConfigSyntax(#[from] SyntaxError),

    #[error("Invalid semver component '{value}' for rule '{rule}'")]
    InvalidSeverity { rule: String, value: String },

    #[error("Value of '{key}' cannot be written as a quoted string")]
    Unencodable { key: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Repository does not have a commit")]
    NoCommits,

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in semver-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        ReleaseError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        ReleaseError::Remote(msg.into())
    }

    pub fn invalid_severity(rule: impl Into<String>, value: impl Into<String>) -> Self {
        ReleaseError::InvalidSeverity {
            rule: rule.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_syntax_error_carries_position() {
        let err: ReleaseError = SyntaxError::UnexpectedEquals { position: 2 }.into();
        assert_eq!(
            err.to_string(),
            "Configuration syntax error: unexpected '=' at position 2"
        );
    }

    #[test]
    fn test_unterminated_quote_message() {
        let err: ReleaseError = SyntaxError::UnterminatedQuote.into();
        assert!(err.to_string().contains("unterminated quoted string"));
    }

    #[test]
    fn test_invalid_severity_names_rule_and_value() {
        let err = ReleaseError::invalid_severity("feat", "huge");
        let msg = err.to_string();
        assert!(msg.contains("'huge'"));
        assert!(msg.contains("'feat'"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseError::config("x"), "Configuration error"),
            (ReleaseError::version("x"), "Version parsing error"),
            (ReleaseError::tag("x"), "Tag error"),
            (ReleaseError::remote("x"), "Remote operation failed"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
