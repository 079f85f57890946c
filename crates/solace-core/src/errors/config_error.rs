/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("invalid pattern for topic {topic}: {pattern}: {reason}")]
    InvalidPattern {
        topic: String,
        pattern: String,
        reason: String,
    },
}
