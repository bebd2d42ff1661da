use thiserror::Error;

/// Application-level errors using thiserror for structured error handling.
///
/// Nothing in the simulated pipelines can fail; these cover the edges where
/// the demos touch the outside world (display regions, config, persistence).

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("missing view target: {target}")]
    MissingTarget { target: &'static str },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to save configuration to {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to create config directory: {path}")]
    DirectoryCreationFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No platform config directory available")]
    NoConfigDir,
}

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Failed to read {key} from {path}")]
    ReadFailed {
        key: &'static str,
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to write {key} to {path}")]
    WriteFailed {
        key: &'static str,
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Unknown stored value for {key}: {value}")]
    UnknownValue { key: &'static str, value: String },
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = ViewError::MissingTarget { target: "app-root" };
        assert_eq!(err.to_string(), "missing view target: app-root");

        let err = ConfigError::Invalid("stage_interval_ms must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: stage_interval_ms must be > 0"
        );
    }

    #[test]
    fn test_error_source_chain() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err = PersistError::WriteFailed {
            key: "assistantDriveMode",
            path: "/test/assistant.json".to_string(),
            source: Box::new(io_err),
        };

        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "Failed to write assistantDriveMode to /test/assistant.json"
        );
    }
}
