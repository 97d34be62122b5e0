use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Error: File '{}' not found.", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Error reading file: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl ChatError {
    /// Classify an I/O failure on the transcript source.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ChatError::SourceNotFound { path }
        } else {
            ChatError::SourceRead { path, source }
        }
    }

    /// Whether this error means the transcript could not be read at all.
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            ChatError::SourceNotFound { .. } | ChatError::SourceRead { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ChatError::from_io(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, ChatError::SourceNotFound { .. }));
        assert_eq!(err.to_string(), "Error: File 'missing.txt' not found.");
    }

    #[test]
    fn test_read_error_message() {
        let err = ChatError::from_io(
            "log.txt",
            std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        );
        assert!(matches!(err, ChatError::SourceRead { .. }));
        assert_eq!(
            err.to_string(),
            "Error reading file: stream did not contain valid UTF-8"
        );
        assert!(err.is_source_error());
    }

    #[test]
    fn test_config_error_is_not_source_error() {
        assert!(!ChatError::Config("bad".into()).is_source_error());
    }
}
