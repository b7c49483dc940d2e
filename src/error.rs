use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors loading or checking locale files
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid locale JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Reference locale '{0}' not found")]
    MissingReference(String),
}

impl TranslationError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TranslationError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        TranslationError::Json {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TranslationError::MissingReference("en".to_string());
        assert!(err.to_string().contains("'en'"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = TranslationError::io(
            "locales/es.json",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        let msg = err.to_string();
        assert!(msg.contains("es.json"));
        assert!(msg.contains("gone"));
    }
}
