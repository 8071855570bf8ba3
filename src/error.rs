use std::path::PathBuf;

pub type AppResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("I/O error: {context}")]
    Io {
        #[source]
        source: std::io::Error,
        context: String,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("catalog has no entries")]
    EmptyCatalog,
    #[error("unknown catalog entry: {id}")]
    UnknownEntry { id: String },
    #[error("duplicate catalog entry: {id}")]
    DuplicateEntry { id: String },
    #[error("failed to parse catalog {}: {message}", path.display())]
    CatalogParse { path: PathBuf, message: String },
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl From<std::io::Error> for AppError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            context: "I/O operation failed".to_string(),
        }
    }
}

impl AppError {
    pub fn io_with_context(source: std::io::Error, context: impl Into<String>) -> Self {
        Self::Io {
            source,
            context: context.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn unknown_entry(id: impl Into<String>) -> Self {
        Self::UnknownEntry { id: id.into() }
    }

    pub fn catalog_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::CatalogParse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation(message.into())
    }

    /// Errors the app can report in the status bar and keep running.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnknownEntry { .. } | Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn unknown_entry_formats_id_and_is_recoverable() {
        let err = AppError::unknown_entry("42");
        assert!(matches!(err, AppError::UnknownEntry { ref id } if id == "42"));
        assert_eq!(err.to_string(), "unknown catalog entry: 42");
        assert!(err.is_recoverable());
    }

    #[test]
    fn empty_catalog_is_fatal() {
        assert!(!AppError::EmptyCatalog.is_recoverable());
        assert_eq!(AppError::EmptyCatalog.to_string(), "catalog has no entries");
    }

    #[test]
    fn catalog_parse_error_mentions_path() {
        let err = AppError::catalog_parse("/tmp/projects.toml", "expected table");
        assert_eq!(
            err.to_string(),
            "failed to parse catalog /tmp/projects.toml: expected table"
        );
    }
}
