//! Error types for the playground core

use thiserror::Error;

/// Result type alias using the playground error
pub type Result<T> = std::result::Result<T, PlaygroundError>;

/// Authoring and configuration errors.
///
/// Invalid user input is never an error: the validation engine reports it
/// as a `FormState` instead.
#[derive(Error, Debug)]
pub enum PlaygroundError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid pattern for field '{field_id}': {source}")]
    InvalidPattern {
        field_id: String,
        #[source]
        source: regex::Error,
    },

    #[error("Duplicate field id '{0}' in form definition")]
    DuplicateField(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_field_message() {
        let err = PlaygroundError::DuplicateField("email".to_string());
        assert_eq!(
            err.to_string(),
            "Duplicate field id 'email' in form definition"
        );
    }

    #[test]
    fn test_unknown_route_message() {
        let err = PlaygroundError::UnknownRoute("/nope/".to_string());
        assert_eq!(err.to_string(), "Unknown route: /nope/");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PlaygroundError = io.into();
        assert!(matches!(err, PlaygroundError::Io(_)));
    }
}
