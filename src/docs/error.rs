//! Error types for the docs module
//!
//! Unresolvable lookups are the only fatal condition: a caller asking for a
//! class or member that does not exist in the descriptor set made a
//! programming error. Everything else (missing types, unreadable defaults,
//! malformed comments) degrades to partial output and never surfaces here.

use thiserror::Error;

/// Main error type for docs operations
#[derive(Error, Debug)]
pub enum DocsError {
    /// IO errors (descriptor file access)
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing/serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Class not found in the descriptor set
    #[error("Class '{name}' not found")]
    ClassNotFound { name: String },

    /// Member not found on the given class
    #[error("Member '{member}' not found on class '{class}'")]
    MemberNotFound { member: String, class: String },

    /// Free function not found in the descriptor set
    #[error("Function '{name}' not found")]
    FunctionNotFound { name: String },
}

/// Result type alias for docs operations
pub type DocsResult<T> = Result<T, DocsError>;

/// Helper trait for converting IO errors with context
pub trait IoContext<T> {
    fn with_io_context(self, message: &str) -> DocsResult<T>;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn with_io_context(self, message: &str) -> DocsResult<T> {
        self.map_err(|e| DocsError::Io {
            message: message.to_string(),
            source: e,
        })
    }
}

/// Helper trait for converting JSON errors with context
pub trait JsonContext<T> {
    fn with_json_context(self, message: &str) -> DocsResult<T>;
}

impl<T> JsonContext<T> for Result<T, serde_json::Error> {
    fn with_json_context(self, message: &str) -> DocsResult<T> {
        self.map_err(|e| DocsError::Json {
            message: message.to_string(),
            source: e,
        })
    }
}
