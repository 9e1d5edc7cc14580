// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ClampError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ClampError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),

    #[error("Output error: {message}")]
    Output {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type Result<T> = std::result::Result<T, ClampError>;

/// Errors raised while building range value objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid range: lower bound {lower} must not exceed upper bound {upper}")]
    InvalidRange { lower: String, upper: String },

    #[error("Half-open ranges need a discrete value kind, got {kind}")]
    NotDiscrete { kind: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Command-line input errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Invalid range specification '{spec}': {reason}")]
    InvalidRangeSpec { spec: String, reason: String },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for ClampError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<serde_json::Error> for ClampError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output { message: format!("failed to render JSON: {err}"), source: Some(Box::new(err)) }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<ClampError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ClampError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ClampError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
