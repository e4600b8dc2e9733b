//! Error types for the Destini narrative engine.
//!
//! Every error carries the source location where it was raised. The
//! [`DestiniError`] wrapper unifies them for callers that do not care which
//! layer failed.

mod choice;
mod config;
mod load;
mod not_found;
mod validation;

pub use choice::{InvalidChoiceError, InvalidChoiceErrorKind};
pub use config::ConfigError;
pub use load::{StoryLoadError, StoryLoadErrorKind};
pub use not_found::NotFoundError;
pub use validation::{ValidationError, ValidationErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum DestiniErrorKind {
    /// Malformed story data
    Validation(ValidationError),
    /// Unknown node id
    NotFound(NotFoundError),
    /// Rejected player choice
    InvalidChoice(InvalidChoiceError),
    /// Story file could not be read or parsed
    StoryLoad(StoryLoadError),
    /// Configuration error
    Config(ConfigError),
}

impl std::fmt::Display for DestiniErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DestiniErrorKind::Validation(e) => write!(f, "{}", e),
            DestiniErrorKind::NotFound(e) => write!(f, "{}", e),
            DestiniErrorKind::InvalidChoice(e) => write!(f, "{}", e),
            DestiniErrorKind::StoryLoad(e) => write!(f, "{}", e),
            DestiniErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Destini error with kind discrimination.
///
/// # Examples
///
/// ```
/// use destini_error::{DestiniError, DestiniErrorKind, NotFoundError};
///
/// let err: DestiniError = NotFoundError::new("attic").into();
/// assert!(matches!(err.kind(), DestiniErrorKind::NotFound(_)));
/// ```
#[derive(Debug)]
pub struct DestiniError(Box<DestiniErrorKind>);

impl DestiniError {
    /// Create a new error from a kind.
    pub fn new(kind: DestiniErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DestiniErrorKind {
        &self.0
    }
}

impl std::fmt::Display for DestiniError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Destini Error: {}", self.0)
    }
}

impl std::error::Error for DestiniError {}

// Generic From implementation for any type that converts to DestiniErrorKind
impl<T> From<T> for DestiniError
where
    T: Into<DestiniErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Destini operations.
pub type DestiniResult<T> = std::result::Result<T, DestiniError>;
