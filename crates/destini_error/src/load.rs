//! Story file loading errors.

/// Specific error conditions while reading story files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StoryLoadErrorKind {
    /// Failed to read story file
    #[display("Failed to read story file: {}", _0)]
    FileRead(String),
    /// Failed to parse TOML content
    #[display("Failed to parse TOML: {}", _0)]
    TomlParse(String),
    /// Failed to parse JSON content
    #[display("Failed to parse JSON: {}", _0)]
    JsonParse(String),
    /// File extension is not a known story format
    #[display("Unsupported story format: {}", _0)]
    UnsupportedFormat(String),
}

/// Error type for story loading.
///
/// # Examples
///
/// ```
/// use destini_error::{StoryLoadError, StoryLoadErrorKind};
///
/// let err = StoryLoadError::new(StoryLoadErrorKind::UnsupportedFormat("yaml".to_string()));
/// assert!(format!("{}", err).contains("yaml"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Load Error: {} at line {} in {}", kind, line, file)]
pub struct StoryLoadError {
    /// The specific error condition
    pub kind: StoryLoadErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoryLoadError {
    /// Create a new StoryLoadError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryLoadErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
