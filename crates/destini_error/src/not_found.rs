//! Node lookup error.

/// A node id was queried that the graph does not contain.
///
/// # Examples
///
/// ```
/// use destini_error::NotFoundError;
///
/// let err = NotFoundError::new("cellar");
/// assert_eq!(err.id, "cellar");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Not Found: node '{}' at line {} in {}", id, line, file)]
pub struct NotFoundError {
    /// The id that was looked up
    pub id: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl NotFoundError {
    /// Create a new NotFoundError for the given id at the current location.
    #[track_caller]
    pub fn new(id: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            id: id.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
