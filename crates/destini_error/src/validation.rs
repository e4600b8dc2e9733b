//! Story validation error types.

/// Reasons a story cannot be assembled into a graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Story has no nodes at all
    #[display("Story contains no nodes")]
    EmptyStory,
    /// Two nodes share the same id
    #[display("Node '{}' is defined more than once", _0)]
    DuplicateNode(String),
    /// Start node id does not name any node
    #[display("Start node '{}' does not exist", _0)]
    MissingStart(String),
    /// An option points at a node that does not exist
    #[display(
        "Option {} of node '{}' targets missing node '{}'",
        option_index,
        node,
        target
    )]
    DanglingTarget {
        /// Node owning the option
        node: String,
        /// Position of the option within the node
        option_index: usize,
        /// Id the option points at
        target: String,
    },
    /// Node cannot be reached from the start node (strict policy only)
    #[display("Node '{}' is unreachable from the start node", _0)]
    UnreachableNode(String),
}

/// Story validation error with location tracking.
///
/// # Examples
///
/// ```
/// use destini_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::MissingStart("intro".to_string()));
/// assert!(format!("{}", err).contains("intro"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}
