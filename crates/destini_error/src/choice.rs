//! Invalid choice errors raised by sessions.

/// Why a choice could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum InvalidChoiceErrorKind {
    /// Current node is an ending; only a restart leaves it
    #[display("Node '{}' is terminal and has no options", _0)]
    TerminalNode(String),
    /// Index does not address one of the current node's options
    #[display(
        "Option {} is out of range for node '{}' ({} available)",
        index,
        node,
        available
    )]
    OutOfRange {
        /// Current node
        node: String,
        /// Requested option index
        index: usize,
        /// Number of options the node offers
        available: usize,
    },
}

/// Invalid choice error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invalid Choice: {} at line {} in {}", kind, line, file)]
pub struct InvalidChoiceError {
    /// The kind of error that occurred
    pub kind: InvalidChoiceErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl InvalidChoiceError {
    /// Create a new invalid choice error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InvalidChoiceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &InvalidChoiceErrorKind {
        &self.kind
    }
}
