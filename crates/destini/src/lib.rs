//! Destini: a data-driven branching narrative engine.
//!
//! This facade re-exports the workspace crates and adds configuration and
//! the command-line handlers used by the `destini` binary.
//!
//! ```
//! use destini::{NarrativeSession, stories};
//! use std::sync::Arc;
//!
//! let graph = Arc::new(stories::destini().unwrap());
//! let mut session = NarrativeSession::new(graph);
//! for option in session.current().options() {
//!     assert!(!option.label().is_empty());
//! }
//! session.choose(1).unwrap();
//! assert_eq!(session.current_id().as_str(), "murderer_question");
//! ```

pub mod cli;
mod config;

pub use config::{DestiniConfig, DestiniConfigBuilder, LogConfig, LogConfigBuilder};

pub use destini_core::{
    LogFormat, NarrativeNode, NarrativeNodeBuilder, NarrativeOption, NarrativeOptionBuilder,
    NodeId, init_tracing,
};
pub use destini_error::{
    ConfigError, DestiniError, DestiniErrorKind, DestiniResult, InvalidChoiceError,
    InvalidChoiceErrorKind, NotFoundError, StoryLoadError, StoryLoadErrorKind, ValidationError,
    ValidationErrorKind,
};
pub use destini_narrative::{
    GraphPolicy, NarrativeGraph, NarrativeSession, StoryDefinition, StoryFormat, StoryHeader,
    load_graph, stories, validator,
};
