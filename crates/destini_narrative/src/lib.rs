//! Branching narrative engine for Destini.
//!
//! A story is a directed graph of [`NarrativeNode`]s whose options point at
//! other nodes. [`NarrativeGraph`] validates and owns the nodes;
//! [`NarrativeSession`] is a cursor that follows the player's choices.
//!
//! ```
//! use destini_narrative::{NarrativeSession, stories};
//! use std::sync::Arc;
//!
//! let graph = Arc::new(stories::destini().unwrap());
//! let mut session = NarrativeSession::new(Arc::clone(&graph));
//!
//! session.choose(0).unwrap(); // hop in
//! let ending = session.choose(1).unwrap(); // stab him
//! assert!(ending.is_terminal());
//! ```
//!
//! [`NarrativeNode`]: destini_core::NarrativeNode

mod analysis;
mod graph;
mod session;
pub mod stories;
mod story_file;
pub mod validator;

pub use graph::{GraphPolicy, NarrativeGraph};
pub use session::NarrativeSession;
pub use story_file::{StoryDefinition, StoryFormat, StoryHeader, load_graph};
