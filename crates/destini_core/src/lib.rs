//! Core data types for the Destini narrative engine.
//!
//! This crate provides the node and option types shared by every layer, plus
//! the tracing setup used by binaries.

mod node;
mod node_id;
mod observability;
mod option;

pub use node::{NarrativeNode, NarrativeNodeBuilder};
pub use node_id::NodeId;
pub use observability::{LogFormat, init_tracing};
pub use option::{NarrativeOption, NarrativeOptionBuilder};
