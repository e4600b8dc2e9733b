//! Narrative positions.

use crate::{NarrativeOption, NodeId};
use serde::{Deserialize, Serialize};

/// A single narrative position with display text and outgoing choices.
///
/// A node is terminal exactly when it has no options. A node whose options
/// all loop back to itself is still not terminal.
///
/// # Examples
///
/// ```
/// use destini_core::{NarrativeNode, NarrativeOption};
///
/// let node = NarrativeNode::new(
///     "roadside",
///     "A rusty pickup truck rumbles to a stop.",
///     vec![NarrativeOption::new("Hop in", "ride")],
/// );
/// assert!(!node.is_terminal());
///
/// let ending = NarrativeNode::ending("crash", "You careen toward the rocks.");
/// assert!(ending.is_terminal());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct NarrativeNode {
    /// Unique identifier within a story
    id: NodeId,
    /// Narrative content shown while the node is current
    text: String,
    /// Ordered choices offered to the player
    #[builder(default)]
    #[serde(default)]
    options: Vec<NarrativeOption>,
}

impl NarrativeNode {
    /// Creates a node with the given options.
    pub fn new(
        id: impl Into<NodeId>,
        text: impl Into<String>,
        options: Vec<NarrativeOption>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            options,
        }
    }

    /// Creates a terminal node.
    pub fn ending(id: impl Into<NodeId>, text: impl Into<String>) -> Self {
        Self::new(id, text, Vec::new())
    }

    /// Returns a builder for constructing a NarrativeNode.
    pub fn builder() -> NarrativeNodeBuilder {
        NarrativeNodeBuilder::default()
    }

    /// Returns true if the node has no outgoing options.
    pub fn is_terminal(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_loop_is_not_terminal() {
        let node = NarrativeNode::new("loop", "Again?", vec![NarrativeOption::new("Yes", "loop")]);
        assert!(!node.is_terminal());
    }

    #[test]
    fn test_builder_defaults_to_no_options() {
        let node = NarrativeNode::builder()
            .id("end")
            .text("The end.")
            .build()
            .unwrap();
        assert!(node.is_terminal());
        assert_eq!(node.id().as_str(), "end");
    }

    #[test]
    fn test_missing_options_deserialize_as_ending() {
        let node: NarrativeNode =
            serde_json::from_str(r#"{"id": "end", "text": "Fin."}"#).unwrap();
        assert!(node.is_terminal());
    }
}
