//! Player-selectable transitions.

use crate::NodeId;
use serde::{Deserialize, Serialize};

/// A labeled edge from one node to another.
///
/// # Examples
///
/// ```
/// use destini_core::NarrativeOption;
///
/// let option = NarrativeOption::new("Hand him the tape", "sing_along");
/// assert_eq!(option.label(), "Hand him the tape");
/// assert_eq!(option.target().as_str(), "sing_along");
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
pub struct NarrativeOption {
    /// Text shown on the choice
    label: String,
    /// Node this option leads to
    target: NodeId,
}

impl NarrativeOption {
    /// Creates a new option leading to `target`.
    pub fn new(label: impl Into<String>, target: impl Into<NodeId>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }

    /// Returns a builder for constructing a NarrativeOption.
    pub fn builder() -> NarrativeOptionBuilder {
        NarrativeOptionBuilder::default()
    }
}
