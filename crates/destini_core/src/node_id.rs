//! Stable node identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Identifier of a narrative node, chosen when the story is authored.
///
/// # Examples
///
/// ```
/// use destini_core::NodeId;
///
/// let id = NodeId::from("roadside");
/// assert_eq!(id.as_str(), "roadside");
/// assert_eq!(id.to_string(), "roadside");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a node id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
