//! Play-through cursor over a shared graph.

use crate::NarrativeGraph;
use destini_core::{NarrativeNode, NodeId};
use destini_error::{InvalidChoiceError, InvalidChoiceErrorKind};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// A player's position within a fixed [`NarrativeGraph`].
///
/// Many sessions may share one graph. Each session is mutated through
/// `&mut self`, so calls to [`choose`](Self::choose) and
/// [`restart`](Self::restart) on one session are serialized by the borrow
/// checker.
///
/// # Examples
///
/// ```
/// use destini_core::{NarrativeNode, NarrativeOption};
/// use destini_narrative::{NarrativeGraph, NarrativeSession};
/// use std::sync::Arc;
///
/// let graph = Arc::new(
///     NarrativeGraph::build(
///         vec![
///             NarrativeNode::new("a", "Start", vec![NarrativeOption::new("on", "b")]),
///             NarrativeNode::ending("b", "Fin"),
///         ],
///         "a",
///     )
///     .unwrap(),
/// );
///
/// let mut session = NarrativeSession::new(Arc::clone(&graph));
/// assert_eq!(session.choose(0).unwrap().text(), "Fin");
/// assert!(session.is_terminal());
/// assert!(session.choose(0).is_err());
///
/// session.restart();
/// assert_eq!(session.current_id().as_str(), "a");
/// ```
#[derive(Debug, Clone)]
pub struct NarrativeSession {
    graph: Arc<NarrativeGraph>,
    current: usize,
    steps: u64,
}

impl NarrativeSession {
    /// Creates a session positioned at the graph's start node.
    pub fn new(graph: Arc<NarrativeGraph>) -> Self {
        let current = graph.start_position();
        Self {
            graph,
            current,
            steps: 0,
        }
    }

    /// The node the player is on.
    pub fn current(&self) -> &NarrativeNode {
        self.graph.node_at(self.current)
    }

    /// Id of the node the player is on.
    pub fn current_id(&self) -> &NodeId {
        self.current().id()
    }

    /// Returns true if the current node is an ending.
    pub fn is_terminal(&self) -> bool {
        self.current().is_terminal()
    }

    /// Choices made since the session was created or last restarted.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// The graph this session walks.
    pub fn graph(&self) -> &Arc<NarrativeGraph> {
        &self.graph
    }

    /// Follows option `option_index` of the current node.
    ///
    /// Returns the new current node so callers can render it directly.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidChoiceError`] if the current node is terminal or
    /// the index does not address one of its options. The cursor is left
    /// unchanged on error.
    #[instrument(skip(self), fields(node = %self.current_id()))]
    pub fn choose(&mut self, option_index: usize) -> Result<&NarrativeNode, InvalidChoiceError> {
        let targets = &self.graph.edges()[self.current];

        if targets.is_empty() {
            warn!("Choice offered on an ending");
            return Err(InvalidChoiceError::new(
                InvalidChoiceErrorKind::TerminalNode(self.current_id().to_string()),
            ));
        }

        let Some(&target) = targets.get(option_index) else {
            warn!(available = targets.len(), "Choice index out of range");
            return Err(InvalidChoiceError::new(InvalidChoiceErrorKind::OutOfRange {
                node: self.current_id().to_string(),
                index: option_index,
                available: targets.len(),
            }));
        };

        self.current = target;
        self.steps = self.steps.saturating_add(1);
        debug!(to = %self.current_id(), steps = self.steps, "Advanced");
        Ok(self.current())
    }

    /// Moves the cursor back to the start node. Idempotent.
    pub fn restart(&mut self) {
        self.current = self.graph.start_position();
        self.steps = 0;
        debug!(start = %self.current_id(), "Session restarted");
    }
}
