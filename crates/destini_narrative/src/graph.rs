//! Immutable narrative graph.
//!
//! A [`NarrativeGraph`] owns every node of one story. Option targets are
//! resolved to node positions once, during construction, so traversal never
//! repeats the lookup or the existence checks.

use destini_core::{NarrativeNode, NodeId};
use destini_error::{NotFoundError, ValidationError, ValidationErrorKind};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Authoring policy applied on top of the structural checks.
///
/// # Examples
///
/// ```
/// use destini_narrative::GraphPolicy;
///
/// assert!(GraphPolicy::default().allow_unreachable);
/// assert!(!GraphPolicy::strict().allow_unreachable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphPolicy {
    /// Accept nodes that no path from the start node reaches
    pub allow_unreachable: bool,
}

impl GraphPolicy {
    /// Policy that rejects unreachable nodes.
    pub fn strict() -> Self {
        Self {
            allow_unreachable: false,
        }
    }
}

impl Default for GraphPolicy {
    fn default() -> Self {
        Self {
            allow_unreachable: true,
        }
    }
}

/// The validated collection of all nodes and edges for one story.
///
/// # Examples
///
/// ```
/// use destini_core::{NarrativeNode, NarrativeOption};
/// use destini_narrative::NarrativeGraph;
///
/// let graph = NarrativeGraph::build(
///     vec![
///         NarrativeNode::new("a", "Start", vec![NarrativeOption::new("on", "b")]),
///         NarrativeNode::ending("b", "Fin"),
///     ],
///     "a",
/// )
/// .unwrap();
///
/// assert!(graph.is_terminal("b").unwrap());
/// assert!(graph.get_node("zzz").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct NarrativeGraph {
    name: Option<String>,
    description: Option<String>,
    nodes: Vec<NarrativeNode>,
    index: HashMap<NodeId, usize>,
    edges: Vec<Vec<usize>>,
    start: usize,
}

impl NarrativeGraph {
    /// Assembles a graph, rejecting malformed story data.
    ///
    /// Checks run in order: empty story, duplicate ids, missing start node,
    /// dangling option targets. The first failure is returned and no graph is
    /// produced. Cycles are accepted.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first problem found.
    pub fn build(
        nodes: Vec<NarrativeNode>,
        start: impl Into<NodeId>,
    ) -> Result<Self, ValidationError> {
        Self::build_with_policy(nodes, start, GraphPolicy::default())
    }

    /// Assembles a graph and applies an authoring policy.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for structural problems, or
    /// [`ValidationErrorKind::UnreachableNode`] when the policy forbids
    /// unreachable nodes and one exists.
    #[instrument(skip_all, fields(start = tracing::field::Empty, node_count = nodes.len()))]
    pub fn build_with_policy(
        nodes: Vec<NarrativeNode>,
        start: impl Into<NodeId>,
        policy: GraphPolicy,
    ) -> Result<Self, ValidationError> {
        let start = start.into();
        tracing::Span::current().record("start", tracing::field::display(&start));

        if nodes.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyStory));
        }

        let mut index = HashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            if index.insert(node.id().clone(), position).is_some() {
                return Err(ValidationError::new(ValidationErrorKind::DuplicateNode(
                    node.id().to_string(),
                )));
            }
        }

        let start = *index.get(&start).ok_or_else(|| {
            ValidationError::new(ValidationErrorKind::MissingStart(start.to_string()))
        })?;

        let mut edges = Vec::with_capacity(nodes.len());
        for node in &nodes {
            let mut targets = Vec::with_capacity(node.options().len());
            for (option_index, option) in node.options().iter().enumerate() {
                let target = index.get(option.target()).ok_or_else(|| {
                    ValidationError::new(ValidationErrorKind::DanglingTarget {
                        node: node.id().to_string(),
                        option_index,
                        target: option.target().to_string(),
                    })
                })?;
                targets.push(*target);
            }
            edges.push(targets);
        }

        let graph = Self {
            name: None,
            description: None,
            nodes,
            index,
            edges,
            start,
        };

        if !policy.allow_unreachable
            && let Some(orphan) = graph.unreachable_nodes().into_iter().next()
        {
            return Err(ValidationError::new(ValidationErrorKind::UnreachableNode(
                orphan.to_string(),
            )));
        }

        debug!(
            nodes = graph.nodes.len(),
            endings = graph.terminal_nodes().count(),
            "Narrative graph assembled"
        );
        Ok(graph)
    }

    /// Attaches a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attaches a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Story name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Story description, if one was given.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the node for `id`.
    ///
    /// # Errors
    ///
    /// Returns a [`NotFoundError`] if the graph has no such node.
    pub fn get_node(&self, id: &str) -> Result<&NarrativeNode, NotFoundError> {
        self.position(id).map(|position| &self.nodes[position])
    }

    /// Returns true if the node for `id` has no options.
    ///
    /// # Errors
    ///
    /// Returns a [`NotFoundError`] if the graph has no such node.
    pub fn is_terminal(&self, id: &str) -> Result<bool, NotFoundError> {
        self.get_node(id).map(NarrativeNode::is_terminal)
    }

    /// Id of the entry node.
    pub fn start(&self) -> &NodeId {
        self.nodes[self.start].id()
    }

    /// The entry node.
    pub fn start_node(&self) -> &NarrativeNode {
        &self.nodes[self.start]
    }

    /// Returns true if the graph has a node with this id.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes. Built graphs never do.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in authoring order.
    pub fn nodes(&self) -> impl Iterator<Item = &NarrativeNode> {
        self.nodes.iter()
    }

    /// Nodes with no options, in authoring order.
    pub fn terminal_nodes(&self) -> impl Iterator<Item = &NarrativeNode> {
        self.nodes.iter().filter(|node| node.is_terminal())
    }

    fn position(&self, id: &str) -> Result<usize, NotFoundError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| NotFoundError::new(id))
    }

    pub(crate) fn start_position(&self) -> usize {
        self.start
    }

    pub(crate) fn node_at(&self, position: usize) -> &NarrativeNode {
        &self.nodes[position]
    }

    /// Resolved target positions of each node's options, indexed by position.
    pub(crate) fn edges(&self) -> &[Vec<usize>] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use destini_core::NarrativeOption;

    #[test]
    fn test_targets_resolve_to_positions() {
        let graph = NarrativeGraph::build(
            vec![
                NarrativeNode::new(
                    "a",
                    "A",
                    vec![NarrativeOption::new("x", "c"), NarrativeOption::new("y", "a")],
                ),
                NarrativeNode::ending("b", "B"),
                NarrativeNode::ending("c", "C"),
            ],
            "a",
        )
        .unwrap();

        assert_eq!(graph.edges()[0], vec![2, 0]);
        assert!(graph.edges()[1].is_empty());
        assert_eq!(graph.start_position(), 0);
    }

    #[test]
    fn test_duplicate_checked_before_start() {
        let err = NarrativeGraph::build(
            vec![NarrativeNode::ending("a", "A"), NarrativeNode::ending("a", "A")],
            "missing",
        )
        .unwrap_err();
        assert_eq!(
            *err.kind(),
            ValidationErrorKind::DuplicateNode("a".to_string())
        );
    }
}
