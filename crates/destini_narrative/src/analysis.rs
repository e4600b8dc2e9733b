//! Reachability analysis over a built graph.
//!
//! None of this runs during traversal; the validator and strict policies
//! call it once per story.

use crate::NarrativeGraph;
use destini_core::NodeId;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Dfs, Reversed};
use std::collections::{HashMap, HashSet};

impl NarrativeGraph {
    /// Ids reachable from the start node, the start node included.
    pub fn reachable_from_start(&self) -> HashSet<&NodeId> {
        let digraph = self.to_digraph();
        let mut dfs = Dfs::new(&digraph, NodeIndex::new(self.start_position()));
        let mut reached = HashSet::new();
        while let Some(index) = dfs.next(&digraph) {
            reached.insert(self.node_at(index.index()).id());
        }
        reached
    }

    /// Ids no path from the start node reaches, in authoring order.
    ///
    /// Unreachable nodes are valid but inert under the default policy.
    pub fn unreachable_nodes(&self) -> Vec<&NodeId> {
        let reached = self.reachable_from_start();
        self.nodes()
            .map(|node| node.id())
            .filter(|id| !reached.contains(id))
            .collect()
    }

    /// Ids from which no ending can be reached, in authoring order.
    ///
    /// A player who enters one of these nodes can only loop until restart.
    pub fn nodes_without_ending(&self) -> Vec<&NodeId> {
        let digraph = self.to_digraph();
        let reversed = Reversed(&digraph);
        let mut can_end = vec![false; self.len()];

        let mut endings = self
            .nodes()
            .enumerate()
            .filter(|(_, node)| node.is_terminal())
            .map(|(position, _)| NodeIndex::new(position));

        if let Some(first) = endings.next() {
            let mut dfs = Dfs::new(reversed, first);
            for ending in std::iter::once(first).chain(endings) {
                dfs.move_to(ending);
                while let Some(index) = dfs.next(reversed) {
                    can_end[index.index()] = true;
                }
            }
        }

        self.nodes()
            .zip(can_end)
            .filter(|(_, reaches_end)| !reaches_end)
            .map(|(node, _)| node.id())
            .collect()
    }

    /// Groups of endings that share identical text, in authoring order.
    ///
    /// Only groups with two or more members are returned.
    pub fn duplicate_endings(&self) -> Vec<Vec<&NodeId>> {
        let mut groups: Vec<Vec<&NodeId>> = Vec::new();
        let mut by_text: HashMap<&str, usize> = HashMap::new();

        for node in self.terminal_nodes() {
            match by_text.get(node.text().as_str()) {
                Some(&group) => groups[group].push(node.id()),
                None => {
                    by_text.insert(node.text().as_str(), groups.len());
                    groups.push(vec![node.id()]);
                }
            }
        }

        groups.retain(|group| group.len() > 1);
        groups
    }

    /// Builds a petgraph view whose node indices equal authoring positions.
    fn to_digraph(&self) -> DiGraph<(), ()> {
        let mut digraph = DiGraph::with_capacity(self.len(), 0);
        for _ in 0..self.len() {
            digraph.add_node(());
        }
        for (source, targets) in self.edges().iter().enumerate() {
            for &target in targets {
                digraph.add_edge(NodeIndex::new(source), NodeIndex::new(target), ());
            }
        }
        digraph
    }
}
