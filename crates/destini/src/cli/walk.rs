//! Walk command handler: replays scripted choices through a story.

use destini_core::{NarrativeNode, NodeId};
use destini_narrative::{GraphPolicy, NarrativeGraph, NarrativeSession, load_graph, stories};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Where a walk ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkSummary {
    /// Node current after the last choice
    pub final_node: NodeId,
    /// Whether that node is an ending
    pub ended: bool,
    /// Number of restarts performed
    pub restarts: usize,
}

/// Handles the walk command.
///
/// Loads `path` (or the bundled story) under `policy` and replays `choices`.
#[tracing::instrument(skip_all, fields(choices = choices.len(), restart))]
pub fn handle_walk_command(
    path: Option<PathBuf>,
    policy: GraphPolicy,
    choices: &[usize],
    restart: bool,
    out: &mut dyn Write,
) -> anyhow::Result<WalkSummary> {
    let graph = match path {
        Some(path) => load_graph(&path, policy)?,
        None => stories::destini()?,
    };

    walk_story(Arc::new(graph), choices, restart, out)
}

/// Replays `choices` on a fresh session, printing every node visited.
///
/// With `restart`, reaching an ending while choices remain restarts the
/// session. Without it, further choices fail as the session would.
pub fn walk_story(
    graph: Arc<NarrativeGraph>,
    choices: &[usize],
    restart: bool,
    out: &mut dyn Write,
) -> anyhow::Result<WalkSummary> {
    let mut session = NarrativeSession::new(graph);
    let mut restarts = 0;

    if let Some(name) = session.graph().name() {
        writeln!(out, "== {} ==", name)?;
    }
    render(session.current(), out)?;

    for &choice in choices {
        if restart && session.is_terminal() {
            session.restart();
            restarts += 1;
            writeln!(out, "\n(restart)")?;
            render(session.current(), out)?;
        }

        writeln!(out, "\n> {}", choice)?;
        let node = session.choose(choice)?;
        render(node, out)?;
    }

    tracing::debug!(
        final_node = %session.current_id(),
        steps = session.steps(),
        restarts,
        "Walk complete"
    );

    Ok(WalkSummary {
        final_node: session.current_id().clone(),
        ended: session.is_terminal(),
        restarts,
    })
}

fn render(node: &NarrativeNode, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "\n[{}] {}", node.id(), node.text())?;
    if node.is_terminal() {
        writeln!(out, "  -- The End --")?;
    }
    for (index, option) in node.options().iter().enumerate() {
        writeln!(out, "  {}) {}", index, option.label())?;
    }
    Ok(())
}
