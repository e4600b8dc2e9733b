//! Tests for play-through sessions.

use destini_core::{NarrativeNode, NarrativeOption};
use destini_error::InvalidChoiceErrorKind;
use destini_narrative::{NarrativeGraph, NarrativeSession};
use std::sync::Arc;

fn scenario_graph() -> Arc<NarrativeGraph> {
    Arc::new(
        NarrativeGraph::build(
            vec![
                NarrativeNode::new(
                    "A",
                    "Crossroads",
                    vec![NarrativeOption::new("go", "B"), NarrativeOption::new("ask", "C")],
                ),
                NarrativeNode::new(
                    "B",
                    "Bridge",
                    vec![NarrativeOption::new("x", "D"), NarrativeOption::new("y", "E")],
                ),
                NarrativeNode::new("C", "Cottage", vec![NarrativeOption::new("back", "A")]),
                NarrativeNode::ending("D", "Drowned"),
                NarrativeNode::ending("E", "Escaped"),
            ],
            "A",
        )
        .unwrap(),
    )
}

#[test]
fn test_scenario_walkthrough() {
    let graph = scenario_graph();
    let mut session = NarrativeSession::new(Arc::clone(&graph));
    assert_eq!(session.current_id().as_str(), "A");

    let node = session.choose(0).unwrap();
    assert_eq!(node.id().as_str(), "B");

    let node = session.choose(1).unwrap();
    assert_eq!(node.id().as_str(), "E");
    assert!(graph.is_terminal(session.current().id().as_str()).unwrap());

    session.restart();
    assert_eq!(session.current_id().as_str(), "A");
}

#[test]
fn test_out_of_range_choice_leaves_cursor() {
    let mut session = NarrativeSession::new(scenario_graph());

    let err = session.choose(2).unwrap_err();
    assert_eq!(
        *err.kind(),
        InvalidChoiceErrorKind::OutOfRange {
            node: "A".to_string(),
            index: 2,
            available: 2,
        }
    );
    assert_eq!(session.current_id().as_str(), "A");
    assert_eq!(session.steps(), 0);
}

#[test]
fn test_terminal_halts_until_restart() {
    let mut session = NarrativeSession::new(scenario_graph());
    session.choose(0).unwrap();
    session.choose(0).unwrap();
    assert!(session.is_terminal());

    for _ in 0..5 {
        let err = session.choose(0).unwrap_err();
        assert_eq!(
            *err.kind(),
            InvalidChoiceErrorKind::TerminalNode("D".to_string())
        );
        assert_eq!(session.current().id().as_str(), "D");
    }

    session.restart();
    assert!(!session.is_terminal());
    assert!(session.choose(0).is_ok());
}

#[test]
fn test_restart_is_idempotent() {
    let mut session = NarrativeSession::new(scenario_graph());
    session.choose(1).unwrap();
    session.choose(0).unwrap();
    session.choose(0).unwrap();
    assert_eq!(session.steps(), 3);

    session.restart();
    session.restart();
    assert_eq!(session.current_id().as_str(), "A");
    assert_eq!(session.steps(), 0);
}

#[test]
fn test_choices_are_deterministic() {
    let graph = scenario_graph();
    let choices = [1, 0, 1, 0, 0, 1];

    let walk = |session: &mut NarrativeSession| -> Vec<String> {
        session.restart();
        choices
            .iter()
            .map(|&index| session.choose(index).unwrap().id().to_string())
            .collect()
    };

    let mut first = NarrativeSession::new(Arc::clone(&graph));
    let mut second = NarrativeSession::new(Arc::clone(&graph));
    let first_path = walk(&mut first);
    assert_eq!(first_path, walk(&mut second));
    assert_eq!(first_path, vec!["C", "A", "C", "A", "B", "E"]);
}

#[test]
fn test_cycle_traversal_is_unbounded() {
    let graph = Arc::new(
        NarrativeGraph::build(
            vec![NarrativeNode::new(
                "spin",
                "Round and round",
                vec![NarrativeOption::new("Again", "spin")],
            )],
            "spin",
        )
        .unwrap(),
    );
    let mut session = NarrativeSession::new(graph);

    for _ in 0..10_000 {
        assert_eq!(session.choose(0).unwrap().id().as_str(), "spin");
    }
    assert_eq!(session.steps(), 10_000);
}

#[test]
fn test_sessions_share_graph_independently() {
    let graph = scenario_graph();
    let mut left = NarrativeSession::new(Arc::clone(&graph));
    let right = NarrativeSession::new(Arc::clone(&graph));

    left.choose(0).unwrap();
    assert_eq!(left.current_id().as_str(), "B");
    assert_eq!(right.current_id().as_str(), "A");
    assert!(Arc::ptr_eq(left.graph(), right.graph()));
}

#[test]
fn test_sessions_across_threads() {
    let graph = scenario_graph();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let graph = Arc::clone(&graph);
            std::thread::spawn(move || {
                let mut session = NarrativeSession::new(graph);
                session.choose(0).unwrap();
                let ending = session.choose(i % 2).unwrap().id().to_string();
                ending
            })
        })
        .collect();

    let endings: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(endings, vec!["D", "E", "D", "E"]);
}
