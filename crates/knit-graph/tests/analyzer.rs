//! Integration tests for the analyzer.
//!
//! These tests drive the public API with small hand-built graphs and check
//! the diagnostics attached to each node and edge.

use knit_graph::domain::diagnostics::{
    CIRCULAR_DEPENDENCY, PART_OF_CYCLE, REMOVE_DEPENDENCY, UNUSED_DEPENDENCY,
};
use knit_graph::{Analyzer, AnalyzerConfig, Edge, Graph, LayoutOrigin, Node, Severity, analyze};
use rstest::rstest;

/// Build a graph from node ids and `(source, target)` pairs.
///
/// Edge ids are `source_target`, the convention used by the demo data.
fn graph(nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
    Graph::new(
        nodes.iter().map(|id| Node::new(*id, format!("Service {id}"))).collect(),
        edges
            .iter()
            .map(|(s, t)| Edge::new(format!("{s}_{t}"), *s, *t))
            .collect(),
    )
}

fn node<'a>(graph: &'a Graph, id: &str) -> &'a Node {
    graph.node(id).unwrap_or_else(|| panic!("node {id} missing"))
}

fn edge<'a>(graph: &'a Graph, id: &str) -> &'a Edge {
    graph.edge(id).unwrap_or_else(|| panic!("edge {id} missing"))
}

// ========== Scenarios ==========

/// ```text
/// A → B → C → A, plus the chord A → C
/// ```
#[test]
fn triangle_with_chord() {
    let input = graph(
        &["A", "B", "C"],
        &[("A", "B"), ("B", "C"), ("C", "A"), ("A", "C")],
    );

    let out = analyze(&input);

    for id in ["A_B", "B_C", "C_A"] {
        let e = edge(&out, id);
        assert!(e.has_issue(CIRCULAR_DEPENDENCY), "{id} should be circular");
        assert_eq!(e.thickness, Some(4.0));
    }
    for id in ["A", "B", "C"] {
        let n = node(&out, id);
        assert_eq!(n.severity, Severity::Critical);
        assert_eq!(n.issues, vec![PART_OF_CYCLE]);
    }

    // The chord never closes a loop on its own and has a live source.
    let chord = edge(&out, "A_C");
    assert!(chord.issues.is_empty());
    assert_eq!(chord.thickness, Some(2.0));

    let coords: Vec<_> = out.nodes.iter().map(|n| (n.x, n.y)).collect();
    assert_eq!(
        coords,
        vec![
            (Some(100.0), Some(100.0)),
            (Some(300.0), Some(100.0)),
            (Some(500.0), Some(100.0)),
        ]
    );
}

#[test]
fn linear_chain_is_clean() {
    let input = graph(
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "E")],
    );

    let analysis = Analyzer::default().run(&input);
    let out = &analysis.graph;

    for n in &out.nodes {
        assert!(n.issues.is_empty(), "{} has issues", n.id);
        assert!(n.suggestions.is_empty(), "{} has suggestions", n.id);
        assert_eq!(n.severity, Severity::Default);
    }
    for e in &out.edges {
        assert!(e.issues.is_empty(), "{} has issues", e.id);
        assert!(e.suggestions.is_empty(), "{} has suggestions", e.id);
        assert_eq!(e.thickness, Some(2.0));
    }
    assert!(analysis.report.is_clean());
}

#[test]
fn self_loop_is_circular() {
    let input = graph(&["A", "B"], &[("A", "A"), ("A", "B")]);

    let analysis = Analyzer::default().run(&input);

    let self_loop = edge(&analysis.graph, "A_A");
    assert_eq!(self_loop.issues, vec![CIRCULAR_DEPENDENCY]);
    assert_eq!(node(&analysis.graph, "A").severity, Severity::Critical);
    assert_eq!(node(&analysis.graph, "B").severity, Severity::Default);
    assert!(edge(&analysis.graph, "A_B").issues.is_empty());

    assert_eq!(analysis.report.cycles.len(), 1);
    assert!(analysis.report.cycles[0].is_self_loop());
}

#[test]
fn demo_graph() {
    // The layout of the bundled demo: a B ⇄ C loop feeding a tail that
    // eventually depends back on A.
    let input = graph(
        &["A", "B", "C", "D", "E", "F", "G"],
        &[
            ("A", "B"),
            ("B", "C"),
            ("C", "B"),
            ("C", "D"),
            ("D", "E"),
            ("E", "F"),
            ("F", "G"),
            ("F", "A"),
        ],
    );

    let analysis = Analyzer::default().run(&input);

    // F → A closes a loop through the whole tail.
    assert_eq!(
        analysis.report.critical_nodes,
        vec!["A", "B", "C", "D", "E", "F"]
    );
    assert_eq!(node(&analysis.graph, "G").severity, Severity::Default);
    assert!(!edge(&analysis.graph, "F_G").has_issue(CIRCULAR_DEPENDENCY));
    assert!(analysis.report.unused_edges.is_empty());

    let cycles: Vec<String> = analysis.report.cycles.iter().map(ToString::to_string).collect();
    assert!(cycles.contains(&"B → C → B".to_string()));
    assert!(cycles.contains(&"A → B → C → D → E → F → A".to_string()));
}

// ========== Severity ==========

#[rstest]
#[case::three_is_fine(3, Severity::Default)]
#[case::four_warns(4, Severity::Warning)]
#[case::many_warn(9, Severity::Warning)]
fn out_degree_drives_warning(#[case] fan_out: usize, #[case] expected: Severity) {
    let mut ids = vec!["hub".to_string()];
    ids.extend((0..fan_out).map(|i| format!("leaf{i}")));
    let nodes: Vec<&str> = ids.iter().map(String::as_str).collect();
    let edges: Vec<(&str, &str)> = nodes[1..].iter().map(|leaf| ("hub", *leaf)).collect();

    let out = analyze(&graph(&nodes, &edges));
    let hub = node(&out, "hub");

    assert_eq!(hub.severity, expected);
    if expected == Severity::Warning {
        assert_eq!(
            hub.suggestions,
            vec![format!("Consider grouping {fan_out} dependencies.")]
        );
    } else {
        assert!(hub.suggestions.is_empty());
    }
}

#[test]
fn cycle_membership_overrides_warning() {
    let input = graph(
        &["hub", "a", "b", "c", "d"],
        &[("hub", "a"), ("hub", "b"), ("hub", "c"), ("hub", "d"), ("d", "hub")],
    );

    let out = analyze(&input);
    let hub = node(&out, "hub");

    assert_eq!(hub.severity, Severity::Critical);
    assert_eq!(hub.issues, vec![PART_OF_CYCLE]);
    // The grouping suggestion still applies.
    assert_eq!(hub.suggestions, vec!["Consider grouping 4 dependencies."]);
}

#[test]
fn grouping_threshold_is_configurable() {
    let input = graph(&["hub", "a", "b"], &[("hub", "a"), ("hub", "b")]);
    let config = AnalyzerConfig {
        grouping_threshold: 1,
        ..AnalyzerConfig::default()
    };

    let out = Analyzer::new(config).analyze(&input);

    assert_eq!(node(&out, "hub").severity, Severity::Warning);
}

// ========== Unused edges ==========

#[test]
fn edge_from_unknown_source_is_unused() {
    let input = graph(&["A", "B"], &[("A", "B"), ("orphan", "B")]);

    let analysis = Analyzer::default().run(&input);
    let orphan = edge(&analysis.graph, "orphan_B");

    assert_eq!(orphan.issues, vec![UNUSED_DEPENDENCY]);
    assert_eq!(orphan.suggestions, vec![REMOVE_DEPENDENCY]);
    assert_eq!(analysis.report.unused_edges, vec!["orphan_B"]);
    assert_eq!(analysis.report.dangling_edges, vec!["orphan_B"]);
    assert!(edge(&analysis.graph, "A_B").issues.is_empty());
}

#[test]
fn edge_to_unknown_target_is_used_and_harmless() {
    let input = graph(&["A"], &[("A", "missing")]);

    let analysis = Analyzer::default().run(&input);

    assert!(edge(&analysis.graph, "A_missing").issues.is_empty());
    assert_eq!(analysis.report.dangling_edges, vec!["A_missing"]);
    assert_eq!(analysis.graph.nodes.len(), 1);
}

// ========== Thickness ==========

#[test]
fn caller_thickness_survives_unless_left_over_from_a_cycle() {
    let mut custom = Edge::new("custom", "A", "B");
    custom.thickness = Some(1.5);
    let mut stale = Edge::new("stale", "B", "C");
    stale.thickness = Some(4.0);
    let mut looping = Edge::new("looping", "C", "C");
    looping.thickness = Some(1.0);

    let input = Graph::new(
        vec![Node::new("A", ""), Node::new("B", ""), Node::new("C", "")],
        vec![custom, stale, looping],
    );
    let out = analyze(&input);

    assert_eq!(edge(&out, "custom").thickness, Some(1.5));
    assert_eq!(edge(&out, "stale").thickness, Some(2.0));
    assert_eq!(edge(&out, "looping").thickness, Some(4.0));
}

// ========== Layout ==========

#[test]
fn dragged_positions_survive_reanalysis() {
    let input = graph(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
    let mut first = analyze(&input);

    // Simulate the user dragging B.
    first.nodes[1].x = Some(640.0);
    first.nodes[1].y = Some(480.0);

    let second = analyze(&first);

    assert_eq!((second.nodes[1].x, second.nodes[1].y), (Some(640.0), Some(480.0)));
    assert_eq!((second.nodes[0].x, second.nodes[0].y), (Some(100.0), Some(100.0)));
}

#[test]
fn upload_origin_separates_new_data() {
    let input = graph(&["A", "B"], &[("A", "B")]);

    let out = Analyzer::new(AnalyzerConfig::for_upload()).analyze(&input);

    assert_eq!(out.nodes[0].x, Some(LayoutOrigin::UPLOAD.x));
    assert_eq!(out.nodes[0].y, Some(LayoutOrigin::UPLOAD.y));
    assert_eq!(out.nodes[1].x, Some(LayoutOrigin::UPLOAD.x + 200.0));
}

// ========== Shape preservation ==========

#[test]
fn order_and_ids_are_preserved() {
    let input = graph(
        &["Z", "M", "A", "Q"],
        &[("Q", "A"), ("Z", "M"), ("A", "Z"), ("M", "Q")],
    );

    let out = analyze(&input);

    let ids = |g: &Graph| -> (Vec<String>, Vec<String>) {
        (
            g.nodes.iter().map(|n| n.id.clone()).collect(),
            g.edges.iter().map(|e| e.id.clone()).collect(),
        )
    };
    assert_eq!(ids(&out), ids(&input));
    for (before, after) in input.edges.iter().zip(&out.edges) {
        assert_eq!(before.label, after.label);
        assert_eq!((&before.source, &before.target), (&after.source, &after.target));
    }
}

#[test]
fn json_round_trip_through_the_analyzer() {
    let json = r#"{
        "nodes": [
            { "id": "A", "label": "Module A", "x": 100, "y": 100, "issues": [], "suggestions": [] },
            { "id": "B", "label": "Module B", "x": 300, "y": 100, "issues": [], "suggestions": [] },
            { "id": "C", "label": "Module C", "x": 200, "y": 300, "issues": [], "suggestions": [] }
        ],
        "edges": [
            { "id": "e1", "source": "A", "target": "B", "label": "A depends on B", "issues": [], "suggestions": [] },
            { "id": "e2", "source": "B", "target": "C", "label": "B depends on C", "issues": [], "suggestions": [] },
            { "id": "e3", "source": "C", "target": "A", "label": "C depends on A", "issues": [], "suggestions": [] },
            { "id": "e4", "source": "A", "target": "C", "label": "A directly depends on C", "issues": [], "suggestions": [] }
        ]
    }"#;

    let input = Graph::from_json(json).unwrap();
    let out = analyze(&input);
    let value: serde_json::Value = serde_json::from_str(&out.to_json().unwrap()).unwrap();

    assert_eq!(value["nodes"][0]["severity"], "critical");
    assert_eq!(value["nodes"][2]["x"], 200.0);
    assert_eq!(value["edges"][0]["issues"][0], "Circular dependency");
    assert_eq!(value["edges"][0]["thickness"], 4.0);
    assert_eq!(value["edges"][3]["thickness"], 2.0);
    assert_eq!(value["edges"][3]["label"], "A directly depends on C");
}
