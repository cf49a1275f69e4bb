//! Integration tests for graph-weights using the library interface

use std::collections::{BTreeMap, BTreeSet};
use std::fs;

use clap::Parser;
use graph_weights::cli::{Cli, PlotFormat};
use graph_weights::config::PlotOptions;
use graph_weights::executors::CommandExecutor;
use graph_weights::executors::plot::PlotExecutor;
use graph_weights::graph::{
    EdgeKey, GraphRenderer, NodeId, SAMPLE_EDGES, Weight, WeightedGraphBuilder, edge_labels,
    sample_graph,
};
use graph_weights::layout::SpringLayout;
use graph_weights::reports::{JsonReportGenerator, ReportGenerator};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_sample_graph_properties() {
    let graph = sample_graph();
    let labels = edge_labels(&graph);

    let nodes: BTreeSet<NodeId> = graph.node_weights().map(|n| n.id()).collect();
    assert_eq!(nodes, (1..=7).collect::<BTreeSet<_>>());
    assert_eq!(graph.edge_count(), 12);

    assert_eq!(labels[&EdgeKey::new(1, 2)], 1);
    assert_eq!(labels[&EdgeKey::new(7, 1)], -10);
    assert_eq!(labels[&EdgeKey::new(6, 7)], 9);
}

#[test]
fn test_reverse_duplicates_collapse_to_last_weight() {
    let mut expected: BTreeMap<EdgeKey, Weight> = BTreeMap::new();
    for &(u, v, w) in SAMPLE_EDGES {
        expected.insert(EdgeKey::new(u, v), w);
    }

    let labels = edge_labels(&sample_graph());
    assert_eq!(labels, expected);
}

#[test]
fn test_construction_is_deterministic() {
    let first = WeightedGraphBuilder::from_triples(SAMPLE_EDGES);
    let second = WeightedGraphBuilder::from_triples(SAMPLE_EDGES);

    assert_eq!(first.node_ids(), second.node_ids());
    assert_eq!(edge_labels(first.graph()), edge_labels(second.graph()));
}

#[test]
fn test_conflicting_reverse_triple_overwrites() {
    let builder = WeightedGraphBuilder::from_triples(&[(1, 3, 2), (3, 1, 8), (1, 3, -4)]);

    assert_eq!(builder.graph().edge_count(), 1);
    assert_eq!(builder.weight(3, 1), Some(-4));
}

#[test]
fn test_layout_then_render_pipeline() {
    let graph = sample_graph();
    let layout = SpringLayout::new()
        .with_seed(Some(2024))
        .compute(&graph, None)
        .unwrap();

    let mut svg = Vec::new();
    GraphRenderer::new(true)
        .render_svg(&graph, &layout, &mut svg)
        .unwrap();
    let svg = String::from_utf8(svg).unwrap();

    let looks_like_figure = predicate::str::starts_with("<svg")
        .and(predicate::str::contains("Graph with Weights"))
        .and(predicate::str::ends_with("</svg>\n"));
    assert!(looks_like_figure.eval(&svg));
}

#[test]
fn test_json_edge_report_round_trip() {
    let report = JsonReportGenerator::new()
        .generate_edge_report(&sample_graph())
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&report).unwrap();

    let edges = json["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 12);
    for edge in edges {
        assert!(edge["source"].as_i64().unwrap() < edge["target"].as_i64().unwrap());
    }
}

#[test]
fn test_plot_command_writes_requested_format() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("graph.dot");

    let cli = Cli::try_parse_from([
        "graph-weights",
        "plot",
        "--format",
        "dot",
        "--seed",
        "5",
        "--output",
        output.to_str().unwrap(),
    ])
    .unwrap();

    let options = PlotOptions::try_from(cli.command).unwrap();
    PlotExecutor::execute(options).unwrap();

    let dot = fs::read_to_string(&output).unwrap();
    assert!(predicate::str::contains(r#""1" -- "7" [label="-10"];"#).eval(&dot));
    assert_eq!(dot.matches(" -- ").count(), 12);
    assert_eq!(dot.matches("pos=").count(), 7);
}

#[test]
fn test_window_is_the_default_plot_format() {
    let cli = Cli::try_parse_from(["graph-weights", "plot", "--seed", "1"]).unwrap();
    let options = PlotOptions::try_from(cli.command).unwrap();

    assert_eq!(options.format, PlotFormat::Window);
    assert!(options.output.is_none());
}

#[test]
fn test_window_format_rejects_output_file() {
    let cli = Cli::try_parse_from([
        "graph-weights",
        "plot",
        "--format",
        "window",
        "--output",
        "graph.svg",
    ])
    .unwrap();

    assert!(PlotOptions::try_from(cli.command).is_err());
}

#[test]
fn test_plot_command_is_reproducible_with_seed() {
    let temp_dir = TempDir::new().unwrap();
    let render = |name: &str| {
        let output = temp_dir.path().join(name);
        let cli = Cli::try_parse_from([
            "graph-weights",
            "plot",
            "--format",
            "svg",
            "--seed",
            "99",
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();
        PlotExecutor::execute(PlotOptions::try_from(cli.command).unwrap()).unwrap();
        fs::read_to_string(output).unwrap()
    };

    assert_eq!(render("first.svg"), render("second.svg"));
}
