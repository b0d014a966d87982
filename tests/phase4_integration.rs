//! Phase 4 tests: CLI helpers, configuration, cross-module behavior.

use std::path::Path;

use grasple::cli::commands::{self, BANNER};
use grasple::graph::{HasNeighbors, IndexedGraph};
use grasple::tree::{LmrTree, TraversalOrder};
use grasple::types::config::{GrowthPolicy, SlotConfig};
use grasple::types::error::GraphError;

// ==================== Command Helper Tests ====================

#[test]
fn test_banner() {
    assert!(!BANNER.is_empty());
    assert!(commands::cmd_banner().is_ok());
}

#[test]
fn test_parse_values() {
    let raw: Vec<String> = ["50", " 40 ", "60"].iter().map(|s| s.to_string()).collect();
    let parsed: Vec<i64> = commands::parse_values(&raw).unwrap();
    assert_eq!(parsed, vec![50, 40, 60]);

    let bad = vec!["12".to_string(), "twelve".to_string()];
    match commands::parse_values::<i64>(&bad).unwrap_err() {
        GraphError::InvalidValue(msg) => assert!(msg.contains("twelve")),
        e => panic!("Expected InvalidValue error, got {:?}", e),
    }
}

#[test]
fn test_tree_report() {
    let tree = LmrTree::from_values(vec![50, 40, 60, 30, 45, 55, 70, 50]).unwrap();
    let report = commands::tree_report(&tree, TraversalOrder::Inorder, Some(&50));

    assert_eq!(report.nodes, 8);
    assert_eq!(report.height, 3);
    assert_eq!(report.matches, Some(2));
    let values: Vec<i32> = report.values.iter().map(|v| **v).collect();
    assert_eq!(values, vec![30, 40, 45, 50, 50, 55, 60, 70]);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["height"], 3);
    assert_eq!(json["order"], "inorder");
    assert_eq!(json["order"], report.order.to_string());
}

#[test]
fn test_cmd_tree_requires_values() {
    let result = commands::cmd_tree(Vec::<i64>::new(), TraversalOrder::Inorder, None, false);
    assert!(matches!(result, Err(GraphError::InvalidValue(_))));
    assert!(commands::cmd_tree(vec![2, 1, 3], TraversalOrder::Preorder, Some(1), true).is_ok());
}

#[test]
fn test_graph_from_edges() {
    let tokens: Vec<String> = ["a-b", "b-c", "d", "e-f", "a-b"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let (graph, ids) = commands::graph_from_edges(&tokens, SlotConfig::default()).unwrap();

    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.adjacent(ids["a"], ids["b"]));
    assert_eq!(graph.find_connected_components().unwrap().len(), 3);
    assert!(commands::cmd_components(&tokens, SlotConfig::default(), true).is_ok());
}

#[test]
fn test_graph_from_edges_rejects_bad_input() {
    let empty_name = vec!["-b".to_string()];
    assert!(matches!(
        commands::graph_from_edges(&empty_name, SlotConfig::default()),
        Err(GraphError::InvalidValue(_))
    ));

    let self_loop = vec!["a-a".to_string()];
    assert!(matches!(
        commands::graph_from_edges(&self_loop, SlotConfig::default()),
        Err(GraphError::SelfConnection(_))
    ));
}

#[test]
fn test_traversal_order_names() {
    assert_eq!(TraversalOrder::from_name("INORDER"), Some(TraversalOrder::Inorder));
    assert_eq!(TraversalOrder::from_name("pre"), Some(TraversalOrder::Preorder));
    assert_eq!(TraversalOrder::from_name("postorder"), Some(TraversalOrder::Postorder));
    assert_eq!(TraversalOrder::from_name("levelorder"), None);
    assert_eq!(TraversalOrder::Inorder.to_string(), "inorder");
}

// ==================== Configuration Tests ====================

#[test]
fn test_config_load_missing_file() {
    let result = SlotConfig::load(Path::new("/nonexistent/grasple-config.json"));
    assert!(matches!(result, Err(GraphError::Io(_))));
}

#[test]
fn test_config_drives_vertex_growth() {
    let config =
        SlotConfig::from_json_str(r#"{"initial_capacity": 1, "growth": {"linear": {"step": 2}}}"#)
            .unwrap();
    assert_eq!(config.growth, GrowthPolicy::Linear { step: 2 });

    let tokens: Vec<String> = (0..4).map(|i| format!("hub-leaf{}", i)).collect();
    let (graph, ids) = commands::graph_from_edges(&tokens, config).unwrap();
    let hub = graph.vertex(ids["hub"]).unwrap();

    assert_eq!(hub.degree(), 4);
    // 1 -> 3 -> 5
    assert_eq!(hub.capacity(), 5);
    let leaf = graph.vertex(ids["leaf0"]).unwrap();
    assert_eq!(leaf.capacity(), 1);
    assert!(leaf.is_saturated());
}

// ==================== Cross-Module Tests ====================

#[test]
fn test_tree_and_graph_share_neighbor_interface() {
    fn total_degree<G: HasNeighbors>(g: &G, ids: impl Iterator<Item = u64>) -> usize {
        ids.map(|id| g.neighbors(id).len()).sum()
    }

    let tree = LmrTree::from_values([2, 1, 3, 2]).unwrap();
    // Tree links are one-way: every non-root node has exactly one parent
    assert_eq!(total_degree(&tree, 0..tree.node_count() as u64), 3);

    let mut graph = IndexedGraph::new();
    let a = graph.add_vertex(1);
    let b = graph.add_vertex(2);
    graph.connect(a, b).unwrap();
    // Graph links are mirrored
    assert_eq!(total_degree(&graph, 0..2), 2);
    assert!(!graph.has_node(7));
    assert!(tree.has_node(3));
}
