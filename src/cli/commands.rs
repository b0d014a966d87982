//! CLI command implementations.

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;

use crate::graph::IndexedGraph;
use crate::tree::{LmrTree, TraversalOrder};
use crate::types::{GraphError, GraphResult, SlotConfig};

/// Fixed banner printed by `grasple banner`.
pub const BANNER: &str = "grasple: graphs, indexed connections and LMR search trees";

/// Print the banner.
pub fn cmd_banner() -> GraphResult<()> {
    println!("{}", BANNER);
    Ok(())
}

/// Parse raw CLI tokens into values.
pub fn parse_values<T: FromStr>(raw: &[String]) -> GraphResult<Vec<T>> {
    raw.iter()
        .map(|token| {
            token
                .trim()
                .parse::<T>()
                .map_err(|_| GraphError::InvalidValue(format!("cannot parse '{}'", token)))
        })
        .collect()
}

/// Summary of an LMR tree built from the command line.
#[derive(Debug, Serialize)]
pub struct TreeReport<'a, T> {
    pub order: TraversalOrder,
    pub values: Vec<&'a T>,
    pub nodes: usize,
    pub height: usize,
    pub matches: Option<usize>,
}

/// Describe a tree in the given order, optionally counting matches for `find`.
pub fn tree_report<'a, T: Ord>(
    tree: &'a LmrTree<T>,
    order: TraversalOrder,
    find: Option<&T>,
) -> TreeReport<'a, T> {
    TreeReport {
        order,
        values: tree.values(order),
        nodes: tree.node_count(),
        height: tree.height(),
        matches: find.map(|v| tree.find_all(v).len()),
    }
}

/// Build a tree and print its traversal.
pub fn cmd_tree<T>(
    values: Vec<T>,
    order: TraversalOrder,
    find: Option<T>,
    json: bool,
) -> GraphResult<()>
where
    T: Ord + Display + Serialize,
{
    let tree = LmrTree::from_values(values)?;
    let report = tree_report(&tree, order, find.as_ref());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let rendered: Vec<String> = report.values.iter().map(|v| v.to_string()).collect();
        println!("Order: {}", report.order);
        println!("Values: {}", rendered.join(" "));
        println!("Nodes: {}", report.nodes);
        println!("Height: {}", report.height);
        if let (Some(count), Some(value)) = (report.matches, find.as_ref()) {
            println!("Matches for {}: {}", value, count);
        }
    }
    Ok(())
}

/// Build a string-labelled graph from `a-b` edge tokens and lone `a` vertices.
pub fn graph_from_edges(
    tokens: &[String],
    config: SlotConfig,
) -> GraphResult<(IndexedGraph<String>, HashMap<String, u64>)> {
    let mut graph = IndexedGraph::with_config(config)?;
    let mut ids: HashMap<String, u64> = HashMap::new();

    let mut vertex = |graph: &mut IndexedGraph<String>, name: &str| -> GraphResult<u64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GraphError::InvalidValue("empty vertex name".to_string()));
        }
        if let Some(&id) = ids.get(name) {
            return Ok(id);
        }
        let id = graph.add_vertex(name.to_string());
        ids.insert(name.to_string(), id);
        Ok(id)
    };

    for token in tokens {
        match token.split_once('-') {
            Some((a, b)) => {
                let a = vertex(&mut graph, a)?;
                let b = vertex(&mut graph, b)?;
                graph.connect(a, b)?;
            }
            None => {
                vertex(&mut graph, token)?;
            }
        }
    }

    Ok((graph, ids))
}

/// Print one representative per connected component.
pub fn cmd_components(tokens: &[String], config: SlotConfig, json: bool) -> GraphResult<()> {
    let (graph, _) = graph_from_edges(tokens, config)?;
    let representatives = graph.find_connected_components()?;
    let names: Vec<&str> = representatives
        .iter()
        .filter_map(|&id| graph.vertex(id).map(|v| v.get().as_str()))
        .collect();

    if json {
        let info = serde_json::json!({
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "components": names.len(),
            "representatives": names,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("Components: {}", names.len());
        for name in names {
            println!("  {}", name);
        }
    }
    Ok(())
}
