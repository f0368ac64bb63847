use serde::Serialize;

use crate::graph::{format_edge_list, Edge, Graph, Weight};
use crate::solver::MstOutcome;
use crate::union_find::UnionFind;

/// The stdout payload: selected edges in compact notation, in selection
/// order.
pub fn outcome_to_string(outcome: &MstOutcome) -> String {
    format_edge_list(&outcome.edges)
}

/// Machine-readable account of one solved instance.
#[derive(Debug, Serialize)]
pub struct Report {
    pub vertices: usize,
    pub edge_count: usize,
    pub selected: Vec<Edge>,
    pub cost: Weight,
    pub components: usize,
    pub spanning: bool,
}

impl Report {
    pub fn new(graph: &Graph, outcome: &MstOutcome) -> Report {
        Report {
            vertices: graph.vertices,
            edge_count: graph.edges.len(),
            selected: outcome.edges.clone(),
            cost: outcome.cost,
            components: outcome.component_count(graph.vertices),
            spanning: outcome.is_spanning(graph.vertices),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}

/// Human-readable block for stderr: one line per kept edge, the total
/// cost, and the forest structure when the instance is disconnected.
pub fn summary(graph: &Graph, outcome: &MstOutcome) -> String {
    let mut lines = vec![];
    for edge in &outcome.edges {
        lines.push(format!(
            "keep {}-{} at {}",
            edge.source, edge.destination, edge.weight
        ));
    }
    lines.push(format!("cost={}", outcome.cost));

    if outcome.is_spanning(graph.vertices) {
        lines.push("spanning tree".to_owned());
    } else {
        lines.push(format!(
            "spanning forest ({} components)",
            outcome.component_count(graph.vertices)
        ));
        let mut components = UnionFind::new(graph.vertices);
        for edge in &outcome.edges {
            components.union(edge.source, edge.destination);
        }
        for group in components.components() {
            lines.push(format!("  {:?}", group));
        }
    }

    lines.join("\n")
}
