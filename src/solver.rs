use crate::error::Result;
use crate::graph::{check_edges, Edge, Weight};
use crate::union_find::UnionFind;

/// Edges kept by one run of Kruskal's algorithm plus their summed weight.
///
/// `edges` is in selection order (ascending weight). It holds fewer than
/// `vertices - 1` entries exactly when the input was disconnected, in
/// which case the selection is a minimum spanning forest rather than a
/// tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MstOutcome {
    pub edges: Vec<Edge>,
    pub cost: Weight,
}

impl MstOutcome {
    /// Connected components left behind by the selection. `vertices` must
    /// be the vertex count this outcome was computed from.
    pub fn component_count(&self, vertices: usize) -> usize {
        vertices - self.edges.len()
    }

    /// Whether the selection ties all `vertices` into a single tree.
    /// Vacuously true for zero or one vertex.
    pub fn is_spanning(&self, vertices: usize) -> bool {
        self.component_count(vertices) <= 1
    }
}

/// Kruskal's algorithm: minimum spanning tree of an undirected weighted
/// edge list, or minimum spanning forest when the input is disconnected.
///
/// Pure: no I/O and no shared state. Each call validates its input, sorts
/// its own copy of `edges` by ascending weight (stable, so equal weights
/// fall back on input order), and unions endpoints in that order,
/// stopping as soon as `vertices - 1` edges are kept. Self-loops and
/// duplicate edges are skipped as cycle-forming; negative weights are
/// summed as-is. Identical inputs always give identical outcomes.
///
/// # Errors
///
/// `Error::IndexOutOfBounds` when an endpoint falls outside
/// `[0, vertices)`, raised before anything is mutated. A zero-vertex
/// instance short-circuits to the empty outcome without looking at the
/// edges.
pub fn minimum_spanning_tree(vertices: usize, edges: &[Edge]) -> Result<MstOutcome> {
    if vertices == 0 {
        return Ok(MstOutcome { edges: vec![], cost: 0 });
    }
    check_edges(vertices, edges)?;

    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|edge| edge.weight);

    let target = vertices - 1;
    let mut components = UnionFind::new(vertices);
    let mut kept = Vec::with_capacity(target);
    let mut cost: Weight = 0;

    for edge in sorted {
        if kept.len() == target {
            break;
        }
        if components.union(edge.source, edge.destination) {
            cost += edge.weight;
            kept.push(edge);
        }
    }

    Ok(MstOutcome { edges: kept, cost })
}
