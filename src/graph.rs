use serde::Serialize;

use crate::error::{Error, Result};

/// Edge weights are signed; negative weights are ordinary input.
pub type Weight = i64;

/// One undirected weighted edge. `(source, destination)` and
/// `(destination, source)` mean the same connection; parallel edges and
/// self-loops are kept as distinct entries until the solver processes
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: usize,
    pub destination: usize,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: usize, destination: usize, weight: Weight) -> Edge {
        Edge { source, destination, weight }
    }
}

/// One problem instance: a vertex count plus the edges between those
/// vertices. Built per computation and discarded afterwards.
#[derive(Debug, Clone)]
pub struct Graph {
    pub vertices: usize,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Builds an instance after checking every endpoint against
    /// `vertices`, so downstream consumers can index freely.
    pub fn new(vertices: usize, edges: Vec<Edge>) -> Result<Graph> {
        check_edges(vertices, &edges)?;
        Ok(Graph { vertices, edges })
    }
}

/// Fails with the first endpoint that falls outside `[0, vertices)`.
pub fn check_edges(vertices: usize, edges: &[Edge]) -> Result<()> {
    for edge in edges {
        for index in [edge.source, edge.destination] {
            if index >= vertices {
                return Err(Error::IndexOutOfBounds {
                    arg: "edges",
                    index,
                    len: vertices,
                });
            }
        }
    }
    Ok(())
}

/// Parses the compact edge notation: `s-d:w` tokens joined by `;`, e.g.
/// `"0-1:10;0-2:6;2-3:4"`. The empty string is an empty edge list.
pub fn parse_edge_list(text: &str) -> Result<Vec<Edge>> {
    if text.is_empty() {
        return Ok(vec![]);
    }
    text.split(';').map(parse_edge).collect()
}

fn parse_edge(token: &str) -> Result<Edge> {
    let invalid = || Error::InvalidArgument {
        arg: "edges",
        reason: format!("malformed edge token `{}`, expected `s-d:w`", token),
    };

    let (endpoints, weight) = token.split_once(':').ok_or_else(invalid)?;
    let (source, destination) = endpoints.split_once('-').ok_or_else(invalid)?;

    Ok(Edge {
        source: source.parse().map_err(|_| invalid())?,
        destination: destination.parse().map_err(|_| invalid())?,
        weight: weight.parse().map_err(|_| invalid())?,
    })
}

/// Inverse of [`parse_edge_list`].
pub fn format_edge_list(edges: &[Edge]) -> String {
    edges
        .iter()
        .map(|edge| format!("{}-{}:{}", edge.source, edge.destination, edge.weight))
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_validates_endpoints() {
        let graph = Graph::new(3, vec![Edge::new(0, 2, 7)]).unwrap();
        assert_eq!(graph.vertices, 3);

        let err = Graph::new(3, vec![Edge::new(0, 3, 7)]).unwrap_err();
        assert_eq!(
            err,
            Error::IndexOutOfBounds { arg: "edges", index: 3, len: 3 }
        );

        // Zero vertices admit no edges at all.
        assert!(Graph::new(0, vec![Edge::new(0, 0, 1)]).is_err());
        assert!(Graph::new(0, vec![]).is_ok());
    }

    #[test]
    fn compact_notation_round_trips() {
        let text = "0-1:10;0-2:6;0-3:5;1-3:15;2-3:4";
        let edges = parse_edge_list(text).unwrap();
        assert_eq!(edges.len(), 5);
        assert_eq!(edges[0], Edge::new(0, 1, 10));
        assert_eq!(format_edge_list(&edges), text);

        assert_eq!(parse_edge_list("").unwrap(), vec![]);
        assert_eq!(format_edge_list(&[]), "");

        assert_eq!(
            parse_edge_list("2-0:-7").unwrap(),
            vec![Edge::new(2, 0, -7)]
        );
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        for text in ["0-1", "0:5", "a-b:c", "0-1:10;;2-3:4", "0-1:2.5"] {
            match parse_edge_list(text).unwrap_err() {
                Error::InvalidArgument { arg, .. } => assert_eq!(arg, "edges"),
                other => panic!("unexpected error {:?}", other),
            }
        }
    }
}
