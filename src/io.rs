use std::fs::File;
use std::io::Read;

use csv::ReaderBuilder;
use proconio::input;
use proconio::source::once::OnceSource;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::graph::{parse_edge_list, Edge, Graph, Weight};

/// One dataset row. `edges` stays in compact notation until
/// [`GraphRecord::to_graph`] turns the row into a validated instance.
#[derive(Deserialize, Debug, Clone)]
pub struct GraphRecord {
    pub id: usize,
    pub name: String,
    vertices: i64,
    edges: String,
}

impl GraphRecord {
    /// The `vertices` field is carried as `i64` so a negative count in a
    /// dataset is rejected here rather than wrapping around.
    pub fn to_graph(&self) -> Result<Graph> {
        if self.vertices < 0 {
            return Err(Error::InvalidArgument {
                arg: "vertices",
                reason: format!("vertex count {} is negative", self.vertices),
            });
        }
        Graph::new(self.vertices as usize, parse_edge_list(&self.edges)?)
    }
}

/// Reads a dataset file of `id,name,vertices,edges` rows (header required).
pub fn read_records(data_path: &str) -> Result<Vec<GraphRecord>> {
    let mut file = File::open(data_path).expect("Failed to open data_path");
    let mut data = String::new();
    file.read_to_string(&mut data).expect("Failed to read data file");
    records_from_str(&data)
}

pub fn records_from_str(data: &str) -> Result<Vec<GraphRecord>> {
    let mut reader = ReaderBuilder::new().from_reader(data.as_bytes());
    let mut records = vec![];
    for result in reader.deserialize() {
        let record: GraphRecord = result.map_err(|err| Error::InvalidArgument {
            arg: "data_path",
            reason: err.to_string(),
        })?;
        records.push(record);
    }
    Ok(records)
}

pub fn select_record<'a>(
    records: &'a [GraphRecord],
    target_id: usize,
) -> Result<&'a GraphRecord> {
    records
        .iter()
        .find(|record| record.id == target_id)
        .ok_or_else(|| Error::InvalidArgument {
            arg: "id",
            reason: format!("no instance with id {}", target_id),
        })
}

/// Loads one dataset instance by id.
pub fn load(data_path: &str, target_id: usize) -> Result<Graph> {
    let records = read_records(data_path)?;
    select_record(&records, target_id)?.to_graph()
}

/// Loads every dataset instance, in file order.
pub fn load_all(data_path: &str) -> Result<Vec<(GraphRecord, Graph)>> {
    read_records(data_path)?
        .into_iter()
        .map(|record| {
            let graph = record.to_graph()?;
            Ok((record, graph))
        })
        .collect()
}

/// Reads one instance in the competitive format: `V E` followed by `E`
/// whitespace-separated `s d w` triples.
pub fn read_stdin() -> Result<Graph> {
    let stdin = std::io::stdin();
    from_source(OnceSource::new(stdin.lock()))
}

fn from_source<R: std::io::BufRead>(source: OnceSource<R>) -> Result<Graph> {
    input! {
        from source,
        vertices: usize,
        edge_count: usize,
        raw: [(usize, usize, Weight); edge_count],
    }

    let edges = raw.into_iter().map(|(s, d, w)| Edge::new(s, d, w)).collect();
    Graph::new(vertices, edges)
}

/// Draws a reproducible random instance: endpoints uniform over the
/// vertex range (self-loops and duplicates allowed), weights uniform
/// over a small signed range.
pub fn random_graph(vertices: usize, edges: usize, seed: u64) -> Result<Graph> {
    if vertices == 0 && edges > 0 {
        return Err(Error::InvalidArgument {
            arg: "random_edges",
            reason: format!("{} edges requested over zero vertices", edges),
        });
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let edges = (0..edges)
        .map(|_| {
            Edge::new(
                rng.gen_range(0..vertices),
                rng.gen_range(0..vertices),
                rng.gen_range(-10..=100),
            )
        })
        .collect();
    Graph::new(vertices, edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = "\
id,name,vertices,edges
1,classic,4,0-1:10;0-2:6;0-3:5;1-3:15;2-3:4
2,lonely,1,
3,split,3,0-1:5
4,parallel,2,0-1:3;0-1:7
";

    #[test]
    fn dataset_rows_become_validated_instances() {
        let records = records_from_str(DATA).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].name, "classic");

        let graph = records[0].to_graph().unwrap();
        assert_eq!(graph.vertices, 4);
        assert_eq!(graph.edges.len(), 5);
        assert_eq!(graph.edges[4], Edge::new(2, 3, 4));

        // A row with an empty edges field.
        let graph = records[1].to_graph().unwrap();
        assert_eq!(graph.vertices, 1);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn unknown_ids_are_reported() {
        let records = records_from_str(DATA).unwrap();
        assert_eq!(select_record(&records, 3).unwrap().name, "split");
        match select_record(&records, 9).unwrap_err() {
            Error::InvalidArgument { arg, .. } => assert_eq!(arg, "id"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn negative_vertex_counts_are_rejected() {
        let records =
            records_from_str("id,name,vertices,edges\n7,broken,-3,\n").unwrap();
        match records[0].to_graph().unwrap_err() {
            Error::InvalidArgument { arg, .. } => assert_eq!(arg, "vertices"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn rows_with_out_of_range_edges_fail_validation() {
        let records =
            records_from_str("id,name,vertices,edges\n8,oob,2,0-2:1\n").unwrap();
        assert!(records[0].to_graph().is_err());
    }

    #[test]
    fn competitive_format_reads_a_whole_instance() {
        let graph =
            from_source(OnceSource::from("4 5\n0 1 10\n0 2 6\n0 3 5\n1 3 15\n2 3 4\n"))
                .unwrap();
        assert_eq!(graph.vertices, 4);
        assert_eq!(graph.edges[0], Edge::new(0, 1, 10));
        assert_eq!(graph.edges[4], Edge::new(2, 3, 4));

        let graph = from_source(OnceSource::from("1 0\n")).unwrap();
        assert_eq!(graph.vertices, 1);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn generator_is_reproducible_and_in_range() {
        let a = random_graph(6, 12, 7).unwrap();
        let b = random_graph(6, 12, 7).unwrap();
        assert_eq!(a.edges, b.edges);
        assert_eq!(a.edges.len(), 12);
        for edge in &a.edges {
            assert!(edge.source < 6 && edge.destination < 6);
            assert!((-10..=100).contains(&edge.weight));
        }

        let c = random_graph(6, 12, 8).unwrap();
        assert_ne!(a.edges, c.edges);

        assert!(random_graph(0, 0, 42).unwrap().edges.is_empty());
        match random_graph(0, 3, 42).unwrap_err() {
            Error::InvalidArgument { arg, .. } => assert_eq!(arg, "random_edges"),
            other => panic!("unexpected error {:?}", other),
        }
    }
}
