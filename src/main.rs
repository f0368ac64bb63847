use std::fs;

use clap::Parser;
use rayon::prelude::*;

use arbor::error::Error;
use arbor::graph::{format_edge_list, Graph};
use arbor::io;
use arbor::report::{self, Report};
use arbor::solver::{minimum_spanning_tree, MstOutcome};

#[derive(Parser, Debug)]
struct Args {
    /// CSV dataset of instances (id,name,vertices,edges)
    #[arg(long)]
    data_path: Option<String>,

    /// dataset instance id
    #[arg(long)]
    id: Option<usize>,

    /// solve every dataset instance
    #[arg(long)]
    all: bool,

    /// read one instance from stdin: `V E`, then E lines of `s d w`
    #[arg(long)]
    stdin: bool,

    /// vertex count for a generated instance
    #[arg(long)]
    random_vertices: Option<usize>,

    /// edge count for a generated instance
    #[arg(long)]
    random_edges: Option<usize>,

    /// random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// also write the JSON report(s) here, one object per line
    #[arg(long)]
    report_path: Option<String>,
}

enum Mode {
    One { data_path: String, id: usize },
    Batch { data_path: String },
    Stdin,
    Random { vertices: usize, edges: usize },
}

impl Args {
    fn mode(&self) -> Result<Mode, Error> {
        if (self.id.is_some() || self.all) && self.data_path.is_none() {
            return Err(Error::InvalidArgument {
                arg: "id",
                reason: "--id/--all need --data-path".to_owned(),
            });
        }

        let random = self.random_vertices.is_some() || self.random_edges.is_some();
        let chosen = [self.data_path.is_some(), self.stdin, random]
            .iter()
            .filter(|&&flag| flag)
            .count();
        if chosen != 1 {
            return Err(Error::InvalidArgument {
                arg: "mode",
                reason: "choose exactly one of --data-path, --stdin, --random-vertices"
                    .to_owned(),
            });
        }

        if let Some(data_path) = &self.data_path {
            return match (self.id, self.all) {
                (Some(id), false) => Ok(Mode::One { data_path: data_path.clone(), id }),
                (None, true) => Ok(Mode::Batch { data_path: data_path.clone() }),
                _ => Err(Error::InvalidArgument {
                    arg: "data_path",
                    reason: "pass exactly one of --id or --all".to_owned(),
                }),
            };
        }
        if self.stdin {
            return Ok(Mode::Stdin);
        }
        match (self.random_vertices, self.random_edges) {
            (Some(vertices), Some(edges)) => Ok(Mode::Random { vertices, edges }),
            _ => Err(Error::InvalidArgument {
                arg: "random_vertices",
                reason: "--random-vertices and --random-edges go together".to_owned(),
            }),
        }
    }
}

fn dump_stats(graph: &Graph, outcome: &MstOutcome) {
    eprintln!(
        "vertices={} edges={} selected={} cost={} components={}",
        graph.vertices,
        graph.edges.len(),
        outcome.edges.len(),
        outcome.cost,
        outcome.component_count(graph.vertices)
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    match args.mode()? {
        Mode::Batch { data_path } => {
            eprintln!("=== load ===");
            let instances = io::load_all(&data_path)?;
            eprintln!("instances={}", instances.len());

            eprintln!("=== solve ===");
            let solved = instances
                .into_par_iter()
                .map(|(record, graph)| {
                    let outcome = minimum_spanning_tree(graph.vertices, &graph.edges)?;
                    Ok((record, graph, outcome))
                })
                .collect::<Result<Vec<_>, Error>>()?;

            let mut reports = vec![];
            for (record, graph, outcome) in &solved {
                eprintln!("--- id={} {} ---", record.id, record.name);
                dump_stats(graph, outcome);
                eprintln!("{}", report::summary(graph, outcome));
                println!("{}", report::outcome_to_string(outcome));
                reports.push(Report::new(graph, outcome).to_json());
            }

            if let Some(report_path) = &args.report_path {
                fs::write(report_path, reports.join("\n") + "\n")?;
            }
        }
        mode => {
            eprintln!("=== load ===");
            let graph = match mode {
                Mode::One { data_path, id } => io::load(&data_path, id)?,
                Mode::Stdin => io::read_stdin()?,
                Mode::Random { vertices, edges } => {
                    let graph = io::random_graph(vertices, edges, args.seed)?;
                    eprintln!("instance={}", format_edge_list(&graph.edges));
                    graph
                }
                Mode::Batch { .. } => unreachable!(),
            };

            eprintln!("=== solve ===");
            let outcome = minimum_spanning_tree(graph.vertices, &graph.edges)?;
            dump_stats(&graph, &outcome);
            eprintln!("{}", report::summary(&graph, &outcome));
            println!("{}", report::outcome_to_string(&outcome));

            if let Some(report_path) = &args.report_path {
                fs::write(report_path, Report::new(&graph, &outcome).to_json() + "\n")?;
            }
        }
    }

    Ok(())
}
