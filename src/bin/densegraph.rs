//! Runs one query over a graph described on the command line.
//!
//! ```sh
//! densegraph --edge A,B,1 --edge B,C,2 --edge A,C,10 --from A --to C
//! ```

use std::process;
use std::str::FromStr;

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, ValueEnum};
use log::LevelFilter;

use densegraph::algorithm::{report::render_order, *};
use densegraph::graph::*;
use densegraph::GraphResult;

#[derive(Parser)]
#[command(
    name = "densegraph",
    about = "Shortest paths and traversals over a weighted directed graph"
)]
struct Cli {
    /// Directed edge as FROM,TO,WEIGHT (repeatable)
    #[arg(long = "edge", value_name = "FROM,TO,WEIGHT")]
    edges: Vec<EdgeArg>,

    /// Edge in both directions as A,B,WEIGHT (repeatable)
    #[arg(long = "both", value_name = "A,B,WEIGHT")]
    both: Vec<EdgeArg>,

    /// Algorithm to run
    #[arg(long, value_enum, default_value_t = Algorithm::Dijkstra)]
    algorithm: Algorithm,

    /// Source vertex
    #[arg(long)]
    from: String,

    /// Target vertex; without it every reachable vertex is reported
    #[arg(long)]
    to: Option<String>,

    /// Accept negative weights
    #[arg(long)]
    allow_negative: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Dijkstra,
    BellmanFord,
    Bfs,
    Dfs,
}

#[derive(Debug, Clone)]
struct EdgeArg {
    from: String,
    to: String,
    weight: Weight,
}

impl FromStr for EdgeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<_> = s.splitn(3, ',').map(str::trim).collect();
        let [from, to, weight] = parts.as_slice() else {
            return Err(format!("expected FROM,TO,WEIGHT, got {s:?}"));
        };
        let weight = weight
            .parse::<Weight>()
            .map_err(|e| format!("bad weight {weight:?}: {e}"))?;
        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        })
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(&cli, &ordered_edges(&cli, &matches)) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// `--edge` and `--both` entries, merged back into command-line order.
/// The flag is `true` for `--both`.
fn ordered_edges<'a>(cli: &'a Cli, matches: &ArgMatches) -> Vec<(&'a EdgeArg, bool)> {
    let indexed = |id: &str| matches.indices_of(id).into_iter().flatten();
    let mut res: Vec<_> = indexed("edges")
        .zip(cli.edges.iter().map(|e| (e, false)))
        .chain(indexed("both").zip(cli.both.iter().map(|e| (e, true))))
        .collect();
    res.sort_by_key(|(i, _)| *i);
    res.into_iter().map(|(_, e)| e).collect()
}

fn run(cli: &Cli, edges: &[(&EdgeArg, bool)]) -> GraphResult<String> {
    let policy = if cli.allow_negative {
        WeightPolicy::Unrestricted
    } else {
        WeightPolicy::NonNegative
    };
    let mut graph = WeightedGraph::<DenseMatrixGraph>::with_policy(policy);
    for (e, both) in edges.iter() {
        if *both {
            graph.add_bidirectional_edge(&e.from, &e.to, e.weight)?;
        } else {
            graph.add_edge(&e.from, &e.to, e.weight)?;
        }
    }
    log::debug!(
        "graph with {} vertices and {} edges:\n{:?}",
        graph.vertex_size(),
        graph.edge_size(),
        graph
    );

    let source = cli.from.as_str();
    let out = match (cli.algorithm, cli.to.as_deref()) {
        (Algorithm::Dijkstra, Some(target)) => graph.dijkstra_to(source, target).to_string(),
        (Algorithm::Dijkstra, None) => graph.dijkstra(source).to_string(),
        (Algorithm::BellmanFord, Some(target)) => {
            graph.bellman_ford_to(source, target)?.to_string()
        }
        (Algorithm::BellmanFord, None) => graph.bellman_ford(source)?.to_string(),
        (Algorithm::Bfs, Some(target)) => graph.bfs_to(source, target).to_string(),
        (Algorithm::Bfs, None) => graph.bfs(source).to_string(),
        (Algorithm::Dfs, _) => format!("{}\n", render_order(&graph.dfs(source))),
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use densegraph::GraphError;

    fn query(args: &[&str]) -> GraphResult<String> {
        let matches = Cli::command()
            .try_get_matches_from(std::iter::once("densegraph").chain(args.iter().copied()))
            .unwrap();
        let cli = Cli::from_arg_matches(&matches).unwrap();
        run(&cli, &ordered_edges(&cli, &matches))
    }

    #[test]
    fn edge_arg_trims_whitespace() {
        let e: EdgeArg = " A , B , 2.5 ".parse().unwrap();
        assert_eq!(e.from, "A");
        assert_eq!(e.to, "B");
        assert_eq!(e.weight, 2.5);
    }

    #[test]
    fn edge_arg_needs_three_parts() {
        assert!("A,B".parse::<EdgeArg>().is_err());
        assert!("".parse::<EdgeArg>().is_err());
    }

    #[test]
    fn edge_arg_bad_weight() {
        let err = "A,B,heavy".parse::<EdgeArg>().unwrap_err();
        assert!(err.contains("heavy"));
        assert!("A,B,1,2".parse::<EdgeArg>().is_err());
    }

    #[test]
    fn edges_inserted_in_command_line_order() {
        let out = query(&[
            "--both", "A,C,10", "--edge", "C,B,1", "--algorithm", "dfs", "--from", "C",
        ])
        .unwrap();
        assert_eq!(out, "C -> A -> B\n");
        let out = query(&[
            "--edge", "C,B,1", "--both", "A,C,10", "--algorithm", "dfs", "--from", "C",
        ])
        .unwrap();
        assert_eq!(out, "C -> B -> A\n");
    }

    #[test]
    fn negative_weight_needs_flag() {
        let args = ["--edge", "A,B,-1", "--algorithm", "bellman-ford", "--from", "A", "--to", "B"];
        assert!(matches!(query(&args), Err(GraphError::InvalidWeight { .. })));
        let mut relaxed = args.to_vec();
        relaxed.push("--allow-negative");
        assert_eq!(query(&relaxed).unwrap(), "distance: -1.00\n  0: A\n  1: B\n");
    }
}
