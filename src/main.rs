use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use serde::Serialize;

// 导入库模块
use graphpath::common::ThreadPool;
use graphpath::config::Config;
use graphpath::graph::{GraphDefinition, NodeId};
use graphpath::utils::logging;
use graphpath::{Algorithm, Cost, GraphPathResult};

#[derive(Parser)]
#[clap(version = "0.1.0", author = "GraphPath Contributors")]
enum Cli {
    /// Compute the shortest path between two nodes
    Path {
        /// Graph definition file (.json or .toml)
        #[clap(short, long)]
        graph: PathBuf,
        #[clap(short, long)]
        source: NodeId,
        #[clap(short, long)]
        target: NodeId,
        #[clap(short, long, value_enum, default_value_t = Algorithm::Dijkstra)]
        algorithm: Algorithm,
        /// Optional configuration file
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct PathReport {
    algorithm: Algorithm,
    source: NodeId,
    target: NodeId,
    reachable: bool,
    cost: Option<i64>,
    path: Vec<NodeId>,
}

fn main() -> GraphPathResult<()> {
    let cli = Cli::parse();

    match cli {
        Cli::Path {
            graph,
            source,
            target,
            algorithm,
            config,
        } => {
            let config = match config {
                Some(path) => Config::load(path)?,
                None => Config::default(),
            };
            logging::init(&config.log)?;

            let definition: GraphDefinition<i64> = GraphDefinition::load(&graph)?;
            let graph = Arc::new(definition.build()?);
            log::info!(
                "Loaded graph with {} nodes and {} edges",
                graph.len(),
                graph.edge_count()
            );

            let pool = Arc::new(ThreadPool::from_config(&config.pool));
            let strategy = algorithm.strategy::<i64>(&pool);
            let (path, cost) = strategy.shortest_path(&graph, source, target)?;

            let reachable = cost.is_finite_cost();
            let report = PathReport {
                algorithm,
                source,
                target,
                reachable,
                cost: reachable.then_some(cost),
                path: if reachable { path } else { Vec::new() },
            };
            println!("{}", serde_json::to_string_pretty(&report)?);

            logging::shutdown();
        }
    }

    Ok(())
}
