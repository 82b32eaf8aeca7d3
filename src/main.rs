use clap::Parser;

use routegraph::config::{Config, OutputFormat};
use routegraph::core::error::{GraphError, GraphResult};
use routegraph::graph::reader;
use routegraph::services::planner::{PlannedRoute, RoutePlanner};
use routegraph::utils::logging;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "RouteGraph Contributors")]
enum Cli {
    /// Compute shortest routes over a graph description file
    Route {
        /// Graph file: vertex count, edge count, then edge triples
        #[clap(short, long)]
        graph: String,
        /// Source vertex
        #[clap(short, long, default_value_t = 0)]
        source: usize,
        /// Destination vertex; all destinations when omitted
        #[clap(short, long)]
        destination: Option<usize>,
        /// Output format (overrides the config default)
        #[clap(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Optional TOML config file
        #[clap(short, long)]
        config: Option<String>,
    },
}

fn main() {
    let result = run();
    logging::shutdown();
    if let Err(err) = result {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> GraphResult<()> {
    let cli = Cli::parse();
    match cli {
        Cli::Route {
            graph,
            source,
            destination,
            format,
            config,
        } => {
            let config = match config {
                Some(path) => Config::load(path)?,
                None => Config::default(),
            };
            logging::init(&config)?;
            let format = format.unwrap_or(config.output.format);

            let graph = reader::from_path(&graph)?;
            log::info!(
                "loaded graph: {} vertices, {} edges",
                graph.vertex_count(),
                graph.edge_count()
            );

            let routes = match destination {
                Some(dest) => vec![RoutePlanner::plan(&graph, source, dest)?],
                None => RoutePlanner::plan_all(&graph, source)?.routes,
            };

            match format {
                OutputFormat::Json => {
                    let rendered = serde_json::to_string_pretty(&routes)
                        .map_err(|e| GraphError::Serialization(e.to_string()))?;
                    println!("{}", rendered);
                }
                OutputFormat::Text => {
                    for planned in &routes {
                        print_route(planned);
                    }
                }
            }
        }
    }
    Ok(())
}

fn print_route(planned: &PlannedRoute) {
    match planned.distance {
        Some(distance) => println!(
            "Destination {} - Route: {}, Distance: {}",
            planned.destination, planned.route, distance
        ),
        None => println!("Destination {} - Unreachable", planned.destination),
    }
}
