use std::path::PathBuf;

use clap::Args;
use tracing::{info, warn};
use wayfarer_core::{
    export::route_to_geojson,
    routing::{
        dijkstra::Dijkstra,
        routing_path::RoutingPath,
        shortest_path_algorithm::{ShortestPathAlgorithm, ShortestPathOptions},
    },
};

use crate::network_args::NetworkArgs;

#[derive(Args)]
pub struct RouteArgs {
    /// Starting location
    from: String,

    /// Destination
    to: String,

    #[command(flatten)]
    network: NetworkArgs,

    /// Write the route as a GeoJSON feature to this file
    #[arg(long)]
    geojson: Option<PathBuf>,

    /// Also print the locations settled by the search
    #[arg(long)]
    debug_info: bool,
}

pub fn run(args: RouteArgs) -> Result<(), anyhow::Error> {
    let graph = args.network.load_graph()?;

    let mut dijkstra = Dijkstra::new(&graph);
    let result = dijkstra.calc_path(
        &graph,
        &args.from,
        &args.to,
        Some(ShortestPathOptions {
            include_debug_info: Some(args.debug_info),
        }),
    )?;

    if let Some(debug) = &result.debug {
        println!("Settled: {}", debug.visited_locations.join(", "));
    }

    let Some(path) = result.path else {
        warn!(from = %args.from, to = %args.to, "No route found");
        println!("No route between {} and {}", args.from, args.to);
        return Ok(());
    };

    println!("{}", format_route(&path));

    if let Some(out) = args.geojson {
        let feature = route_to_geojson(&graph, &path)?;

        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&out, serde_json::to_string_pretty(&feature)?)?;
        info!("Route written to {:?}", out);
    }

    Ok(())
}

fn format_route(path: &RoutingPath) -> String {
    format!(
        "Recommended route: {}\nEstimated travel distance: {}",
        path.locations().join(" ➝ "),
        path.distance().to_short_string()
    )
}
