use anyhow::bail;
use clap::Args;
use comfy_table::Table;

use crate::network_args::NetworkArgs;

#[derive(Args)]
pub struct NeighborsArgs {
    location: String,

    #[command(flatten)]
    network: NetworkArgs,
}

pub fn run(args: NeighborsArgs) -> Result<(), anyhow::Error> {
    let graph = args.network.load_graph()?;

    if !graph.contains(&args.location) {
        bail!("Unknown location: {}", args.location);
    }

    let mut neighbors = graph.neighbors(&args.location);
    neighbors.sort_by_key(|&(name, distance)| (distance, name));

    let mut table = Table::new();
    table.set_header(vec!["Neighbor", "Distance"]);
    for (name, distance) in neighbors {
        table.add_row(vec![name.to_string(), distance.to_short_string()]);
    }

    println!("{table}");

    Ok(())
}
