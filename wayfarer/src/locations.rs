use clap::Args;
use comfy_table::Table;

use crate::network_args::NetworkArgs;

#[derive(Args)]
pub struct LocationsArgs {
    #[command(flatten)]
    network: NetworkArgs,
}

pub fn run(args: LocationsArgs) -> Result<(), anyhow::Error> {
    let graph = args.network.load_graph()?;

    let mut table = Table::new();
    table.set_header(vec!["Location", "Latitude", "Longitude", "Connections"]);

    for location in graph.locations() {
        let (lat, lng) = match location.coordinates() {
            Some(point) => (point.lat.to_string(), point.lng.to_string()),
            None => (String::from("-"), String::from("-")),
        };
        let connections = graph.neighbors(location.name()).len();

        table.add_row(vec![
            location.name().to_string(),
            lat,
            lng,
            connections.to_string(),
        ]);
    }

    println!("{table}");

    Ok(())
}
