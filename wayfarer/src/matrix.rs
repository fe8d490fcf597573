use clap::Args;
use comfy_table::Table;
use wayfarer_core::matrix::DistanceMatrix;

use crate::network_args::NetworkArgs;

#[derive(Args)]
pub struct MatrixArgs {
    /// Comma separated source locations
    #[arg(short, long, value_delimiter = ',', required = true)]
    sources: Vec<String>,

    /// Comma separated target locations, defaults to the sources
    #[arg(short, long, value_delimiter = ',')]
    targets: Vec<String>,

    #[command(flatten)]
    network: NetworkArgs,
}

pub fn run(args: MatrixArgs) -> Result<(), anyhow::Error> {
    let graph = args.network.load_graph()?;

    let targets = if args.targets.is_empty() {
        &args.sources
    } else {
        &args.targets
    };

    let matrix = DistanceMatrix::compute(&graph, args.sources.as_slice(), targets.as_slice())?;

    println!("{}", render(&matrix));

    Ok(())
}

fn render(matrix: &DistanceMatrix) -> Table {
    let mut table = Table::new();

    let mut header = vec![String::new()];
    header.extend(matrix.targets().iter().cloned());
    table.set_header(header);

    for (source_index, source) in matrix.sources().iter().enumerate() {
        let mut row = vec![source.clone()];
        row.extend(matrix.row(source_index).iter().map(|entry| match entry {
            Some(distance) => distance.to_short_string(),
            None => String::from("unreachable"),
        }));
        table.add_row(row);
    }

    table
}
