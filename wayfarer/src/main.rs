use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{
    locations::LocationsArgs, matrix::MatrixArgs, neighbors::NeighborsArgs, route::RouteArgs,
};

mod locations;
mod matrix;
mod neighbors;
mod network_args;
mod route;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Shortest route between two locations
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// Lists the locations of the network
    Locations {
        #[command(flatten)]
        args: LocationsArgs,
    },
    /// Lists the direct connections of a location
    Neighbors {
        #[command(flatten)]
        args: NeighborsArgs,
    },
    /// Shortest distances between every source and every target
    Matrix {
        #[command(flatten)]
        args: MatrixArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Route { args } => route::run(args)?,
        Commands::Locations { args } => locations::run(args)?,
        Commands::Neighbors { args } => neighbors::run(args)?,
        Commands::Matrix { args } => matrix::run(args)?,
    }

    Ok(())
}
