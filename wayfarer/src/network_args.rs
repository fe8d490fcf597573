use std::path::PathBuf;

use clap::Args;
use tracing::info;
use wayfarer_core::{graph::GraphStore, network::RoadNetwork};

const NETWORK_ENV_VAR: &str = "WAYFARER_NETWORK";

#[derive(Args)]
pub struct NetworkArgs {
    /// Road network JSON file. Defaults to $WAYFARER_NETWORK, then to the
    /// built-in India road network.
    #[arg(short, long)]
    network: Option<PathBuf>,
}

impl NetworkArgs {
    fn network_path(&self) -> Option<PathBuf> {
        self.network
            .clone()
            .or_else(|| std::env::var_os(NETWORK_ENV_VAR).map(PathBuf::from))
    }

    pub fn load_graph(&self) -> Result<GraphStore, anyhow::Error> {
        let network = match self.network_path() {
            Some(path) => RoadNetwork::from_file(&path)?,
            None => {
                info!("Using the built-in India road network");
                RoadNetwork::india()
            }
        };

        Ok(network.into_graph()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_network_wins() {
        let args = NetworkArgs {
            network: Some(PathBuf::from("roads.json")),
        };

        assert_eq!(args.network_path(), Some(PathBuf::from("roads.json")));
    }

    #[test]
    fn loads_fixture_network() {
        let args = NetworkArgs {
            network: Some(
                PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                    .join("../wayfarer_core/tests/fixtures/network.json"),
            ),
        };

        let graph = args.load_graph().unwrap();
        assert!(graph.contains("Toulouse"));
    }
}
