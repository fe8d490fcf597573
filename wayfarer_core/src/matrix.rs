use rayon::prelude::*;
use tracing::debug;

use crate::{
    distance::{Distance, Kilometers},
    error::RoutingError,
    graph::Graph,
    routing::{dijkstra::Dijkstra, shortest_path_algorithm::ShortestPathAlgorithm},
    stopwatch::Stopwatch,
};

/// Shortest distances from every source to every target. Each cell is an
/// independent query; `None` marks an unreachable target.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    sources: Vec<String>,
    targets: Vec<String>,
    entries: Vec<Vec<Option<Distance<Kilometers>>>>,
}

impl DistanceMatrix {
    /// Runs one row per source in parallel against the shared graph.
    pub fn compute<G, S>(graph: &G, sources: &[S], targets: &[S]) -> Result<Self, RoutingError>
    where
        G: Graph + Sync,
        S: AsRef<str> + Sync,
    {
        for name in sources.iter().chain(targets) {
            let name = name.as_ref();
            if graph.location_id(name).is_none() {
                return Err(RoutingError::UnknownLocation(name.to_string()));
            }
        }

        let stopwatch = Stopwatch::new("matrix/compute");

        let entries = sources
            .par_iter()
            .map(|source| {
                let mut dijkstra = Dijkstra::new(graph);
                targets
                    .iter()
                    .map(|target| {
                        let result =
                            dijkstra.calc_path(graph, source.as_ref(), target.as_ref(), None)?;
                        Ok(result.path.map(|path| path.distance()))
                    })
                    .collect::<Result<Vec<_>, RoutingError>>()
            })
            .collect::<Result<Vec<_>, RoutingError>>()?;

        debug!(
            sources = sources.len(),
            targets = targets.len(),
            "Computed distance matrix"
        );
        stopwatch.report();

        Ok(DistanceMatrix {
            sources: sources.iter().map(|s| s.as_ref().to_string()).collect(),
            targets: targets.iter().map(|s| s.as_ref().to_string()).collect(),
            entries,
        })
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn distance(&self, source_index: usize, target_index: usize) -> Option<Distance<Kilometers>> {
        self.entries[source_index][target_index]
    }

    pub fn row(&self, source_index: usize) -> &[Option<Distance<Kilometers>>] {
        &self.entries[source_index]
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        distance::kilometers,
        test_graph_utils::test_graph::{create_disconnected_graph, create_scenario_graph},
    };

    use super::*;

    #[test]
    fn computes_every_pair() {
        let graph = create_scenario_graph();

        let matrix =
            DistanceMatrix::compute(&graph, &["Bangalore", "Delhi"], &["Hyderabad", "Delhi"])
                .unwrap();

        assert_eq!(matrix.sources(), ["Bangalore", "Delhi"]);
        assert_eq!(matrix.targets(), ["Hyderabad", "Delhi"]);
        assert_eq!(matrix.distance(0, 0), Some(kilometers!(600)));
        assert_eq!(matrix.distance(0, 1), Some(kilometers!(2700)));
        assert_eq!(matrix.distance(1, 0), Some(kilometers!(2100)));
        assert_eq!(matrix.distance(1, 1), Some(Distance::ZERO));
    }

    #[test]
    fn unreachable_cells_are_empty() {
        let graph = create_disconnected_graph();

        let matrix = DistanceMatrix::compute(&graph, &["A"], &["C", "X"]).unwrap();

        assert_eq!(matrix.row(0), [Some(kilometers!(2)), None]);
    }

    #[test]
    fn rejects_unknown_locations_before_searching() {
        let graph = create_scenario_graph();

        let result = DistanceMatrix::compute(&graph, &["Bangalore"], &["Atlantis"]);

        assert_eq!(
            result,
            Err(RoutingError::UnknownLocation(String::from("Atlantis")))
        );
    }
}
