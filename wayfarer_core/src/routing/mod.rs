pub mod dijkstra;
pub mod routing_path;
pub mod shortest_path_algorithm;

use crate::{error::RoutingError, graph::Graph};

use self::{
    dijkstra::Dijkstra, routing_path::RoutingPath, shortest_path_algorithm::ShortestPathAlgorithm,
};

/// Shortest path between two named locations.
///
/// Returns `Ok(None)` when both locations exist but `target` cannot be
/// reached from `source`. Equal `source` and `target` yield the single
/// location path with a zero distance.
pub fn find_shortest_path(
    graph: &impl Graph,
    source: &str,
    target: &str,
) -> Result<Option<RoutingPath>, RoutingError> {
    let mut dijkstra = Dijkstra::new(graph);
    let result = dijkstra.calc_path(graph, source, target, None)?;
    Ok(result.path)
}
