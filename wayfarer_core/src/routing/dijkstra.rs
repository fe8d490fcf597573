use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::FxHashMap;
use tracing::{debug, trace};

use crate::{
    distance::{Distance, Kilometers},
    error::RoutingError,
    graph::{ConnectionId, Graph},
    location::LocationId,
    stopwatch::Stopwatch,
};

use super::{
    routing_path::{RoutingPath, RoutingPathLeg},
    shortest_path_algorithm::{
        ShortestPathAlgorithm, ShortestPathDebugInfo, ShortestPathOptions, ShortestPathResult,
    },
};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
struct HeapItem {
    location: LocationId,
    weight: Distance<Kilometers>,
    /// Number of connections from the source
    hops: usize,
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip everything to make this a min-heap
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.hops.cmp(&self.hops))
            .then_with(|| other.location.cmp(&self.location))
    }
}

struct NodeData {
    settled: bool,
    weight: Distance<Kilometers>,
    hops: usize,
    /// Predecessor and the connection used to reach this location from it
    parent: Option<(LocationId, ConnectionId)>,
}

impl NodeData {
    /// Whether reaching the location with `weight` in `hops` from `parent`
    /// beats what is recorded. Ties on weight go to fewer hops, then to
    /// the predecessor whose name sorts first.
    fn is_improved_by(&self, weight: Distance<Kilometers>, hops: usize, parent: LocationId) -> bool {
        let current_parent = self.parent.map(|(location, _)| location);
        (weight, hops, Some(parent)) < (self.weight, self.hops, current_parent)
    }
}

/// Uniform-cost search with lazy deletion: a location may sit in the heap
/// several times, only its first pop counts, later pops are discarded.
///
/// Each instance holds its own frontier and can be reused for successive
/// queries on the same thread.
pub struct Dijkstra {
    heap: BinaryHeap<HeapItem>,
    data: FxHashMap<LocationId, NodeData>,

    debug_visited_locations: Option<Vec<LocationId>>,
}

impl Dijkstra {
    pub fn new(graph: &impl Graph) -> Self {
        let capacity = graph.location_count().min(1024);
        Dijkstra {
            heap: BinaryHeap::with_capacity(capacity),
            data: FxHashMap::default(),
            debug_visited_locations: None,
        }
    }

    fn init(&mut self, start: LocationId, include_debug_info: bool) {
        self.heap.clear();
        self.data.clear();
        self.debug_visited_locations = include_debug_info.then(Vec::new);

        self.heap.push(HeapItem {
            location: start,
            weight: Distance::ZERO,
            hops: 0,
        });
        self.data.insert(
            start,
            NodeData {
                settled: false,
                weight: Distance::ZERO,
                hops: 0,
                parent: None,
            },
        );
    }

    #[inline(always)]
    fn is_settled(&self, location: LocationId) -> bool {
        self.data.get(&location).is_some_and(|data| data.settled)
    }

    fn set_settled(&mut self, location: LocationId) {
        if let Some(data) = self.data.get_mut(&location) {
            data.settled = true;
        }
    }

    /// Records the tentative weight of `location` if it improves on the
    /// current one. Returns whether it did.
    fn relax(
        &mut self,
        location: LocationId,
        weight: Distance<Kilometers>,
        hops: usize,
        parent: LocationId,
        connection: ConnectionId,
    ) -> bool {
        match self.data.get_mut(&location) {
            Some(data) if !data.is_improved_by(weight, hops, parent) => false,
            Some(data) => {
                data.weight = weight;
                data.hops = hops;
                data.parent = Some((parent, connection));
                true
            }
            None => {
                self.data.insert(
                    location,
                    NodeData {
                        settled: false,
                        weight,
                        hops,
                        parent: Some((parent, connection)),
                    },
                );
                true
            }
        }
    }

    fn build_path(&self, graph: &impl Graph, end: LocationId) -> RoutingPath {
        let mut legs: Vec<RoutingPathLeg> = Vec::new();

        let mut location = end;
        while let Some((parent, connection_id)) =
            self.data.get(&location).and_then(|data| data.parent)
        {
            legs.push(RoutingPathLeg::new(
                graph.location(parent).name().to_string(),
                graph.location(location).name().to_string(),
                graph.connection(connection_id).distance(),
            ));
            location = parent;
        }

        legs.reverse();

        RoutingPath::new(graph.location(location).name().to_string(), legs)
    }

    fn debug_info(&self, graph: &impl Graph) -> Option<ShortestPathDebugInfo> {
        let visited = self.debug_visited_locations.as_ref()?;
        Some(ShortestPathDebugInfo {
            visited_locations: visited
                .iter()
                .map(|&location| graph.location(location).name().to_string())
                .collect(),
        })
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn calc_path(
        &mut self,
        graph: &impl Graph,
        source: &str,
        target: &str,
        options: Option<ShortestPathOptions>,
    ) -> Result<ShortestPathResult, RoutingError> {
        let stopwatch = Stopwatch::new("dijkstra/calc_path");

        let start = graph
            .location_id(source)
            .ok_or_else(|| RoutingError::UnknownLocation(source.to_string()))?;
        let end = graph
            .location_id(target)
            .ok_or_else(|| RoutingError::UnknownLocation(target.to_string()))?;

        let include_debug_info: bool = options
            .and_then(|options| options.include_debug_info)
            .unwrap_or(false);

        self.init(start, include_debug_info);

        let mut iterations = 0;
        let mut settled = 0;

        while let Some(HeapItem {
            location,
            weight,
            hops,
        }) = self.heap.pop()
        {
            iterations += 1;

            // Stale entry, the location was already finalized with a lower key
            if self.is_settled(location) {
                continue;
            }

            self.set_settled(location);
            settled += 1;
            trace!(location = graph.location(location).name(), %weight, "settled");

            if let Some(visited) = self.debug_visited_locations.as_mut() {
                visited.push(location);
            }

            if location == end {
                break;
            }

            for connection_id in graph.location_edges_iter(location) {
                let connection = graph.connection(connection_id);
                let adj_location = connection.adj_location(location);

                if self.is_settled(adj_location) {
                    continue;
                }

                let next_weight = weight + connection.distance();
                let next_hops = hops + 1;

                if self.relax(adj_location, next_weight, next_hops, location, connection_id) {
                    self.heap.push(HeapItem {
                        location: adj_location,
                        weight: next_weight,
                        hops: next_hops,
                    });
                }
            }
        }

        debug!(source, target, iterations, settled, "Dijkstra finished");
        stopwatch.report();

        let path = if self.is_settled(end) {
            Some(self.build_path(graph, end))
        } else {
            None
        };

        Ok(ShortestPathResult {
            path,
            debug: self.debug_info(graph),
        })
    }
}
