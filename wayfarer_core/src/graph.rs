use std::collections::BTreeMap;

use fxhash::FxHashMap;
use tracing::debug;

use crate::{
    define_index_newtype,
    distance::{Distance, Kilometers},
    error::GraphError,
    geopoint::GeoPoint,
    location::{Location, LocationId},
};

define_index_newtype!(ConnectionId, Connection);

/// Largest accepted connection distance, in kilometers. The sum of every
/// connection in a graph is bounded separately at build time, so no path
/// can overflow the fixed-point range.
pub const MAX_CONNECTION_DISTANCE_KM: f64 = 1_000_000_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    id: ConnectionId,
    start: LocationId,
    end: LocationId,
    distance: Distance<Kilometers>,
}

impl Connection {
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn distance(&self) -> Distance<Kilometers> {
        self.distance
    }

    pub fn start(&self) -> LocationId {
        self.start
    }

    pub fn end(&self) -> LocationId {
        self.end
    }

    /// The other end of the connection, seen from `location`.
    pub fn adj_location(&self, location: LocationId) -> LocationId {
        if self.start == location {
            self.end
        } else {
            self.start
        }
    }
}

pub trait Graph {
    type EdgeIterator<'a>: Iterator<Item = ConnectionId>
    where
        Self: 'a;

    /// Ids of every connection incident to `location`, once per direction.
    fn location_edges_iter(&self, location: LocationId) -> Self::EdgeIterator<'_>;

    fn connection(&self, connection: ConnectionId) -> &Connection;

    fn location(&self, location: LocationId) -> &Location;

    fn location_id(&self, name: &str) -> Option<LocationId>;

    fn location_count(&self) -> usize;

    fn connection_count(&self) -> usize;
}

/// Immutable weighted undirected graph of named locations.
///
/// Location ids follow the lexicographic order of the location names, which
/// the search relies on to break ties deterministically.
#[derive(Debug, Default)]
pub struct GraphStore {
    locations: Vec<Location>,
    connections: Vec<Connection>,
    adjacency_list: Vec<Vec<ConnectionId>>,
    index: FxHashMap<String, LocationId>,
}

impl GraphStore {
    /// Builds the graph from `(location, location, distance in km)` triples.
    /// Locations are created from the names the connections mention.
    pub fn build<I, S>(connections: I) -> Result<GraphStore, GraphError>
    where
        I: IntoIterator<Item = (S, S, f64)>,
        S: Into<String>,
    {
        let mut builder = GraphStoreBuilder::default();
        for (from, to, distance) in connections {
            builder.add_connection(from, to, distance);
        }
        builder.build()
    }

    pub fn builder() -> GraphStoreBuilder {
        GraphStoreBuilder::default()
    }

    /// Neighbors of `name` with the distance of each incident connection.
    /// Parallel connections are reported once each. Unknown or isolated
    /// locations have no neighbors.
    pub fn neighbors(&self, name: &str) -> Vec<(&str, Distance<Kilometers>)> {
        let Some(location) = self.location_id(name) else {
            return vec![];
        };

        self.location_edges_iter(location)
            .map(|connection_id| {
                let connection = &self.connections[connection_id];
                let neighbor = connection.adj_location(location);
                (self.locations[neighbor].name(), connection.distance())
            })
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    fn add_connection(&mut self, from: LocationId, to: LocationId, distance: Distance<Kilometers>) {
        let connection_id = ConnectionId::new(self.connections.len());
        self.connections.push(Connection {
            id: connection_id,
            start: from,
            end: to,
            distance,
        });
        self.adjacency_list[from.get()].push(connection_id);
        self.adjacency_list[to.get()].push(connection_id);
    }
}

impl Graph for GraphStore {
    type EdgeIterator<'a> = std::iter::Copied<std::slice::Iter<'a, ConnectionId>>;

    fn location_edges_iter(&self, location: LocationId) -> Self::EdgeIterator<'_> {
        self.adjacency_list[location.get()].iter().copied()
    }

    fn connection(&self, connection: ConnectionId) -> &Connection {
        &self.connections[connection]
    }

    fn location(&self, location: LocationId) -> &Location {
        &self.locations[location]
    }

    fn location_id(&self, name: &str) -> Option<LocationId> {
        self.index.get(name).copied()
    }

    fn location_count(&self) -> usize {
        self.locations.len()
    }

    fn connection_count(&self) -> usize {
        self.connections.len()
    }
}

#[derive(Default)]
pub struct GraphStoreBuilder {
    locations: Vec<(String, Option<GeoPoint>)>,
    connections: Vec<(String, String, f64)>,
}

impl GraphStoreBuilder {
    /// Declares a location, which may stay isolated.
    pub fn add_location<S: Into<String>>(
        &mut self,
        name: S,
        coordinates: Option<GeoPoint>,
    ) -> &mut GraphStoreBuilder {
        self.locations.push((name.into(), coordinates));
        self
    }

    pub fn add_connection<S: Into<String>>(
        &mut self,
        from: S,
        to: S,
        distance: f64,
    ) -> &mut GraphStoreBuilder {
        self.connections.push((from.into(), to.into(), distance));
        self
    }

    pub fn build(self) -> Result<GraphStore, GraphError> {
        // Every simple path weighs at most the sum of all connections
        let mut total = Distance::<Kilometers>::ZERO;
        for (from, to, distance) in &self.connections {
            validate_distance(from, to, *distance)?;
            total = total.checked_add(Distance::from(*distance)).ok_or_else(|| {
                GraphError::TotalDistanceOutOfRange {
                    from: from.clone(),
                    to: to.clone(),
                }
            })?;
        }

        // BTreeMap so ids are assigned in name order
        let mut names: BTreeMap<String, Option<GeoPoint>> = BTreeMap::new();
        for (name, coordinates) in self.locations {
            if names.contains_key(&name) {
                return Err(GraphError::DuplicateLocation(name));
            }
            names.insert(name, coordinates);
        }
        for (from, to, _) in &self.connections {
            names.entry(from.clone()).or_insert(None);
            names.entry(to.clone()).or_insert(None);
        }

        let mut graph = GraphStore {
            locations: Vec::with_capacity(names.len()),
            connections: Vec::with_capacity(self.connections.len()),
            adjacency_list: vec![vec![]; names.len()],
            index: FxHashMap::default(),
        };

        for (position, (name, coordinates)) in names.into_iter().enumerate() {
            let id = LocationId::new(position);
            graph.index.insert(name.clone(), id);
            graph.locations.push(Location::new(id, name, coordinates));
        }

        for (from, to, distance) in &self.connections {
            let from = graph.index[from.as_str()];
            let to = graph.index[to.as_str()];
            graph.add_connection(from, to, Distance::from(*distance));
        }

        debug!(
            locations = graph.location_count(),
            connections = graph.connection_count(),
            "Built graph store"
        );

        Ok(graph)
    }
}

fn validate_distance(from: &str, to: &str, distance: f64) -> Result<(), GraphError> {
    if !distance.is_finite() {
        return Err(GraphError::NonFiniteWeight {
            from: from.to_string(),
            to: to.to_string(),
            distance,
        });
    }

    if distance < 0.0 {
        return Err(GraphError::NegativeWeight {
            from: from.to_string(),
            to: to.to_string(),
            distance,
        });
    }

    if distance > MAX_CONNECTION_DISTANCE_KM {
        return Err(GraphError::WeightOutOfRange {
            from: from.to_string(),
            to: to.to_string(),
            distance,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        distance::kilometers, routing::find_shortest_path,
        test_graph_utils::test_graph::create_scenario_graph,
    };

    use super::*;

    #[test]
    fn registers_both_directions() {
        let graph = GraphStore::build([("A", "B", 5.0)]).unwrap();

        assert_eq!(graph.neighbors("A"), vec![("B", kilometers!(5))]);
        assert_eq!(graph.neighbors("B"), vec![("A", kilometers!(5))]);
        assert_eq!(graph.connection_count(), 1);
    }

    #[test]
    fn keeps_parallel_connections() {
        let graph = GraphStore::build([("A", "B", 5.0), ("B", "A", 3.0)]).unwrap();

        let mut neighbors = graph.neighbors("A");
        neighbors.sort_by_key(|(_, distance)| *distance);

        assert_eq!(
            neighbors,
            vec![("B", kilometers!(3)), ("B", kilometers!(5))]
        );
    }

    #[test]
    fn self_loop_is_listed_once_per_direction() {
        let graph = GraphStore::build([("A", "A", 1.0)]).unwrap();

        assert_eq!(graph.neighbors("A").len(), 2);
    }

    #[test]
    fn unknown_location_has_no_neighbors() {
        let graph = create_scenario_graph();

        assert!(graph.neighbors("Atlantis").is_empty());
        assert!(!graph.contains("Atlantis"));
    }

    #[test]
    fn isolated_location_is_known_without_neighbors() {
        let mut builder = GraphStore::builder();
        builder
            .add_location("Island", None)
            .add_connection("A", "B", 1.0);
        let graph = builder.build().unwrap();

        assert!(graph.contains("Island"));
        assert!(graph.neighbors("Island").is_empty());
        assert_eq!(graph.location_count(), 3);
    }

    #[test]
    fn rejects_negative_distance() {
        let result = GraphStore::build([("A", "B", 1.0), ("B", "C", -2.0)]);

        assert_eq!(
            result.unwrap_err(),
            GraphError::NegativeWeight {
                from: String::from("B"),
                to: String::from("C"),
                distance: -2.0
            }
        );
    }

    #[test]
    fn rejects_non_finite_distance() {
        let result = GraphStore::build([("A", "B", f64::NAN)]);
        assert!(matches!(result, Err(GraphError::NonFiniteWeight { .. })));

        let result = GraphStore::build([("A", "B", f64::INFINITY)]);
        assert!(matches!(result, Err(GraphError::NonFiniteWeight { .. })));
    }

    #[test]
    fn rejects_oversized_distance() {
        let result = GraphStore::build([("A", "B", MAX_CONNECTION_DISTANCE_KM * 2.0)]);
        assert!(matches!(result, Err(GraphError::WeightOutOfRange { .. })));
    }

    #[test]
    fn rejects_graphs_whose_total_distance_overflows() {
        let chain = |length: usize, distance: f64| {
            (0..length)
                .map(|i| (format!("L{i}"), format!("L{}", i + 1), distance))
                .collect::<Vec<_>>()
        };

        let graph = GraphStore::build(chain(9, MAX_CONNECTION_DISTANCE_KM)).unwrap();
        let path = find_shortest_path(&graph, "L0", "L9").unwrap().unwrap();
        assert_eq!(path.distance(), Distance::<Kilometers>::new(9_000_000_000));

        assert_eq!(
            GraphStore::build(chain(10, MAX_CONNECTION_DISTANCE_KM)).unwrap_err(),
            GraphError::TotalDistanceOutOfRange {
                from: String::from("L9"),
                to: String::from("L10"),
            }
        );

        // Two routes that would both saturate: ten maximum connections
        // against eleven slightly shorter ones.
        let mut connections = chain(10, MAX_CONNECTION_DISTANCE_KM);
        connections.extend(
            (0..11).map(|i| (format!("M{i}"), format!("M{}", i + 1), 850_000_000.0)),
        );
        connections.push((String::from("L10"), String::from("M11"), 0.0));
        connections.push((String::from("L0"), String::from("M0"), 0.0));
        assert!(matches!(
            GraphStore::build(connections),
            Err(GraphError::TotalDistanceOutOfRange { .. })
        ));
    }

    #[test]
    fn accepts_zero_distance() {
        let graph = GraphStore::build([("A", "B", 0.0)]).unwrap();
        assert_eq!(graph.neighbors("A"), vec![("B", Distance::ZERO)]);
    }

    #[test]
    fn rejects_duplicate_declared_location() {
        let mut builder = GraphStore::builder();
        builder.add_location("A", None).add_location("A", None);

        assert_eq!(
            builder.build().unwrap_err(),
            GraphError::DuplicateLocation(String::from("A"))
        );
    }

    #[test]
    fn location_ids_follow_name_order() {
        let graph = GraphStore::build([("Mumbai", "Delhi", 1400.0), ("Chennai", "Delhi", 2200.0)])
            .unwrap();

        let names: Vec<&str> = graph.locations().iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["Chennai", "Delhi", "Mumbai"]);
        assert_eq!(graph.location_id("Delhi"), Some(LocationId::new(1)));
        assert_eq!(graph.location(LocationId::new(2)).name(), "Mumbai");
    }

    #[test]
    fn keeps_declared_coordinates() {
        let mut builder = GraphStore::builder();
        builder
            .add_location("Delhi", Some(GeoPoint::new(28.6139, 77.2090)))
            .add_connection("Delhi", "Jaipur", 280.0);
        let graph = builder.build().unwrap();

        let delhi = graph.location(graph.location_id("Delhi").unwrap());
        let jaipur = graph.location(graph.location_id("Jaipur").unwrap());

        assert_eq!(delhi.coordinates(), Some(&GeoPoint::new(28.6139, 77.2090)));
        assert_eq!(jaipur.coordinates(), None);
    }
}
