use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::{GraphError, NetworkError},
    geopoint::GeoPoint,
    graph::GraphStore,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkLocation {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<GeoPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConnection {
    pub from: String,
    pub to: String,
    /// Kilometers
    pub distance: f64,
}

/// Static table of places and the roads between them, the input a
/// [`GraphStore`] is built from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoadNetwork {
    #[serde(default)]
    pub locations: Vec<NetworkLocation>,
    pub connections: Vec<NetworkConnection>,
}

impl RoadNetwork {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<RoadNetwork, NetworkError> {
        let path = path.as_ref();
        let file_content = std::fs::read_to_string(path)?;
        let network = Self::from_json(&file_content)?;

        info!(
            path = %path.display(),
            locations = network.locations.len(),
            connections = network.connections.len(),
            "Loaded road network"
        );

        Ok(network)
    }

    pub fn from_json(json: &str) -> Result<RoadNetwork, NetworkError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Road connections between twenty Indian cities, distances in kilometers.
    pub fn india() -> RoadNetwork {
        RoadNetwork {
            locations: INDIA_CITIES
                .iter()
                .map(|&(name, lat, lng)| NetworkLocation {
                    name: name.to_string(),
                    coordinates: Some(GeoPoint::new(lat, lng)),
                })
                .collect(),
            connections: INDIA_ROADS
                .iter()
                .map(|&(from, to, distance)| NetworkConnection {
                    from: from.to_string(),
                    to: to.to_string(),
                    distance,
                })
                .collect(),
        }
    }

    /// Builds the graph. When the network declares locations, every
    /// connection must refer to one of them; a network without a location
    /// table takes its locations from the connections.
    pub fn into_graph(self) -> Result<GraphStore, NetworkError> {
        if !self.locations.is_empty() {
            let declared: HashSet<&str> = self.locations.iter().map(|l| l.name.as_str()).collect();
            for connection in &self.connections {
                for name in [&connection.from, &connection.to] {
                    if !declared.contains(name.as_str()) {
                        return Err(GraphError::UndeclaredLocation(name.clone()).into());
                    }
                }
            }
        }

        let mut builder = GraphStore::builder();
        for location in self.locations {
            builder.add_location(location.name, location.coordinates);
        }
        for connection in self.connections {
            builder.add_connection(connection.from, connection.to, connection.distance);
        }

        Ok(builder.build()?)
    }
}

const INDIA_CITIES: [(&str, f64, f64); 20] = [
    ("Delhi", 28.6139, 77.2090),
    ("Mumbai", 19.0760, 72.8777),
    ("Chennai", 13.0827, 80.2707),
    ("Kolkata", 22.5726, 88.3639),
    ("Bangalore", 12.9716, 77.5946),
    ("Hyderabad", 17.3850, 78.4867),
    ("Pune", 18.5204, 73.8567),
    ("Ahmedabad", 23.0225, 72.5714),
    ("Jaipur", 26.9124, 75.7873),
    ("Lucknow", 26.8467, 80.9462),
    ("Kanpur", 26.4499, 80.3319),
    ("Nagpur", 21.1458, 79.0882),
    ("Indore", 22.7196, 75.8577),
    ("Bhopal", 23.2599, 77.4126),
    ("Visakhapatnam", 17.6868, 83.2185),
    ("Patna", 25.5941, 85.1376),
    ("Ranchi", 23.3441, 85.3096),
    ("Coimbatore", 11.0168, 76.9558),
    ("Thiruvananthapuram", 8.5241, 76.9366),
    ("Guwahati", 26.1445, 91.7362),
];

const INDIA_ROADS: [(&str, &str, f64); 28] = [
    ("Delhi", "Jaipur", 280.0),
    ("Delhi", "Lucknow", 500.0),
    ("Delhi", "Kanpur", 480.0),
    ("Delhi", "Mumbai", 1400.0),
    ("Delhi", "Bhopal", 780.0),
    ("Delhi", "Kolkata", 1500.0),
    ("Mumbai", "Pune", 150.0),
    ("Mumbai", "Hyderabad", 700.0),
    ("Mumbai", "Ahmedabad", 530.0),
    ("Mumbai", "Bangalore", 980.0),
    ("Chennai", "Bangalore", 350.0),
    ("Chennai", "Coimbatore", 500.0),
    ("Chennai", "Hyderabad", 630.0),
    ("Kolkata", "Patna", 580.0),
    ("Kolkata", "Ranchi", 400.0),
    ("Hyderabad", "Nagpur", 500.0),
    ("Nagpur", "Bhopal", 360.0),
    ("Bhopal", "Indore", 190.0),
    ("Indore", "Ahmedabad", 400.0),
    ("Ahmedabad", "Jaipur", 670.0),
    ("Lucknow", "Kanpur", 90.0),
    ("Kanpur", "Patna", 600.0),
    ("Patna", "Ranchi", 320.0),
    ("Visakhapatnam", "Hyderabad", 620.0),
    ("Visakhapatnam", "Kolkata", 880.0),
    ("Coimbatore", "Thiruvananthapuram", 380.0),
    ("Guwahati", "Kolkata", 1050.0),
    ("Bangalore", "Coimbatore", 360.0),
];
