use thiserror::Error;

/// Malformed input to graph construction. Construction aborts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Connection {from} - {to} has a negative distance: {distance}")]
    NegativeWeight {
        from: String,
        to: String,
        distance: f64,
    },
    #[error("Connection {from} - {to} has a distance that is not a finite number: {distance}")]
    NonFiniteWeight {
        from: String,
        to: String,
        distance: f64,
    },
    #[error("Connection {from} - {to} exceeds the maximum supported distance: {distance}")]
    WeightOutOfRange {
        from: String,
        to: String,
        distance: f64,
    },
    #[error("Connection {from} - {to} takes the total distance of the graph past the supported maximum")]
    TotalDistanceOutOfRange { from: String, to: String },
    #[error("Location {0} is declared more than once")]
    DuplicateLocation(String),
    #[error("Connection references undeclared location {0}")]
    UndeclaredLocation(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("Unknown location: {0}")]
    UnknownLocation(String),
}

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Failed to read network file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse network: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("Location {0} has no coordinates")]
    MissingCoordinates(String),
    #[error(transparent)]
    Routing(#[from] RoutingError),
}
