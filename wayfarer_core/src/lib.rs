pub mod distance;
pub mod error;
pub mod export;
pub mod geopoint;
pub mod graph;
pub mod location;
pub mod matrix;
pub mod network;
pub mod routing;
pub mod stopwatch;
mod utils;

#[cfg(test)]
pub(crate) mod test_graph_utils;
