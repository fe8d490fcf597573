use crate::{error::RoutingError, graph::Graph};

use super::routing_path::RoutingPath;

#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPathOptions {
    pub include_debug_info: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathDebugInfo {
    /// Locations in the order they were finalized.
    pub visited_locations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult {
    /// `None` when the target is unreachable.
    pub path: Option<RoutingPath>,
    pub debug: Option<ShortestPathDebugInfo>,
}

impl ShortestPathResult {
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }
}

pub trait ShortestPathAlgorithm {
    fn calc_path(
        &mut self,
        graph: &impl Graph,
        source: &str,
        target: &str,
        options: Option<ShortestPathOptions>,
    ) -> Result<ShortestPathResult, RoutingError>;
}
