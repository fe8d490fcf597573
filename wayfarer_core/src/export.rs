use geojson::{Feature, Geometry, JsonObject, JsonValue};

use crate::{
    error::{ExportError, RoutingError},
    graph::Graph,
    routing::routing_path::RoutingPath,
};

/// Route as a GeoJSON feature: a `LineString` through the coordinates of
/// every location on the path, or a `Point` for a single location path.
pub fn route_to_geojson(graph: &impl Graph, path: &RoutingPath) -> Result<Feature, ExportError> {
    let coordinates = path
        .locations()
        .iter()
        .map(|name| -> Result<geo_types::Coord<f64>, ExportError> {
            let location_id = graph
                .location_id(name)
                .ok_or_else(|| RoutingError::UnknownLocation(name.clone()))?;
            graph
                .location(location_id)
                .coordinates()
                .map(geo_types::Coord::from)
                .ok_or_else(|| ExportError::MissingCoordinates(name.clone()))
        })
        .collect::<Result<Vec<_>, ExportError>>()?;

    let value = if let [single] = coordinates[..] {
        geojson::Value::from(&geo_types::Point::from(single))
    } else {
        geojson::Value::from(&geo_types::LineString::from(coordinates))
    };

    let mut properties = JsonObject::new();
    properties.insert(
        String::from("distance_km"),
        JsonValue::from(f64::from(path.distance())),
    );
    properties.insert(
        String::from("locations"),
        JsonValue::from(path.locations().to_vec()),
    );

    Ok(Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    })
}
