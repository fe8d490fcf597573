use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }
}

impl From<&GeoPoint> for geo_types::Coord<f64> {
    fn from(point: &GeoPoint) -> Self {
        geo_types::Coord {
            x: point.lng,
            y: point.lat,
        }
    }
}

impl From<&GeoPoint> for geo_types::Point<f64> {
    fn from(point: &GeoPoint) -> Self {
        geo_types::Point::new(point.lng, point.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_lng_lat_order() {
        let delhi = GeoPoint::new(28.6139, 77.2090);
        let point: geo_types::Point<f64> = (&delhi).into();

        assert_eq!(point.x(), 77.2090);
        assert_eq!(point.y(), 28.6139);
    }
}
