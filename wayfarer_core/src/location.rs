use crate::{define_index_newtype, geopoint::GeoPoint};

define_index_newtype!(LocationId, Location);

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    id: LocationId,
    name: String,
    coordinates: Option<GeoPoint>,
}

impl Location {
    pub fn new(id: LocationId, name: String, coordinates: Option<GeoPoint>) -> Self {
        Location {
            id,
            name,
            coordinates,
        }
    }

    pub fn id(&self) -> LocationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinates(&self) -> Option<&GeoPoint> {
        self.coordinates.as_ref()
    }
}
