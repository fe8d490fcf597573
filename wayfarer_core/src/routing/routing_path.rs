use crate::distance::{Distance, Kilometers};

#[derive(Debug, Clone, PartialEq)]
pub struct RoutingPathLeg {
    from: String,
    to: String,
    distance: Distance<Kilometers>,
}

impl RoutingPathLeg {
    pub fn new(from: String, to: String, distance: Distance<Kilometers>) -> RoutingPathLeg {
        RoutingPathLeg { from, to, distance }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn distance(&self) -> Distance<Kilometers> {
        self.distance
    }
}

/// A found path: the visited locations, source first and target last, and
/// the connection taken between each consecutive pair.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingPath {
    locations: Vec<String>,
    legs: Vec<RoutingPathLeg>,
    distance: Distance<Kilometers>,
}

impl RoutingPath {
    pub fn new(source: String, legs: Vec<RoutingPathLeg>) -> RoutingPath {
        let mut locations = Vec::with_capacity(legs.len() + 1);
        locations.push(source);
        locations.extend(legs.iter().map(|leg| leg.to.clone()));

        let distance = legs.iter().map(RoutingPathLeg::distance).sum();

        RoutingPath {
            locations,
            legs,
            distance,
        }
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn legs(&self) -> &[RoutingPathLeg] {
        &self.legs
    }

    pub fn distance(&self) -> Distance<Kilometers> {
        self.distance
    }

    pub fn source(&self) -> &str {
        &self.locations[0]
    }

    pub fn target(&self) -> &str {
        &self.locations[self.locations.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use crate::distance::kilometers;

    use super::*;

    #[test]
    fn single_location_path() {
        let path = RoutingPath::new(String::from("Delhi"), vec![]);

        assert_eq!(path.locations(), ["Delhi"]);
        assert_eq!(path.source(), "Delhi");
        assert_eq!(path.target(), "Delhi");
        assert!(path.distance().is_zero());
    }

    #[test]
    fn distance_is_sum_of_legs() {
        let path = RoutingPath::new(
            String::from("Bangalore"),
            vec![
                RoutingPathLeg::new(
                    String::from("Bangalore"),
                    String::from("Chennai"),
                    kilometers!(350),
                ),
                RoutingPathLeg::new(
                    String::from("Chennai"),
                    String::from("Kolkata"),
                    kilometers!(1600),
                ),
            ],
        );

        assert_eq!(path.locations(), ["Bangalore", "Chennai", "Kolkata"]);
        assert_eq!(path.distance(), kilometers!(1950));
        assert_eq!(path.target(), "Kolkata");
    }
}
