use geo::Coord;
use serde_json::{Map, Value};

/// a transit entrance or tract reference point along with whatever
/// attributes its provider supplied (name, accessibility flag, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterest {
    pub id: String,
    pub coordinate: Coord<f64>,
    pub attributes: Map<String, Value>,
}

impl PointOfInterest {
    pub fn new(id: &str, x: f64, y: f64) -> PointOfInterest {
        PointOfInterest {
            id: String::from(id),
            coordinate: Coord { x, y },
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: Value) -> PointOfInterest {
        self.attributes.insert(String::from(key), value);
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}
