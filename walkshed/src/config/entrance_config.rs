use serde::{Deserialize, Serialize};
use serde_json::Value;
use walkshed_core::model::PointOfInterest;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntranceConfig {
    /// GeoJSON FeatureCollection of entrance points
    pub file: String,
    /// property holding the entrance id. the feature id is used when unset.
    #[serde(default)]
    pub id_property: Option<String>,
    #[serde(default)]
    pub filter: Option<AttributeFilter>,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        EntranceConfig {
            file: String::from("entrances.geojson"),
            id_property: None,
            filter: None,
        }
    }
}

/// keeps entrances whose `key` attribute equals `equals`, for example only
/// entrances flagged as ADA accessible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeFilter {
    pub key: String,
    pub equals: Value,
}

impl AttributeFilter {
    /// strings are compared case-insensitively and a string attribute matches a
    /// boolean or number with the same text ("true", "1"), since survey
    /// exports are not consistent about attribute types.
    pub fn accepts(&self, entrance: &PointOfInterest) -> bool {
        match (entrance.attribute(&self.key), &self.equals) {
            (None, _) => false,
            (Some(Value::String(a)), Value::String(b)) => a.eq_ignore_ascii_case(b),
            (Some(Value::String(a)), other) => a.eq_ignore_ascii_case(&other.to_string()),
            (Some(a), Value::String(b)) => a.to_string().eq_ignore_ascii_case(b),
            (Some(a), b) => a == b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_matches_loosely_typed_attributes() {
        let filter = AttributeFilter {
            key: String::from("ada"),
            equals: json!(true),
        };
        let yes = PointOfInterest::new("a", 0.0, 0.0).with_attribute("ada", json!(true));
        let yes_text = PointOfInterest::new("b", 0.0, 0.0).with_attribute("ada", json!("TRUE"));
        let no = PointOfInterest::new("c", 0.0, 0.0).with_attribute("ada", json!(false));
        let missing = PointOfInterest::new("d", 0.0, 0.0);
        assert!(filter.accepts(&yes));
        assert!(filter.accepts(&yes_text));
        assert!(!filter.accepts(&no));
        assert!(!filter.accepts(&missing));
    }

    #[test]
    fn test_string_filter() {
        let filter = AttributeFilter {
            key: String::from("line"),
            equals: json!("a"),
        };
        let e = PointOfInterest::new("a", 0.0, 0.0).with_attribute("line", json!("A"));
        assert!(filter.accepts(&e));
    }
}
