use super::InputError;
use geojson::{Feature, FeatureCollection, GeoJson};
use serde_json::Value;
use std::str::FromStr;

pub fn read_geojson_feature_collection(input_file: &str) -> Result<FeatureCollection, InputError> {
    let contents = std::fs::read_to_string(input_file)
        .map_err(|e| InputError::FileError(input_file.to_string(), e))?;
    let dataset = GeoJson::from_str(&contents)
        .map_err(|e| InputError::GeoJsonError(input_file.to_string(), e))?;
    match dataset {
        GeoJson::Geometry(_) => Err(InputError::NotAFeatureCollection(
            input_file.to_string(),
            String::from("a single 'Geometry'"),
        )),
        GeoJson::Feature(_) => Err(InputError::NotAFeatureCollection(
            input_file.to_string(),
            String::from("a single 'Feature'"),
        )),
        GeoJson::FeatureCollection(feature_collection) => Ok(feature_collection),
    }
}

/// identifier of a feature: the named property if given, else the feature id,
/// else its position in the collection.
pub fn feature_id(feature: &Feature, id_property: Option<&str>, index: usize) -> String {
    let from_property = id_property
        .and_then(|key| feature.property(key))
        .and_then(value_as_string);
    if let Some(id) = from_property {
        return id;
    }
    match &feature.id {
        Some(geojson::feature::Id::String(s)) => s.to_string(),
        Some(geojson::feature::Id::Number(n)) => n.to_string(),
        None => index.to_string(),
    }
}

/// strings are returned as-is (no JSON quoting), numbers in their shortest form
pub fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// numeric value of a property that may be encoded as a number or a numeric string
pub fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
