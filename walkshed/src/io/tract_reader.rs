use super::{
    geojson_ops::{feature_id, read_geojson_feature_collection, value_as_f64},
    InputError,
};
use crate::config::TractConfig;
use geo::{Geometry, MultiPolygon};
use walkshed_core::model::TractPolygon;

/// reads tract polygons along with their population and median income.
///
/// a missing or unparseable population is read as 0. census tables encode
/// unavailable estimates as large negative sentinels, so a negative or missing
/// median income is read as unknown.
pub fn read_tracts(config: &TractConfig) -> Result<Vec<TractPolygon>, InputError> {
    let file = config.file.as_str();
    let collection = read_geojson_feature_collection(file)?;
    let mut tracts = vec![];
    let mut skipped = 0;
    for (index, mut feature) in collection.features.into_iter().enumerate() {
        let id = feature_id(&feature, Some(&config.id_property), index);
        let geometry = feature
            .geometry
            .take()
            .map(Geometry::<f64>::try_from)
            .transpose();
        let geometry = match geometry {
            Ok(Some(Geometry::Polygon(polygon))) => MultiPolygon::new(vec![polygon]),
            Ok(Some(Geometry::MultiPolygon(multi))) => multi,
            Ok(_) => {
                log::warn!("tract {id} in {file} is not a polygon, skipping");
                skipped += 1;
                continue;
            }
            Err(e) => {
                log::warn!("tract {id} in {file} has an invalid geometry: {e}");
                skipped += 1;
                continue;
            }
        };

        let population = feature
            .property(&config.population_property)
            .and_then(value_as_f64)
            .filter(|p| p.is_finite() && *p >= 0.0)
            .map(|p| p.round() as u64)
            .unwrap_or_else(|| {
                log::debug!("tract {id} has no population, using 0");
                0
            });
        let median_income = feature
            .property(&config.median_income_property)
            .and_then(value_as_f64)
            .filter(|i| i.is_finite() && *i >= 0.0);

        tracts.push(TractPolygon {
            id,
            geometry,
            population,
            median_income,
        });
    }
    if tracts.is_empty() {
        return Err(InputError::NoFeatures(file.to_string()));
    }
    log::info!("read {} tracts from {file}, skipped {skipped}", tracts.len());
    Ok(tracts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_tracts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracts.geojson");
        let contents = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"GEOID": "36061000100", "population": "3200", "median_income": 61000},
             "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [100, 0], [100, 100], [0, 100], [0, 0]]]}},
            {"type": "Feature", "properties": {"GEOID": "36061000200", "population": 0, "median_income": -666666666},
             "geometry": {"type": "MultiPolygon", "coordinates": [[[[200, 0], [300, 0], [300, 100], [200, 0]]]]}},
            {"type": "Feature", "properties": {"GEOID": "36061000300"},
             "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}}
        ]}"#;
        std::fs::write(&path, contents).unwrap();
        let config = TractConfig {
            file: path.to_str().unwrap().to_string(),
            ..Default::default()
        };
        let tracts = read_tracts(&config).unwrap();
        assert_eq!(tracts.len(), 2);
        assert_eq!(tracts[0].id, "36061000100");
        assert_eq!(tracts[0].population, 3200);
        assert_eq!(tracts[0].median_income, Some(61000.0));
        assert_eq!(tracts[1].median_income, None);
        assert_eq!(tracts[1].geometry.0.len(), 1);
    }
}
