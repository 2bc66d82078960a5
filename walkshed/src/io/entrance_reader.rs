use super::{
    geojson_ops::{feature_id, read_geojson_feature_collection},
    InputError,
};
use crate::config::EntranceConfig;
use geo::Geometry;
use walkshed_core::model::PointOfInterest;

/// reads entrance points and applies the configured attribute filter. features
/// without a point geometry are skipped with a warning.
pub fn read_entrances(config: &EntranceConfig) -> Result<Vec<PointOfInterest>, InputError> {
    let file = config.file.as_str();
    let collection = read_geojson_feature_collection(file)?;
    let n_features = collection.features.len();
    let mut entrances = vec![];
    let mut skipped = 0;
    for (index, mut feature) in collection.features.into_iter().enumerate() {
        let id = feature_id(&feature, config.id_property.as_deref(), index);
        let geometry = feature
            .geometry
            .take()
            .map(Geometry::<f64>::try_from)
            .transpose();
        let point = match geometry {
            Ok(Some(Geometry::Point(point))) => point,
            Ok(Some(Geometry::MultiPoint(multi))) if multi.0.len() == 1 => multi.0[0],
            Ok(_) => {
                log::warn!("entrance {id} in {file} is not a point, skipping");
                skipped += 1;
                continue;
            }
            Err(e) => {
                log::warn!("entrance {id} in {file} has an invalid geometry: {e}");
                skipped += 1;
                continue;
            }
        };
        let mut entrance = PointOfInterest::new(&id, point.x(), point.y());
        if let Some(properties) = feature.properties {
            entrance.attributes = properties;
        }
        entrances.push(entrance);
    }

    let n_read = entrances.len();
    if let Some(filter) = &config.filter {
        entrances.retain(|e| filter.accepts(e));
        log::info!(
            "entrance filter {} = {} kept {} of {n_read} entrances",
            filter.key,
            filter.equals,
            entrances.len()
        );
    }
    log::info!("read {n_read} entrances from {file} ({n_features} features, {skipped} skipped)");
    Ok(entrances)
}
