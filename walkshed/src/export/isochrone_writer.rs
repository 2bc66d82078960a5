use super::{output_files::output_path, ExportError, Reprojection};
use geojson::{feature::Id, Feature, FeatureCollection, JsonObject};
use kdam::tqdm;
use serde_json::json;
use std::path::Path;
use walkshed_core::isochrone::IsochronePolygon;

/// an isochrone tied to the entrance it was requested for. entrances that snap
/// to the same network vertex share one isochrone.
#[derive(Debug, Clone)]
pub struct IsochroneRecord<'a> {
    pub entrance_id: String,
    pub isochrone: &'a IsochronePolygon,
}

/// writes one GeoJSON feature per record, reprojected to the output coordinate system.
/// the area is the planar area in the source system, in square feet.
pub fn write_isochrones(
    directory: &Path,
    filename: &str,
    records: &[IsochroneRecord],
    reprojection: &Reprojection,
    overwrite: bool,
) -> Result<(), ExportError> {
    let filepath = output_path(directory, filename, overwrite)?;
    let record_iter = tqdm!(
        records.iter(),
        total = records.len(),
        desc = "write isochrones"
    );
    let mut features = Vec::with_capacity(records.len());
    for record in record_iter {
        features.push(to_feature(record, reprojection)?);
    }
    eprintln!();

    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };
    let contents = serde_json::to_string(&collection).map_err(|e| {
        ExportError::JsonError(filepath.to_string_lossy().to_string(), e)
    })?;
    std::fs::write(&filepath, contents)
        .map_err(|e| ExportError::IoError(filepath.to_string_lossy().to_string(), e))?;
    log::info!("wrote {} isochrones to {}", records.len(), filepath.display());
    Ok(())
}

fn to_feature(record: &IsochroneRecord, reprojection: &Reprojection) -> Result<Feature, ExportError> {
    let isochrone = record.isochrone;
    let polygon = reprojection.project_polygon(&isochrone.polygon)?;
    let mut properties = JsonObject::new();
    properties.insert(String::from("source_id"), json!(isochrone.source.0));
    properties.insert(String::from("entrance_id"), json!(record.entrance_id));
    properties.insert(String::from("area_sqft"), json!(isochrone.area_sqft));
    properties.insert(
        String::from("reachable_vertices"),
        json!(isochrone.reachable_vertices),
    );
    properties.insert(String::from("truncated"), json!(isochrone.truncated));
    Ok(Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(geojson::Value::from(&polygon))),
        id: Some(Id::String(record.entrance_id.clone())),
        properties: Some(properties),
        foreign_members: None,
    })
}
