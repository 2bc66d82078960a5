use super::{geojson_ops::read_geojson_feature_collection, InputError};
use geo::{Geometry, LineString};
use kdam::tqdm;
use serde::{Deserialize, Serialize};
use walkshed_core::model::{Edge, Vertex};

/// a row of a network vertices file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub vertex_id: i64,
    pub x: f64,
    pub y: f64,
}

/// a row of a network edges file. `distance` is the walking length in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub edge_id: i64,
    pub src_vertex_id: i64,
    pub dst_vertex_id: i64,
    pub distance: f64,
}

impl From<VertexRecord> for Vertex {
    fn from(value: VertexRecord) -> Self {
        Vertex::new(value.vertex_id, value.x, value.y)
    }
}

impl From<EdgeRecord> for Edge {
    fn from(value: EdgeRecord) -> Self {
        Edge::new(
            value.edge_id,
            value.src_vertex_id,
            value.dst_vertex_id,
            value.distance,
        )
    }
}

/// reads a network from vertex and edge CSV files. rows are returned as read;
/// integrity checks happen when the graph is built.
pub fn read_csv_network(
    vertices_file: &str,
    edges_file: &str,
) -> Result<(Vec<Vertex>, Vec<Edge>), InputError> {
    let vertices = read_csv_rows::<VertexRecord>(vertices_file, "vertices")?
        .into_iter()
        .map(Vertex::from)
        .collect::<Vec<_>>();
    let edges = read_csv_rows::<EdgeRecord>(edges_file, "edges")?
        .into_iter()
        .map(Edge::from)
        .collect::<Vec<_>>();
    log::info!(
        "read {} vertices from {vertices_file} and {} edges from {edges_file}",
        vertices.len(),
        edges.len()
    );
    Ok((vertices, edges))
}

fn read_csv_rows<T>(file: &str, desc: &str) -> Result<Vec<T>, InputError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut reader = csv::Reader::from_path(file)
        .map_err(|e| InputError::CsvError(file.to_string(), e))?;
    let row_iter = tqdm!(reader.deserialize::<T>(), desc = format!("read {desc}"));
    let mut rows = vec![];
    for row in row_iter {
        rows.push(row.map_err(|e| InputError::CsvError(file.to_string(), e))?);
    }
    eprintln!();
    Ok(rows)
}

/// reads street centerlines. MultiLineString features contribute each of their
/// parts; features of any other geometry type are skipped with a warning.
pub fn read_street_lines(file: &str) -> Result<Vec<LineString<f64>>, InputError> {
    let collection = read_geojson_feature_collection(file)?;
    let mut lines = vec![];
    let mut skipped = 0;
    for (index, feature) in collection.features.into_iter().enumerate() {
        let geometry = feature
            .geometry
            .map(Geometry::<f64>::try_from)
            .transpose();
        match geometry {
            Ok(Some(Geometry::LineString(line))) => lines.push(line),
            Ok(Some(Geometry::MultiLineString(multi))) => lines.extend(multi.0),
            Ok(_) => {
                log::warn!("street feature {index} in {file} is not a linestring, skipping");
                skipped += 1;
            }
            Err(e) => {
                log::warn!("street feature {index} in {file} has an invalid geometry: {e}");
                skipped += 1;
            }
        }
    }
    if lines.is_empty() {
        return Err(InputError::NoFeatures(file.to_string()));
    }
    log::info!(
        "read {} street linestrings from {file}, skipped {skipped} features",
        lines.len()
    );
    Ok(lines)
}
