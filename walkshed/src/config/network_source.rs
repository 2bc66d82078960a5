use serde::{Deserialize, Serialize};

/// where the walking network comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum NetworkSource {
    /// a prepared network as vertex (`vertex_id,x,y`) and edge
    /// (`edge_id,src_vertex_id,dst_vertex_id,distance`) CSV files
    Csv {
        vertices_file: String,
        edges_file: String,
    },
    /// street centerline linestrings, noded by snapping endpoints together
    /// within `snap_tolerance` feet
    #[serde(rename = "geojson")]
    GeoJson {
        file: String,
        #[serde(default = "default_snap_tolerance")]
        snap_tolerance: f64,
    },
}

fn default_snap_tolerance() -> f64 {
    1.0
}

impl NetworkSource {
    pub fn files(&self) -> Vec<&str> {
        match self {
            NetworkSource::Csv {
                vertices_file,
                edges_file,
            } => vec![vertices_file, edges_file],
            NetworkSource::GeoJson { file, .. } => vec![file],
        }
    }
}

impl Default for NetworkSource {
    fn default() -> Self {
        NetworkSource::Csv {
            vertices_file: String::from("vertices-complete.csv"),
            edges_file: String::from("edges-complete.csv"),
        }
    }
}
