mod entrance_reader;
mod geojson_ops;
mod input_error;
mod network_reader;
mod tract_reader;

pub use entrance_reader::read_entrances;
pub use geojson_ops::read_geojson_feature_collection;
pub use input_error::InputError;
pub use network_reader::{read_csv_network, read_street_lines, EdgeRecord, VertexRecord};
pub use tract_reader::read_tracts;
