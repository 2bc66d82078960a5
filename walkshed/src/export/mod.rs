mod desert_writer;
mod export_error;
mod isochrone_writer;
mod output_files;
mod reprojection;

pub use desert_writer::{write_desert_flags, write_desert_summaries};
pub use export_error::ExportError;
pub use isochrone_writer::{write_isochrones, IsochroneRecord};
pub use output_files::filenames;
pub use reprojection::Reprojection;
