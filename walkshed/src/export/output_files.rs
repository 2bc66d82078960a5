use super::ExportError;
use std::fs::File;
use std::path::{Path, PathBuf};

pub mod filenames {
    pub const ISOCHRONES: &str = "isochrones.geojson";
    pub const DESERTS: &str = "deserts.csv";
    pub const DESERT_SUMMARY: &str = "desert_summary.csv";
}

/// path of an output file, refusing to replace an existing file unless `overwrite` is set
pub fn output_path(directory: &Path, filename: &str, overwrite: bool) -> Result<PathBuf, ExportError> {
    let filepath = directory.join(filename);
    if filepath.exists() && !overwrite {
        return Err(ExportError::FileExists(filepath.to_string_lossy().to_string()));
    }
    std::fs::create_dir_all(directory)
        .map_err(|e| ExportError::IoError(directory.to_string_lossy().to_string(), e))?;
    Ok(filepath)
}

pub fn create_writer(
    directory: &Path,
    filename: &str,
    overwrite: bool,
) -> Result<csv::Writer<File>, ExportError> {
    let filepath = output_path(directory, filename, overwrite)?;
    let file = File::create(&filepath)
        .map_err(|e| ExportError::IoError(filepath.to_string_lossy().to_string(), e))?;
    Ok(csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(file))
}
