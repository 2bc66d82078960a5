use super::{output_files::create_writer, ExportError};
use std::path::Path;
use walkshed_core::desert::{DesertFlag, DesertSummary};

/// writes one row per (tract, threshold) classification
pub fn write_desert_flags(
    directory: &Path,
    filename: &str,
    flags: &[DesertFlag],
    overwrite: bool,
) -> Result<(), ExportError> {
    let mut writer = create_writer(directory, filename, overwrite)?;
    for flag in flags.iter() {
        writer
            .serialize(flag)
            .map_err(|e| ExportError::CsvError(String::from(filename), e))?;
    }
    writer
        .flush()
        .map_err(|e| ExportError::IoError(String::from(filename), e))?;
    log::info!("wrote {} desert classifications to {filename}", flags.len());
    Ok(())
}

/// writes one summary row per threshold
pub fn write_desert_summaries(
    directory: &Path,
    filename: &str,
    summaries: &[DesertSummary],
    overwrite: bool,
) -> Result<(), ExportError> {
    let mut writer = create_writer(directory, filename, overwrite)?;
    for summary in summaries.iter() {
        writer
            .serialize(summary)
            .map_err(|e| ExportError::CsvError(String::from(filename), e))?;
    }
    writer
        .flush()
        .map_err(|e| ExportError::IoError(String::from(filename), e))?;
    Ok(())
}
