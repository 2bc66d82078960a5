use crate::{
    config::WalkshedConfig,
    export::{filenames, write_desert_flags, write_desert_summaries},
    model::WalkshedError,
};
use kdam::tqdm;
use std::path::Path;
use walkshed_core::{
    desert::{DesertSummary, DistanceTable},
    model::{PointOfInterest, TractPolygon},
};

/// measures every tract's straight-line distance to its nearest entrance once,
/// then classifies the stored distances against each configured threshold.
pub fn run_deserts(
    conf: &WalkshedConfig,
    tracts: &[TractPolygon],
    entrances: &[PointOfInterest],
    output_directory: &Path,
) -> Result<Vec<DesertSummary>, WalkshedError> {
    log::info!(
        "measuring {} tracts against {} entrances from the tract {}",
        tracts.len(),
        entrances.len(),
        conf.tracts.reference
    );
    let table = DistanceTable::compute(tracts, entrances, conf.tracts.reference);

    let thresholds = conf.desert_thresholds_ft();
    let threshold_iter = tqdm!(
        thresholds.iter(),
        total = thresholds.len(),
        desc = "classify deserts"
    );
    let mut flags = vec![];
    let mut summaries = vec![];
    for threshold in threshold_iter {
        let threshold_flags = table.classify(*threshold);
        let summary = DesertSummary::from_flags(*threshold, &threshold_flags);
        log::info!(
            "threshold {threshold} ft: {} of {} tracts are transit deserts ({:.1}% of population)",
            summary.desert_count,
            summary.tract_count,
            100.0 * summary.desert_population_share()
        );
        flags.extend(threshold_flags);
        summaries.push(summary);
    }
    eprintln!();

    let overwrite = conf.output.overwrite;
    write_desert_flags(output_directory, filenames::DESERTS, &flags, overwrite)?;
    write_desert_summaries(
        output_directory,
        filenames::DESERT_SUMMARY,
        &summaries,
        overwrite,
    )?;
    Ok(summaries)
}
