use super::{load_network, run_deserts, run_isochrones, IsochroneReport};
use crate::{
    config::WalkshedConfig,
    io::{read_entrances, read_tracts},
    model::WalkshedError,
};
use std::path::Path;
use walkshed_core::desert::DesertSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// isochrones and transit deserts
    All,
    Isochrones,
    Deserts,
}

#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub isochrones: Option<IsochroneReport>,
    pub deserts: Option<Vec<DesertSummary>>,
}

/// runs the configured workflow, writing outputs to `conf.output.directory`.
/// the network is only loaded when isochrones are requested, since desert
/// distances are measured in a straight line.
pub fn run(conf: &WalkshedConfig, mode: RunMode) -> Result<RunReport, WalkshedError> {
    conf.validate()?;
    let output_directory = Path::new(&conf.output.directory);
    let entrances = read_entrances(&conf.entrances)?;
    if entrances.is_empty() {
        log::warn!("no entrances left after reading {}", conf.entrances.file);
    }

    let mut report = RunReport::default();
    if matches!(mode, RunMode::All | RunMode::Isochrones) {
        let graph = load_network(&conf.network)?;
        let isochrones = run_isochrones(conf, &graph, &entrances, output_directory)?;
        log::info!("isochrones finished: {isochrones:?}");
        report.isochrones = Some(isochrones);
    }
    if matches!(mode, RunMode::All | RunMode::Deserts) {
        let tracts = read_tracts(&conf.tracts)?;
        let summaries = run_deserts(conf, &tracts, &entrances, output_directory)?;
        report.deserts = Some(summaries);
    }
    Ok(report)
}
