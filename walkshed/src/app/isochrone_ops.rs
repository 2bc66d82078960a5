use crate::{
    config::WalkshedConfig,
    export::{filenames, write_isochrones, IsochroneRecord, Reprojection},
    model::WalkshedError,
};
use itertools::Itertools;
use std::path::Path;
use walkshed_core::{
    graph::Graph,
    model::{PointOfInterest, VertexId},
    search::{driving_distance, SearchBudget},
    snap::VertexSnapper,
};

/// outcome counts of an isochrone run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IsochroneReport {
    pub entrances: usize,
    pub snap_failures: usize,
    pub sources: usize,
    pub truncated_searches: usize,
    pub degenerate_isochrones: usize,
    pub isochrones_written: usize,
}

/// snaps entrances onto the network, computes one walkshed per distinct snapped
/// vertex and writes one isochrone feature per entrance.
pub fn run_isochrones(
    conf: &WalkshedConfig,
    graph: &Graph,
    entrances: &[PointOfInterest],
    output_directory: &Path,
) -> Result<IsochroneReport, WalkshedError> {
    // fail on a bad projection before the expensive part of the run
    let reprojection = Reprojection::new(&conf.output.source_proj4, &conf.output.target_proj4)?;
    let mut report = IsochroneReport {
        entrances: entrances.len(),
        ..Default::default()
    };

    let snapper = VertexSnapper::new(graph).with_max_distance(conf.max_snap_distance_ft());
    let mut snapped: Vec<(&PointOfInterest, VertexId)> = Vec::with_capacity(entrances.len());
    for (entrance, result) in entrances.iter().zip(snapper.snap_all(entrances)) {
        match result {
            Ok(snap) => {
                log::debug!(
                    "entrance {} snapped to vertex {} at {:.1} ft",
                    entrance.id,
                    snap.vertex_id,
                    snap.distance
                );
                snapped.push((entrance, snap.vertex_id));
            }
            Err(e) => {
                log::warn!("unable to snap entrance {}: {e}", entrance.id);
                report.snap_failures += 1;
            }
        }
    }

    let sources = snapped.iter().map(|(_, v)| *v).unique().collect_vec();
    report.sources = sources.len();
    let cutoff = conf.walk_cutoff_ft();
    log::info!(
        "computing {} walksheds within {cutoff} ft for {} entrances",
        sources.len(),
        snapped.len()
    );
    let budget = SearchBudget::from(&conf.search_budget);
    let reachable = driving_distance(graph, &sources, cutoff, &budget);
    report.truncated_searches = reachable.values().filter(|r| r.is_truncated()).count();
    if report.truncated_searches > 0 {
        log::warn!(
            "{} walkshed searches stopped early, their isochrones are partial",
            report.truncated_searches
        );
    }

    let isochrones = conf.isochrone_builder().build_all(graph, &reachable);
    let mut records = vec![];
    for (entrance, source) in snapped.iter() {
        match isochrones.get(source) {
            Some(Some(isochrone)) => records.push(IsochroneRecord {
                entrance_id: entrance.id.clone(),
                isochrone,
            }),
            _ => {
                log::warn!(
                    "entrance {} at vertex {source} reaches too few vertices for an isochrone",
                    entrance.id
                );
                report.degenerate_isochrones += 1;
            }
        }
    }

    write_isochrones(
        output_directory,
        filenames::ISOCHRONES,
        &records,
        &reprojection,
        conf.output.overwrite,
    )?;
    report.isochrones_written = records.len();
    Ok(report)
}
