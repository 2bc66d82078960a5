use super::IsochronePolygon;
use crate::{
    graph::Graph,
    hull::{concave_hull, hull_area},
    model::VertexId,
    search::ReachableSet,
};
use geo::Coord;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// builds isochrone polygons from reachable vertex sets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsochroneBuilder {
    /// 0.0 is the tightest shape, 1.0 the convex hull
    pub concavity: f64,
    pub allow_holes: bool,
}

impl Default for IsochroneBuilder {
    fn default() -> Self {
        IsochroneBuilder {
            concavity: 0.8,
            allow_holes: false,
        }
    }
}

impl IsochroneBuilder {
    pub fn new(concavity: f64, allow_holes: bool) -> IsochroneBuilder {
        IsochroneBuilder {
            concavity,
            allow_holes,
        }
    }

    /// hull of the coordinates of every reachable vertex. members that are not in the
    /// graph (a source-only set for a missing source) contribute no coordinate.
    ///
    /// returns None when fewer than 3 distinct coordinates are reachable or they are
    /// collinear. this is the expected result for entrances on short dead ends and is
    /// not an error.
    pub fn build(&self, graph: &Graph, reachable: &ReachableSet) -> Option<IsochronePolygon> {
        let points = reachable
            .vertex_ids()
            .iter()
            .filter_map(|id| graph.vertex_coordinate(id))
            .collect::<Vec<Coord<f64>>>();
        let polygon = concave_hull(&points, self.concavity, self.allow_holes)?;
        let area_sqft = hull_area(&polygon);
        Some(IsochronePolygon {
            source: reachable.source,
            polygon,
            area_sqft,
            reachable_vertices: reachable.len(),
            truncated: reachable.is_truncated(),
        })
    }

    /// builds every isochrone in parallel. the value for a source is None when its
    /// reachable set is degenerate.
    pub fn build_all(
        &self,
        graph: &Graph,
        reachable: &BTreeMap<VertexId, ReachableSet>,
    ) -> BTreeMap<VertexId, Option<IsochronePolygon>> {
        reachable
            .par_iter()
            .map(|(source, set)| {
                let isochrone = self.build(graph, set);
                if isochrone.is_none() {
                    log::debug!(
                        "no isochrone for source {source}: {} reachable vertices",
                        set.len()
                    );
                }
                (*source, isochrone)
            })
            .collect()
    }
}
