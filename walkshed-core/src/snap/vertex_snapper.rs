use super::{SnapFailure, SnappedPoint};
use crate::{
    graph::Graph,
    model::{PointOfInterest, VertexId},
};
use geo::Coord;
use rayon::prelude::*;
use rstar::primitives::GeomWithData;
use rstar::RTree;
use std::collections::HashMap;

type SnapNode = GeomWithData<[f64; 2], VertexId>;

/// spatial index over the vertices of a [Graph] used to map arbitrary points
/// (entrances, tract reference points) onto the network.
///
/// snapping is a two-phase lookup. an exact coordinate match is attempted first,
/// which is the common case when input points were derived from network endpoints.
/// otherwise the R-tree nearest-neighbor search is used. in both phases, ties are
/// broken by lowest vertex id so results are deterministic.
///
/// the index is read-only after construction and may be shared across threads.
pub struct VertexSnapper {
    rtree: RTree<SnapNode>,
    exact: HashMap<(u64, u64), VertexId>,
    max_distance: Option<f64>,
}

impl VertexSnapper {
    pub fn new(graph: &Graph) -> VertexSnapper {
        let mut exact: HashMap<(u64, u64), VertexId> = HashMap::with_capacity(graph.n_vertices());
        let nodes = graph
            .vertices()
            .iter()
            .map(|v| {
                exact
                    .entry(coordinate_key(&v.coordinate))
                    .and_modify(|id| *id = (*id).min(v.vertex_id))
                    .or_insert(v.vertex_id);
                GeomWithData::new([v.x(), v.y()], v.vertex_id)
            })
            .collect::<Vec<_>>();
        let rtree = RTree::bulk_load(nodes);
        log::debug!("built vertex snapping index over {} vertices", rtree.size());
        VertexSnapper {
            rtree,
            exact,
            max_distance: None,
        }
    }

    /// rejects snaps farther than `max_distance` feet from the nearest vertex.
    pub fn with_max_distance(mut self, max_distance: Option<f64>) -> VertexSnapper {
        self.max_distance = max_distance;
        self
    }

    pub fn len(&self) -> usize {
        self.rtree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.rtree.size() == 0
    }

    /// finds the network vertex closest to `point` along with its distance in feet.
    pub fn nearest_vertex(&self, point: Coord<f64>) -> Result<SnappedPoint, SnapFailure> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(SnapFailure::NonFiniteCoordinate(point.x, point.y));
        }
        if self.is_empty() {
            return Err(SnapFailure::EmptyIndex);
        }
        if let Some(vertex_id) = self.exact.get(&coordinate_key(&point)) {
            return Ok(SnappedPoint {
                vertex_id: *vertex_id,
                distance: 0.0,
            });
        }

        let query = [point.x, point.y];
        let nearest = self
            .rtree
            .nearest_neighbor(&query)
            .ok_or(SnapFailure::EmptyIndex)?;
        let best_d2 = squared_distance(nearest.geom(), &query);
        // collect every vertex at the same distance so ties resolve to the lowest id
        let vertex_id = self
            .rtree
            .locate_within_distance(query, best_d2)
            .map(|node| node.data)
            .fold(nearest.data, |acc, id| acc.min(id));

        let distance = best_d2.sqrt();
        match self.max_distance {
            Some(limit) if distance > limit => Err(SnapFailure::BeyondLimit { distance, limit }),
            _ => Ok(SnappedPoint {
                vertex_id,
                distance,
            }),
        }
    }

    /// snaps every point independently. a failure for one point does not
    /// prevent the others from being snapped; results are in input order.
    pub fn snap_all(&self, points: &[PointOfInterest]) -> Vec<Result<SnappedPoint, SnapFailure>> {
        points
            .par_iter()
            .map(|poi| self.nearest_vertex(poi.coordinate))
            .collect()
    }
}

fn squared_distance(a: &[f64; 2], b: &[f64; 2]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}

/// hashable key for exact coordinate matching. adding 0.0 folds -0.0 into 0.0.
fn coordinate_key(coord: &Coord<f64>) -> (u64, u64) {
    ((coord.x + 0.0).to_bits(), (coord.y + 0.0).to_bits())
}
