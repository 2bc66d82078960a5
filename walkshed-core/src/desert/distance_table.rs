use super::{classify, DesertFlag, TractDistance, TractReference};
use crate::model::{PointOfInterest, TractPolygon};
use geo::{BoundingRect, Centroid, Distance, Euclidean, Point};
use rayon::prelude::*;
use rstar::primitives::GeomWithData;
use rstar::RTree;

type EntranceNode = GeomWithData<[f64; 2], usize>;

/// nearest-entrance distances for a set of tracts, measured once and then
/// re-classified against as many thresholds as needed.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable {
    pub reference: TractReference,
    rows: Vec<TractDistance>,
}

impl DistanceTable {
    /// measures the straight-line distance from every tract to its nearest entrance.
    /// rows are in tract input order.
    pub fn compute(
        tracts: &[TractPolygon],
        entrances: &[PointOfInterest],
        reference: TractReference,
    ) -> DistanceTable {
        let index = EntranceIndex::new(entrances);
        if index.is_empty() {
            log::warn!(
                "no entrances to measure against, all {} tracts are unserved",
                tracts.len()
            );
        }
        let rows = tracts
            .par_iter()
            .map(|tract| {
                let nearest = index.nearest(tract, reference);
                TractDistance {
                    tract_id: tract.id.clone(),
                    nearest_distance_ft: nearest.map(|(_, d)| d).unwrap_or(f64::INFINITY),
                    nearest_entrance_id: nearest.map(|(e, _)| entrances[e].id.clone()),
                    population: tract.population,
                    median_income: tract.median_income,
                }
            })
            .collect();
        DistanceTable { reference, rows }
    }

    pub fn rows(&self) -> &[TractDistance] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, tract_id: &str) -> Option<&TractDistance> {
        self.rows.iter().find(|row| row.tract_id == tract_id)
    }

    /// flags every tract against `threshold` feet
    pub fn classify(&self, threshold: f64) -> Vec<DesertFlag> {
        self.rows.iter().map(|row| classify(row, threshold)).collect()
    }
}

/// straight-line distance in feet from `tract` to the nearest of `entrances`, or
/// infinity when there are none.
pub fn nearest_distance(
    tract: &TractPolygon,
    entrances: &[PointOfInterest],
    reference: TractReference,
) -> f64 {
    EntranceIndex::new(entrances)
        .nearest(tract, reference)
        .map(|(_, d)| d)
        .unwrap_or(f64::INFINITY)
}

/// measures and classifies a single tract in one step. for many thresholds, measure
/// once with [DistanceTable::compute] and classify the stored distances instead.
pub fn classify_tract(
    tract: &TractPolygon,
    entrances: &[PointOfInterest],
    reference: TractReference,
    threshold: f64,
) -> DesertFlag {
    let index = EntranceIndex::new(entrances);
    let nearest = index.nearest(tract, reference);
    let distance = TractDistance {
        tract_id: tract.id.clone(),
        nearest_distance_ft: nearest.map(|(_, d)| d).unwrap_or(f64::INFINITY),
        nearest_entrance_id: nearest.map(|(e, _)| entrances[e].id.clone()),
        population: tract.population,
        median_income: tract.median_income,
    };
    classify(&distance, threshold)
}

struct EntranceIndex {
    rtree: RTree<EntranceNode>,
}

impl EntranceIndex {
    fn new(entrances: &[PointOfInterest]) -> EntranceIndex {
        let nodes = entrances
            .iter()
            .enumerate()
            .filter(|(_, e)| e.coordinate.x.is_finite() && e.coordinate.y.is_finite())
            .map(|(i, e)| GeomWithData::new([e.coordinate.x, e.coordinate.y], i))
            .collect();
        EntranceIndex {
            rtree: RTree::bulk_load(nodes),
        }
    }

    fn is_empty(&self) -> bool {
        self.rtree.size() == 0
    }

    /// index and distance of the entrance closest to the tract. ties go to the
    /// entrance listed first.
    fn nearest(&self, tract: &TractPolygon, reference: TractReference) -> Option<(usize, f64)> {
        match reference {
            TractReference::Centroid => {
                let centroid = tract.geometry.centroid()?;
                self.nearest_to_point(centroid)
            }
            TractReference::Boundary => self.nearest_to_area(tract),
        }
    }

    fn nearest_to_point(&self, point: Point<f64>) -> Option<(usize, f64)> {
        let query = [point.x(), point.y()];
        let mut best: Option<(usize, f64)> = None;
        for node in self.rtree.nearest_neighbor_iter(&query) {
            let d = Euclidean.distance(&point, &Point::new(node.geom()[0], node.geom()[1]));
            match best {
                Some((_, best_d)) if d > best_d => break,
                Some((best_i, best_d)) if d == best_d && best_i < node.data => {}
                _ => best = Some((node.data, d)),
            }
        }
        best
    }

    /// entrances are visited by distance from the tract's bounding box center. no
    /// entrance can be closer to the tract than its center distance minus the
    /// box radius, which bounds the search.
    fn nearest_to_area(&self, tract: &TractPolygon) -> Option<(usize, f64)> {
        let rect = tract.geometry.bounding_rect()?;
        let center = rect.center();
        let radius = (rect.width() * rect.width() + rect.height() * rect.height()).sqrt() / 2.0;
        let query = [center.x, center.y];

        let mut best: Option<(usize, f64)> = None;
        for node in self.rtree.nearest_neighbor_iter(&query) {
            let entrance = Point::new(node.geom()[0], node.geom()[1]);
            let center_distance = Euclidean.distance(&Point::from(center), &entrance);
            if let Some((_, best_d)) = best {
                if center_distance - radius > best_d {
                    break;
                }
            }
            let d = tract
                .geometry
                .0
                .iter()
                .map(|polygon| Euclidean.distance(&entrance, polygon))
                .fold(f64::INFINITY, f64::min);
            match best {
                Some((best_i, best_d)) if d > best_d || (d == best_d && best_i < node.data) => {}
                _ => best = Some((node.data, d)),
            }
        }
        best
    }
}
