use super::{Graph, GraphIntegrityError};
use crate::model::{Edge, Vertex, VertexId};
use geo::{Coord, Euclidean, Length, LineString};
use rstar::primitives::GeomWithData;
use rstar::RTree;

type TopologyNode = GeomWithData<[f64; 2], VertexId>;

/// builds a routable network from street centerlines by snapping linestring
/// endpoints onto shared topology vertices.
///
/// each linestring becomes one edge weighted by its planar length. an endpoint
/// within `tolerance_ft` of an existing topology vertex reuses it (nearest wins,
/// lowest id on ties); otherwise a new vertex is created with the next sequential id.
#[derive(Debug, Clone, Copy)]
pub struct TopologyBuilder {
    pub tolerance_ft: f64,
}

#[derive(Debug)]
pub struct TopologyResult {
    pub graph: Graph,
    /// linestrings whose endpoints snapped onto the same vertex
    pub dropped_loops: usize,
    /// linestrings with fewer than two coordinates
    pub dropped_degenerate: usize,
}

impl TopologyBuilder {
    pub fn new(tolerance_ft: f64) -> TopologyBuilder {
        TopologyBuilder {
            tolerance_ft: tolerance_ft.max(0.0),
        }
    }

    pub fn build(&self, lines: &[LineString<f64>]) -> Result<TopologyResult, GraphIntegrityError> {
        let mut rtree: RTree<TopologyNode> = RTree::new();
        let mut vertices: Vec<Vertex> = vec![];
        let mut edges: Vec<Edge> = vec![];
        let mut dropped_loops = 0;
        let mut dropped_degenerate = 0;

        for line in lines.iter() {
            let (first, last) = match (line.0.first(), line.0.last()) {
                (Some(first), Some(last)) if line.0.len() >= 2 => (*first, *last),
                _ => {
                    dropped_degenerate += 1;
                    continue;
                }
            };
            let src = self.snap_or_insert(&mut rtree, &mut vertices, first);
            let dst = self.snap_or_insert(&mut rtree, &mut vertices, last);
            if src == dst {
                dropped_loops += 1;
                continue;
            }
            let edge_id = edges.len() as i64;
            let length_ft = Euclidean.length(line);
            edges.push(Edge::new(edge_id, src.0, dst.0, length_ft));
        }

        if dropped_loops > 0 || dropped_degenerate > 0 {
            log::warn!(
                "topology build dropped {dropped_loops} closed loops and {dropped_degenerate} degenerate linestrings"
            );
        }
        log::info!(
            "topology build created {} vertices from {} linestrings with tolerance {} ft",
            vertices.len(),
            lines.len(),
            self.tolerance_ft
        );

        let graph = Graph::build(vertices, edges)?;
        Ok(TopologyResult {
            graph,
            dropped_loops,
            dropped_degenerate,
        })
    }

    fn snap_or_insert(
        &self,
        rtree: &mut RTree<TopologyNode>,
        vertices: &mut Vec<Vertex>,
        coord: Coord<f64>,
    ) -> VertexId {
        let query = [coord.x, coord.y];
        let max_squared_radius = self.tolerance_ft * self.tolerance_ft;
        let nearest = rtree
            .locate_within_distance(query, max_squared_radius)
            .map(|node| (squared_distance(node.geom(), &query), node.data))
            .min_by(|(d_a, id_a), (d_b, id_b)| d_a.total_cmp(d_b).then(id_a.cmp(id_b)));
        match nearest {
            Some((_, vertex_id)) => vertex_id,
            None => {
                let vertex_id = VertexId(vertices.len() as i64);
                vertices.push(Vertex {
                    vertex_id,
                    coordinate: coord,
                });
                rtree.insert(GeomWithData::new(query, vertex_id));
                vertex_id
            }
        }
    }
}

fn squared_distance(a: &[f64; 2], b: &[f64; 2]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}
