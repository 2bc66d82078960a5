use super::{Adjacency, GraphIntegrityError};
use crate::model::{Edge, EdgeId, Vertex, VertexId};
use geo::Coord;
use itertools::Itertools;
use std::collections::{HashMap, HashSet, VecDeque};

/// immutable undirected weighted walking network.
///
/// vertices and edges are stored in the order they were supplied. each vertex is
/// assigned a dense index into that storage which the search algorithms use
/// internally; the public API speaks only in [VertexId] and [EdgeId] values.
///
/// once built, a [Graph] is never modified, so it can be shared across threads
/// by reference for the remainder of a run.
#[derive(Debug)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    vertex_lookup: HashMap<VertexId, usize>,
    edge_lookup: HashMap<EdgeId, usize>,
    adjacency: Vec<Vec<Adjacency>>,
}

impl Graph {
    /// builds the graph, validating that
    /// - vertex ids are unique and coordinates are finite
    /// - edge ids are unique and lengths are finite and non-negative
    /// - both endpoints of every edge exist in the vertex list
    ///
    /// any violation aborts the build.
    pub fn build(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Result<Graph, GraphIntegrityError> {
        let mut vertex_lookup: HashMap<VertexId, usize> = HashMap::with_capacity(vertices.len());
        for (index, vertex) in vertices.iter().enumerate() {
            if !vertex.x().is_finite() || !vertex.y().is_finite() {
                return Err(GraphIntegrityError::NonFiniteCoordinate(
                    vertex.vertex_id,
                    vertex.x(),
                    vertex.y(),
                ));
            }
            if vertex_lookup.insert(vertex.vertex_id, index).is_some() {
                return Err(GraphIntegrityError::DuplicateVertexId(vertex.vertex_id));
            }
        }

        let mut edge_lookup: HashMap<EdgeId, usize> = HashMap::with_capacity(edges.len());
        let mut adjacency: Vec<Vec<Adjacency>> = vec![vec![]; vertices.len()];
        for (index, edge) in edges.iter().enumerate() {
            if !edge.length_ft.is_finite() || edge.length_ft < 0.0 {
                return Err(GraphIntegrityError::InvalidEdgeLength(
                    edge.edge_id,
                    edge.length_ft,
                ));
            }
            if edge_lookup.insert(edge.edge_id, index).is_some() {
                return Err(GraphIntegrityError::DuplicateEdgeId(edge.edge_id));
            }
            let src_index = resolve(&vertex_lookup, edge, edge.src_vertex_id)?;
            let dst_index = resolve(&vertex_lookup, edge, edge.dst_vertex_id)?;

            adjacency[src_index].push(Adjacency {
                neighbor: edge.dst_vertex_id,
                edge_id: edge.edge_id,
                weight: edge.length_ft,
                neighbor_index: dst_index,
            });
            // a self-loop only needs to appear once
            if src_index != dst_index {
                adjacency[dst_index].push(Adjacency {
                    neighbor: edge.src_vertex_id,
                    edge_id: edge.edge_id,
                    weight: edge.length_ft,
                    neighbor_index: src_index,
                });
            }
        }

        // sorted for deterministic neighbor iteration order.
        for list in adjacency.iter_mut() {
            list.sort_by(|a, b| {
                a.neighbor
                    .cmp(&b.neighbor)
                    .then(a.weight.total_cmp(&b.weight))
                    .then(a.edge_id.cmp(&b.edge_id))
            });
        }

        log::debug!(
            "built walk graph with {} vertices and {} edges",
            vertices.len(),
            edges.len()
        );

        Ok(Graph {
            vertices,
            edges,
            vertex_lookup,
            edge_lookup,
            adjacency,
        })
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn contains_vertex(&self, vertex_id: &VertexId) -> bool {
        self.vertex_lookup.contains_key(vertex_id)
    }

    pub fn vertex(&self, vertex_id: &VertexId) -> Option<&Vertex> {
        self.vertex_lookup
            .get(vertex_id)
            .map(|index| &self.vertices[*index])
    }

    pub fn edge(&self, edge_id: &EdgeId) -> Option<&Edge> {
        self.edge_lookup.get(edge_id).map(|index| &self.edges[*index])
    }

    /// coordinate of a vertex, or None if the vertex is not in the graph.
    pub fn vertex_coordinate(&self, vertex_id: &VertexId) -> Option<Coord<f64>> {
        self.vertex(vertex_id).map(|v| v.coordinate)
    }

    /// neighbors of a vertex, ordered by neighbor id, then weight, then edge id.
    /// returns None if the vertex is not in the graph.
    pub fn neighbors(&self, vertex_id: &VertexId) -> Option<&[Adjacency]> {
        self.vertex_lookup
            .get(vertex_id)
            .map(|index| self.adjacency[*index].as_slice())
    }

    pub(crate) fn vertex_index(&self, vertex_id: &VertexId) -> Option<usize> {
        self.vertex_lookup.get(vertex_id).copied()
    }

    pub(crate) fn vertex_at(&self, index: usize) -> &Vertex {
        &self.vertices[index]
    }

    pub(crate) fn adjacency_at(&self, index: usize) -> &[Adjacency] {
        &self.adjacency[index]
    }

    /// finds the connected components of the undirected network using breadth-first search.
    /// each component is sorted by vertex id, and components are returned largest first
    /// (ties broken by lowest member id).
    pub fn connected_components(&self) -> Vec<Vec<VertexId>> {
        let mut visited: HashSet<usize> = HashSet::with_capacity(self.vertices.len());
        let mut components: Vec<Vec<VertexId>> = vec![];
        for start in 0..self.vertices.len() {
            if visited.contains(&start) {
                continue;
            }
            let mut component = vec![];
            let mut frontier: VecDeque<usize> = VecDeque::new();
            visited.insert(start);
            frontier.push_back(start);
            while let Some(next) = frontier.pop_front() {
                component.push(self.vertices[next].vertex_id);
                for adj in self.adjacency[next].iter() {
                    if visited.insert(adj.neighbor_index) {
                        frontier.push_back(adj.neighbor_index);
                    }
                }
            }
            component.sort();
            components.push(component);
        }
        components
            .into_iter()
            .sorted_by(|a, b| b.len().cmp(&a.len()).then(a.first().cmp(&b.first())))
            .collect_vec()
    }
}

fn resolve(
    lookup: &HashMap<VertexId, usize>,
    edge: &Edge,
    vertex_id: VertexId,
) -> Result<usize, GraphIntegrityError> {
    lookup
        .get(&vertex_id)
        .copied()
        .ok_or(GraphIntegrityError::DanglingEdgeReference {
            edge_id: edge.edge_id,
            vertex_id,
        })
}
