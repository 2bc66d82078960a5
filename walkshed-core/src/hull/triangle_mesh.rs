use super::delaunay::Triangulation;
use geo::Coord;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// a border edge queued for erosion, longest first, then lowest triangle index
type ErosionCandidate = (OrderedFloat<f64>, Reverse<usize>, usize);

/// triangle adjacency over a [Triangulation] with the bookkeeping needed to erode
/// triangles from its border while keeping the remaining region a single simple
/// polygon (with optional holes).
///
/// edge `k` of triangle `t` runs from `triangles[t][k]` to `triangles[t][(k + 1) % 3]`
/// and the vertex opposite it is `triangles[t][(k + 2) % 3]`.
pub struct TriangleMesh {
    points: Vec<Coord<f64>>,
    triangles: Vec<[usize; 3]>,
    neighbors: Vec<[Option<usize>; 3]>,
    alive: Vec<bool>,
    on_border: Vec<bool>,
}

impl TriangleMesh {
    pub fn new(triangulation: Triangulation) -> TriangleMesh {
        let Triangulation { points, triangles } = triangulation;
        let mut neighbors = vec![[None; 3]; triangles.len()];
        let mut open: HashMap<(usize, usize), (usize, usize)> = HashMap::new();
        for (t, tri) in triangles.iter().enumerate() {
            for k in 0..3 {
                let (u, v) = (tri[k], tri[(k + 1) % 3]);
                match open.remove(&(u.min(v), u.max(v))) {
                    Some((other, other_k)) => {
                        neighbors[t][k] = Some(other);
                        neighbors[other][other_k] = Some(t);
                    }
                    None => {
                        open.insert((u.min(v), u.max(v)), (t, k));
                    }
                }
            }
        }
        let mut on_border = vec![false; points.len()];
        for (t, tri) in triangles.iter().enumerate() {
            for k in 0..3 {
                if neighbors[t][k].is_none() {
                    on_border[tri[k]] = true;
                    on_border[tri[(k + 1) % 3]] = true;
                }
            }
        }
        let alive = vec![true; triangles.len()];
        TriangleMesh {
            points,
            triangles,
            neighbors,
            alive,
            on_border,
        }
    }

    pub fn points(&self) -> &[Coord<f64>] {
        &self.points
    }

    pub fn edge_length(&self, t: usize, k: usize) -> f64 {
        let a = self.points[self.triangles[t][k]];
        let b = self.points[self.triangles[t][(k + 1) % 3]];
        (a.x - b.x).hypot(a.y - b.y)
    }

    /// shortest and longest edge in the mesh
    pub fn edge_length_range(&self) -> Option<(f64, f64)> {
        (0..self.triangles.len())
            .flat_map(|t| (0..3).map(move |k| (t, k)))
            .map(|(t, k)| self.edge_length(t, k))
            .fold(None, |acc, len| match acc {
                None => Some((len, len)),
                Some((lo, hi)) => Some((lo.min(len), hi.max(len))),
            })
    }

    fn is_border_edge(&self, t: usize, k: usize) -> bool {
        match self.neighbors[t][k] {
            None => true,
            Some(n) => !self.alive[n],
        }
    }

    fn border_edge_count(&self, t: usize) -> usize {
        (0..3).filter(|k| self.is_border_edge(t, *k)).count()
    }

    fn longest_edge(&self, t: usize) -> f64 {
        (0..3).map(|k| self.edge_length(t, k)).fold(0.0, f64::max)
    }

    /// removes border triangles whose border edge is longer than `threshold`,
    /// longest border edge first. a triangle is only removed when exactly one of its
    /// edges is on the border and its opposite vertex is not, which keeps the
    /// remaining region connected and its boundary simple.
    pub fn erode_border(&mut self, threshold: f64) {
        let mut queue: BinaryHeap<ErosionCandidate> = BinaryHeap::new();
        for t in 0..self.triangles.len() {
            self.enqueue_border_edges(t, threshold, &mut queue);
        }
        self.drain_erosion_queue(threshold, &mut queue);
    }

    /// opens holes at interior triangles with an edge longer than `threshold`, then
    /// grows each hole by the same border erosion rule. holes never touch the outer
    /// boundary or each other.
    pub fn erode_holes(&mut self, threshold: f64) {
        let mut seeds = (0..self.triangles.len())
            .map(|t| (self.longest_edge(t), t))
            .filter(|(len, _)| *len > threshold)
            .collect::<Vec<_>>();
        seeds.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));

        let mut queue: BinaryHeap<ErosionCandidate> = BinaryHeap::new();
        for (_, t) in seeds {
            let is_interior = self.alive[t]
                && self.border_edge_count(t) == 0
                && self.triangles[t].iter().all(|v| !self.on_border[*v]);
            if !is_interior {
                continue;
            }
            self.remove(t);
            for v in self.triangles[t] {
                self.on_border[v] = true;
            }
            for n in self.neighbors[t].into_iter().flatten() {
                self.enqueue_border_edges(n, threshold, &mut queue);
            }
            self.drain_erosion_queue(threshold, &mut queue);
        }
    }

    fn enqueue_border_edges(
        &self,
        t: usize,
        threshold: f64,
        queue: &mut BinaryHeap<ErosionCandidate>,
    ) {
        if !self.alive[t] {
            return;
        }
        for k in 0..3 {
            let len = self.edge_length(t, k);
            if self.is_border_edge(t, k) && len > threshold {
                queue.push((OrderedFloat(len), Reverse(t), k));
            }
        }
    }

    fn drain_erosion_queue(&mut self, threshold: f64, queue: &mut BinaryHeap<ErosionCandidate>) {
        while let Some((_, Reverse(t), k)) = queue.pop() {
            if !self.alive[t] || !self.is_border_edge(t, k) || self.border_edge_count(t) != 1 {
                continue;
            }
            let apex = self.triangles[t][(k + 2) % 3];
            if self.on_border[apex] {
                continue;
            }
            self.remove(t);
            self.on_border[apex] = true;
            for n in self.neighbors[t].into_iter().flatten() {
                self.enqueue_border_edges(n, threshold, queue);
            }
        }
    }

    fn remove(&mut self, t: usize) {
        self.alive[t] = false;
    }

    /// closed boundary rings of the remaining triangles. triangles are wound
    /// counter-clockwise, so the outer ring comes out counter-clockwise and
    /// hole rings clockwise.
    pub fn boundary_rings(&self) -> Vec<Vec<Coord<f64>>> {
        let mut next: HashMap<usize, Vec<usize>> = HashMap::new();
        for (t, tri) in self.triangles.iter().enumerate() {
            if !self.alive[t] {
                continue;
            }
            for k in 0..3 {
                if self.is_border_edge(t, k) {
                    next.entry(tri[k]).or_default().push(tri[(k + 1) % 3]);
                }
            }
        }

        let mut starts = next.keys().copied().collect::<Vec<_>>();
        starts.sort_unstable();
        let mut rings = vec![];
        for start in starts {
            while next.get(&start).is_some_and(|outgoing| !outgoing.is_empty()) {
                let mut ring = vec![self.points[start]];
                let mut current = start;
                while let Some(to) = next.get_mut(&current).and_then(|outgoing| outgoing.pop()) {
                    ring.push(self.points[to]);
                    current = to;
                    if current == start {
                        break;
                    }
                }
                if current == start && ring.len() >= 4 {
                    rings.push(ring);
                } else {
                    log::debug!("discarding open boundary chain starting at point {start}");
                }
            }
        }
        rings
    }
}
