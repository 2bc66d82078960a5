use geo::Coord;
use std::collections::HashMap;

/// relative tolerance of the in-circumcircle test. points on (or numerically
/// indistinguishable from) a circumcircle are treated as outside of it.
const IN_CIRCLE_TOLERANCE: f64 = 1e-12;

/// Delaunay triangulation of a point set. triangles index into `points` and are
/// wound counter-clockwise.
#[derive(Debug, Clone)]
pub struct Triangulation {
    pub points: Vec<Coord<f64>>,
    pub triangles: Vec<[usize; 3]>,
}

impl Triangulation {
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// stands in for the vertex at infinity shared by every ghost triangle
const GHOST: usize = usize::MAX;

/// relative tolerance of the orientation test against ghost triangles. points this
/// close to the line through a hull edge are treated as on it.
const ORIENTATION_TOLERANCE: f64 = 1e-12;

/// a working triangle of the sweep. a ghost triangle `[x, y, GHOST]` closes the
/// unbounded region outside the hull edge `y -> x` and has no circumcircle.
#[derive(Debug, Clone, Copy)]
struct Circumscribed {
    vertices: [usize; 3],
    cx: f64,
    cy: f64,
    r2: f64,
}

impl Circumscribed {
    fn new(vertices: [usize; 3], points: &[Coord<f64>]) -> Circumscribed {
        if vertices[2] == GHOST {
            return Circumscribed {
                vertices,
                cx: f64::NAN,
                cy: f64::NAN,
                r2: f64::NAN,
            };
        }
        let [a, b, c] = vertices.map(|v| points[v]);
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        if d == 0.0 || !d.is_finite() {
            // collinear: an unbounded circle, replaced by whichever point arrives next
            return Circumscribed {
                vertices,
                cx: (a.x + b.x + c.x) / 3.0,
                cy: (a.y + b.y + c.y) / 3.0,
                r2: f64::INFINITY,
            };
        }
        let a2 = a.x * a.x + a.y * a.y;
        let b2 = b.x * b.x + b.y * b.y;
        let c2 = c.x * c.x + c.y * c.y;
        let cx = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
        let cy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
        let r2 = (a.x - cx) * (a.x - cx) + (a.y - cy) * (a.y - cy);
        Circumscribed {
            vertices,
            cx,
            cy,
            r2,
        }
    }

    fn is_ghost(&self) -> bool {
        self.vertices[2] == GHOST
    }

    /// true when inserting `p` destroys this triangle. for a ghost triangle that is
    /// when `p` lies strictly outside its hull edge.
    fn conflicts_with(&self, p: &Coord<f64>, points: &[Coord<f64>]) -> bool {
        if self.is_ghost() {
            let [x, y, _] = self.vertices;
            return cross(&points[x], &points[y], p) > ORIENTATION_TOLERANCE;
        }
        let dx = p.x - self.cx;
        let dy = p.y - self.cy;
        dx * dx + dy * dy < self.r2 * (1.0 - IN_CIRCLE_TOLERANCE)
    }

    /// true when `p` lies strictly right of the circumcircle. since points are
    /// inserted in x order, no later point can fall inside this triangle's circle.
    fn left_of(&self, p: &Coord<f64>) -> bool {
        if self.is_ghost() {
            return false;
        }
        let dx = p.x - self.cx;
        dx > 0.0 && dx * dx > self.r2
    }
}

/// Bowyer-Watson incremental Delaunay triangulation.
///
/// points are inserted in lexicographic (x, then y) order, so every new point lies
/// strictly outside the hull of the points before it. the region outside the hull is
/// covered by ghost triangles, one per hull edge, sharing a vertex at infinity. a new
/// point destroys every triangle whose circumcircle contains it and every ghost
/// triangle whose hull edge it lies beyond, and the resulting cavity is
/// re-triangulated as a fan around the new point. the finite triangles therefore
/// always cover the convex hull of the inserted points.
///
/// triangles whose circumcircle lies wholly left of the sweep are retired early,
/// which keeps the working set small for spatially spread inputs. coordinates are
/// normalized to the unit square during the sweep to keep the circle tests well
/// conditioned for large projected coordinates.
///
/// `points` must be distinct. fewer than three points, or points that are all
/// collinear, produce an empty triangulation.
pub fn triangulate(points: &[Coord<f64>]) -> Triangulation {
    let n = points.len();
    let empty = Triangulation {
        points: points.to_vec(),
        triangles: vec![],
    };
    if n < 3 {
        return empty;
    }

    let (min_x, min_y, max_x, max_y) = points.iter().fold(
        (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        |(x0, y0, x1, y1), p| (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y)),
    );
    let scale = (max_x - min_x).max(max_y - min_y);
    if !(scale > 0.0 && scale.is_finite()) {
        return empty;
    }

    let normalized: Vec<Coord<f64>> = points
        .iter()
        .map(|p| Coord {
            x: (p.x - min_x) / scale,
            y: (p.y - min_y) / scale,
        })
        .collect();

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|a, b| {
        normalized[*a]
            .x
            .total_cmp(&normalized[*b].x)
            .then(normalized[*a].y.total_cmp(&normalized[*b].y))
    });

    let (mut active, seeded) = match seed_triangles(&order, &normalized) {
        Some(seed) => seed,
        None => return empty,
    };
    let mut retired: Vec<Circumscribed> = vec![];
    let mut cavity_edges: HashMap<(usize, usize), (usize, usize, usize)> = HashMap::new();

    for (step, point_index) in order.into_iter().enumerate().skip(seeded) {
        let p = normalized[point_index];
        cavity_edges.clear();

        let mut k = 0;
        while k < active.len() {
            if active[k].left_of(&p) {
                retired.push(active.swap_remove(k));
            } else if active[k].conflicts_with(&p, &normalized) {
                let [a, b, c] = active.swap_remove(k).vertices;
                for (u, v) in [(a, b), (b, c), (c, a)] {
                    cavity_edges
                        .entry((u.min(v), u.max(v)))
                        .and_modify(|e| e.2 += 1)
                        .or_insert((u, v, 1));
                }
            } else {
                k += 1;
            }
        }

        // edges seen once form the cavity boundary. sorted for determinism.
        let mut boundary = cavity_edges
            .values()
            .filter(|(_, _, count)| *count == 1)
            .map(|(u, v, _)| (*u, *v))
            .collect::<Vec<_>>();
        boundary.sort_unstable();
        if boundary.is_empty() {
            log::debug!("delaunay: point {step} conflicts with no triangle, dropping it");
        }
        for (u, v) in boundary {
            let vertices = if u == GHOST {
                [v, point_index, GHOST]
            } else if v == GHOST {
                [point_index, u, GHOST]
            } else {
                [u, v, point_index]
            };
            active.push(Circumscribed::new(vertices, &normalized));
        }
    }
    retired.extend(active);

    let triangles = retired
        .into_iter()
        .filter(|t| !t.is_ghost())
        .filter_map(|t| {
            let [a, b, c] = t.vertices;
            let area2 = cross(&normalized[a], &normalized[b], &normalized[c]);
            if area2 > 0.0 {
                Some([a, b, c])
            } else if area2 < 0.0 {
                Some([a, c, b])
            } else {
                None
            }
        })
        .collect();

    Triangulation {
        points: points.to_vec(),
        triangles,
    }
}

/// first triangles of the sweep: the leading run of collinear points fanned to the
/// first point off their line, closed by ghost triangles on every hull edge. returns
/// the triangles and how many points of `order` they consume, or None when all points
/// are collinear.
fn seed_triangles(order: &[usize], points: &[Coord<f64>]) -> Option<(Vec<Circumscribed>, usize)> {
    let (first, second) = (points[order[0]], points[order[1]]);
    let apex_at = (2..order.len())
        .find(|k| cross(&first, &second, &points[order[*k]]).abs() > ORIENTATION_TOLERANCE)?;
    let apex = order[apex_at];
    let line = &order[..apex_at];

    // hull edges in counter-clockwise order
    let mut hull: Vec<(usize, usize)> = vec![];
    let mut triangles: Vec<Circumscribed> = vec![];
    if cross(&first, &second, &points[apex]) > 0.0 {
        for w in line.windows(2) {
            triangles.push(Circumscribed::new([w[0], w[1], apex], points));
            hull.push((w[0], w[1]));
        }
        hull.push((line[line.len() - 1], apex));
        hull.push((apex, line[0]));
    } else {
        for w in line.windows(2) {
            triangles.push(Circumscribed::new([w[1], w[0], apex], points));
            hull.push((w[1], w[0]));
        }
        hull.push((line[0], apex));
        hull.push((apex, line[line.len() - 1]));
    }
    for (x, y) in hull {
        triangles.push(Circumscribed::new([y, x, GHOST], points));
    }
    Some((triangles, apex_at + 1))
}

/// twice the signed area of triangle (a, b, c); positive when counter-clockwise
pub fn cross(a: &Coord<f64>, b: &Coord<f64>, c: &Coord<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::convex_hull_ring;
    use geo::{Area, Polygon};

    /// xorshift64 stream in [0, 1), seeded per test case
    fn uniform(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
        move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    fn scattered(seed: u64, n: usize, width: f64, height: f64) -> Vec<Coord<f64>> {
        let mut next = uniform(seed);
        let mut points = (0..n)
            .map(|_| Coord {
                x: 980_000.0 + width * next(),
                y: 195_000.0 + height * next(),
            })
            .collect::<Vec<_>>();
        points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        points.dedup();
        points
    }

    fn total_area(t: &Triangulation) -> f64 {
        t.triangles
            .iter()
            .map(|[a, b, c]| cross(&t.points[*a], &t.points[*b], &t.points[*c]) / 2.0)
            .sum()
    }

    #[test]
    fn test_square_with_center() {
        let points = vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 10.0, y: 0.0 },
            Coord { x: 10.0, y: 10.0 },
            Coord { x: 0.0, y: 10.0 },
            Coord { x: 5.0, y: 5.0 },
        ];
        let t = triangulate(&points);
        assert_eq!(t.triangles.len(), 4);
        assert!((total_area(&t) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_triangles_are_counter_clockwise() {
        let points = (0..40)
            .map(|i| {
                let angle = i as f64 * 2.399963;
                let radius = 50.0 + (i * 13 % 17) as f64;
                Coord {
                    x: 1_000_000.0 + radius * angle.cos(),
                    y: 200_000.0 + radius * angle.sin(),
                }
            })
            .collect::<Vec<_>>();
        let t = triangulate(&points);
        assert!(!t.is_empty());
        for [a, b, c] in t.triangles.iter() {
            assert!(cross(&t.points[*a], &t.points[*b], &t.points[*c]) > 0.0);
        }
    }

    #[test]
    fn test_delaunay_empty_circumcircles() {
        let points = (0..30)
            .map(|i| Coord {
                x: ((i * 37) % 29) as f64 * 3.1,
                y: ((i * 11) % 23) as f64 * 2.7 + (i as f64) * 0.01,
            })
            .collect::<Vec<_>>();
        let t = triangulate(&points);
        for tri in t.triangles.iter() {
            let circle = Circumscribed::new(*tri, &t.points);
            for (i, p) in t.points.iter().enumerate() {
                if tri.contains(&i) {
                    continue;
                }
                let dx = p.x - circle.cx;
                let dy = p.y - circle.cy;
                assert!(dx * dx + dy * dy >= circle.r2 * (1.0 - 1e-9));
            }
        }
    }

    #[test]
    fn test_triangles_cover_convex_hull() {
        // square, elongated corridor and very thin corridor layouts
        let layouts = [(3000.0, 3000.0), (3000.0, 300.0), (3000.0, 30.0), (40.0, 2500.0)];
        for seed in 0..100u64 {
            for (width, height) in layouts {
                let n = 4 + (seed as usize * 7) % 60;
                let points = scattered(seed, n, width, height);
                let t = triangulate(&points);
                let hull = Polygon::new(convex_hull_ring(&points).unwrap(), vec![]);
                let expected = hull.unsigned_area();
                let covered = total_area(&t);
                assert!(
                    (covered - expected).abs() <= 1e-7 * expected,
                    "seed {seed} n {n} {width}x{height}: triangles {covered} vs hull {expected}"
                );
                for [a, b, c] in t.triangles.iter() {
                    assert!(cross(&t.points[*a], &t.points[*b], &t.points[*c]) > 0.0);
                }
            }
        }
    }

    #[test]
    fn test_every_point_is_a_vertex() {
        for seed in 0..50u64 {
            let points = scattered(seed, 40, 3000.0, 30.0);
            let t = triangulate(&points);
            let mut used = vec![false; points.len()];
            for tri in t.triangles.iter() {
                for v in tri {
                    used[*v] = true;
                }
            }
            assert!(used.iter().all(|u| *u), "seed {seed}");
        }
    }

    #[test]
    fn test_collinear_lead_points_are_fanned() {
        // first column is collinear, fanned to the first point off the line
        let mut points = vec![];
        for i in 0..4 {
            for j in 0..6 {
                points.push(Coord {
                    x: i as f64 * 100.0,
                    y: j as f64 * 100.0,
                });
            }
        }
        let t = triangulate(&points);
        assert!((total_area(&t) - 300.0 * 500.0).abs() < 1e-6);
        assert_eq!(t.triangles.len(), 2 * 3 * 5);
    }

    #[test]
    fn test_collinear_points_have_no_triangles() {
        let points = (0..5)
            .map(|i| Coord {
                x: i as f64,
                y: 2.0 * i as f64,
            })
            .collect::<Vec<_>>();
        assert!(triangulate(&points).is_empty());
    }
}
