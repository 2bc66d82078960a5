use super::{convex_hull::convex_hull_ring, delaunay::triangulate, triangle_mesh::TriangleMesh};
use geo::{Area, Coord, LineString, Polygon};

/// concave hull of a point set by Delaunay erosion.
///
/// the points are triangulated, and triangles are then peeled off the outside of the
/// triangulation while their exposed edge is longer than a length threshold. the
/// threshold is interpolated between the shortest and longest triangulation edge:
///
/// ```text
/// threshold = min_edge + concavity * (max_edge - min_edge)
/// ```
///
/// so `concavity = 0.0` erodes as far as possible and `concavity = 1.0` keeps every
/// triangle, returning the convex hull. values outside `[0, 1]` are clamped and NaN
/// is treated as 1.0. erosion never disconnects the region or removes an input point
/// from it, so every input point lies inside or on the boundary of the result.
///
/// when `allow_holes` is set, interior triangles with an edge longer than the threshold
/// are also removed, opening holes in the polygon.
///
/// returns None when there are fewer than 3 distinct finite points, or when the
/// points are collinear and enclose no area.
pub fn concave_hull(points: &[Coord<f64>], concavity: f64, allow_holes: bool) -> Option<Polygon<f64>> {
    let mut distinct = points
        .iter()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .copied()
        .collect::<Vec<_>>();
    distinct.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    distinct.dedup();
    if distinct.len() < 3 {
        return None;
    }

    let concavity = if concavity.is_nan() {
        1.0
    } else {
        concavity.clamp(0.0, 1.0)
    };
    if concavity >= 1.0 {
        return convex_hull_ring(&distinct).map(|ring| Polygon::new(ring, vec![]));
    }

    let triangulation = triangulate(&distinct);
    if triangulation.is_empty() {
        return None;
    }
    let mut mesh = TriangleMesh::new(triangulation);
    let (shortest, longest) = mesh.edge_length_range()?;
    let threshold = shortest + concavity * (longest - shortest);
    mesh.erode_border(threshold);
    if allow_holes {
        mesh.erode_holes(threshold);
    }

    let mut exterior: Option<(f64, Vec<Coord<f64>>)> = None;
    let mut interiors: Vec<LineString<f64>> = vec![];
    for ring in mesh.boundary_rings() {
        let area = ring_signed_area(&ring);
        if area < 0.0 {
            interiors.push(LineString::new(ring));
        } else if exterior.as_ref().map_or(true, |(best, _)| area > *best) {
            exterior = Some((area, ring));
        }
    }
    let (_, exterior) = exterior?;
    log::debug!(
        "concave hull of {} points with concavity {concavity}: {} exterior vertices, {} holes",
        distinct.len(),
        exterior.len() - 1,
        interiors.len()
    );
    Some(Polygon::new(LineString::new(exterior), interiors))
}

/// planar area of a hull polygon (holes excluded), in squared units of its coordinates.
pub fn hull_area(polygon: &Polygon<f64>) -> f64 {
    polygon.unsigned_area()
}

/// shoelace area of a closed ring, positive when counter-clockwise
fn ring_signed_area(ring: &[Coord<f64>]) -> f64 {
    ring.windows(2)
        .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
        .sum::<f64>()
        / 2.0
}
