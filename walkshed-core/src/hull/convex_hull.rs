use super::delaunay::cross;
use geo::{Coord, LineString};

/// convex hull by Andrew's monotone chain.
///
/// returns the closed, counter-clockwise hull ring with collinear boundary points
/// removed, or None if the points do not span a positive area.
pub fn convex_hull_ring(points: &[Coord<f64>]) -> Option<LineString<f64>> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();
    if sorted.len() < 3 {
        return None;
    }

    let mut lower: Vec<Coord<f64>> = Vec::with_capacity(sorted.len());
    for p in sorted.iter() {
        while lower.len() >= 2 && cross(&lower[lower.len() - 2], &lower[lower.len() - 1], p) <= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Coord<f64>> = Vec::with_capacity(sorted.len());
    for p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(&upper[upper.len() - 2], &upper[upper.len() - 1], p) <= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }

    // the last point of each chain is the first point of the other
    lower.pop();
    upper.pop();
    lower.extend(upper);
    if lower.len() < 3 {
        return None;
    }
    let first = lower[0];
    lower.push(first);
    Some(LineString::new(lower))
}
