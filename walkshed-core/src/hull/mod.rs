mod concave_hull;
mod convex_hull;
mod delaunay;
mod triangle_mesh;

pub use concave_hull::{concave_hull, hull_area};
pub use convex_hull::convex_hull_ring;
pub use delaunay::{triangulate, Triangulation};
