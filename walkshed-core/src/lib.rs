pub mod desert;
pub mod graph;
pub mod hull;
pub mod isochrone;
pub mod model;
pub mod search;
pub mod snap;
