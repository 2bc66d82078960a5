mod isochrone_builder;
mod isochrone_polygon;

pub use isochrone_builder::IsochroneBuilder;
pub use isochrone_polygon::IsochronePolygon;
