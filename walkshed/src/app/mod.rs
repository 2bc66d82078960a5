mod desert_ops;
mod isochrone_ops;
mod network_ops;
mod run;

pub use desert_ops::run_deserts;
pub use isochrone_ops::{run_isochrones, IsochroneReport};
pub use network_ops::load_network;
pub use run::{run, RunMode, RunReport};
