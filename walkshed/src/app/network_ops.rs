use crate::{
    config::NetworkSource,
    io::{read_csv_network, read_street_lines},
    model::WalkshedError,
};
use walkshed_core::graph::{Graph, TopologyBuilder};

/// builds the walking network. any integrity failure aborts the run.
pub fn load_network(source: &NetworkSource) -> Result<Graph, WalkshedError> {
    let graph = match source {
        NetworkSource::Csv {
            vertices_file,
            edges_file,
        } => {
            let (vertices, edges) = read_csv_network(vertices_file, edges_file)?;
            Graph::build(vertices, edges)?
        }
        NetworkSource::GeoJson {
            file,
            snap_tolerance,
        } => {
            let lines = read_street_lines(file)?;
            TopologyBuilder::new(*snap_tolerance).build(&lines)?.graph
        }
    };
    log_components(&graph);
    Ok(graph)
}

fn log_components(graph: &Graph) {
    let components = graph.connected_components();
    let largest = components.first().map(|c| c.len()).unwrap_or_default();
    log::info!(
        "network has {} vertices, {} edges in {} connected components (largest: {largest} vertices)",
        graph.n_vertices(),
        graph.n_edges(),
        components.len()
    );
    if components.len() > 1 {
        let isolated = graph.n_vertices() - largest;
        log::warn!("{isolated} vertices are not connected to the largest component");
    }
}
