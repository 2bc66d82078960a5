use std::fmt::Write as _;
use std::path::Path;
use walkshed::{
    app::{run, RunMode},
    config::{DistanceConfig, DistanceUnit, EntranceConfig, NetworkSource, TractConfig, WalkshedConfig},
    model::WalkshedError,
};

const X0: f64 = 980_000.0;
const Y0: f64 = 195_000.0;
const N: i64 = 10;
const BLOCK: f64 = 200.0;

/// a 10 x 10 street grid in Lower Manhattan state plane feet
fn write_grid_network(dir: &Path) -> NetworkSource {
    let mut vertices = String::from("vertex_id,x,y\n");
    let mut edges = String::from("edge_id,src_vertex_id,dst_vertex_id,distance\n");
    let mut edge_id = 0;
    for i in 0..N * N {
        let (col, row) = (i % N, i / N);
        writeln!(vertices, "{i},{},{}", X0 + col as f64 * BLOCK, Y0 + row as f64 * BLOCK).unwrap();
        if col < N - 1 {
            writeln!(edges, "{edge_id},{i},{},{BLOCK}", i + 1).unwrap();
            edge_id += 1;
        }
        if row < N - 1 {
            writeln!(edges, "{edge_id},{i},{},{BLOCK}", i + N).unwrap();
            edge_id += 1;
        }
    }
    let vertices_file = dir.join("vertices.csv");
    let edges_file = dir.join("edges.csv");
    std::fs::write(&vertices_file, vertices).unwrap();
    std::fs::write(&edges_file, edges).unwrap();
    NetworkSource::Csv {
        vertices_file: vertices_file.to_string_lossy().to_string(),
        edges_file: edges_file.to_string_lossy().to_string(),
    }
}

fn write_entrances(dir: &Path) -> EntranceConfig {
    let contents = format!(
        r#"{{"type": "FeatureCollection", "features": [
            {{"type": "Feature", "id": "a", "properties": {{"ada": true}}, "geometry": {{"type": "Point", "coordinates": [{}, {}]}}}},
            {{"type": "Feature", "id": "b", "properties": {{"ada": false}}, "geometry": {{"type": "Point", "coordinates": [{}, {}]}}}},
            {{"type": "Feature", "id": "c", "properties": {{"ada": true}}, "geometry": {{"type": "Point", "coordinates": [{}, {}]}}}},
            {{"type": "Feature", "id": "d", "properties": {{"ada": true}}, "geometry": null}}
        ]}}"#,
        X0 + 400.0,
        Y0 + 400.0,
        X0 + 410.0,
        Y0 + 395.0,
        X0 + 1800.0,
        Y0 + 1800.0,
    );
    let file = dir.join("entrances.geojson");
    std::fs::write(&file, contents).unwrap();
    EntranceConfig {
        file: file.to_string_lossy().to_string(),
        id_property: None,
        filter: None,
    }
}

fn square(x: f64, y: f64, size: f64) -> String {
    format!(
        "[[[{x}, {y}], [{}, {y}], [{}, {}], [{x}, {}], [{x}, {y}]]]",
        x + size,
        x + size,
        y + size,
        y + size
    )
}

fn write_tracts(dir: &Path) -> TractConfig {
    let contents = format!(
        r#"{{"type": "FeatureCollection", "features": [
            {{"type": "Feature", "properties": {{"GEOID": "t1", "population": 1000, "median_income": 52000}}, "geometry": {{"type": "Polygon", "coordinates": {}}}}},
            {{"type": "Feature", "properties": {{"GEOID": "t2", "population": 3000, "median_income": 31000}}, "geometry": {{"type": "Polygon", "coordinates": {}}}}}
        ]}}"#,
        square(X0, Y0, 1000.0),
        square(X0 + 10_000.0, Y0, 1000.0),
    );
    let file = dir.join("tracts.geojson");
    std::fs::write(&file, contents).unwrap();
    TractConfig {
        file: file.to_string_lossy().to_string(),
        ..Default::default()
    }
}

fn config(dir: &Path) -> WalkshedConfig {
    let mut conf = WalkshedConfig {
        network: write_grid_network(dir),
        entrances: write_entrances(dir),
        tracts: write_tracts(dir),
        walk_cutoff: DistanceConfig::feet(600.0),
        desert_thresholds: vec![
            DistanceConfig::feet(2625.0),
            DistanceConfig {
                distance: 2.0,
                distance_unit: DistanceUnit::Miles,
            },
        ],
        ..Default::default()
    };
    conf.output.directory = dir.join("output").to_string_lossy().to_string();
    conf
}

fn read_features(dir: &Path) -> Vec<geojson::Feature> {
    let contents = std::fs::read_to_string(dir.join("output").join("isochrones.geojson")).unwrap();
    let collection: geojson::FeatureCollection =
        contents.parse::<geojson::GeoJson>().unwrap().try_into().unwrap();
    collection.features
}

#[test]
fn test_full_run() {
    let dir = tempfile::tempdir().unwrap();
    let conf = config(dir.path());
    let report = run(&conf, RunMode::All).unwrap();

    let isochrones = report.isochrones.unwrap();
    assert_eq!(isochrones.entrances, 3);
    assert_eq!(isochrones.snap_failures, 0);
    // a and b snap to the same vertex and share a walkshed
    assert_eq!(isochrones.sources, 2);
    assert_eq!(isochrones.isochrones_written, 3);
    assert_eq!(isochrones.truncated_searches, 0);

    let features = read_features(dir.path());
    assert_eq!(features.len(), 3);
    let a = features
        .iter()
        .find(|f| f.property("entrance_id") == Some(&serde_json::json!("a")))
        .unwrap();
    let b = features
        .iter()
        .find(|f| f.property("entrance_id") == Some(&serde_json::json!("b")))
        .unwrap();
    assert_eq!(a.property("source_id"), b.property("source_id"));
    assert_eq!(a.property("source_id"), Some(&serde_json::json!(22)));
    // exported in degrees
    let polygon: geo::Polygon<f64> = a.geometry.clone().unwrap().try_into().unwrap();
    for c in polygon.exterior().coords() {
        assert!(c.x > -74.1 && c.x < -73.9, "{c:?}");
        assert!(c.y > 40.6 && c.y < 40.8, "{c:?}");
    }
    let area = a.property("area_sqft").and_then(|v| v.as_f64()).unwrap();
    assert!(area > 0.0 && area <= 2.0 * 600.0 * 600.0);

    let deserts = std::fs::read_to_string(dir.path().join("output").join("deserts.csv")).unwrap();
    let rows = deserts.lines().skip(1).collect::<Vec<_>>();
    assert_eq!(rows.len(), 4);
    assert!(rows.contains(&"t1,0.0,false,2625.0,1000,52000.0"));
    assert!(rows.iter().any(|r| r.starts_with("t2,") && r.contains(",true,2625.0,")));
    assert!(rows.iter().any(|r| r.starts_with("t2,") && r.contains(",false,")));

    let summaries = report.deserts.unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].threshold_ft, 2625.0);
    assert_eq!(summaries[0].desert_count, 1);
    assert_eq!(summaries[0].desert_population, 3000);
    assert_eq!(summaries[0].desert_mean_income, Some(31000.0));
    assert_eq!(summaries[1].desert_count, 0);
}

#[test]
fn test_outputs_are_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let mut conf = config(dir.path());
    run(&conf, RunMode::Deserts).unwrap();
    let again = run(&conf, RunMode::Deserts);
    assert!(matches!(again, Err(WalkshedError::ExportError { .. })));
    conf.output.overwrite = true;
    assert!(run(&conf, RunMode::Deserts).is_ok());
}

#[test]
fn test_entrance_filter_applies_to_both_stages() {
    let dir = tempfile::tempdir().unwrap();
    let mut conf = config(dir.path());
    conf.entrances.filter = Some(walkshed::config::AttributeFilter {
        key: String::from("ada"),
        equals: serde_json::json!(true),
    });
    let report = run(&conf, RunMode::All).unwrap();
    let isochrones = report.isochrones.unwrap();
    assert_eq!(isochrones.entrances, 2);
    assert_eq!(isochrones.isochrones_written, 2);
    assert_eq!(read_features(dir.path()).len(), 2);
}

#[test]
fn test_dangling_edge_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let mut conf = config(dir.path());
    let edges_file = dir.path().join("broken_edges.csv");
    std::fs::write(
        &edges_file,
        "edge_id,src_vertex_id,dst_vertex_id,distance\n0,0,1,200.0\n1,1,999,200.0\n",
    )
    .unwrap();
    if let NetworkSource::Csv { vertices_file, .. } = conf.network.clone() {
        conf.network = NetworkSource::Csv {
            vertices_file,
            edges_file: edges_file.to_string_lossy().to_string(),
        };
    }
    let result = run(&conf, RunMode::Isochrones);
    assert!(matches!(result, Err(WalkshedError::GraphIntegrityError { .. })));
    assert!(!dir.path().join("output").join("isochrones.geojson").exists());
}

#[test]
fn test_street_centerline_network() {
    let dir = tempfile::tempdir().unwrap();
    let mut conf = config(dir.path());
    // a plus-shaped set of streets whose endpoints meet within the snap tolerance
    let cx = X0 + 400.0;
    let cy = Y0 + 400.0;
    let contents = format!(
        r#"{{"type": "FeatureCollection", "features": [
            {{"type": "Feature", "properties": {{}}, "geometry": {{"type": "LineString", "coordinates": [[{cx}, {cy}], [{}, {cy}]]}}}},
            {{"type": "Feature", "properties": {{}}, "geometry": {{"type": "LineString", "coordinates": [[{}, {}], [{cx}, {}]]}}}},
            {{"type": "Feature", "properties": {{}}, "geometry": {{"type": "LineString", "coordinates": [[{cx}, {cy}], [{}, {cy}]]}}}},
            {{"type": "Feature", "properties": {{}}, "geometry": {{"type": "LineString", "coordinates": [[{cx}, {cy}], [{cx}, {}]]}}}}
        ]}}"#,
        cx + 300.0,
        cx + 0.4,
        cy - 0.3,
        cy + 300.0,
        cx - 300.0,
        cy - 300.0,
    );
    let file = dir.path().join("streets.geojson");
    std::fs::write(&file, contents).unwrap();
    conf.network = NetworkSource::GeoJson {
        file: file.to_string_lossy().to_string(),
        snap_tolerance: 1.0,
    };
    conf.walk_cutoff = DistanceConfig::feet(1000.0);
    conf.concavity = 1.0;

    let report = run(&conf, RunMode::Isochrones).unwrap();
    let isochrones = report.isochrones.unwrap();
    // a and b snap to the center of the plus, c to the end of an arm
    assert_eq!(isochrones.sources, 2);
    assert_eq!(isochrones.isochrones_written, 3);
    assert_eq!(isochrones.degenerate_isochrones, 0);
    let features = read_features(dir.path());
    let area = features[0]
        .property("area_sqft")
        .and_then(|v| v.as_f64())
        .unwrap();
    // the convex hull of the plus is a diamond with 300 ft half-diagonals
    assert!((area - 180_000.0).abs() < 1.0, "{area}");
}
