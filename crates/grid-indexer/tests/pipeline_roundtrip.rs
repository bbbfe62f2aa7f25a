//! End-to-end pipeline tests: write a small source container with known
//! coordinates, run the full pipeline, and read the sink back with the
//! netcdf crate directly.

use std::path::Path;

use grid_indexer::{layout, GridShape, GridVariables, IndexerConfig, Stage};
use stare::{Encoder, EncoderConfig};

/// Coordinates used for every synthetic cell: anchored in the Chesapeake
/// Bay so cell (0, 0) is exactly (38.0, -76.0).
fn cell_coords(i: usize, j: usize) -> (f64, f64) {
    (38.0 + i as f64 * 0.1, -76.0 + j as f64 * 0.1)
}

/// Write one grid's lat/lon variables, column-major flattened.
fn write_grid(file: &mut netcdf::FileMut, vars: &GridVariables) {
    let shape = vars.shape;
    let mut lat = vec![0.0; shape.cells()];
    let mut lon = vec![0.0; shape.cells()];
    for i in 0..shape.rows {
        for j in 0..shape.cols {
            let k = layout::column_major_offset(i, j, shape.rows);
            let (cell_lat, cell_lon) = cell_coords(i, j);
            lat[k] = cell_lat;
            lon[k] = cell_lon;
        }
    }

    let dim = format!("{}_cells", vars.lat_name);
    file.add_dimension(&dim, shape.cells()).expect("dimension");
    let mut lat_var = file
        .add_variable::<f64>(&vars.lat_name, &[&dim])
        .expect("lat variable");
    lat_var.put_values(&lat, ..).expect("lat values");
    let mut lon_var = file
        .add_variable::<f64>(&vars.lon_name, &[&dim])
        .expect("lon variable");
    lon_var.put_values(&lon, ..).expect("lon values");
}

fn test_config(dir: &Path, u_shape: GridShape, v_shape: GridShape) -> IndexerConfig {
    let mut config = IndexerConfig::default();
    config.source_path = dir.join("source.nc");
    config.sink_path = dir.join("stare.nc");
    config.u_grid.shape = u_shape;
    config.v_grid.shape = v_shape;
    config
}

fn write_source(config: &IndexerConfig) {
    let mut file = netcdf::create(&config.source_path).expect("create source");
    write_grid(&mut file, &config.u_grid);
    write_grid(&mut file, &config.v_grid);
}

fn read_u64_var(path: &Path, name: &str) -> Vec<u64> {
    let file = netcdf::open(path).expect("open sink");
    let var = file.variable(name).expect("variable exists");
    var.get_values(..).expect("read values")
}

#[test]
fn full_run_produces_positionally_correct_indices() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(dir.path(), GridShape::new(3, 4), GridShape::new(2, 5));
    write_source(&config);

    let report = grid_indexer::run(&config).expect("pipeline run");
    assert_eq!(report.u_cells, 12);
    assert_eq!(report.v_cells, 10);

    let encoder = Encoder::new(config.encoder);
    for (vars, expected_cells) in [(&config.u_grid, 12usize), (&config.v_grid, 10)] {
        let indices = read_u64_var(&config.sink_path, &vars.output_name);
        assert_eq!(indices.len(), expected_cells);

        for i in 0..vars.shape.rows {
            for j in 0..vars.shape.cols {
                let k = layout::row_major_position(i, j, vars.shape.cols);
                let (lat, lon) = cell_coords(i, j);
                assert_eq!(indices[k], encoder.encode(lat, lon), "cell ({i}, {j})");
            }
        }
    }
}

#[test]
fn first_u_cell_matches_the_direct_encoding() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(dir.path(), GridShape::new(2, 2), GridShape::new(2, 2));
    write_source(&config);

    grid_indexer::run(&config).expect("pipeline run");

    let encoder = Encoder::new(EncoderConfig::default());
    let indices = read_u64_var(&config.sink_path, "u_STARE_indices");
    assert_eq!(indices[0], encoder.encode(38.0, -76.0));
}

#[test]
fn single_cell_grids_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(dir.path(), GridShape::new(1, 1), GridShape::new(1, 1));
    write_source(&config);

    let report = grid_indexer::run(&config).expect("pipeline run");
    assert_eq!(report.u_cells, 1);
    assert_eq!(report.v_cells, 1);
    assert_eq!(read_u64_var(&config.sink_path, "v_STARE_indices").len(), 1);
}

#[test]
fn rerun_clobbers_prior_sink_content() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(dir.path(), GridShape::new(2, 3), GridShape::new(3, 2));
    write_source(&config);

    // Seed the sink with unrelated content.
    {
        let mut stale = netcdf::create(&config.sink_path).expect("stale sink");
        stale.add_dimension("stale_dim", 3).expect("dim");
        let mut var = stale
            .add_variable::<u64>("stale_var", &["stale_dim"])
            .expect("var");
        var.put_values(&[9, 9, 9], ..).expect("values");
    }

    grid_indexer::run(&config).expect("pipeline run");

    let file = netcdf::open(&config.sink_path).expect("open sink");
    assert!(file.variable("stale_var").is_none(), "prior content survived");
    let names: Vec<String> = file.variables().map(|v| v.name()).collect();
    assert_eq!(names.len(), 2);
    assert!(names.iter().any(|n| n == "u_STARE_indices"));
    assert!(names.iter().any(|n| n == "v_STARE_indices"));
}

#[test]
fn missing_source_variable_aborts_before_sink_creation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = test_config(dir.path(), GridShape::new(2, 2), GridShape::new(2, 2));
    write_source(&config);

    // Ask for a variable the source does not have.
    config.v_grid.lon_name = "lon_rho".to_string();

    let err = grid_indexer::run(&config).unwrap_err();
    assert_eq!(err.stage, Stage::ReadCoordinates);
    assert_ne!(err.status_code(), 0);
    assert!(
        !config.sink_path.exists(),
        "sink must not be created after a read failure"
    );
}

#[test]
fn missing_source_file_is_an_open_stage_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(dir.path(), GridShape::new(2, 2), GridShape::new(2, 2));
    // No source written.

    let err = grid_indexer::run(&config).unwrap_err();
    assert_eq!(err.stage, Stage::OpenSource);
    assert!(!config.sink_path.exists());
}
