//! CBOFS STARE indexer.
//!
//! Reads the U/V staggered coordinate grids from the fixed CBOFS forecast
//! file, computes one STARE spatial index per grid cell, and writes the
//! two index variables to a fresh NetCDF container. No flags, environment
//! variables, or config files: the dataset is pinned in
//! `IndexerConfig::default()`.

use anyhow::Result;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use grid_indexer::IndexerConfig;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    coordinate_store::silence_hdf5_errors();

    let config = IndexerConfig::default();
    info!(
        source = %config.source_path.display(),
        sink = %config.sink_path.display(),
        resolution = config.encoder.target_resolution,
        build_level = config.encoder.build_level,
        "starting STARE index conversion"
    );

    match grid_indexer::run(&config) {
        Ok(report) => {
            info!(
                u_cells = report.u_cells,
                v_cells = report.v_cells,
                "conversion complete"
            );
            Ok(())
        }
        Err(err) => {
            // The store's native status code becomes the exit code,
            // uniformly across all stages.
            error!(stage = %err.stage, status = err.status_code(), "{err}");
            std::process::exit(err.status_code());
        }
    }
}
