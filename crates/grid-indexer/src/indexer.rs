//! The three-stage conversion pipeline.
//!
//! Stage order: open/read the source coordinate grids, compute one index
//! per cell, create the sink and define/write the index variables. Every
//! boundary call is checked immediately and the first failure aborts the
//! run; a read failure therefore happens before any sink file exists.

use std::time::Instant;

use coordinate_store::{SinkStore, SourceStore};
use rayon::prelude::*;
use stare::Encoder;
use tracing::info;

use crate::config::{GridVariables, IndexerConfig};
use crate::error::{IndexerError, Result, Stage};
use crate::grid::CurvilinearGrid;
use crate::layout;

/// Per-grid cell counts from a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexerReport {
    pub u_cells: usize,
    pub v_cells: usize,
}

/// Bulk-read one grid's latitude and longitude into exactly-sized buffers.
///
/// The first failing read aborts; the remaining reads are not attempted
/// and no partial grid is retained.
pub fn read_coordinates(source: &SourceStore, vars: &GridVariables) -> Result<CurvilinearGrid> {
    let cells = vars.shape.cells();
    let lat = source
        .read_f64(&vars.lat_name, cells)
        .map_err(IndexerError::at(Stage::ReadCoordinates))?;
    let lon = source
        .read_f64(&vars.lon_name, cells)
        .map_err(IndexerError::at(Stage::ReadCoordinates))?;
    Ok(CurvilinearGrid::new(vars.shape, lat, lon))
}

/// Encode every cell of a grid, row-major over logical `(i, j)`.
///
/// Output position `k = i * cols + j` holds the index for cell `(i, j)`,
/// read from the column-major coordinate buffers. Each cell is an
/// independent pure computation, so the map runs on the rayon pool; the
/// indexed collect writes each result to its own pre-sized position, so
/// ordering is preserved by construction.
pub fn compute_indices(grid: &CurvilinearGrid, encoder: &Encoder) -> Vec<u64> {
    let rows = grid.shape.rows;
    let cols = grid.shape.cols;

    (0..grid.shape.cells())
        .into_par_iter()
        .map(|k| {
            let (i, j) = (k / cols, k % cols);
            let offset = layout::column_major_offset(i, j, rows);
            encoder.encode(grid.lat[offset], grid.lon[offset])
        })
        .collect()
}

/// Define the sink schema for all grids, then bulk-write each sequence.
///
/// All definitions complete before the first data write, preserving the
/// container's define/data phase split. Any failure aborts uniformly.
pub fn define_and_write(sink: &mut SinkStore, grids: &[(&GridVariables, &[u64])]) -> Result<()> {
    for (vars, indices) in grids {
        sink.define_u64_var(&vars.output_dim, &vars.output_name, indices.len())
            .map_err(IndexerError::at(Stage::DefineSchema))?;
    }
    for (vars, indices) in grids {
        sink.write_u64(&vars.output_name, indices)
            .map_err(IndexerError::at(Stage::WriteIndices))?;
    }
    Ok(())
}

/// Run the full pipeline described by `config`.
pub fn run(config: &IndexerConfig) -> Result<IndexerReport> {
    let source = SourceStore::open(&config.source_path)
        .map_err(IndexerError::at(Stage::OpenSource))?;
    info!(path = %config.source_path.display(), "opened source");

    let u_grid = read_coordinates(&source, &config.u_grid)?;
    let v_grid = read_coordinates(&source, &config.v_grid)?;
    source
        .close()
        .map_err(IndexerError::at(Stage::CloseSource))?;
    info!(
        u_cells = u_grid.shape.cells(),
        v_cells = v_grid.shape.cells(),
        "read coordinate grids"
    );

    let encoder = Encoder::new(config.encoder);
    let started = Instant::now();
    let u_indices = compute_indices(&u_grid, &encoder);
    let v_indices = compute_indices(&v_grid, &encoder);
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "computed spatial indices"
    );

    let mut sink = SinkStore::create(&config.sink_path)
        .map_err(IndexerError::at(Stage::CreateSink))?;
    define_and_write(
        &mut sink,
        &[
            (&config.u_grid, &u_indices),
            (&config.v_grid, &v_indices),
        ],
    )?;
    sink.close().map_err(IndexerError::at(Stage::CloseSink))?;
    info!(path = %config.sink_path.display(), "wrote index container");

    Ok(IndexerReport {
        u_cells: u_indices.len(),
        v_cells: v_indices.len(),
    })
}
