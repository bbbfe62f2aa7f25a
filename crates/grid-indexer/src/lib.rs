//! Curvilinear grid to STARE index conversion.
//!
//! Converts an ocean model's per-cell geographic coordinate arrays into
//! one 64-bit hierarchical spatial index per grid cell and persists the
//! result as unsigned 64-bit variables in a fresh NetCDF container.
//!
//! # Pipeline
//!
//! ```text
//! SourceStore::open
//!      │
//!      ├─► read_coordinates (lat/lon per staggered grid, fixed shapes)
//!      │
//!      ├─► compute_indices (row-major traversal, one pure encode per cell)
//!      │
//!      └─► SinkStore::create ─► define_and_write ─► close
//! ```
//!
//! Every external call boundary is checked immediately; the first
//! failure aborts the run and its native status code is surfaced for
//! process-exit propagation.

pub mod config;
pub mod error;
pub mod grid;
pub mod layout;

mod indexer;

pub use config::{GridVariables, IndexerConfig};
pub use error::{IndexerError, Result, Stage};
pub use grid::{CurvilinearGrid, GridShape};
pub use indexer::{compute_indices, define_and_write, read_coordinates, run, IndexerReport};
