//! Pipeline configuration.
//!
//! One explicit struct carries everything the orchestrator needs: grid
//! shapes, variable names, source/sink identifiers, and encoder
//! parameters. The defaults pin the fixed CBOFS dataset this tool was
//! built for; other dataset shapes only need a different config value,
//! not a recompile.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use stare::EncoderConfig;

use crate::grid::GridShape;

/// CBOFS horizontal extents in points (eta x xi per staggered grid).
/// https://tidesandcurrents.noaa.gov/ofs/cbofs/cbofs_info.html
pub const ETA_U: usize = 291;
pub const XI_U: usize = 331;
pub const ETA_V: usize = 290;
pub const XI_V: usize = 332;

/// Names and shape binding one coordinate grid to its output variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridVariables {
    /// Latitude variable in the source container.
    pub lat_name: String,
    /// Longitude variable in the source container.
    pub lon_name: String,
    /// Index variable defined in the sink container.
    pub output_name: String,
    /// Dimension the index variable spans.
    pub output_dim: String,
    /// Fixed logical extents; never derived from the source file.
    pub shape: GridShape,
}

/// Full pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexerConfig {
    /// Source container holding the coordinate grids.
    pub source_path: PathBuf,
    /// Destination container for the index variables (clobbered).
    pub sink_path: PathBuf,
    /// U staggered grid.
    pub u_grid: GridVariables,
    /// V staggered grid.
    pub v_grid: GridVariables,
    /// Spatial encoder parameters, fixed for the run.
    pub encoder: EncoderConfig,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("nos.cbofs.fields.f001.20210403.t00z.nc"),
            sink_path: PathBuf::from("cbofs_STARE.nc"),
            u_grid: GridVariables {
                lat_name: "lat_u".to_string(),
                lon_name: "lon_u".to_string(),
                output_name: "u_STARE_indices".to_string(),
                output_dim: "u_dim".to_string(),
                shape: GridShape::new(ETA_U, XI_U),
            },
            v_grid: GridVariables {
                lat_name: "lat_v".to_string(),
                lon_name: "lon_v".to_string(),
                output_name: "v_STARE_indices".to_string(),
                output_dim: "v_dim".to_string(),
                shape: GridShape::new(ETA_V, XI_V),
            },
            encoder: EncoderConfig::default(),
        }
    }
}
