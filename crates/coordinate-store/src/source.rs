//! Read side of the container boundary.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{
    native_status, StoreError, StoreResult, STATUS_FALLBACK, STATUS_VARIABLE_NOT_FOUND,
};
use crate::silence_hdf5_errors;

/// A read-only NetCDF container opened once and closed once.
///
/// Variables are addressed by name and bulk-read in full; the expected
/// length comes from the caller's grid configuration, never from the file.
#[derive(Debug)]
pub struct SourceStore {
    file: netcdf::File,
    path: PathBuf,
}

impl SourceStore {
    /// Open an existing container read-only.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        silence_hdf5_errors();

        let path = path.as_ref().to_path_buf();
        let file = netcdf::open(&path).map_err(|e| StoreError::Open {
            path: path.display().to_string(),
            status: native_status(&e),
            message: e.to_string(),
        })?;

        debug!(path = %path.display(), "opened source container");
        Ok(Self { file, path })
    }

    /// Resolve a named variable and bulk-read all of it as `f64`.
    ///
    /// Fails if the name does not resolve, if the bulk read does not
    /// complete, or if the value count differs from `expected_len`.
    pub fn read_f64(&self, variable: &str, expected_len: usize) -> StoreResult<Vec<f64>> {
        let var = self.file.variable(variable).ok_or_else(|| StoreError::Read {
            variable: variable.to_string(),
            operation: "resolve variable",
            status: STATUS_VARIABLE_NOT_FOUND,
            message: format!("no variable '{variable}' in {}", self.path.display()),
        })?;

        let values: Vec<f64> = var.get_values(..).map_err(|e| StoreError::Read {
            variable: variable.to_string(),
            operation: "bulk read",
            status: native_status(&e),
            message: e.to_string(),
        })?;

        if values.len() != expected_len {
            return Err(StoreError::Read {
                variable: variable.to_string(),
                operation: "bulk read",
                status: STATUS_FALLBACK,
                message: format!("expected {expected_len} values, got {}", values.len()),
            });
        }

        debug!(variable, len = values.len(), "read coordinate variable");
        Ok(values)
    }

    /// Close the container, surfacing teardown errors.
    pub fn close(self) -> StoreResult<()> {
        let path = self.path;
        self.file.close().map_err(|e| StoreError::Close {
            path: path.display().to_string(),
            status: native_status(&e),
            message: e.to_string(),
        })
    }
}
