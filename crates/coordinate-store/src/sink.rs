//! Write side of the container boundary.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{native_status, StoreError, StoreResult, STATUS_VARIABLE_NOT_FOUND};
use crate::silence_hdf5_errors;

/// A writable NetCDF container created fresh at a fixed destination.
///
/// Creation clobbers any prior file at the path; no merge with existing
/// content occurs. Callers must complete all schema definitions before
/// the first data write — the define and data phases do not interleave.
pub struct SinkStore {
    file: netcdf::FileMut,
    path: PathBuf,
}

impl SinkStore {
    /// Create (or overwrite) the destination container.
    pub fn create(path: impl AsRef<Path>) -> StoreResult<Self> {
        silence_hdf5_errors();

        let path = path.as_ref().to_path_buf();
        let file = netcdf::create(&path).map_err(|e| StoreError::Open {
            path: path.display().to_string(),
            status: native_status(&e),
            message: e.to_string(),
        })?;

        debug!(path = %path.display(), "created sink container");
        Ok(Self { file, path })
    }

    /// Define a 1-D dimension of `len` and an unsigned 64-bit variable
    /// spanning it.
    pub fn define_u64_var(
        &mut self,
        dim_name: &str,
        var_name: &str,
        len: usize,
    ) -> StoreResult<()> {
        self.file
            .add_dimension(dim_name, len)
            .map_err(|e| StoreError::Schema {
                operation: "define dimension",
                name: dim_name.to_string(),
                status: native_status(&e),
                message: e.to_string(),
            })?;

        let mut var = self
            .file
            .add_variable::<u64>(var_name, &[dim_name])
            .map_err(|e| StoreError::Schema {
                operation: "define variable",
                name: var_name.to_string(),
                status: native_status(&e),
                message: e.to_string(),
            })?;

        var.put_attribute("long_name", format!("STARE spatial index per {dim_name} cell"))
            .map_err(|e| StoreError::Schema {
                operation: "define variable",
                name: var_name.to_string(),
                status: native_status(&e),
                message: e.to_string(),
            })?;

        debug!(dim_name, var_name, len, "defined index variable");
        Ok(())
    }

    /// Bulk-write a full sequence of unsigned 64-bit values to a
    /// previously defined variable.
    pub fn write_u64(&mut self, var_name: &str, values: &[u64]) -> StoreResult<()> {
        let mut var = self
            .file
            .variable_mut(var_name)
            .ok_or_else(|| StoreError::Write {
                variable: var_name.to_string(),
                status: STATUS_VARIABLE_NOT_FOUND,
                message: format!("variable '{var_name}' was never defined"),
            })?;

        var.put_values(values, ..).map_err(|e| StoreError::Write {
            variable: var_name.to_string(),
            status: native_status(&e),
            message: e.to_string(),
        })?;

        debug!(var_name, len = values.len(), "wrote index variable");
        Ok(())
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
