//! Typed access to NetCDF array containers for the STARE indexing pipeline.
//!
//! The pipeline treats a container as a key-value array store keyed by
//! variable name: [`SourceStore`] resolves and bulk-reads named
//! floating-point coordinate variables, [`SinkStore`] defines a fixed
//! schema and bulk-writes unsigned 64-bit index variables. Every boundary
//! call returns a typed [`StoreError`] carrying the failing operation and
//! the native libnetcdf status code.

pub mod error;
mod sink;
mod source;

use std::sync::Once;

pub use error::{StoreError, StoreResult, STATUS_FALLBACK, STATUS_VARIABLE_NOT_FOUND};
pub use sink::SinkStore;
pub use source::SourceStore;

/// Silence HDF5's automatic error printing to stderr.
///
/// The HDF5 C library prints verbose error messages to stderr even when
/// errors are handled gracefully by the Rust code. This disables that
/// output by calling `H5Eset_auto2` with null handlers. It only needs to
/// run once per process but is safe to call multiple times; call it early,
/// before any HDF5/NetCDF operation.
pub fn silence_hdf5_errors() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        // SAFETY: H5Eset_auto2 is thread-safe and null handlers are a
        // documented way to disable error output.
        unsafe {
            hdf5_metno_sys::h5e::H5Eset_auto2(
                hdf5_metno_sys::h5e::H5E_DEFAULT,
                None,
                std::ptr::null_mut(),
            );
        }
    });
}
