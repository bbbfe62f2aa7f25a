//! Error types for coordinate store operations.

use thiserror::Error;

/// Result type for coordinate store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Status reported when the underlying library yields no native code
/// (Rust-side failures such as length mismatches).
pub const STATUS_FALLBACK: i32 = -1;

/// libnetcdf `NC_ENOTVAR`: variable not found.
pub const STATUS_VARIABLE_NOT_FOUND: i32 = -49;

/// Errors crossing the NetCDF container boundary.
///
/// Every variant names the failing operation and carries the native
/// libnetcdf status code so callers can propagate it as a process exit
/// code. All variants are fatal to the pipeline; there is no
/// report-and-continue path.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Source or sink container could not be accessed.
    #[error("failed to open {path}: status {status}: {message}")]
    Open {
        path: String,
        status: i32,
        message: String,
    },

    /// Variable resolution or bulk read failed.
    #[error("failed to read '{variable}' ({operation}): status {status}: {message}")]
    Read {
        variable: String,
        operation: &'static str,
        status: i32,
        message: String,
    },

    /// Dimension definition, variable definition, or schema commit failed.
    #[error("schema definition failed ({operation} '{name}'): status {status}: {message}")]
    Schema {
        operation: &'static str,
        name: String,
        status: i32,
        message: String,
    },

    /// Bulk data write failed.
    #[error("failed to write '{variable}': status {status}: {message}")]
    Write {
        variable: String,
        status: i32,
        message: String,
    },

    /// Resource teardown failed.
    #[error("failed to close {path}: status {status}: {message}")]
    Close {
        path: String,
        status: i32,
        message: String,
    },
}

impl StoreError {
    /// The native libnetcdf status code for process-exit propagation.
    pub fn status_code(&self) -> i32 {
        match self {
            Self::Open { status, .. }
            | Self::Read { status, .. }
            | Self::Schema { status, .. }
            | Self::Write { status, .. }
            | Self::Close { status, .. } => *status,
        }
    }
}

/// Extract the native status code from a netcdf crate error, falling back
/// to [`STATUS_FALLBACK`] for Rust-side failures that carry none.
pub(crate) fn native_status(err: &netcdf::Error) -> i32 {
    match err {
        netcdf::Error::Netcdf(code) => *code,
        _ => STATUS_FALLBACK,
    }
}
