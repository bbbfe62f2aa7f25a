//! Pipeline error type.

use std::fmt;

use coordinate_store::StoreError;
use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, IndexerError>;

/// Pipeline stage in which a boundary call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    OpenSource,
    ReadCoordinates,
    CloseSource,
    CreateSink,
    DefineSchema,
    WriteIndices,
    CloseSink,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OpenSource => "open source",
            Self::ReadCoordinates => "read coordinates",
            Self::CloseSource => "close source",
            Self::CreateSink => "create sink",
            Self::DefineSchema => "define schema",
            Self::WriteIndices => "write indices",
            Self::CloseSink => "close sink",
        };
        f.write_str(name)
    }
}

/// A stage-tagged store failure.
///
/// Every stage is fatal; the orchestrator short-circuits on the first
/// failure regardless of whether it happened on the source or sink path.
#[derive(Error, Debug)]
#[error("{stage} failed: {source}")]
pub struct IndexerError {
    pub stage: Stage,
    #[source]
    pub source: StoreError,
}

impl IndexerError {
    /// The underlying store's native status code, propagated as the
    /// process exit code.
    pub fn status_code(&self) -> i32 {
        self.source.status_code()
    }

    /// Adapter for `map_err` at stage boundaries.
    pub(crate) fn at(stage: Stage) -> impl FnOnce(StoreError) -> Self {
        move |source| Self { stage, source }
    }
}
