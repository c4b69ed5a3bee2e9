use std::path::PathBuf;

use thiserror::Error;

/// Failure kinds raised by the table loader, interpolator and lifecycle
/// surface.
///
/// Initialization errors (`NotFound`, `Malformed`, `InvalidAxis`) are fatal:
/// they propagate to whichever boundary call (`install`) triggered them, and
/// leave no partially-populated catalog behind. `OutOfGrid` is reported
/// through the logging sink and otherwise handled by the caller (the query
/// returns `f64::NAN`, see `f16_tables::Interpolator`). `NotInitialized` is
/// returned by `step`/coefficient queries made before a successful
/// `install`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("data file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("malformed data file {path}: expected {expected} values, found {found}")]
    Malformed {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("tensor {tensor} declares an unrecognized axis set: {axis_set}")]
    InvalidAxis { tensor: String, axis_set: String },

    #[error("query outside interpolation envelope on axis {axis} of tensor {tensor}")]
    OutOfGrid { tensor: String, axis: usize },

    #[error("step or coefficient query issued before a successful install")]
    NotInitialized,
}

pub type Result<T> = std::result::Result<T, Error>;
