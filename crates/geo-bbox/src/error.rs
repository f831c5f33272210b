//! Bounding-box subsystem error type.

use thiserror::Error;

use geo_core::GeoError;

/// Errors produced by `geo-bbox`.
#[derive(Debug, Error)]
pub enum BoxError {
    #[error("bad corner or center point: {0}")]
    Point(#[from] GeoError),

    #[error("point list parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BoxResult<T> = Result<T, BoxError>;
