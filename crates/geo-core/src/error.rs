//! Point parsing error type.
//!
//! Only non-numeric coordinate tokens are errors.  A string without a comma
//! parses to `(0, 0)`, and geodesic failures are reported through the NaN
//! sentinel of [`distance_vincenty`](crate::geodesy::distance_vincenty), so
//! neither shows up here.

use std::num::ParseFloatError;

use thiserror::Error;

/// The error type for `geo-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("invalid coordinate {token:?}: {source}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Shorthand result type for the `geo-*` crates.
pub type GeoResult<T> = Result<T, GeoError>;
