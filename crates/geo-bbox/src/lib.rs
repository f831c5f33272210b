//! `geo-bbox`: lat/lon bounding boxes over [`geo_core`] points.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`bbox`]   | `GeoBoundingBox` (corner-pair and center+radius paths), `FieldValue` |
//! | [`loader`] | `load_points_csv`, `load_points_reader` for `shrink` inputs  |
//! | [`error`]  | `BoxError`, `BoxResult<T>`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | `FieldValue` and embedded `GeoPoint`s implement `Serialize`. |

pub mod bbox;
pub mod error;
pub mod loader;


pub use bbox::{FieldValue, GeoBoundingBox};
pub use error::{BoxError, BoxResult};
pub use loader::{load_points_csv, load_points_reader};
