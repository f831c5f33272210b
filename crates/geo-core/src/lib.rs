//! `geo-core`: point type and geodesic math for the `geo-*` crates.
//!
//! This crate has no `geo-*` dependencies and minimal external ones (only
//! `log` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`point`]   | `GeoPoint`, `"lat,lon"` string form, range check           |
//! | [`geodesy`] | `midpoint`, `earth_radius_at`, `distance_vincenty`, WGS-84 |
//! | [`error`]   | `GeoError`, `GeoResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `GeoPoint` (de)serializes as its `"lat,lon"` string.       |

pub mod error;
pub mod geodesy;
pub mod point;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GeoError, GeoResult};
pub use geodesy::{distance_vincenty, earth_radius_at, midpoint, try_distance_vincenty};
pub use point::GeoPoint;
