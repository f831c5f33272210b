//! CSV point loader.
//!
//! # CSV format
//!
//! One point per row, decimal degrees:
//!
//! ```csv
//! lat,lon
//! 50.8503,4.3517
//! 50.4674,4.8720
//! ```
//!
//! The result feeds [`GeoBoundingBox::shrink`](crate::GeoBoundingBox::shrink).
//! Coordinates are not range-checked here either.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use geo_core::GeoPoint;

use crate::{BoxError, BoxResult};

#[derive(Deserialize)]
struct PointRecord {
    lat: f64,
    lon: f64,
}

/// Load every point from a CSV file.
pub fn load_points_csv(path: &Path) -> BoxResult<Vec<GeoPoint>> {
    let file = std::fs::File::open(path)?;
    load_points_reader(file)
}

/// Like [`load_points_csv`] but accepts any `Read` source.
pub fn load_points_reader<R: Read>(reader: R) -> BoxResult<Vec<GeoPoint>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<PointRecord>()
        .map(|row| {
            let row = row.map_err(|e| BoxError::Parse(e.to_string()))?;
            Ok(GeoPoint::new(row.lat, row.lon))
        })
        .collect()
}
