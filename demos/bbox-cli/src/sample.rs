//! Seeded random points scattered around a box, for exercising `shrink`
//! without a CSV file.

use log::warn;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use geo_bbox::GeoBoundingBox;
use geo_core::GeoPoint;

/// Extra margin on each side, as a fraction of the box span.
const MARGIN: f64 = 0.5;

/// `count` points drawn uniformly from `bbox` grown by [`MARGIN`] on every side.
pub fn scatter(bbox: &GeoBoundingBox, count: usize, seed: u64) -> Vec<GeoPoint> {
    let (lat_lo, lat_hi) = widen(bbox.bottom_left().lat, bbox.top_left().lat);
    let (lon_lo, lon_hi) = widen(bbox.top_left().lon, bbox.top_right().lon);

    if ![lat_lo, lat_hi, lon_lo, lon_hi].iter().all(|v| v.is_finite()) {
        warn!("box has non-finite corners; no random points generated");
        return Vec::new();
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| GeoPoint::new(rng.gen_range(lat_lo..=lat_hi), rng.gen_range(lon_lo..=lon_hi)))
        .collect()
}

fn widen(a: f64, b: f64) -> (f64, f64) {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let pad = (hi - lo) * MARGIN;
    (lo - pad, hi + pad)
}
