//! Geographic coordinate value type.
//!
//! `GeoPoint` is a plain `Copy` pair of `f64` degrees.  Range validity is
//! advisory: nothing rejects out-of-range values, callers ask
//! [`GeoPoint::is_valid`] when they care.
//!
//! # String form
//!
//! `"<lat>,<lon>"`, each coordinate rounded to at most six fractional digits
//! with trailing zeros dropped and no grouping separators:
//!
//! ```text
//! 50.8503,4.3517
//! -12.5,130
//! ```
//!
//! Parsing splits on the first comma and trims both halves.  A string with
//! no comma at all yields `(0, 0)`; a half that is not a number is an error.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::{GeoError, GeoResult};

/// Fractional digits kept by the string form.
const FRACTION_DIGITS: usize = 6;

/// A WGS-84 latitude/longitude pair in degrees.
#[derive(Copy, Clone, Debug, Default)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const MIN_LATITUDE: f64 = -90.0;
    pub const MAX_LATITUDE: f64 = 90.0;
    pub const MIN_LONGITUDE: f64 = -180.0;
    pub const MAX_LONGITUDE: f64 = 180.0;

    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Parse `"lat,lon"`.  Same as `s.parse::<GeoPoint>()`.
    pub fn parse(s: &str) -> GeoResult<Self> {
        s.parse()
    }

    /// Copy of `self` with both coordinates replaced.
    #[inline]
    pub fn with_coords(self, lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Copy of `self` with both coordinates replaced by the parsed string.
    pub fn with_parsed(self, s: &str) -> GeoResult<Self> {
        let parsed = Self::parse(s)?;
        Ok(self.with_coords(parsed.lat, parsed.lon))
    }

    #[inline]
    pub fn with_lat(self, lat: f64) -> Self {
        Self { lat, ..self }
    }

    #[inline]
    pub fn with_lon(self, lon: f64) -> Self {
        Self { lon, ..self }
    }

    /// `true` iff latitude is in `[-90, 90]` and longitude in `[-180, 180]`.
    ///
    /// NaN coordinates are never valid.
    pub fn is_valid(&self) -> bool {
        (Self::MIN_LATITUDE..=Self::MAX_LATITUDE).contains(&self.lat)
            && (Self::MIN_LONGITUDE..=Self::MAX_LONGITUDE).contains(&self.lon)
    }

    /// `(lat, lon)` in radians.
    #[inline]
    pub fn to_radians(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lon.to_radians())
    }
}

// ── Equality and hashing ──────────────────────────────────────────────────────
//
// Equality is exact: both coordinates must be bit-for-bit the same value under
// `f64::total_cmp` (so NaN equals itself and -0.0 differs from 0.0).  The hash
// is taken from the rounded string form instead, which makes it coarser than
// equality: points that differ only past the sixth decimal are unequal but
// hash identically.  Callers keying maps on points should expect those
// collisions.

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.lat.total_cmp(&other.lat).is_eq() && self.lon.total_cmp(&other.lon).is_eq()
    }
}

impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

// ── String form ───────────────────────────────────────────────────────────────

/// Format one coordinate: six decimals, trailing zeros and dot stripped.
fn format_coord(v: f64) -> String {
    let mut s = format!("{v:.prec$}", prec = FRACTION_DIGITS);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    // Values that round to zero from below would print as "-0".
    if s == "-0" {
        s.remove(0);
    }
    s
}

fn parse_coord(token: &str) -> GeoResult<f64> {
    let token = token.trim();
    token.parse::<f64>().map_err(|source| GeoError::InvalidNumber {
        token: token.to_owned(),
        source,
    })
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", format_coord(self.lat), format_coord(self.lon))
    }
}

impl FromStr for GeoPoint {
    type Err = GeoError;

    fn from_str(s: &str) -> GeoResult<Self> {
        match s.split_once(',') {
            Some((lat, lon)) => Ok(Self::new(parse_coord(lat)?, parse_coord(lon)?)),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GeoPoint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GeoPoint {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
