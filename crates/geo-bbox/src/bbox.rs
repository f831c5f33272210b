//! Axis-aligned (in lat/lon space) bounding box.
//!
//! # Construction paths
//!
//! **Corner pair**, [`GeoBoundingBox::from_corners`]: the remaining two
//! corners are copied from the inputs.  `center` is the spherical midpoint of
//! `top_left` and `bottom_right`; `radius` is the Vincenty distance from the
//! midpoint of the left edge to `center`.
//!
//! **Center + radius**, [`GeoBoundingBox::from_center_and_radius`]: corners
//! come from a local equirectangular approximation around `center` using the
//! WGS-84 radius at its latitude.  `center` and `radius` are stored exactly
//! as given and are *not* recomputed from the corners, so `center` can sit
//! slightly off the corners' true midpoint.
//!
//! # Radius convention
//!
//! `radius` is always measured from the left-edge midpoint.  That is the
//! largest inscribed circle only when the box is no taller than it is wide;
//! for tall boxes it overstates the inscribed radius.
//!
//! # Corner layout
//!
//! ```text
//! top_left ──────── top_right
//!    │                  │
//!    │      center      │
//!    │                  │
//! bottom_left ───── bottom_right
//! ```
//!
//! `top_right.lat == top_left.lat`, `top_right.lon == bottom_right.lon`,
//! `bottom_left.lat == bottom_right.lat`, `bottom_left.lon == top_left.lon`
//! hold after every constructor and after [`GeoBoundingBox::shrink`].

use std::collections::HashMap;
use std::fmt;

use log::debug;

use geo_core::{GeoPoint, distance_vincenty, earth_radius_at, midpoint};

use crate::BoxResult;

// ── Export mapping ────────────────────────────────────────────────────────────

/// Value side of [`GeoBoundingBox::export_fields`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum FieldValue {
    /// A corner or the center.  Serializes as `"lat,lon"`.
    Point(GeoPoint),
    /// The radius in metres.
    Meters(f64),
}

impl FieldValue {
    pub fn as_point(&self) -> Option<GeoPoint> {
        match *self {
            FieldValue::Point(p) => Some(p),
            FieldValue::Meters(_) => None,
        }
    }

    pub fn as_meters(&self) -> Option<f64> {
        match *self {
            FieldValue::Meters(m) => Some(m),
            FieldValue::Point(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Point(p) => fmt::Display::fmt(p, f),
            FieldValue::Meters(m) => fmt::Display::fmt(m, f),
        }
    }
}

// ── GeoBoundingBox ────────────────────────────────────────────────────────────

/// Four corners, a center, and a nominal inscribed radius in metres.
///
/// Every field is a copy; the box never aliases the points it was built from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoBoundingBox {
    top_left: GeoPoint,
    top_right: GeoPoint,
    bottom_left: GeoPoint,
    bottom_right: GeoPoint,
    center: GeoPoint,
    radius: f64,
}

impl GeoBoundingBox {
    /// Build from two opposite corners.
    pub fn from_corners(top_left: GeoPoint, bottom_right: GeoPoint) -> Self {
        let mut bbox = Self {
            top_left,
            top_right: GeoPoint::default(),
            bottom_left: GeoPoint::default(),
            bottom_right,
            center: GeoPoint::default(),
            radius: 0.0,
        };
        bbox.derive_from_corners();
        bbox
    }

    /// [`from_corners`](Self::from_corners) with both corners given as `"lat,lon"`.
    pub fn from_corner_strs(top_left: &str, bottom_right: &str) -> BoxResult<Self> {
        Ok(Self::from_corners(
            GeoPoint::parse(top_left)?,
            GeoPoint::parse(bottom_right)?,
        ))
    }

    /// Build the box enclosing a circle of `distance` metres around `center`.
    ///
    /// No range checks: negative distances yield inverted corners, and
    /// near the poles the longitude span blows up as the parallel shrinks.
    pub fn from_center_and_radius(center: GeoPoint, distance: f64) -> Self {
        let (lat, lon) = center.to_radians();

        let earth_radius = earth_radius_at(lat);
        let parallel_radius = earth_radius * lat.cos();

        let lat_min = lat - distance / earth_radius;
        let lat_max = lat + distance / earth_radius;
        let lon_min = lon - distance / parallel_radius;
        let lon_max = lon + distance / parallel_radius;

        let bottom_left = GeoPoint::new(lat_min.to_degrees(), lon_min.to_degrees());
        let top_right = GeoPoint::new(lat_max.to_degrees(), lon_max.to_degrees());

        debug!(
            "bbox around {center} r={distance} m: earth radius {earth_radius:.3} m, \
             corners {bottom_left} .. {top_right}"
        );

        Self {
            top_left: GeoPoint::new(top_right.lat, bottom_left.lon),
            top_right,
            bottom_left,
            bottom_right: GeoPoint::new(bottom_left.lat, top_right.lon),
            center,
            radius: distance,
        }
    }

    /// [`from_center_and_radius`](Self::from_center_and_radius) with the
    /// center given as `"lat,lon"`.
    pub fn from_center_str_and_radius(center: &str, distance: f64) -> BoxResult<Self> {
        Ok(Self::from_center_and_radius(GeoPoint::parse(center)?, distance))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn top_left(&self) -> GeoPoint {
        self.top_left
    }

    #[inline]
    pub fn top_right(&self) -> GeoPoint {
        self.top_right
    }

    #[inline]
    pub fn bottom_left(&self) -> GeoPoint {
        self.bottom_left
    }

    #[inline]
    pub fn bottom_right(&self) -> GeoPoint {
        self.bottom_right
    }

    #[inline]
    pub fn center(&self) -> GeoPoint {
        self.center
    }

    /// Nominal inscribed radius in metres (see the module docs).
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` iff `top_left` and `bottom_right` are both exactly `(0, 0)`.
    pub fn is_square_empty(&self) -> bool {
        self.top_left.lat == 0.0
            && self.top_left.lon == 0.0
            && self.bottom_right.lat == 0.0
            && self.bottom_right.lon == 0.0
    }

    /// Geodesic length of the left edge, metres.  NaN if Vincenty fails.
    pub fn height(&self) -> f64 {
        distance_vincenty(self.top_left, self.bottom_left)
    }

    /// Geodesic length of the top edge, metres.  NaN if Vincenty fails.
    pub fn width(&self) -> f64 {
        distance_vincenty(self.top_left, self.top_right)
    }

    /// `true` if `point` lies inside the box or on its edges.
    ///
    /// Compares raw lat/lon, so boxes crossing the antimeridian are not
    /// handled.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let (lat_lo, lat_hi) = min_max(self.bottom_left.lat, self.top_left.lat);
        let (lon_lo, lon_hi) = min_max(self.top_left.lon, self.top_right.lon);
        (lat_lo..=lat_hi).contains(&point.lat) && (lon_lo..=lon_hi).contains(&point.lon)
    }

    /// Named copy of every field: `topLeft`, `topRight`, `bottomLeft`,
    /// `bottomRight`, `center` as points and `radius` in metres.
    pub fn export_fields(&self) -> HashMap<&'static str, FieldValue> {
        HashMap::from([
            ("topLeft", FieldValue::Point(self.top_left)),
            ("topRight", FieldValue::Point(self.top_right)),
            ("bottomLeft", FieldValue::Point(self.bottom_left)),
            ("bottomRight", FieldValue::Point(self.bottom_right)),
            ("center", FieldValue::Point(self.center)),
            ("radius", FieldValue::Meters(self.radius)),
        ])
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Refit the box to cover its current corners plus every point in `points`.
    ///
    /// Bounds start at the current `top_left`/`bottom_right` and each point
    /// widens them where it falls outside, so the box never gets smaller.
    /// `center` and `radius` are then recomputed as in
    /// [`from_corners`](Self::from_corners), which also replaces the stored
    /// center of a center+radius box.
    pub fn shrink(&mut self, points: &[GeoPoint]) {
        let mut min_lat = self.bottom_right.lat;
        let mut max_lat = self.top_left.lat;
        let mut min_lon = self.top_left.lon;
        let mut max_lon = self.bottom_right.lon;

        for p in points {
            if p.lat < min_lat {
                min_lat = p.lat;
            }
            if p.lat > max_lat {
                max_lat = p.lat;
            }
            if p.lon < min_lon {
                min_lon = p.lon;
            }
            if p.lon > max_lon {
                max_lon = p.lon;
            }
        }

        self.top_left = GeoPoint::new(max_lat, min_lon);
        self.bottom_right = GeoPoint::new(min_lat, max_lon);
        self.derive_from_corners();

        debug!(
            "shrink over {} points: {} .. {}, radius {:.3} m",
            points.len(),
            self.top_left,
            self.bottom_right,
            self.radius
        );
    }

    // ── Internal ──────────────────────────────────────────────────────────

    /// Fill `top_right`, `bottom_left`, `center`, `radius` from
    /// `top_left`/`bottom_right`.
    fn derive_from_corners(&mut self) {
        self.top_right = GeoPoint::new(self.top_left.lat, self.bottom_right.lon);
        self.bottom_left = GeoPoint::new(self.bottom_right.lat, self.top_left.lon);

        self.center = midpoint(self.top_left, self.bottom_right);

        let left_edge_mid = midpoint(self.top_left, self.bottom_left);
        self.radius = distance_vincenty(left_edge_mid, self.center);
    }
}

#[inline]
fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
