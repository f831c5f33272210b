//! Geodesic math on the WGS-84 ellipsoid.
//!
//! All functions are pure and take degrees in [`GeoPoint`]s.
//!
//! | Function                  | Model     | Output              |
//! |---------------------------|-----------|---------------------|
//! | [`midpoint`]              | sphere    | `GeoPoint`, degrees |
//! | [`earth_radius_at`]       | ellipsoid | metres              |
//! | [`distance_vincenty`]     | ellipsoid | metres, NaN on failure |
//! | [`try_distance_vincenty`] | ellipsoid | `Option<metres>`    |

use log::debug;

use crate::GeoPoint;

/// WGS-84 semi-major axis, metres.
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS-84 semi-minor axis, metres.
pub const WGS84_B: f64 = 6_356_752.314245;
/// WGS-84 flattening.
pub const WGS84_F: f64 = 1.0 / 298.257223563;

/// Convergence threshold on successive `lambda` values, radians.
pub const VINCENTY_TOLERANCE: f64 = 1e-12;
/// Iteration cap before [`distance_vincenty`] gives up with NaN.
pub const VINCENTY_MAX_ITERATIONS: u32 = 100;

/// Spherical geographic midpoint of `a` and `b`.
///
/// Treats the Earth as a sphere; the result is the point halfway along the
/// great circle through both inputs.
pub fn midpoint(a: GeoPoint, b: GeoPoint) -> GeoPoint {
    let d_lon = (b.lon - a.lon).to_radians();
    let (lat1, lon1) = a.to_radians();
    let lat2 = b.lat.to_radians();

    let bx = lat2.cos() * d_lon.cos();
    let by = lat2.cos() * d_lon.sin();

    let cx = lat1.cos() + bx;
    let lat3 = (lat1.sin() + lat2.sin()).atan2((cx * cx + by * by).sqrt());
    let lon3 = lon1 + by.atan2(cx);

    GeoPoint::new(lat3.to_degrees(), lon3.to_degrees())
}

/// Radius of the WGS-84 ellipsoid at geodetic latitude `lat` (radians), metres.
pub fn earth_radius_at(lat: f64) -> f64 {
    let (sin, cos) = lat.sin_cos();

    let an = WGS84_A * WGS84_A * cos;
    let bn = WGS84_B * WGS84_B * sin;
    let ad = WGS84_A * cos;
    let bd = WGS84_B * sin;

    ((an * an + bn * bn) / (ad * ad + bd * bd)).sqrt()
}

/// Geodesic distance between `a` and `b` on the WGS-84 ellipsoid, metres.
///
/// Vincenty's inverse formula.  Returns `0.0` for coincident points and
/// `f64::NAN` when `lambda` fails to settle within
/// [`VINCENTY_MAX_ITERATIONS`] rounds, which happens for nearly antipodal
/// pairs.  Callers must check for NaN; see [`try_distance_vincenty`].
pub fn distance_vincenty(a: GeoPoint, b: GeoPoint) -> f64 {
    let l = (b.lon - a.lon).to_radians();
    let u1 = ((1.0 - WGS84_F) * a.lat.to_radians().tan()).atan();
    let u2 = ((1.0 - WGS84_F) * b.lat.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut iterations = 0u32;

    let (sin_sigma, cos_sigma, sigma, cos_sq_alpha, cos_2sigma_m) = loop {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();

        let along = cos_u2 * sin_lambda;
        let cross = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
        let sin_sigma = (along * along + cross * cross).sqrt();
        if sin_sigma == 0.0 {
            return 0.0; // co-incident points
        }

        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

        let mut cos_2sigma_m = cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha;
        if cos_2sigma_m.is_nan() {
            cos_2sigma_m = 0.0; // equatorial line: cos_sq_alpha = 0
        }

        let c = WGS84_F / 16.0 * cos_sq_alpha * (4.0 + WGS84_F * (4.0 - 3.0 * cos_sq_alpha));
        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * WGS84_F
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        iterations += 1;

        // A NaN step ends the iteration like a converged one.
        let step = (lambda - lambda_prev).abs();
        if step.is_nan() || step <= VINCENTY_TOLERANCE {
            break (sin_sigma, cos_sigma, sigma, cos_sq_alpha, cos_2sigma_m);
        }
        if iterations >= VINCENTY_MAX_ITERATIONS {
            debug!("vincenty: no convergence after {iterations} iterations between {a} and {b}");
            return f64::NAN;
        }
    };

    let u_sq = cos_sq_alpha * (WGS84_A * WGS84_A - WGS84_B * WGS84_B) / (WGS84_B * WGS84_B);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

    let delta_sigma = big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

    WGS84_B * big_a * (sigma - delta_sigma)
}

/// [`distance_vincenty`] with non-convergence as `None` instead of NaN.
#[inline]
pub fn try_distance_vincenty(a: GeoPoint, b: GeoPoint) -> Option<f64> {
    let d = distance_vincenty(a, b);
    (!d.is_nan()).then_some(d)
}
