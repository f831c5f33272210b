//! Unit tests for geo-core primitives.

#[cfg(test)]
mod point {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use crate::{GeoError, GeoPoint};

    fn hash_of(p: &GeoPoint) -> u64 {
        let mut h = DefaultHasher::new();
        p.hash(&mut h);
        h.finish()
    }

    #[test]
    fn valid_point() {
        assert!(GeoPoint::new(50.8503, 4.3517).is_valid());
    }

    #[test]
    fn invalid_latitude() {
        assert!(!GeoPoint::new(91.0123, 4.3517).is_valid());
    }

    #[test]
    fn validity_bounds_are_inclusive() {
        assert!(GeoPoint::new(90.0, 180.0).is_valid());
        assert!(GeoPoint::new(-90.0, -180.0).is_valid());
        assert!(!GeoPoint::new(0.0, 180.000001).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn equality_is_exact() {
        let a = GeoPoint::new(91.0123, 4.3517);
        let b = GeoPoint::new(91.0123, 4.3517);
        assert_eq!(a, b);
        assert_ne!(a, GeoPoint::new(91.0123, 4.3517 + 1e-12));
    }

    #[test]
    fn hash_follows_rounded_string() {
        let a = GeoPoint::new(10.0, 20.0);
        let b = GeoPoint::new(10.0 + 1e-9, 20.0);
        // Unequal points sharing a string form collide.
        assert_ne!(a, b);
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(hash_of(&a), hash_of(&GeoPoint::new(10.0, 20.0)));
    }

    #[test]
    fn default_is_origin() {
        assert_eq!(GeoPoint::default(), GeoPoint::new(0.0, 0.0));
    }

    #[test]
    fn display_trims_trailing_zeros() {
        assert_eq!(GeoPoint::new(50.8503, 4.3517).to_string(), "50.8503,4.3517");
        assert_eq!(GeoPoint::new(-12.5, 130.0).to_string(), "-12.5,130");
        assert_eq!(GeoPoint::new(1.23456789, 0.1).to_string(), "1.234568,0.1");
    }

    #[test]
    fn display_has_no_grouping_or_negative_zero() {
        assert_eq!(GeoPoint::new(12345.5, -0.0000001).to_string(), "12345.5,0");
        assert_eq!(GeoPoint::new(-0.0, 0.0).to_string(), "0,0");
    }

    #[test]
    fn parse_trims_fields() {
        let p: GeoPoint = " 50.8503 , 4.3517 ".parse().unwrap();
        assert_eq!(p, GeoPoint::new(50.8503, 4.3517));
    }

    #[test]
    fn parse_splits_on_first_comma() {
        let err = GeoPoint::parse("1,2,3").unwrap_err();
        match err {
            GeoError::InvalidNumber { token, .. } => assert_eq!(token, "2,3"),
        }
    }

    #[test]
    fn parse_without_comma_is_origin() {
        assert_eq!(GeoPoint::parse("50.8503 4.3517").unwrap(), GeoPoint::default());
        assert_eq!(GeoPoint::parse("").unwrap(), GeoPoint::default());
    }

    #[test]
    fn parse_rejects_non_numeric_token() {
        let err = GeoPoint::parse("north,4.3517").unwrap_err();
        assert!(err.to_string().contains("\"north\""), "got {err}");
    }

    #[test]
    fn with_methods_chain_without_touching_original() {
        let p = GeoPoint::new(1.0, 2.0);
        let q = p.with_lat(3.0).with_lon(4.0);
        assert_eq!(p, GeoPoint::new(1.0, 2.0));
        assert_eq!(q, GeoPoint::new(3.0, 4.0));
        assert_eq!(q.with_coords(5.0, 6.0), GeoPoint::new(5.0, 6.0));
        assert_eq!(q.with_parsed("7,8").unwrap(), GeoPoint::new(7.0, 8.0));
        assert!(q.with_parsed("7,x").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_string_form() {
        let p = GeoPoint::new(50.8503, 4.3517);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"50.8503,4.3517\"");
        let back: GeoPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}

#[cfg(test)]
mod geodesy {
    use crate::geodesy::{WGS84_A, WGS84_B};
    use crate::{GeoPoint, distance_vincenty, earth_radius_at, midpoint, try_distance_vincenty};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(50.8503, 4.3517);
        assert_eq!(distance_vincenty(p, p), 0.0);
    }

    #[test]
    fn one_degree_on_equator() {
        let d = distance_vincenty(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
        assert!((d - 111_319.491).abs() < 0.01, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = distance_vincenty(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
        assert!((d - 110_574.389).abs() < 0.01, "got {d}");
    }

    #[test]
    fn flinders_peak_to_buninyong() {
        let a = GeoPoint::new(-37.95103342, 144.42486789);
        let b = GeoPoint::new(-37.65282114, 143.92649554);
        let d = distance_vincenty(a, b);
        assert!((d - 54_972.271).abs() < 0.01, "got {d}");
    }

    #[test]
    fn brussels_to_namur_is_symmetric() {
        let bxl = GeoPoint::new(50.8503, 4.3517);
        let namur = GeoPoint::new(50.4674, 4.8720);
        let there = distance_vincenty(bxl, namur);
        let back = distance_vincenty(namur, bxl);
        assert!((there - 56_283.525).abs() < 0.01, "got {there}");
        assert!((there - back).abs() < 1e-6);
    }

    #[test]
    fn antipodal_points_do_not_converge() {
        let d = distance_vincenty(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.5, 179.7));
        assert!(d.is_nan(), "got {d}");
        let d = distance_vincenty(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));
        assert!(d.is_nan(), "got {d}");
    }

    #[test]
    fn try_distance_maps_nan_to_none() {
        assert_eq!(try_distance_vincenty(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.5, 179.7)), None);
        let d = try_distance_vincenty(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)).unwrap();
        assert!((d - 111_319.491).abs() < 0.01, "got {d}");
    }

    #[test]
    fn out_of_range_inputs_still_compute() {
        let d = distance_vincenty(GeoPoint::new(91.0123, 4.3517), GeoPoint::new(50.0, 4.0));
        assert!(d.is_finite(), "got {d}");
    }

    #[test]
    fn midpoint_on_equator() {
        let m = midpoint(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 90.0));
        assert!(m.lat.abs() < 1e-12);
        assert!((m.lon - 45.0).abs() < 1e-12);
    }

    #[test]
    fn midpoint_of_same_point() {
        let p = GeoPoint::new(10.0, 20.0);
        let m = midpoint(p, p);
        assert!((m.lat - 10.0).abs() < 1e-9);
        assert!((m.lon - 20.0).abs() < 1e-9);
    }

    #[test]
    fn earth_radius_at_equator_and_pole() {
        assert!((earth_radius_at(0.0) - WGS84_A).abs() < 1e-6);
        assert!((earth_radius_at(std::f64::consts::FRAC_PI_2) - WGS84_B).abs() < 1e-6);
        let mid = earth_radius_at(45f64.to_radians());
        assert!((mid - 6_367_489.544).abs() < 0.01, "got {mid}");
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use crate::{GeoPoint, distance_vincenty};

    proptest! {
        #[test]
        fn distance_to_self_is_zero(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            let p = GeoPoint::new(lat, lon);
            prop_assert_eq!(distance_vincenty(p, p), 0.0);
        }

        #[test]
        fn distance_is_symmetric(
            lat1 in -80.0f64..80.0, lon1 in -60.0f64..60.0,
            lat2 in -80.0f64..80.0, lon2 in -60.0f64..60.0,
        ) {
            let a = GeoPoint::new(lat1, lon1);
            let b = GeoPoint::new(lat2, lon2);
            let ab = distance_vincenty(a, b);
            let ba = distance_vincenty(b, a);
            prop_assert!((ab - ba).abs() < 1e-3, "{} vs {}", ab, ba);
        }

        #[test]
        fn string_round_trip(lat in -90_000_000i64..=90_000_000, lon in -180_000_000i64..=180_000_000) {
            let p = GeoPoint::new(lat as f64 / 1e6, lon as f64 / 1e6);
            let s = p.to_string();
            prop_assert_eq!(GeoPoint::parse(&s).unwrap().to_string(), s);
        }
    }
}
