//! Unit tests for hg-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, VertexId};

    #[test]
    fn index_roundtrip() {
        let id = VertexId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VertexId::try_from(42usize).unwrap(), id);
        assert_eq!(EdgeId::try_from(9usize).unwrap(), EdgeId(9));
    }

    #[test]
    fn try_from_overflow() {
        assert!(VertexId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(VertexId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(VertexId(7).to_string(), "VertexId(7)");
        assert_eq!(EdgeId(0).to_string(), "EdgeId(0)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{EARTH_RADIUS_MI, GeoPoint, path_length_mi};

    fn sample_points() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(42.7325, -73.6888),
            GeoPoint::new(40.7128, -74.0060),
            GeoPoint::new(-33.8688, 151.2093),
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(89.9, 179.9),
            GeoPoint::new(-89.9, -179.9),
        ]
    }

    #[test]
    fn zero_distance_to_self() {
        for p in sample_points() {
            assert_eq!(p.distance_mi(p), 0.0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let pts = sample_points();
        for &p in &pts {
            for &q in &pts {
                assert_eq!(p.distance_mi(q), q.distance_mi(p), "{p} vs {q}");
            }
        }
    }

    #[test]
    fn one_degree_of_latitude() {
        // 3963.1 mi * pi / 180 ≈ 69.17 mi
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_mi(b);
        let expected = EARTH_RADIUS_MI * std::f64::consts::PI / 180.0;
        assert!((d - expected).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);
        let d = a.distance_mi(b);
        assert!((d - EARTH_RADIUS_MI * std::f64::consts::PI).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn within_tolerance_is_equal_and_zero() {
        let a = GeoPoint::new(42.0, -73.0);
        let b = GeoPoint::new(42.000_009, -73.000_009);
        assert!(a.approx_eq(b));
        assert!(b.approx_eq(a));
        assert_eq!(a.distance_mi(b), 0.0);
    }

    #[test]
    fn tolerance_is_strict() {
        let a = GeoPoint::new(42.0, -73.0);
        assert!(!a.approx_eq(GeoPoint::new(42.0, -73.0001)));
        assert!(!a.approx_eq(GeoPoint::new(42.0001, -73.0)));
    }

    #[test]
    fn near_coincident_points_never_nan() {
        // Just outside the tolerance: acos argument sits right at 1.0.
        let a = GeoPoint::new(42.123456, -73.654321);
        let b = GeoPoint::new(42.123467, -73.654321);
        let d = a.distance_mi(b);
        assert!(d.is_finite());
        assert!(d >= 0.0 && d < 0.01, "got {d}");
    }

    #[test]
    fn path_length_sums_hops() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        let c = GeoPoint::new(1.0, 1.0);
        let expected = a.distance_mi(b) + b.distance_mi(c);
        assert_eq!(path_length_mi([a, b, c]), expected);
    }

    #[test]
    fn path_length_degenerate() {
        assert_eq!(path_length_mi(std::iter::empty()), 0.0);
        assert_eq!(path_length_mi([GeoPoint::new(10.0, 10.0)]), 0.0);
    }

    #[test]
    fn display_keeps_decimal_point() {
        assert_eq!(GeoPoint::new(42.0, -73.5).to_string(), "(42.0,-73.5)");
    }
}
