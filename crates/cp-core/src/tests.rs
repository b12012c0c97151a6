//! Unit tests for cp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(EdgeId(100) > EdgeId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(51.507, -0.128);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(51.0, -0.1);
        let b = GeoPoint::new(52.0, -0.1);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn bbox_check() {
        let center = GeoPoint::new(51.507, -0.128);
        let nearby = GeoPoint::new(51.510, -0.120);
        let far = GeoPoint::new(52.3, -0.128);
        assert!(nearby.within_bbox(center, 0.1));
        assert!(!far.within_bbox(center, 0.1));
    }
}

#[cfg(test)]
mod rng {
    use crate::SeededRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SeededRng::new(12345);
        let mut r2 = SeededRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.random();
            let b: u64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut r0 = SeededRng::new(1);
        let mut r1 = SeededRng::new(2);
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SeededRng::new(0);
        for _ in 0..1000 {
            let v: u8 = rng.gen_range(20..=100);
            assert!((20..=100).contains(&v));
        }
    }
}

#[cfg(test)]
mod config {
    use crate::QueryConfig;

    #[test]
    fn defaults() {
        let cfg = QueryConfig::default();
        assert_eq!(cfg.radius_m, 3_000.0);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.zoom, 14);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_nonpositive_radius() {
        let cfg = QueryConfig { radius_m: 0.0, ..QueryConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = QueryConfig { radius_m: -10.0, ..QueryConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_zoom() {
        let cfg = QueryConfig { zoom: 0, ..QueryConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = QueryConfig { zoom: 20, ..QueryConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
