//! Unit tests for cp-pollution.

#[cfg(test)]
mod helpers {
    use cp_core::GeoPoint;
    use cp_spatial::{RoadNetwork, RoadNetworkBuilder, Route};

    /// A 3-node line network: 0 - 1 - 2.
    pub fn line_network() -> RoadNetwork {
        let mut b = RoadNetworkBuilder::new();
        let n0 = b.add_node(GeoPoint::new(0.0, 0.0));
        let n1 = b.add_node(GeoPoint::new(0.0, 1.0));
        let n2 = b.add_node(GeoPoint::new(0.0, 2.0));
        b.add_road(n0, n1, 100.0, 10_000);
        b.add_road(n1, n2, 100.0, 10_000);
        b.build()
    }

    /// A route over the given node indices, totals irrelevant for scoring.
    pub fn route_over(nodes: &[u32]) -> Route {
        Route {
            nodes: nodes.iter().map(|&n| cp_core::NodeId(n)).collect(),
            total_length_m: 0.0,
            total_travel_secs: 0.0,
        }
    }
}

// ── Annotation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod annotate {
    use cp_core::SeededRng;
    use cp_spatial::RoadNetworkBuilder;
    use crate::{annotate_network, POLLUTION_MAX, POLLUTION_MIN};

    #[test]
    fn values_in_range() {
        let mut net = super::helpers::line_network();
        let mut rng = SeededRng::new(42);
        annotate_network(&mut net, &mut rng);
        for p in &net.node_pollution {
            let p = p.expect("all nodes annotated");
            assert!((POLLUTION_MIN..=POLLUTION_MAX).contains(&p));
        }
    }

    #[test]
    fn deterministic_for_equal_seeds() {
        let mut a = super::helpers::line_network();
        let mut b = super::helpers::line_network();
        annotate_network(&mut a, &mut SeededRng::new(42));
        annotate_network(&mut b, &mut SeededRng::new(42));
        assert_eq!(a.node_pollution, b.node_pollution);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let mut a = super::helpers::line_network();
        let mut b = super::helpers::line_network();
        annotate_network(&mut a, &mut SeededRng::new(1));
        annotate_network(&mut b, &mut SeededRng::new(2));
        // Three independent draws from an 81-value range colliding on all
        // nodes is effectively impossible.
        assert_ne!(a.node_pollution, b.node_pollution);
    }

    #[test]
    fn idempotent_reannotation() {
        let mut net = super::helpers::line_network();
        annotate_network(&mut net, &mut SeededRng::new(42));
        let first = net.node_pollution.clone();
        // Different seed on the second run — must not matter, nothing is
        // overwritten.
        annotate_network(&mut net, &mut SeededRng::new(7));
        assert_eq!(net.node_pollution, first);
    }

    #[test]
    fn preexisting_values_left_untouched() {
        let mut net = super::helpers::line_network();
        net.node_pollution[1] = Some(99);
        annotate_network(&mut net, &mut SeededRng::new(42));
        assert_eq!(net.node_pollution[1], Some(99));
        assert!(net.node_pollution[0].is_some());
        assert!(net.node_pollution[2].is_some());
    }

    #[test]
    fn empty_network_noop() {
        let mut net = RoadNetworkBuilder::new().build();
        annotate_network(&mut net, &mut SeededRng::new(42));
        assert!(net.node_pollution.is_empty());
    }
}

// ── Scoring ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod score {
    use crate::average_pollution;

    #[test]
    fn exact_mean() {
        let mut net = super::helpers::line_network();
        net.node_pollution = vec![Some(20), Some(50), Some(80)];
        let route = super::helpers::route_over(&[0, 1, 2]);
        assert_eq!(average_pollution(&route, &net), Some(50.0));
    }

    #[test]
    fn single_node_route_equals_that_node() {
        let mut net = super::helpers::line_network();
        net.node_pollution = vec![Some(20), Some(50), Some(80)];
        let route = super::helpers::route_over(&[1]);
        assert_eq!(average_pollution(&route, &net), Some(50.0));
    }

    #[test]
    fn empty_route_has_no_value() {
        let net = super::helpers::line_network();
        let route = super::helpers::route_over(&[]);
        assert_eq!(average_pollution(&route, &net), None);
    }

    #[test]
    fn missing_attribute_counts_as_zero() {
        let mut net = super::helpers::line_network();
        net.node_pollution = vec![Some(60), None, Some(60)];
        let route = super::helpers::route_over(&[0, 1, 2]);
        assert_eq!(average_pollution(&route, &net), Some(40.0));
    }
}

// ── Recommendation ────────────────────────────────────────────────────────────

#[cfg(test)]
mod recommend {
    use crate::{recommend, RouteKind};

    #[test]
    fn lower_shortest_wins() {
        assert_eq!(recommend(40.0, 55.0), RouteKind::Shortest);
    }

    #[test]
    fn lower_fastest_wins() {
        assert_eq!(recommend(55.0, 40.0), RouteKind::Fastest);
    }

    #[test]
    fn tie_favors_fastest() {
        assert_eq!(recommend(50.0, 50.0), RouteKind::Fastest);
    }

    #[test]
    fn display_labels() {
        assert_eq!(RouteKind::Shortest.to_string(), "Shortest");
        assert_eq!(RouteKind::Fastest.to_string(), "Fastest");
    }
}
