//! Unit tests for cp-providers.
//!
//! All tests exercise the parsing layer with canned payloads; no network.

#[cfg(test)]
mod geocode {
    use crate::geocode::parse_search_response;
    use crate::ProviderError;

    const HIT: &str = r#"[
        {
            "place_id": 12345,
            "lat": "51.5073219",
            "lon": "-0.1276474",
            "display_name": "London, Greater London, England, United Kingdom",
            "importance": 0.9
        }
    ]"#;

    #[test]
    fn parses_best_hit() {
        let loc = parse_search_response(HIT).unwrap().unwrap();
        assert!((loc.point.lat - 51.5073).abs() < 1e-3);
        assert!((loc.point.lon - -0.1276).abs() < 1e-3);
        assert!(loc.display_name.starts_with("London"));
    }

    #[test]
    fn empty_result_is_not_found() {
        assert!(parse_search_response("[]").unwrap().is_none());
    }

    #[test]
    fn non_numeric_coordinate_is_malformed() {
        let body = r#"[{"lat": "fifty-one", "lon": "-0.1", "display_name": "x"}]"#;
        let err = parse_search_response(body).unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }

    #[test]
    fn invalid_json_is_a_json_error() {
        let err = parse_search_response("{not json").unwrap_err();
        assert!(matches!(err, ProviderError::Json(_)));
    }
}

#[cfg(test)]
mod overpass {
    use crate::overpass::network_from_overpass_json;

    /// Four nodes; one two-way residential way over three of them, one
    /// oneway service spur, one footway (not drivable), and a relation
    /// element the parser must skip.
    const RESPONSE: &str = r#"{
        "version": 0.6,
        "elements": [
            {"type": "node", "id": 101, "lat": 51.500, "lon": -0.120},
            {"type": "node", "id": 102, "lat": 51.501, "lon": -0.119},
            {"type": "node", "id": 103, "lat": 51.502, "lon": -0.118},
            {"type": "node", "id": 104, "lat": 51.503, "lon": -0.117},
            {"type": "way", "id": 201, "nodes": [101, 102, 103],
             "tags": {"highway": "residential", "name": "Test Street"}},
            {"type": "way", "id": 202, "nodes": [103, 104],
             "tags": {"highway": "service", "oneway": "yes"}},
            {"type": "way", "id": 203, "nodes": [101, 104],
             "tags": {"highway": "footway"}},
            {"type": "relation", "id": 301, "members": [], "tags": {}}
        ]
    }"#;

    #[test]
    fn builds_expected_topology() {
        let net = network_from_overpass_json(RESPONSE).unwrap();
        // All four nodes are referenced by drivable ways.
        assert_eq!(net.node_count(), 4);
        // Residential: 2 segments × 2 directions; oneway service: 1 segment.
        // The footway contributes nothing.
        assert_eq!(net.edge_count(), 5);
    }

    #[test]
    fn edge_lengths_are_positive_haversine() {
        let net = network_from_overpass_json(RESPONSE).unwrap();
        for &len in &net.edge_length_m {
            // Adjacent test nodes are ~100-150 m apart.
            assert!(len > 50.0 && len < 500.0, "edge length {len}");
        }
        for &ms in &net.edge_travel_ms {
            assert!(ms > 0);
        }
    }

    #[test]
    fn way_referencing_missing_node_skips_segment() {
        let body = r#"{
            "elements": [
                {"type": "node", "id": 1, "lat": 51.5, "lon": -0.1},
                {"type": "node", "id": 2, "lat": 51.6, "lon": -0.1},
                {"type": "way", "id": 9, "nodes": [1, 2, 999],
                 "tags": {"highway": "residential"}}
            ]
        }"#;
        let net = network_from_overpass_json(body).unwrap();
        assert_eq!(net.node_count(), 2);
        // Only the 1-2 segment survives, both directions.
        assert_eq!(net.edge_count(), 2);
    }

    #[test]
    fn empty_response_builds_empty_network() {
        let net = network_from_overpass_json(r#"{"elements": []}"#).unwrap();
        assert!(net.is_empty());
        assert_eq!(net.edge_count(), 0);
    }

    #[test]
    fn garbage_is_a_json_error() {
        assert!(network_from_overpass_json("<!DOCTYPE html>").is_err());
    }
}
