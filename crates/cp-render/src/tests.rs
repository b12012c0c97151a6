//! Unit tests for cp-render.

#[cfg(test)]
mod helpers {
    use cp_core::GeoPoint;
    use cp_spatial::{RoadNetwork, RoadNetworkBuilder, Route};

    /// A 2-node network with both nodes annotated.
    pub fn tiny_network() -> RoadNetwork {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(51.500, -0.120));
        let c = b.add_node(GeoPoint::new(51.510, -0.110));
        b.add_road(a, c, 1_000.0, 80_000);
        let mut net = b.build();
        net.node_pollution = vec![Some(25), Some(75)];
        net
    }

    pub fn tiny_route() -> Route {
        Route {
            nodes: vec![cp_core::NodeId(0), cp_core::NodeId(1)],
            total_length_m: 1_000.0,
            total_travel_secs: 80.0,
        }
    }
}

#[cfg(test)]
mod map {
    use cp_core::GeoPoint;
    use crate::{route_points, MapDocument};

    #[test]
    fn html_initializes_view() {
        let doc = MapDocument::new(GeoPoint::new(51.507, -0.128), 14);
        let html = doc.to_html();
        assert!(html.contains("setView([51.507000, -0.128000], 14)"));
        assert!(html.contains("tile.openstreetmap.org"));
        assert!(html.contains("<div id=\"map\">"));
    }

    #[test]
    fn circle_statement() {
        let mut doc = MapDocument::new(GeoPoint::new(0.0, 0.0), 14);
        doc.add_circle(GeoPoint::new(51.5, -0.12), 500.0, "blue");
        let html = doc.to_html();
        assert!(html.contains("L.circle([51.500000, -0.120000], {radius: 500"));
        assert!(html.contains("color: 'blue'"));
    }

    #[test]
    fn polyline_statement() {
        let mut doc = MapDocument::new(GeoPoint::new(0.0, 0.0), 14);
        doc.add_polyline(
            &[GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)],
            "red",
            5,
        );
        let html = doc.to_html();
        assert!(html.contains("L.polyline([[0.000000, 0.000000], [0.000000, 1.000000]]"));
        assert!(html.contains("color: 'red', weight: 5"));
    }

    #[test]
    fn overlays_emitted_verbatim() {
        let mut doc = MapDocument::new(GeoPoint::new(0.0, 0.0), 14);
        doc.add_overlay("<div id=\"marker-panel\">hello</div>");
        let html = doc.to_html();
        assert!(html.contains("<div id=\"marker-panel\">hello</div>"));
    }

    #[test]
    fn route_points_follow_node_order() {
        let net = super::helpers::tiny_network();
        let route = super::helpers::tiny_route();
        let pts = route_points(&route, &net);
        assert_eq!(pts.len(), 2);
        assert!((pts[0].lat - 51.500).abs() < 1e-4);
        assert!((pts[1].lat - 51.510).abs() < 1e-4);
    }

    #[test]
    fn write_html_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.html");
        let doc = MapDocument::new(GeoPoint::new(51.5, -0.12), 14);
        doc.write_html(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!doctype html>"));
    }
}

#[cfg(test)]
mod panels {
    use cp_pollution::RouteKind;
    use crate::panels::{legend_html, summary_panel_html};

    #[test]
    fn legend_has_all_three_bands() {
        let html = legend_html();
        assert!(html.contains("Low Pollution"));
        assert!(html.contains("Moderate Pollution"));
        assert!(html.contains("High Pollution"));
    }

    #[test]
    fn summary_formats_scores_and_pick() {
        let html = summary_panel_html(42.5, 55.25, RouteKind::Shortest);
        assert!(html.contains("Average Pollution (Shortest Route): 42.50"));
        assert!(html.contains("Average Pollution (Fastest Route): 55.25"));
        assert!(html.contains("Recommended Route: Shortest (Lower Pollution)"));
    }

    #[test]
    fn summary_names_fastest_on_tie() {
        let html = summary_panel_html(50.0, 50.0, RouteKind::Fastest);
        assert!(html.contains("Recommended Route: Fastest"));
    }
}

#[cfg(test)]
mod export {
    use crate::write_route_csv;

    #[test]
    fn csv_has_header_and_one_row_per_node() {
        let net = super::helpers::tiny_network();
        let route = super::helpers::tiny_route();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("route.csv");
        write_route_csv(&path, &route, &net).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "node_id,lat,lon,pollution_level");
        assert!(lines[1].starts_with("0,"));
        assert!(lines[1].ends_with(",25"));
        assert!(lines[2].starts_with("1,"));
        assert!(lines[2].ends_with(",75"));
    }

    #[test]
    fn unannotated_node_leaves_pollution_empty() {
        let mut net = super::helpers::tiny_network();
        net.node_pollution = vec![None, Some(75)];
        let route = super::helpers::tiny_route();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("route.csv");
        write_route_csv(&path, &route, &net).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert!(lines[1].ends_with(","), "empty pollution column: {}", lines[1]);
    }
}
