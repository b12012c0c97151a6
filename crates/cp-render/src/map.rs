//! Leaflet map document builder.
//!
//! `MapDocument` accumulates drawing primitives (circles, polylines,
//! positioned HTML overlays) and renders them into one self-contained HTML
//! page: a full-viewport Leaflet canvas over OSM raster tiles, with every
//! primitive emitted as a Leaflet statement in the page's script block.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use cp_core::GeoPoint;
use cp_spatial::{RoadNetwork, Route};

use crate::error::RenderResult;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// An interactive map being assembled.
///
/// Construct with [`MapDocument::new`], add primitives, then call
/// [`to_html`](Self::to_html) or [`write_html`](Self::write_html).
pub struct MapDocument {
    center: GeoPoint,
    zoom: u8,
    /// Leaflet statements, one per drawing primitive, in insertion order.
    shapes: Vec<String>,
    /// Static positioned HTML blocks layered over the canvas.
    overlays: Vec<String>,
}

impl MapDocument {
    /// Initialize a canvas centred on `center` at the given zoom level.
    pub fn new(center: GeoPoint, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            shapes: Vec::new(),
            overlays: Vec::new(),
        }
    }

    /// Draw a translucent filled circle of `radius_m` metres.
    pub fn add_circle(&mut self, center: GeoPoint, radius_m: f32, color: &str) {
        self.shapes.push(format!(
            "L.circle([{:.6}, {:.6}], {{radius: {:.0}, color: '{}', \
             fillColor: '{}', fillOpacity: 0.1}}).addTo(map);",
            center.lat, center.lon, radius_m, color, color
        ));
    }

    /// Draw a polyline through `points` in order.
    pub fn add_polyline(&mut self, points: &[GeoPoint], color: &str, weight_px: u8) {
        let mut latlngs = String::new();
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                latlngs.push_str(", ");
            }
            let _ = write!(latlngs, "[{:.6}, {:.6}]", p.lat, p.lon);
        }
        self.shapes.push(format!(
            "L.polyline([{latlngs}], {{color: '{color}', weight: {weight_px}}}).addTo(map);"
        ));
    }

    /// Insert a static HTML block over the canvas.
    ///
    /// The block is emitted verbatim; callers position it themselves
    /// (`position: fixed` plus a `z-index` above the map pane).
    pub fn add_overlay(&mut self, html: &str) {
        self.overlays.push(html.to_string());
    }

    /// Render the document to a self-contained HTML page.
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\"/>\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\"/>\n",
        );
        html.push_str("<title>clearpath route map</title>\n");
        let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{LEAFLET_CSS}\"/>");
        let _ = writeln!(html, "<script src=\"{LEAFLET_JS}\"></script>");
        html.push_str(
            "<style>\n  html, body { height: 100%; margin: 0; }\n  \
             #map { height: 100%; width: 100%; }\n</style>\n",
        );
        html.push_str("</head>\n<body>\n<div id=\"map\"></div>\n");

        for overlay in &self.overlays {
            html.push_str(overlay);
            html.push('\n');
        }

        html.push_str("<script>\n");
        let _ = writeln!(
            html,
            "var map = L.map('map').setView([{:.6}, {:.6}], {});",
            self.center.lat, self.center.lon, self.zoom
        );
        let _ = writeln!(
            html,
            "L.tileLayer('{TILE_URL}', {{maxZoom: 19, \
             attribution: '&copy; OpenStreetMap contributors'}}).addTo(map);"
        );
        for shape in &self.shapes {
            html.push_str(shape);
            html.push('\n');
        }
        html.push_str("</script>\n</body>\n</html>\n");

        html
    }

    /// Write the rendered page to `path`.
    pub fn write_html(&self, path: &Path) -> RenderResult<()> {
        fs::write(path, self.to_html())?;
        Ok(())
    }
}

/// The coordinate sequence of a route, for [`MapDocument::add_polyline`].
pub fn route_points(route: &Route, network: &RoadNetwork) -> Vec<GeoPoint> {
    route.nodes.iter().map(|&n| network.position(n)).collect()
}
