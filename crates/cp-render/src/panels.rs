//! Overlay panels: pollution legend and route-information box.
//!
//! Both render to static positioned HTML blocks for
//! [`MapDocument::add_overlay`](crate::MapDocument::add_overlay).

use cp_pollution::RouteKind;

/// Pollution legend, pinned bottom-left.
pub fn legend_html() -> String {
    r#"<div style="position: fixed; bottom: 50px; left: 20px; width: 220px; height: 120px;
border: 2px solid grey; z-index: 9999; font-size: 14px; background-color: white;">
  <p><strong>Legend</strong></p>
  <p style="color: green;">&lt; 30: Low Pollution</p>
  <p style="color: blue;">30 - 60: Moderate Pollution</p>
  <p style="color: red;">&gt; 60: High Pollution</p>
</div>"#
        .to_string()
}

/// Route-information box, pinned top-left: both pollution scores and the
/// recommended route.
pub fn summary_panel_html(
    shortest_score: f64,
    fastest_score: f64,
    recommended: RouteKind,
) -> String {
    format!(
        r#"<div style="position: fixed; top: 50px; left: 50px; width: 300px; height: 180px;
border: 2px solid grey; z-index: 9999; font-size: 14px; background-color: white; padding: 10px;">
  <h4>Route Information</h4>
  <p>Average Pollution (Shortest Route): {shortest_score:.2}</p>
  <p>Average Pollution (Fastest Route): {fastest_score:.2}</p>
  <p>Recommended Route: {recommended} (Lower Pollution)</p>
</div>"#
    )
}
