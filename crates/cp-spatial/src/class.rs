//! Drivable road classes, assumed speeds, and oneway detection.
//!
//! Shared by both network providers (the Overpass fetcher in `cp-providers`
//! and the offline PBF loader behind this crate's `osm` feature) so the two
//! paths produce identical edge semantics from the same tags.

/// Return the assumed car speed (m/s) for a road class, or `None` if this
/// `highway` value is not drivable by car.
///
/// Speeds are conservative urban defaults — applications may override by
/// implementing their own loader with OSM `maxspeed` parsing.
pub fn car_speed_mps(highway: &str) -> Option<f32> {
    match highway {
        "motorway" | "motorway_link"         => Some(29.1), // ~65 mph
        "trunk"    | "trunk_link"            => Some(24.6), // ~55 mph
        "primary"  | "primary_link"          => Some(20.1), // ~45 mph
        "secondary"| "secondary_link"        => Some(17.9), // ~40 mph
        "tertiary" | "tertiary_link"         => Some(13.4), // ~30 mph
        "residential" | "living_street"      => Some(8.9),  // ~20 mph
        "service"  | "unclassified"          => Some(6.7),  // ~15 mph
        // Explicitly non-car:
        "footway" | "path" | "cycleway"
        | "pedestrian" | "steps" | "track"   => None,
        // Unknown road type — assign a cautious default rather than dropping.
        _                                    => Some(8.9),
    }
}

/// Determine whether a way should be treated as one-way for car traffic.
///
/// Motorways and motorway links are implicitly one-way in OSM convention.
pub fn is_oneway(highway: &str, oneway_tag: Option<&str>) -> bool {
    let explicit = matches!(oneway_tag, Some("yes" | "1" | "true"));
    let implicit = matches!(highway, "motorway" | "motorway_link");
    explicit || implicit
}

/// Travel time in milliseconds for `length_m` metres at `speed_mps`.
#[inline]
pub fn travel_ms(length_m: f32, speed_mps: f32) -> u32 {
    (length_m / speed_mps * 1_000.0) as u32
}
