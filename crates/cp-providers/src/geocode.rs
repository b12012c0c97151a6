//! Nominatim geocoding client.
//!
//! Resolves a free-text place name to a coordinate via the Nominatim search
//! API.  `resolve` is a single blocking call: `Ok(Some(..))` on a hit,
//! `Ok(None)` when the provider knows no such place (the caller decides
//! whether to re-prompt), `Err` on transport or decode failures.

use reqwest::blocking::Client;
use serde::Deserialize;

use cp_core::GeoPoint;

use crate::error::{ProviderError, ProviderResult};

/// Public Nominatim instance.  Its usage policy requires an identifying
/// User-Agent, which [`Geocoder::new`] sets.
const NOMINATIM_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

const USER_AGENT: &str = concat!("clearpath/", env!("CARGO_PKG_VERSION"));

/// A successfully geocoded location.
#[derive(Debug, Clone)]
pub struct ResolvedLocation {
    /// Resolved coordinate.
    pub point: GeoPoint,
    /// The provider's canonical display name for the match.
    pub display_name: String,
}

/// Blocking Nominatim search client.
pub struct Geocoder {
    client: Client,
    endpoint: String,
}

impl Geocoder {
    /// Build a client against the public Nominatim instance.
    pub fn new() -> ProviderResult<Self> {
        Self::with_endpoint(NOMINATIM_ENDPOINT)
    }

    /// Build a client against a custom endpoint (self-hosted instance).
    pub fn with_endpoint(endpoint: &str) -> ProviderResult<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, endpoint: endpoint.to_string() })
    }

    /// Resolve a free-text query to its best-matching location.
    ///
    /// Returns `Ok(None)` when the provider has no match for the query.
    pub fn resolve(&self, query: &str) -> ProviderResult<Option<ResolvedLocation>> {
        log::debug!("geocoding {query:?}");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            log::error!("geocoder returned HTTP {status} for {query:?}");
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let resolved = parse_search_response(&body)?;
        match &resolved {
            Some(loc) => log::info!("geocoded {query:?} -> {} ({})", loc.point, loc.display_name),
            None => log::debug!("no geocoder match for {query:?}"),
        }
        Ok(resolved)
    }
}

// ── Response parsing ──────────────────────────────────────────────────────────

/// One Nominatim search hit.  Latitude and longitude arrive as JSON strings.
#[derive(Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    display_name: String,
}

/// Parse a Nominatim search response body into the best match, if any.
pub fn parse_search_response(body: &str) -> ProviderResult<Option<ResolvedLocation>> {
    let hits: Vec<SearchHit> = serde_json::from_str(body)?;

    let Some(hit) = hits.into_iter().next() else {
        return Ok(None);
    };

    let lat = parse_coord_field("lat", &hit.lat)?;
    let lon = parse_coord_field("lon", &hit.lon)?;

    Ok(Some(ResolvedLocation {
        point: GeoPoint::new(lat, lon),
        display_name: hit.display_name,
    }))
}

fn parse_coord_field(name: &str, raw: &str) -> ProviderResult<f32> {
    raw.parse::<f32>()
        .map_err(|_| ProviderError::Malformed(format!("{name} is not a number: {raw:?}")))
}
