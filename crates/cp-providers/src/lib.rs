//! `cp-providers` — blocking clients for the two external collaborators.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`geocode`]  | Nominatim search client (`Geocoder`)                    |
//! | [`overpass`] | Overpass road-network fetcher (`NetworkFetcher`)        |
//! | [`error`]    | `ProviderError`, `ProviderResult<T>`                    |
//!
//! Both clients keep the HTTP call and the response parsing separate; the
//! parsers are pure functions over a response body and are exercised by the
//! test suite with canned payloads, no network required.
//!
//! Calls block the caller until the provider answers or the transport
//! fails; there is no retry or backoff at this layer.

pub mod error;
pub mod geocode;
pub mod overpass;

#[cfg(test)]
mod tests;

pub use error::{ProviderError, ProviderResult};
pub use geocode::{Geocoder, ResolvedLocation};
pub use overpass::NetworkFetcher;
