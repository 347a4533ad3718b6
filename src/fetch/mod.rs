// src/fetch/mod.rs
// =============================================================================
// This module is the only place that talks to the network.
//
// Submodules:
// - http: The Fetcher trait and its reqwest implementation
//
// Everything else in the app receives an `&dyn Fetcher`, which is what lets
// the tests swap in fake fetchers that fail on purpose.
// =============================================================================

mod http;
#[cfg(test)]
pub mod testing;

pub use http::{Fetcher, HttpFetcher};
