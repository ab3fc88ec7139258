//! PokeAPI Module
//!
//! The network side of the client: a transport seam and a client that reads
//! through the response cache.

pub mod client;
pub mod fetch;

pub use client::PokeApiClient;
pub use fetch::{Fetch, HttpFetcher};
