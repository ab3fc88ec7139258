//! Pokedex - A command-line PokeAPI browser
//!
//! Reads PokeAPI through an expiring in-memory response cache that is reaped
//! by a background task.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pokeapi;
pub mod repl;
pub mod session;
pub mod tasks;

pub use cache::Cache;
pub use config::Config;
pub use pokeapi::{HttpFetcher, PokeApiClient};
pub use repl::Repl;
