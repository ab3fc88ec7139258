//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; these cover the network layer and the command loop.

use thiserror::Error;

// == API Error Enum ==
/// Failures while retrieving or decoding a PokeAPI resource.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be sent or its body could not be read
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("call to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// The body was not the JSON shape we expected
    #[error("can't decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// No Pokemon by that name
    #[error("no such pokemon '{0}'")]
    UnknownPokemon(String),

    /// The configured base URL can't have path segments appended
    #[error("invalid base url '{0}'")]
    InvalidUrl(String),
}

impl ApiError {
    /// Returns the HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

// == Command Error Enum ==
/// Failures reported back to the user by a REPL command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A command that needs an argument was called without one
    #[error("'{command}' requires an argument, e.g. '{usage}'")]
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },

    /// `mapb` on the first page
    #[error("you're on the first page")]
    FirstPage,

    /// `map` after the last page
    #[error("you're on the last page")]
    LastPage,

    /// `inspect` on a Pokemon that is not in the Pokedex
    #[error("you have not caught {0}")]
    NotCaught(String),

    /// Writing output or reading input failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The network layer failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

// == Result Type Alias ==
/// Convenience Result type for the network layer.
pub type Result<T> = std::result::Result<T, ApiError>;
