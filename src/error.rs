//! Error types for the Pokédex client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, PokedexError>;

#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No numeric resource id in URL: {url}")]
    MalformedResourceUrl { url: String },

    #[error("Upstream payload is missing field: {field}")]
    MissingField { field: &'static str },

    #[error("Not a pokemon id or name: {name:?}")]
    InvalidPokemonName { name: String },

    #[error("Unknown pokemon type: {name}")]
    UnknownType { name: String },

    #[error("Invalid hex color: {value}")]
    InvalidColor { value: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}
