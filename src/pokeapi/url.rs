//! Resource id extraction from upstream reference URLs.

use crate::error::{PokedexError, Result};

/// Parse the trailing numeric path segment of a reference URL.
///
/// `https://pokeapi.co/api/v2/pokemon-species/25/` yields `25`. A trailing
/// slash is optional; a query string or fragment is ignored.
///
/// # Errors
///
/// [`PokedexError::MalformedResourceUrl`] when the last segment is missing or
/// not a non-negative integer.
pub fn resource_id_from_url(url: &str) -> Result<u32> {
    let path = url.split(['?', '#']).next().unwrap_or_default();

    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|segment| segment.parse::<u32>().ok())
        .ok_or_else(|| PokedexError::MalformedResourceUrl {
            url: url.to_string(),
        })
}
