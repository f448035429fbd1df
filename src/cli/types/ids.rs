//! Identifier types for Pokédex lookups.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{PokedexError, Result};

/// A pokemon lookup key: either a national dex number or an API name.
///
/// The upstream `/pokemon/{id|name}` endpoint accepts both, so callers
/// rarely need to care which one they hold.
///
/// # Examples
///
/// ```rust
/// use pokedex::PokemonRef;
///
/// let by_id: PokemonRef = "25".parse().unwrap();
/// assert_eq!(by_id, PokemonRef::Id(25));
///
/// let by_name: PokemonRef = "Pikachu".parse().unwrap();
/// assert_eq!(by_name.to_string(), "pikachu");
///
/// assert!("../type/10".parse::<PokemonRef>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PokemonRef {
    Id(u32),
    Name(String),
}

impl PokemonRef {
    /// The path segment used in `/pokemon/{segment}`.
    pub fn as_path_segment(&self) -> String {
        self.to_string()
    }
}

impl From<u32> for PokemonRef {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for PokemonRef {
    fn from(name: &str) -> Self {
        match name.trim().parse::<u32>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Name(name.trim().to_lowercase()),
        }
    }
}

impl fmt::Display for PokemonRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokemonRef::Id(id) => write!(f, "{}", id),
            PokemonRef::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Parsing rejects input that cannot be a single API name: empty input,
/// dot segments, and path, query or fragment delimiters.
impl FromStr for PokemonRef {
    type Err = PokedexError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let malformed = trimmed.is_empty()
            || trimmed == "."
            || trimmed == ".."
            || trimmed
                .chars()
                .any(|c| matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace());

        if malformed {
            return Err(PokedexError::InvalidPokemonName {
                name: s.to_string(),
            });
        }
        Ok(Self::from(trimmed))
    }
}
