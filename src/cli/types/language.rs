//! Locale codes used to pick localized upstream entries.

use crate::error::{PokedexError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language code used when no localized entry matches the requested one.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Type-safe wrapper for upstream language codes (`ko`, `en`, `ja-Hrkt`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language(String);

impl Language {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self("ko".to_string())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Language {
    type Err = PokedexError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(PokedexError::Config {
                message: format!("invalid language code '{}'", s),
            });
        }
        Ok(Self(code.to_string()))
    }
}
