//! Client configuration: base URL and display language.
//!
//! Resolution order, later wins:
//! 1. built-in defaults (public PokeAPI, Korean)
//! 2. `<config_dir>/pokedex/config.json`, if present
//! 3. `POKEDEX_API_BASE_URL` / `POKEDEX_LANGUAGE`
//! 4. explicit CLI flags

use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use crate::{cli::types::Language, pokeapi::POKEAPI_BASE_URL, PokedexError, Result};

pub const BASE_URL_ENV_VAR: &str = "POKEDEX_API_BASE_URL";
pub const LANGUAGE_ENV_VAR: &str = "POKEDEX_LANGUAGE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DexConfig {
    pub base_url: String,
    pub language: Language,
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_BASE_URL.to_string(),
            language: Language::default(),
        }
    }
}

/// Partial config as stored on disk; missing keys keep the previous layer.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    base_url: Option<String>,
    language: Option<Language>,
}

/// Path: ~/.config/pokedex/config.json
pub fn config_file_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("pokedex").join("config.json")
}

/// Try to read a file into a String
fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

impl DexConfig {
    /// Overlay the JSON file at `path`. A missing file is not an error; a
    /// malformed one is.
    pub fn with_file(mut self, path: &Path) -> Result<Self> {
        let Some(contents) = try_read_to_string(path) else {
            return Ok(self);
        };
        debug!("Loading config from {}", path.display());

        let file: ConfigFile = serde_json::from_str(&contents)?;
        if let Some(base_url) = file.base_url {
            self.base_url = base_url;
        }
        if let Some(language) = file.language {
            self.language = language;
        }
        Ok(self)
    }

    /// Overlay `POKEDEX_API_BASE_URL` and `POKEDEX_LANGUAGE`.
    pub fn with_env(mut self) -> Result<Self> {
        if let Ok(base_url) = std::env::var(BASE_URL_ENV_VAR) {
            if !base_url.trim().is_empty() {
                self.base_url = base_url;
            }
        }
        if let Ok(language) = std::env::var(LANGUAGE_ENV_VAR) {
            self.language = language.parse()?;
        }
        Ok(self)
    }

    /// Overlay explicit overrides (CLI flags).
    pub fn with_overrides(mut self, base_url: Option<String>, language: Option<Language>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(language) = language {
            self.language = language;
        }
        self
    }

    /// Full resolution: defaults, config file, environment, then overrides.
    pub fn resolve(base_url: Option<String>, language: Option<Language>) -> Result<Self> {
        Self::default()
            .with_file(&config_file_path())?
            .with_env()?
            .with_overrides(base_url, language)
            .validated()
    }

    /// Reject base URLs the HTTP client cannot use.
    pub fn validated(self) -> Result<Self> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(PokedexError::Config {
                message: format!("base URL must be http(s): {}", self.base_url),
            });
        }
        Ok(self)
    }
}
