//! Command implementations for the Pokédex CLI

pub mod info;
pub mod list;
pub mod quiz;
pub mod types;

use serde::Serialize;

use crate::{cli::GlobalArgs, config::DexConfig, Language, PokeApiClient, Result};

/// Resources every command needs: the API client, the display language and
/// the output mode.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub client: PokeApiClient,
    pub language: Language,
    pub as_json: bool,
}

impl CommandContext {
    /// Resolve configuration from the global flags and build the client.
    pub fn new(global: GlobalArgs) -> Result<Self> {
        let config = DexConfig::resolve(global.base_url, global.language)?;
        Self::from_config(&config, global.json)
    }

    pub fn from_config(config: &DexConfig, as_json: bool) -> Result<Self> {
        Ok(Self {
            client: PokeApiClient::from_config(config)?,
            language: config.language.clone(),
            as_json,
        })
    }

    /// Print `value` as pretty JSON, or as the text `render` produces.
    pub fn emit<T: Serialize>(&self, value: &T, render: impl FnOnce(&T) -> String) -> Result<()> {
        if self.as_json {
            println!("{}", serde_json::to_string_pretty(value)?); // tarpaulin::skip
        } else {
            println!("{}", render(value)); // tarpaulin::skip
        }
        Ok(())
    }
}
