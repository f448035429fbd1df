//! HTTP client adapter and one fetch function per upstream resource.

use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, Url,
};
use serde::de::DeserializeOwned;

use crate::{
    cli::types::{PageRequest, PokemonRef},
    config::DexConfig,
    pokeapi::types::{
        AbilityPayload, EvolutionChainPayload, PokemonListPayload, PokemonPayload,
        SpeciesPayload, TypePayload,
    },
    PokedexError, Result,
};


/// Base path of the public PokeAPI v2.
pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

const USER_AGENT: &str = concat!("pokedex/", env!("CARGO_PKG_VERSION"));

/// Thin GET/JSON wrapper around a base URL.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
}

impl PokeApiClient {
    /// Build a client for `base_url` (no trailing slash required).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &DexConfig) -> Result<Self> {
        Self::new(config.base_url.as_str())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}/{segments...}`, each segment percent-encoded on its own.
    ///
    /// A `/`, `?` or `#` inside a segment stays inside it, so a lookup key
    /// can never reach a different endpoint.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| PokedexError::Config {
            message: format!("invalid base URL {}: {}", self.base_url, e),
        })?;
        url.path_segments_mut()
            .map_err(|_| PokedexError::Config {
                message: format!("base URL cannot take a path: {}", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `{base_url}/{segments...}` and decode the body.
    ///
    /// Non-2xx statuses become [`crate::PokedexError::Http`].
    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        debug!("GET {} {:?}", url, query);

        let body = self
            .http
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }

    /// `GET /pokemon/{id|name}`
    pub async fn fetch_pokemon(&self, pokemon: &PokemonRef) -> Result<PokemonPayload> {
        self.get_json(&["pokemon", &pokemon.as_path_segment()], &[])
            .await
    }

    /// `GET /pokemon-species/{id}`
    pub async fn fetch_species(&self, id: u32) -> Result<SpeciesPayload> {
        self.get_json(&["pokemon-species", &id.to_string()], &[])
            .await
    }

    /// `GET /evolution-chain/{id}`
    pub async fn fetch_evolution_chain(&self, id: u32) -> Result<EvolutionChainPayload> {
        self.get_json(&["evolution-chain", &id.to_string()], &[])
            .await
    }

    /// `GET /pokemon?offset&limit`
    pub async fn fetch_pokemon_page(&self, page: PageRequest) -> Result<PokemonListPayload> {
        let query = [
            ("offset", page.offset.to_string()),
            ("limit", page.limit.to_string()),
        ];
        self.get_json(&["pokemon"], &query).await
    }

    /// `GET /type/{id}`
    pub async fn fetch_type(&self, id: u32) -> Result<TypePayload> {
        self.get_json(&["type", &id.to_string()], &[]).await
    }

    /// `GET /ability/{id}`
    pub async fn fetch_ability(&self, id: u32) -> Result<AbilityPayload> {
        self.get_json(&["ability", &id.to_string()], &[]).await
    }
}
