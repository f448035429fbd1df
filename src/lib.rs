//! Pokédex Library
//!
//! Looks up pokemon on PokeAPI and reshapes the upstream payloads into the
//! view models a Pokédex front end renders: detail cards, paginated
//! listings, type-filtered listings and quiz rounds.
//!
//! ## Features
//!
//! - **Detail lookup**: species, evolution chain, types and abilities fanned out concurrently
//! - **Listings**: paginated "all pokemon" and per-type browsing
//! - **Quiz**: random animated sprite with a flavor-text hint
//! - **Localization**: any PokeAPI language code, falling back to English
//! - **UI state**: type filter toggles and the infinite-scroll trigger
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pokedex::{dex::get_pokemon_info, Language, PokeApiClient, PokemonRef};
//!
//! # async fn example() -> pokedex::Result<()> {
//! let client = PokeApiClient::new(pokedex::pokeapi::POKEAPI_BASE_URL)?;
//! let info = get_pokemon_info(&client, &PokemonRef::from("pikachu"), &Language::default()).await;
//!
//! println!("{} {}kg", info.name, info.weight);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the client at a mirror, or change the display language:
//! ```bash
//! export POKEDEX_API_BASE_URL=http://localhost:8000/api/v2
//! export POKEDEX_LANGUAGE=en
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod dex;
pub mod error;
pub mod models;
pub mod pokeapi;
pub mod scroll;
pub mod search;

// Re-export commonly used types
pub use cli::types::{Language, PageRequest, PokemonRef, PokemonType};
pub use config::DexConfig;
pub use error::{PokedexError, Result};
pub use models::{PokemonInfo, PokemonListPage, QuizHint, TypeFilteredResult};
pub use pokeapi::PokeApiClient;
