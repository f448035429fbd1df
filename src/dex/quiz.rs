//! Loading placeholder and quiz rounds.

use log::{debug, warn};
use rand::Rng;

use crate::{
    cli::types::{Language, PokemonRef},
    models::QuizHint,
    pokeapi::{
        extract::{get_animated_image, get_flavor_text, get_images, get_pokemon_name},
        PokeApiClient,
    },
    PokedexError, Result,
};

use super::log_failure;

/// Highest national dex number with a species entry.
pub const MAX_POKEMON_ID: u32 = 1025;

/// Loading placeholders are drawn from generations I to V.
pub const LOADING_MAX_ID: u32 = 649;

/// Uniform id in `1..=max`.
pub fn random_pokemon_id<R: Rng + ?Sized>(rng: &mut R, max: u32) -> u32 {
    rng.random_range(1..=max.max(1))
}

/// Default artwork of one pokemon; skips species, types and abilities.
pub async fn get_pokemon_image(client: &PokeApiClient, id: u32) -> Result<String> {
    let pokemon = client.fetch_pokemon(&PokemonRef::Id(id)).await?;
    Ok(get_images(&pokemon).image)
}

/// Artwork of a random pokemon from generations I to V for the loading screen.
pub async fn get_loading_pokemon_image(client: &PokeApiClient) -> Result<String> {
    let id = random_pokemon_id(&mut rand::rng(), LOADING_MAX_ID);
    debug!("Loading image picked pokemon {}", id);

    log_failure("loading image", get_pokemon_image(client, id).await)
}

/// One quiz round for pokemon `id`: animated sprite, answer and flavor-text hint.
///
/// Pokemon and species are fetched together. When the species has no flavor
/// text in `language` it is fetched a second time before giving up with an
/// empty hint.
pub async fn get_pokemon_random_image(
    client: &PokeApiClient,
    id: u32,
    language: &Language,
) -> Result<QuizHint> {
    let result = async {
        let pokemon_ref = PokemonRef::Id(id);
        let (pokemon, mut species) = futures::try_join!(
            client.fetch_pokemon(&pokemon_ref),
            client.fetch_species(id),
        )?;

        let mut hint = get_flavor_text(&species, language);
        if hint.is_empty() {
            warn!("No flavor text for species {}, fetching again", id);
            species = client.fetch_species(id).await?;
            hint = get_flavor_text(&species, language);
        }

        Ok::<_, PokedexError>(QuizHint {
            pokemon_random_image: get_animated_image(&pokemon),
            pokemon_name: get_pokemon_name(&species, language),
            pokemon_hint: hint,
        })
    }
    .await;

    log_failure("quiz round", result)
}
