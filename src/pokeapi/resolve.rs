//! Fan-out resolution of reference lists into localized values.
//!
//! Each function issues one request per reference concurrently and joins the
//! results. Output order follows the input references, never completion
//! order. The first failed request fails the whole call.

use futures::future::try_join_all;

use crate::{
    cli::types::{Language, PokemonRef},
    models::{EvolutionStage, TypeBadge},
    pokeapi::{
        extract::{ability_name, get_images, get_pokemon_name, type_badge, EvolutionNode},
        http::PokeApiClient,
        types::{PokemonAbilitySlot, PokemonTypeSlot},
        url::resource_id_from_url,
    },
    PokedexError, Result,
};

/// Resolve type slots to localized badges, in reference order.
pub async fn get_pokemon_types(
    client: &PokeApiClient,
    slots: &[PokemonTypeSlot],
    language: &Language,
) -> Result<Vec<TypeBadge>> {
    try_join_all(slots.iter().map(|slot| async move {
        let id = resource_id_from_url(&slot.type_ref.url)?;
        let payload = client.fetch_type(id).await?;
        Ok::<_, PokedexError>(type_badge(&payload, language))
    }))
    .await
}

/// Resolve ability slots to localized names, in reference order.
pub async fn get_abilities(
    client: &PokeApiClient,
    slots: &[PokemonAbilitySlot],
    language: &Language,
) -> Result<Vec<String>> {
    try_join_all(slots.iter().map(|slot| async move {
        let id = resource_id_from_url(&slot.ability.url)?;
        let payload = client.fetch_ability(id).await?;
        Ok::<_, PokedexError>(ability_name(&payload, language))
    }))
    .await
}

/// Resolve flattened evolution nodes to named, imaged stages.
///
/// Each node needs its species (for the localized name) and its default
/// pokemon (for the artwork); both requests run concurrently.
pub async fn get_evolution_list(
    client: &PokeApiClient,
    nodes: &[EvolutionNode],
    language: &Language,
) -> Result<Vec<EvolutionStage>> {
    try_join_all(nodes.iter().map(|node| async move {
        let pokemon_ref = PokemonRef::Id(node.species_id);
        let (species, pokemon) = futures::try_join!(
            client.fetch_species(node.species_id),
            client.fetch_pokemon(&pokemon_ref),
        )?;

        let name = get_pokemon_name(&species, language);
        Ok::<_, PokedexError>(EvolutionStage {
            id: node.species_id,
            name: if name.is_empty() {
                node.species_name.clone()
            } else {
                name
            },
            image: get_images(&pokemon).image,
            stage: node.stage,
        })
    }))
    .await
}
