//! Single-pokemon lookup.

use log::{debug, error};

use crate::{
    cli::types::{Language, PokemonRef},
    models::PokemonInfo,
    pokeapi::{
        extract::{
            flatten_evolution_chain, get_flavor_text, get_images, get_measurements,
            get_pokemon_genus, get_pokemon_name,
        },
        resolve::{get_abilities, get_evolution_list, get_pokemon_types},
        resource_id_from_url, PokeApiClient,
    },
    PokedexError, Result,
};

/// Build a full [`PokemonInfo`], failing on the first error anywhere.
///
/// pokemon → species → evolution chain are fetched in sequence since each
/// id comes from the previous payload; types, abilities and evolution stages
/// then resolve concurrently.
pub async fn try_get_pokemon_info(
    client: &PokeApiClient,
    pokemon: &PokemonRef,
    language: &Language,
) -> Result<PokemonInfo> {
    debug!("Looking up pokemon {}", pokemon);

    let pokemon = client.fetch_pokemon(pokemon).await?;
    let species = client
        .fetch_species(resource_id_from_url(&pokemon.species.url)?)
        .await?;

    let chain_ref = species
        .evolution_chain
        .as_ref()
        .ok_or(PokedexError::MissingField {
            field: "evolution_chain",
        })?;
    let chain = client
        .fetch_evolution_chain(resource_id_from_url(&chain_ref.url)?)
        .await?;
    let nodes = flatten_evolution_chain(&chain.chain)?;

    let (type_list, ability_list, evolution_list) = futures::try_join!(
        get_pokemon_types(client, &pokemon.types, language),
        get_abilities(client, &pokemon.abilities, language),
        get_evolution_list(client, &nodes, language),
    )?;

    let images = get_images(&pokemon);
    let (weight, height) = get_measurements(&pokemon);

    Ok(PokemonInfo {
        id: pokemon.id,
        weight,
        height,
        name: get_pokemon_name(&species, language),
        genus: get_pokemon_genus(&species, language),
        flavor: get_flavor_text(&species, language),
        type_list,
        image: images.image,
        shiny: images.shiny,
        ability_list,
        evolution_list,
    })
}

/// Build a full [`PokemonInfo`], or the sentinel record if anything fails.
///
/// Partial results are never returned: a single failed ability lookup
/// discards the whole record.
pub async fn get_pokemon_info(
    client: &PokeApiClient,
    pokemon: &PokemonRef,
    language: &Language,
) -> PokemonInfo {
    match try_get_pokemon_info(client, pokemon, language).await {
        Ok(info) => info,
        Err(e) => {
            error!("Lookup of pokemon {} failed: {}", pokemon, e);
            PokemonInfo::unknown()
        }
    }
}
