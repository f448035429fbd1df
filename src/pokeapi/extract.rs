//! Pure projections from upstream payloads to view-model fields.
//!
//! Nothing in here performs I/O. The fan-out half of the pipeline lives in
//! [`crate::pokeapi::resolve`] and feeds its payloads back through these
//! functions.

use crate::{
    cli::types::{language::FALLBACK_LANGUAGE, Language},
    models::{Measurement, TypeBadge},
    pokeapi::{
        types::{
            AbilityPayload, ChainLink, LocalizedName, NamedResource, PokemonPayload,
            SpeciesPayload, TypePayload,
        },
        url::resource_id_from_url,
    },
    PokemonType, Result,
};


/// Default and shiny image URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Images {
    pub image: String,
    pub shiny: String,
}

/// A flattened evolution-tree node before its name and image are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionNode {
    pub species_id: u32,
    pub species_name: String,
    pub stage: u8,
}

/// Pick the entry for `language`, falling back to English.
fn pick_localized<'a, T>(
    entries: &'a [T],
    language: &Language,
    language_of: impl Fn(&T) -> &NamedResource,
) -> Option<&'a T> {
    entries
        .iter()
        .find(|e| language_of(*e).name == language.as_str())
        .or_else(|| {
            entries
                .iter()
                .find(|e| language_of(*e).name == FALLBACK_LANGUAGE)
        })
}

fn localized_name(names: &[LocalizedName], language: &Language) -> Option<String> {
    pick_localized(names, language, |n| &n.language).map(|n| n.name.clone())
}

/// Localized species name, or an empty string.
pub fn get_pokemon_name(species: &SpeciesPayload, language: &Language) -> String {
    localized_name(&species.names, language).unwrap_or_default()
}

/// Localized genus ("씨앗포켓몬"), or an empty string.
pub fn get_pokemon_genus(species: &SpeciesPayload, language: &Language) -> String {
    pick_localized(&species.genera, language, |g| &g.language)
        .map(|g| g.genus.clone())
        .unwrap_or_default()
}

/// Localized flavor text with upstream line breaks collapsed, or an empty string.
pub fn get_flavor_text(species: &SpeciesPayload, language: &Language) -> String {
    pick_localized(&species.flavor_text_entries, language, |e| &e.language)
        .map(|e| normalize_flavor_text(&e.flavor_text))
        .unwrap_or_default()
}

/// Upstream flavor text carries `\n`, form feeds and soft hyphens from the
/// game cartridges.
fn normalize_flavor_text(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c == '\u{c}' || c == '\u{ad}')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Official artwork, falling back to the plain front sprites.
pub fn get_images(pokemon: &PokemonPayload) -> Images {
    let sprites = &pokemon.sprites;
    let artwork = &sprites.other.official_artwork;

    Images {
        image: artwork
            .front_default
            .clone()
            .or_else(|| sprites.front_default.clone())
            .unwrap_or_default(),
        shiny: artwork
            .front_shiny
            .clone()
            .or_else(|| sprites.front_shiny.clone())
            .unwrap_or_default(),
    }
}

/// Generation V animated sprite, falling back to the default image.
pub fn get_animated_image(pokemon: &PokemonPayload) -> String {
    pokemon
        .sprites
        .versions
        .generation_v
        .black_white
        .animated
        .front_default
        .clone()
        .unwrap_or_else(|| get_images(pokemon).image)
}

/// Type badge from a fetched type payload.
///
/// Types outside the static color table (`unknown`, `shadow`) get a neutral grey.
pub fn type_badge(payload: &TypePayload, language: &Language) -> TypeBadge {
    let kind = PokemonType::from_api_name(&payload.name);
    let name = localized_name(&payload.names, language)
        .or_else(|| kind.map(|k| k.korean_name().to_string()))
        .unwrap_or_else(|| payload.name.clone());

    TypeBadge {
        name,
        color: kind.map_or("#68A090", |k| k.color()).to_string(),
    }
}

/// Localized ability name, falling back to the API name.
pub fn ability_name(payload: &AbilityPayload, language: &Language) -> String {
    localized_name(&payload.names, language).unwrap_or_else(|| payload.name.clone())
}

/// Flatten an evolution tree depth-first, parents before children.
pub fn flatten_evolution_chain(root: &ChainLink) -> Result<Vec<EvolutionNode>> {
    fn walk(link: &ChainLink, stage: u8, out: &mut Vec<EvolutionNode>) -> Result<()> {
        out.push(EvolutionNode {
            species_id: resource_id_from_url(&link.species.url)?,
            species_name: link.species.name.clone(),
            stage,
        });
        for next in &link.evolves_to {
            walk(next, stage.saturating_add(1), out)?;
        }
        Ok(())
    }

    let mut nodes = Vec::new();
    walk(root, 0, &mut nodes)?;
    Ok(nodes)
}

/// Ids of every pokemon listed under a type, in upstream order.
pub fn get_type_list(payload: &TypePayload) -> Result<Vec<u32>> {
    payload
        .pokemon
        .iter()
        .map(|slot| resource_id_from_url(&slot.pokemon.url))
        .collect()
}

/// Weight and height in display units.
pub fn get_measurements(pokemon: &PokemonPayload) -> (Measurement, Measurement) {
    (
        Measurement::from_raw(pokemon.weight),
        Measurement::from_raw(pokemon.height),
    )
}
