//! Upstream payload shapes for the PokeAPI v2 endpoints we consume.
//!
//! Only the fields the lookup pipeline reads are modelled; everything else in
//! the upstream JSON is ignored by serde.

use serde::{Deserialize, Serialize};


/// A `{name, url}` pair; the trailing path segment of `url` is the resource id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Reference without a name, as used by `evolution_chain`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiResource {
    pub url: String,
}

/// `GET /pokemon/{id|name}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PokemonPayload {
    pub id: u32,
    pub name: String,
    /// Decimetres.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    pub species: NamedResource,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
    #[serde(default)]
    pub abilities: Vec<PokemonAbilitySlot>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PokemonTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PokemonAbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    pub slot: u8,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
    #[serde(default)]
    pub versions: VersionSprites,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ArtworkSprites,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VersionSprites {
    #[serde(rename = "generation-v", default)]
    pub generation_v: GenerationV,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenerationV {
    #[serde(rename = "black-white", default)]
    pub black_white: BlackWhite,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BlackWhite {
    #[serde(default)]
    pub animated: ArtworkSprites,
}

/// Localized name entry shared by species, types and abilities.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalizedName {
    pub name: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
    pub version: Option<NamedResource>,
}

/// `GET /pokemon-species/{id}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpeciesPayload {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<LocalizedName>,
    #[serde(default)]
    pub genera: Vec<Genus>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    pub evolution_chain: Option<ApiResource>,
}

/// `GET /evolution-chain/{id}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EvolutionChainPayload {
    pub id: u32,
    pub chain: ChainLink,
}

/// One node of the recursive evolution tree.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub is_baby: bool,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// `GET /type/{id}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypePayload {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<LocalizedName>,
    #[serde(default)]
    pub pokemon: Vec<TypePokemonSlot>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypePokemonSlot {
    pub slot: u8,
    pub pokemon: NamedResource,
}

/// `GET /ability/{id}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AbilityPayload {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<LocalizedName>,
}

/// `GET /pokemon?offset&limit`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PokemonListPayload {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}
