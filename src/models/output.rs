//! Output models used for printing and JSON serialization.

use serde::Serialize;

use super::measurement::Measurement;

/// Placeholder used for every localized field of the sentinel record.
pub const UNKNOWN_LABEL: &str = "알 수 없음";

/// A resolved type badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeBadge {
    /// Localized type name.
    pub name: String,
    /// Badge color (`#RRGGBB`).
    pub color: String,
}

/// One stage of a flattened evolution chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvolutionStage {
    /// Species id.
    pub id: u32,
    /// Localized species name.
    pub name: String,
    pub image: String,
    /// Depth in the evolution tree; the base form is 0.
    pub stage: u8,
}

/// Everything shown on a single pokemon card or detail page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonInfo {
    pub id: u32,
    pub weight: Measurement,
    pub height: Measurement,
    pub name: String,
    pub genus: String,
    pub flavor: String,
    pub type_list: Vec<TypeBadge>,
    pub image: String,
    pub shiny: String,
    pub ability_list: Vec<String>,
    pub evolution_list: Vec<EvolutionStage>,
}

impl PokemonInfo {
    /// The sentinel record returned when a lookup fails.
    pub fn unknown() -> Self {
        Self {
            id: 0,
            weight: Measurement::unknown(),
            height: Measurement::unknown(),
            name: UNKNOWN_LABEL.to_string(),
            genus: UNKNOWN_LABEL.to_string(),
            flavor: UNKNOWN_LABEL.to_string(),
            type_list: Vec::new(),
            image: String::new(),
            shiny: String::new(),
            ability_list: Vec::new(),
            evolution_list: Vec::new(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.id == 0
    }
}

/// One page of the "all pokemon" browser.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonListPage {
    pub pokemon_list: Vec<PokemonInfo>,
    pub offset: u32,
    pub limit: u32,
    /// Whether the upstream list has a next page.
    pub has_more: bool,
}

/// One page of a type-filtered listing plus every matching id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeFilteredResult {
    pub pokemon_list: Vec<PokemonInfo>,
    pub pokemon_id_all_list: Vec<u32>,
}

/// A single quiz round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizHint {
    pub pokemon_random_image: String,
    pub pokemon_name: String,
    pub pokemon_hint: String,
}

impl QuizHint {
    /// Case-insensitive, whitespace-trimmed comparison against the answer.
    pub fn is_correct(&self, guess: &str) -> bool {
        let guess = guess.trim();
        !guess.is_empty() && guess.to_lowercase() == self.pokemon_name.trim().to_lowercase()
    }
}
