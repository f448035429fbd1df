//! Elemental pokemon types and their display colors.

use crate::error::PokedexError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The eighteen elemental types.
///
/// Each type carries its upstream id (`/type/{id}`), its API name, the Korean
/// display name shown on the filter buttons and a fixed badge color. The color
/// table is static; it is never fetched.
///
/// # Examples
///
/// ```rust
/// use pokedex::PokemonType;
///
/// let fire: PokemonType = "fire".parse().unwrap();
/// assert_eq!(fire.id(), 10);
/// assert_eq!(fire.color(), "#EE8130");
/// assert_eq!(fire.to_string(), "불꽃");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl PokemonType {
    /// All types in filter-grid order.
    pub const ALL: [PokemonType; 18] = [
        PokemonType::Normal,
        PokemonType::Fire,
        PokemonType::Water,
        PokemonType::Electric,
        PokemonType::Grass,
        PokemonType::Ice,
        PokemonType::Fighting,
        PokemonType::Poison,
        PokemonType::Ground,
        PokemonType::Flying,
        PokemonType::Psychic,
        PokemonType::Bug,
        PokemonType::Rock,
        PokemonType::Ghost,
        PokemonType::Dragon,
        PokemonType::Dark,
        PokemonType::Steel,
        PokemonType::Fairy,
    ];

    /// Upstream resource id for `/type/{id}`.
    pub fn id(&self) -> u32 {
        match self {
            PokemonType::Normal => 1,
            PokemonType::Fighting => 2,
            PokemonType::Flying => 3,
            PokemonType::Poison => 4,
            PokemonType::Ground => 5,
            PokemonType::Rock => 6,
            PokemonType::Bug => 7,
            PokemonType::Ghost => 8,
            PokemonType::Steel => 9,
            PokemonType::Fire => 10,
            PokemonType::Water => 11,
            PokemonType::Grass => 12,
            PokemonType::Electric => 13,
            PokemonType::Psychic => 14,
            PokemonType::Ice => 15,
            PokemonType::Dragon => 16,
            PokemonType::Dark => 17,
            PokemonType::Fairy => 18,
        }
    }

    /// Upstream API name (`fire`, `water`, ...).
    pub fn api_name(&self) -> &'static str {
        match self {
            PokemonType::Normal => "normal",
            PokemonType::Fire => "fire",
            PokemonType::Water => "water",
            PokemonType::Electric => "electric",
            PokemonType::Grass => "grass",
            PokemonType::Ice => "ice",
            PokemonType::Fighting => "fighting",
            PokemonType::Poison => "poison",
            PokemonType::Ground => "ground",
            PokemonType::Flying => "flying",
            PokemonType::Psychic => "psychic",
            PokemonType::Bug => "bug",
            PokemonType::Rock => "rock",
            PokemonType::Ghost => "ghost",
            PokemonType::Dragon => "dragon",
            PokemonType::Dark => "dark",
            PokemonType::Steel => "steel",
            PokemonType::Fairy => "fairy",
        }
    }

    /// Korean display name used on the filter buttons.
    pub fn korean_name(&self) -> &'static str {
        match self {
            PokemonType::Normal => "노말",
            PokemonType::Fire => "불꽃",
            PokemonType::Water => "물",
            PokemonType::Electric => "전기",
            PokemonType::Grass => "풀",
            PokemonType::Ice => "얼음",
            PokemonType::Fighting => "격투",
            PokemonType::Poison => "독",
            PokemonType::Ground => "땅",
            PokemonType::Flying => "비행",
            PokemonType::Psychic => "에스퍼",
            PokemonType::Bug => "벌레",
            PokemonType::Rock => "바위",
            PokemonType::Ghost => "고스트",
            PokemonType::Dragon => "드래곤",
            PokemonType::Dark => "악",
            PokemonType::Steel => "강철",
            PokemonType::Fairy => "페어리",
        }
    }

    /// Badge color as `#RRGGBB`.
    pub fn color(&self) -> &'static str {
        match self {
            PokemonType::Normal => "#A8A77A",
            PokemonType::Fire => "#EE8130",
            PokemonType::Water => "#6390F0",
            PokemonType::Electric => "#F7D02C",
            PokemonType::Grass => "#7AC74C",
            PokemonType::Ice => "#96D9D6",
            PokemonType::Fighting => "#C22E28",
            PokemonType::Poison => "#A33EA1",
            PokemonType::Ground => "#E2BF65",
            PokemonType::Flying => "#A98FF3",
            PokemonType::Psychic => "#F95587",
            PokemonType::Bug => "#A6B91A",
            PokemonType::Rock => "#B6A136",
            PokemonType::Ghost => "#735797",
            PokemonType::Dragon => "#6F35FC",
            PokemonType::Dark => "#705746",
            PokemonType::Steel => "#B7B7CE",
            PokemonType::Fairy => "#D685AD",
        }
    }

    /// Look a type up by its upstream API name.
    pub fn from_api_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.api_name() == name)
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.korean_name())
    }
}

impl FromStr for PokemonType {
    type Err = PokedexError;

    /// Accepts the API name (any case) or the Korean display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        let lower = needle.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.api_name() == lower || t.korean_name() == needle)
            .ok_or_else(|| PokedexError::UnknownType {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_cover_one_through_eighteen() {
        let ids: HashSet<u32> = PokemonType::ALL.iter().map(|t| t.id()).collect();
        assert_eq!(ids, (1..=18).collect::<HashSet<u32>>());
    }

    #[test]
    fn test_parse_api_and_korean_names() {
        assert_eq!("Water".parse::<PokemonType>().unwrap(), PokemonType::Water);
        assert_eq!("에스퍼".parse::<PokemonType>().unwrap(), PokemonType::Psychic);
        assert!("shadow".parse::<PokemonType>().is_err());
    }

    #[test]
    fn test_from_api_name_is_exact() {
        assert_eq!(PokemonType::from_api_name("dark"), Some(PokemonType::Dark));
        assert_eq!(PokemonType::from_api_name("Dark"), None);
        assert_eq!(PokemonType::from_api_name("unknown"), None);
    }

    #[test]
    fn test_colors_are_hex() {
        for t in PokemonType::ALL {
            let c = t.color();
            assert_eq!(c.len(), 7, "{:?}", t);
            assert!(c.starts_with('#'));
            assert!(c[1..].chars().all(|ch| ch.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_display_is_korean() {
        assert_eq!(PokemonType::Grass.to_string(), "풀");
        assert_eq!(PokemonType::Dragon.to_string(), "드래곤");
    }
}
