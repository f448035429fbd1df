//! Type-safe wrappers and enums for Pokédex lookups.

pub mod ids;
pub mod language;
pub mod page;
pub mod pokemon_type;

pub use ids::PokemonRef;
pub use language::Language;
pub use page::PageRequest;
pub use pokemon_type::PokemonType;
