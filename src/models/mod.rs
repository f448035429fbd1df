//! View models produced by the lookup pipeline.

pub mod measurement;
pub mod output;

pub use measurement::Measurement;
pub use output::{
    EvolutionStage, PokemonInfo, PokemonListPage, QuizHint, TypeBadge, TypeFilteredResult,
    UNKNOWN_LABEL,
};
