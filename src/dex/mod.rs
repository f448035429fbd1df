//! Lookup aggregation: the operations the UI and the CLI call.
//!
//! Every operation returns [`crate::Result`]. The one exception is
//! [`get_pokemon_info`], which keeps the card-friendly contract of never
//! failing and hands back [`crate::models::PokemonInfo::unknown`] instead.
//! Errors are logged once, at the operation that swallows or returns them.

pub mod info;
pub mod list;
pub mod quiz;

#[cfg(test)]
pub(crate) mod test_support;

pub use info::{get_pokemon_info, try_get_pokemon_info};
pub use list::{get_pokemon_all_list, get_pokemon_type_list};
pub use quiz::{
    get_loading_pokemon_image, get_pokemon_image, get_pokemon_random_image, random_pokemon_id,
    LOADING_MAX_ID, MAX_POKEMON_ID,
};

use log::error;

use crate::Result;

/// Log a failed operation result and pass it through unchanged.
fn log_failure<T>(operation: &str, result: Result<T>) -> Result<T> {
    result.inspect_err(|e| error!("{} failed: {}", operation, e))
}
