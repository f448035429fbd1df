//! PokeAPI v2 access: HTTP adapter, payload types, projections and fan-out.

pub mod extract;
pub mod http;
pub mod resolve;
pub mod types;
pub mod url;

pub use http::{PokeApiClient, POKEAPI_BASE_URL};
pub use url::resource_id_from_url;
