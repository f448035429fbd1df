//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{page::DEFAULT_PAGE_LIMIT, Language, PageRequest, PokemonRef, PokemonType};

/// Options accepted by every subcommand.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Language code for localized names and text (e.g. `ko`, `en`, `ja-Hrkt`).
    #[clap(long, short = 'L', global = true)]
    pub language: Option<Language>,

    /// PokeAPI base URL (or set `POKEDEX_API_BASE_URL`).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,
}

/// Pagination shared by the listing commands.
#[derive(Debug, Args)]
pub struct PageArgs {
    /// Index of the first entry.
    #[clap(long, default_value_t = 0)]
    pub offset: u32,

    /// Entries per page.
    #[clap(long, short, default_value_t = DEFAULT_PAGE_LIMIT)]
    pub limit: u32,
}

impl PageArgs {
    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.offset, self.limit)
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show one pokemon: names, measurements, types, abilities and evolutions.
    Info {
        /// National dex number or English name.
        pokemon: PokemonRef,
    },

    /// Browse every pokemon, one page at a time.
    List {
        #[clap(flatten)]
        page: PageArgs,
    },

    /// Browse pokemon of one type.
    Type {
        /// Type name, in English (`fire`) or Korean (`불꽃`).
        kind: PokemonType,

        #[clap(flatten)]
        page: PageArgs,
    },

    /// Play a "who's that pokemon" round.
    Quiz {
        /// Use this pokemon instead of a random one.
        #[clap(long)]
        id: Option<u32>,
    },

    /// Print the artwork URL of a random pokemon from generations I to V.
    Loading,

    /// Print the type filter grid with its colors.
    Types {
        /// Mark these types as active filters (repeatable).
        #[clap(long = "active", short = 'a')]
        active: Vec<PokemonType>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "pokedex", about = "Pokédex lookups against PokeAPI", version)]
pub struct Pokedex {
    #[clap(flatten)]
    pub global: GlobalArgs,

    #[clap(subcommand)]
    pub command: Commands,
}
