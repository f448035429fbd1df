//! Paginated listing commands

use crate::{
    dex::{get_pokemon_all_list, get_pokemon_type_list},
    models::{PokemonListPage, TypeFilteredResult},
    PageRequest, PokemonType, Result,
};

use super::{info::render_summary, CommandContext};

/// Handle `pokedex list`
pub async fn handle_list(ctx: &CommandContext, page: PageRequest) -> Result<()> {
    let listing = get_pokemon_all_list(&ctx.client, page, &ctx.language).await?;
    ctx.emit(&listing, render_list_page)
}

/// Handle `pokedex type`
pub async fn handle_type_list(
    ctx: &CommandContext,
    kind: PokemonType,
    page: PageRequest,
) -> Result<()> {
    let result = get_pokemon_type_list(&ctx.client, kind.id(), page, &ctx.language).await?;
    ctx.emit(&result, |r| render_type_page(kind, page, r))
}

pub fn render_list_page(listing: &PokemonListPage) -> String {
    let mut lines: Vec<String> = listing.pokemon_list.iter().map(render_summary).collect();
    if listing.has_more {
        let next = PageRequest::new(listing.offset, listing.limit).next();
        lines.push(format!(
            "-- more: --offset {} --limit {}",
            next.offset, next.limit
        ));
    }
    lines.join("\n")
}

pub fn render_type_page(kind: PokemonType, page: PageRequest, result: &TypeFilteredResult) -> String {
    let total = result.pokemon_id_all_list.len();
    let mut lines = vec![format!("{} ({}): {} pokemon", kind, kind.api_name(), total)];
    lines.extend(result.pokemon_list.iter().map(render_summary));
    if page.has_more(total) {
        let next = page.next();
        lines.push(format!(
            "-- more: --offset {} --limit {}",
            next.offset, next.limit
        ));
    }
    lines.join("\n")
}
