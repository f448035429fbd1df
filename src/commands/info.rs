//! Single-pokemon detail command

use std::fmt::Write;

use crate::{dex::get_pokemon_info, models::PokemonInfo, PokemonRef, Result};

use super::CommandContext;

/// Handle `pokedex info`
pub async fn handle_info(ctx: &CommandContext, pokemon: &PokemonRef) -> Result<()> {
    let info = get_pokemon_info(&ctx.client, pokemon, &ctx.language).await;
    ctx.emit(&info, render_pokemon)
}

/// Detail view of one pokemon.
pub fn render_pokemon(info: &PokemonInfo) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "No.{:04} {} ({})", info.id, info.name, info.genus);
    let types: Vec<&str> = info.type_list.iter().map(|t| t.name.as_str()).collect();
    let _ = writeln!(out, "  Types:     {}", types.join(" / "));
    let _ = writeln!(out, "  Height:    {} m", info.height);
    let _ = writeln!(out, "  Weight:    {} kg", info.weight);
    let _ = writeln!(out, "  Abilities: {}", info.ability_list.join(", "));
    let _ = writeln!(out, "  {}", info.flavor);

    if !info.evolution_list.is_empty() {
        let chain: Vec<String> = info
            .evolution_list
            .iter()
            .map(|stage| format!("{}{}", "  ".repeat(stage.stage as usize), stage.name))
            .collect();
        let _ = writeln!(out, "  Evolution:");
        for line in chain {
            let _ = writeln!(out, "    {}", line);
        }
    }

    if !info.image.is_empty() {
        let _ = writeln!(out, "  Image:     {}", info.image);
    }
    if !info.shiny.is_empty() {
        let _ = writeln!(out, "  Shiny:     {}", info.shiny);
    }

    out.trim_end().to_string()
}

/// One line per pokemon, for listings.
pub fn render_summary(info: &PokemonInfo) -> String {
    let types: Vec<&str> = info.type_list.iter().map(|t| t.name.as_str()).collect();
    format!("No.{:04} {:<12} {}", info.id, info.name, types.join("/"))
}
