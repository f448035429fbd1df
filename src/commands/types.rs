//! Type filter grid command

use crate::{
    search::{SearchSection, TypeButton},
    PokemonType, Result,
};

use super::CommandContext;

/// Handle `pokedex types`
pub fn handle_types(ctx: &CommandContext, active: &[PokemonType]) -> Result<()> {
    let section = section_with(active);
    ctx.emit(&section.type_buttons(), |buttons| render_buttons(buttons))
}

/// An open search section with `active` switched on.
pub fn section_with(active: &[PokemonType]) -> SearchSection {
    let mut section = SearchSection::new();
    section.switch_toggle();
    for kind in active {
        if !section.is_active(*kind) {
            section.handle_type_button(*kind);
        }
    }
    section
}

pub fn render_buttons(buttons: &[TypeButton]) -> String {
    buttons
        .iter()
        .map(|b| {
            format!(
                "{} {:<4} {:<9} {} {}",
                if b.active { "*" } else { " " },
                b.label,
                b.kind.api_name(),
                b.color,
                b.shadow
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
