//! Search section state: query text, type filter toggles and panel visibility.
//!
//! Rendering is left to the front end; this is the state it renders from.
//! Nothing here touches the network.

use serde::Serialize;

use crate::{cli::types::PokemonType, PokedexError, Result};

/// Alpha used for the button drop shadows.
pub const SHADOW_ALPHA: f32 = 0.6;

/// One button of the type filter grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeButton {
    pub kind: PokemonType,
    pub label: &'static str,
    pub color: &'static str,
    pub shadow: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSection {
    active_types: Vec<PokemonType>,
    panel_open: bool,
    query: String,
}

impl SearchSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active filters, in the order they were switched on.
    pub fn active_types(&self) -> &[PokemonType] {
        &self.active_types
    }

    pub fn is_active(&self, kind: PokemonType) -> bool {
        self.active_types.contains(&kind)
    }

    /// Toggle `kind` in the active filter list.
    pub fn handle_type_button(&mut self, kind: PokemonType) {
        if self.is_active(kind) {
            self.active_types.retain(|t| *t != kind);
            return;
        }
        self.active_types.push(kind);
    }

    /// Clear every active filter. Query and panel state are kept.
    pub fn handle_reset_button(&mut self) {
        self.active_types.clear();
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn switch_toggle(&mut self) {
        self.panel_open = !self.panel_open;
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.panel_open {
            "타입 접기"
        } else {
            "타입 열기"
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The filter grid. Empty while the panel is closed.
    pub fn type_buttons(&self) -> Vec<TypeButton> {
        if !self.panel_open {
            return Vec::new();
        }

        PokemonType::ALL
            .into_iter()
            .map(|kind| TypeButton {
                kind,
                label: kind.korean_name(),
                color: kind.color(),
                // Table colors are always valid hex.
                shadow: hex_to_rgba(kind.color(), SHADOW_ALPHA).unwrap_or_default(),
                active: self.is_active(kind),
            })
            .collect()
    }
}

/// `#RRGGBB` or `#RGB` to a CSS `rgba(r, g, b, a)` string.
pub fn hex_to_rgba(hex: &str, alpha: f32) -> Result<String> {
    let invalid = || PokedexError::InvalidColor {
        value: hex.to_string(),
    };

    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(invalid()),
    };

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
    Ok(format!(
        "rgba({}, {}, {}, {})",
        channel(0)?,
        channel(2)?,
        channel(4)?,
        alpha.clamp(0.0, 1.0)
    ))
}
