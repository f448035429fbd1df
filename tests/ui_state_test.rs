//! Integration tests for the search section and infinite-scroll state

use pokedex::{
    scroll::{InfiniteScroll, IntersectionEntry, Viewport},
    search::{hex_to_rgba, SearchSection},
    PageRequest, PokedexError, PokemonType,
};
use std::cell::RefCell;

struct Window {
    y: f64,
}

impl Viewport for Window {
    fn scroll_y(&self) -> f64 {
        self.y
    }

    fn scroll_to(&mut self, y: f64) {
        self.y = y;
    }
}

#[test]
fn test_every_type_toggles_back_to_empty() {
    let mut section = SearchSection::new();
    for kind in PokemonType::ALL {
        section.handle_type_button(kind);
        section.handle_type_button(kind);
    }
    assert!(section.active_types().is_empty());
}

#[test]
fn test_reset_after_arbitrary_toggles() {
    let mut section = SearchSection::new();
    let sequence = [
        PokemonType::Fire,
        PokemonType::Water,
        PokemonType::Fire,
        PokemonType::Steel,
        PokemonType::Fairy,
    ];
    for kind in sequence {
        section.handle_type_button(kind);
    }
    assert_eq!(
        section.active_types(),
        &[PokemonType::Water, PokemonType::Steel, PokemonType::Fairy]
    );

    section.handle_reset_button();
    assert!(section.active_types().is_empty());
}

#[test]
fn test_every_type_color_converts() {
    for kind in PokemonType::ALL {
        let rgba = hex_to_rgba(kind.color(), 0.6).unwrap();
        assert!(rgba.starts_with("rgba(") && rgba.ends_with(", 0.6)"));
    }
}

#[test]
fn test_invalid_color_error() {
    match hex_to_rgba("blue", 1.0) {
        Err(PokedexError::InvalidColor { value }) => assert_eq!(value, "blue"),
        other => panic!("Expected InvalidColor, got {:?}", other),
    }
}

/// Pages through a 45-entry list the way a front end would: save the
/// offset, wait for the sentinel, load, repeat until nothing is left.
#[tokio::test]
async fn test_scroll_pages_until_exhausted() {
    let total = 45;
    let loaded_pages = RefCell::new(vec![PageRequest::default()]);
    let mut window = Window { y: 0.0 };
    let mut scroll = InfiniteScroll::new();
    scroll.observe("pokemon-list-end");

    loop {
        let current = *loaded_pages.borrow().last().unwrap();
        let has_more = Some(current.has_more(total));

        window.y += 500.0;
        scroll.save_scroll_position(&window);
        let saved = window.y;

        let loaded = scroll
            .on_intersection(
                &[IntersectionEntry::intersecting()],
                has_more,
                &mut window,
                || {
                    loaded_pages.borrow_mut().push(current.next());
                    std::future::ready(Ok(()))
                },
            )
            .await;

        if loaded == 0 {
            break;
        }
        assert_eq!(window.y, saved);
    }

    let offsets: Vec<u32> = loaded_pages.borrow().iter().map(|p| p.offset).collect();
    assert_eq!(offsets, vec![0, 20, 40]);
}
