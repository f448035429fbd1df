//! Infinite-scroll pagination trigger.
//!
//! A sentinel element sits below the last rendered page. When the front end
//! reports it intersecting the viewport, the next page is loaded and the
//! viewport is put back where it was before the load.

use std::future::Future;

use log::{debug, error};

use crate::Result;

/// Anything with a vertical scroll offset.
pub trait Viewport {
    fn scroll_y(&self) -> f64;
    fn scroll_to(&mut self, y: f64);
}

/// One intersection observation of the sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn intersecting() -> Self {
        Self {
            is_intersecting: true,
        }
    }

    pub fn leaving() -> Self {
        Self {
            is_intersecting: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfiniteScroll {
    saved_offset: f64,
    target: Option<String>,
}

impl InfiniteScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `target`, replacing any previous observation.
    pub fn observe(&mut self, target: impl Into<String>) {
        let target = target.into();
        if let Some(previous) = self.target.replace(target.clone()) {
            debug!("Re-observing scroll sentinel {} (was {})", target, previous);
        }
    }

    pub fn disconnect(&mut self) {
        self.target = None;
    }

    pub fn observed_target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn saved_offset(&self) -> f64 {
        self.saved_offset
    }

    /// Remember where the viewport is, before a load changes the layout.
    pub fn save_scroll_position<V: Viewport + ?Sized>(&mut self, viewport: &V) {
        self.saved_offset = viewport.scroll_y();
    }

    pub fn restore_scroll_position<V: Viewport + ?Sized>(&self, viewport: &mut V) {
        viewport.scroll_to(self.saved_offset);
    }

    /// Handle a batch of intersection entries.
    ///
    /// `load_more` runs once per intersecting entry, and only while
    /// `has_more` is `Some(true)` and a sentinel is observed. After each
    /// successful load the viewport returns to the saved offset. A failed
    /// load is logged and leaves the viewport alone.
    ///
    /// Returns how many loads succeeded.
    pub async fn on_intersection<V, F, Fut>(
        &self,
        entries: &[IntersectionEntry],
        has_more: Option<bool>,
        viewport: &mut V,
        mut load_more: F,
    ) -> usize
    where
        V: Viewport + ?Sized,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        if has_more != Some(true) || self.target.is_none() {
            return 0;
        }

        let mut loaded = 0;
        for _ in entries.iter().filter(|e| e.is_intersecting) {
            match load_more().await {
                Ok(()) => {
                    self.restore_scroll_position(viewport);
                    loaded += 1;
                }
                Err(e) => error!("Loading next page failed: {}", e),
            }
        }
        loaded
    }
}
