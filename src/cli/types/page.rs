//! Pagination window for list lookups.

use serde::{Deserialize, Serialize};

/// Page size used by the list views.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// An `offset`/`limit` pair, as accepted by `GET /pokemon?offset&limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub offset: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    /// The request for the page right after this one.
    pub fn next(&self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.limit),
            limit: self.limit,
        }
    }

    /// Slice `items` to `[offset, offset + limit)`, clamped to its bounds.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.offset as usize).min(items.len());
        let end = start.saturating_add(self.limit as usize).min(items.len());
        &items[start..end]
    }

    /// Whether more items exist after this page in a list of `total` items.
    pub fn has_more(&self, total: usize) -> bool {
        (self.offset as usize).saturating_add(self.limit as usize) < total
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_inside_bounds() {
        let ids: Vec<u32> = (1..=50).collect();
        let page = PageRequest::new(20, 20);
        assert_eq!(page.window(&ids), &ids[20..40]);
    }

    #[test]
    fn test_window_clamps_tail() {
        let ids: Vec<u32> = (1..=25).collect();
        assert_eq!(PageRequest::new(20, 20).window(&ids), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_window_past_end_is_empty() {
        let ids: Vec<u32> = (1..=5).collect();
        assert!(PageRequest::new(40, 20).window(&ids).is_empty());
    }

    #[test]
    fn test_next_and_has_more() {
        let page = PageRequest::default();
        assert_eq!(page.next(), PageRequest::new(20, 20));
        assert!(page.has_more(21));
        assert!(!page.has_more(20));
    }
}
