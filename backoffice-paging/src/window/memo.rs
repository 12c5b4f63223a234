//! Single-entry memo for re-rendered table footers.

use super::page_window::{PageWindow, compute_page_window};

/// Caches the last computed window, keyed by the raw `(total, page, limit)` inputs.
///
/// A footer re-rendered with unchanged inputs gets the cached window back.
///
/// ```
/// use backoffice_paging::WindowMemo;
///
/// let mut memo = WindowMemo::new();
/// assert_eq!(memo.get(166, 10, 5).total_pages, 34);
/// memo.get(166, 10, 5);
/// assert_eq!(memo.recomputations(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WindowMemo {
    last: Option<((i64, i64, i64), PageWindow)>,
    recomputations: u64,
}

impl WindowMemo {
    /// Create an empty memo.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: None,
            recomputations: 0,
        }
    }

    /// Window for these inputs, recomputed only if they changed since the last call.
    pub fn get(&mut self, total: i64, page: i64, limit: i64) -> &PageWindow {
        let key = (total, page, limit);
        let hit = self.last.as_ref().is_some_and(|(cached, _)| *cached == key);
        if !hit {
            self.recomputations += 1;
            self.last = None;
        }
        let (_, window) = self
            .last
            .get_or_insert_with(|| (key, compute_page_window(total, page, limit)));
        window
    }

    /// How many times a window was actually computed.
    #[must_use]
    pub const fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Drop the cached window.
    pub fn clear(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_inputs_hit_cache() {
        let mut memo = WindowMemo::new();
        let first = memo.get(45, 8, 5).clone();
        let second = memo.get(45, 8, 5).clone();
        assert_eq!(first, second);
        assert_eq!(memo.recomputations(), 1);
    }

    #[test]
    fn test_changed_input_recomputes() {
        let mut memo = WindowMemo::new();
        memo.get(45, 8, 5);
        assert_eq!(memo.get(45, 9, 5).start, 41);
        memo.get(50, 9, 5);
        assert_eq!(memo.recomputations(), 3);
    }

    #[test]
    fn test_cached_window_matches_direct_computation() {
        let mut memo = WindowMemo::new();
        memo.get(166, 10, 5);
        assert_eq!(memo.get(166, 10, 5), &compute_page_window(166, 10, 5));
    }

    #[test]
    fn test_alternating_inputs_return_fresh_windows() {
        let mut memo = WindowMemo::new();
        assert_eq!(memo.get(166, 1, 5).start, 1);
        assert_eq!(memo.get(166, 2, 5).start, 6);
        assert_eq!(memo.get(166, 1, 5).start, 1);
        assert_eq!(memo.get(166, 1, 5).start, 1);
        assert_eq!(memo.recomputations(), 3);
    }

    #[test]
    fn test_clear() {
        let mut memo = WindowMemo::new();
        memo.get(10, 1, 5);
        memo.clear();
        memo.get(10, 1, 5);
        assert_eq!(memo.recomputations(), 2);
    }
}
