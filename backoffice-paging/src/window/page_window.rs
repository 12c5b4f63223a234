//! `PageWindow` and the window computation.

use super::request::PageRequest;
use super::token::{PageToken, page_tokens};
use miniserde::json::{Array, Number, Object, Value as JsonValue};

/// Everything a table footer needs to render one page.
///
/// Built by [`compute_page_window`] or [`PageRequest::window`].
///
/// # Example
///
/// ```
/// use backoffice_paging::compute_page_window;
///
/// let window = compute_page_window(166, 10, 5);
/// assert_eq!(window.total_pages, 34);
/// assert_eq!((window.start, window.end), (46, 50));
/// assert_eq!(window.summary(), "Showing 46 to 50 of 166 results");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct PageWindow {
    /// Item count after normalization (never negative).
    pub total: u64,
    /// Requested page, exactly as supplied.
    pub page: i64,
    /// Page size after normalization (at least 1).
    pub limit: u64,
    /// `max(1, ceil(total / limit))`.
    pub total_pages: u64,
    /// 1-based index of the first item shown, or 0 when empty.
    pub start: u64,
    /// 1-based index of the last item shown, or 0 when empty.
    pub end: u64,
    /// Page-number strip, always starting at page 1.
    pub tokens: Vec<PageToken>,
}

/// Compute the page window for raw, possibly invalid inputs.
///
/// A non-positive `limit` becomes 1 and a negative `total` becomes 0.
/// `page` is not clamped: an out-of-range page produces `start`/`end`
/// beyond `total` (or 0 for pages below 1) but never panics.
#[must_use]
pub fn compute_page_window(total: i64, page: i64, limit: i64) -> PageWindow {
    PageRequest::new(total, page, limit).window()
}

/// Clamp a requested page into `1..=total_pages`.
#[must_use]
pub fn clamp_page(page: i64, total_pages: u64) -> u64 {
    let last = total_pages.max(1);
    u64::try_from(page).map_or(1, |p| p.clamp(1, last))
}

impl PageWindow {
    pub(crate) fn from_request(req: PageRequest) -> Self {
        let PageRequest { total, page, limit } = req;
        let total_pages = total.div_ceil(limit).max(1);

        let (start, end) = if total == 0 {
            (0, 0)
        } else {
            let p = i128::from(page);
            let l = i128::from(limit);
            let start = (p - 1) * l + 1;
            let end = (p * l).min(i128::from(total));
            (saturate(start), saturate(end))
        };

        Self {
            total,
            page,
            limit,
            total_pages,
            start,
            end,
            tokens: page_tokens(total_pages, page),
        }
    }

    /// The requested page clamped into `1..=total_pages`.
    #[must_use]
    pub fn current_page(&self) -> u64 {
        clamp_page(self.page, self.total_pages)
    }

    /// Whether a "previous" control should be enabled.
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.current_page() > 1
    }

    /// Whether a "next" control should be enabled.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page() < self.total_pages
    }

    /// Target of the "previous" control, clamped to the valid range.
    #[must_use]
    pub fn prev_page(&self) -> u64 {
        self.current_page().saturating_sub(1).max(1)
    }

    /// Target of the "next" control, clamped to the valid range.
    #[must_use]
    pub fn next_page(&self) -> u64 {
        self.current_page().saturating_add(1).min(self.total_pages)
    }

    /// Whether `token` is the page being displayed.
    #[must_use]
    pub fn is_current(&self, token: PageToken) -> bool {
        token.page().is_some_and(|n| i128::from(n) == i128::from(self.page))
    }

    /// `"Showing {start} to {end} of {total} results"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.start, self.end, self.total
        )
    }

    /// JSON form with camelCase keys and `"..."` for ellipsis tokens.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        let mut obj = Object::new();
        obj.insert("total".to_string(), JsonValue::Number(Number::U64(self.total)));
        obj.insert("page".to_string(), JsonValue::Number(Number::I64(self.page)));
        obj.insert("limit".to_string(), JsonValue::Number(Number::U64(self.limit)));
        obj.insert(
            "totalPages".to_string(),
            JsonValue::Number(Number::U64(self.total_pages)),
        );
        obj.insert("start".to_string(), JsonValue::Number(Number::U64(self.start)));
        obj.insert("end".to_string(), JsonValue::Number(Number::U64(self.end)));
        let mut tokens = Array::new();
        for token in &self.tokens {
            tokens.push(token.to_json());
        }
        obj.insert("pageTokens".to_string(), JsonValue::Array(tokens));
        JsonValue::Object(obj)
    }

    /// Serialized [`to_json`](Self::to_json).
    #[must_use]
    pub fn to_json_string(&self) -> String {
        miniserde::json::to_string(&self.to_json())
    }
}

/// Clamp a wide intermediate into `0..=u64::MAX`.
fn saturate(v: i128) -> u64 {
    u64::try_from(v.max(0)).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::{Ellipsis, Page};

    #[test]
    fn test_basic_window() {
        let w = compute_page_window(20, 2, 5);
        assert_eq!(w.total_pages, 4);
        assert_eq!((w.start, w.end), (6, 10));
        assert_eq!(w.tokens, vec![Page(1), Page(2), Page(3), Page(4)]);
    }

    #[test]
    fn test_partial_last_page() {
        let w = compute_page_window(166, 34, 5);
        assert_eq!((w.start, w.end), (166, 166));
        let w = compute_page_window(23, 3, 10);
        assert_eq!((w.start, w.end), (21, 23));
    }

    #[test]
    fn test_empty_total() {
        let w = compute_page_window(0, 1, 5);
        assert_eq!(w.total_pages, 1);
        assert_eq!((w.start, w.end), (0, 0));
        assert_eq!(w.tokens, vec![Page(1)]);
    }

    #[test]
    fn test_empty_total_ignores_page() {
        let w = compute_page_window(0, 9, 5);
        assert_eq!((w.start, w.end), (0, 0));
    }

    #[test]
    fn test_invalid_limit_becomes_one() {
        for limit in [0, -1, i64::MIN] {
            let w = compute_page_window(3, 2, limit);
            assert_eq!(w.limit, 1);
            assert_eq!(w.total_pages, 3);
            assert_eq!((w.start, w.end), (2, 2));
        }
    }

    #[test]
    fn test_negative_total_becomes_zero() {
        let w = compute_page_window(-40, 1, 5);
        assert_eq!(w.total, 0);
        assert_eq!(w.total_pages, 1);
        assert_eq!((w.start, w.end), (0, 0));
    }

    #[test]
    fn test_page_past_end_is_arithmetic() {
        let w = compute_page_window(20, 6, 5);
        assert_eq!(w.start, 26);
        assert_eq!(w.end, 20);
        assert_eq!(w.tokens, vec![Page(1), Page(2), Page(3), Page(4)]);
    }

    #[test]
    fn test_page_below_one_floors_at_zero() {
        let w = compute_page_window(20, 0, 5);
        assert_eq!((w.start, w.end), (0, 0));
        let w = compute_page_window(20, -3, 5);
        assert_eq!((w.start, w.end), (0, 0));
    }

    #[test]
    fn test_extreme_inputs_saturate() {
        let w = compute_page_window(i64::MAX, i64::MAX, i64::MAX);
        assert_eq!(w.total_pages, 1);
        assert_eq!(w.end, w.total);
        assert!(w.start >= w.end);

        let w = compute_page_window(i64::MAX, i64::MAX, 1);
        assert_eq!(w.start, w.total);
        assert_eq!(w.end, w.total);
    }

    #[test]
    fn test_navigation_helpers() {
        let w = compute_page_window(166, 1, 5);
        assert!(!w.has_prev());
        assert!(w.has_next());
        assert_eq!((w.prev_page(), w.next_page()), (1, 2));

        let w = compute_page_window(166, 34, 5);
        assert!(w.has_prev());
        assert!(!w.has_next());
        assert_eq!((w.prev_page(), w.next_page()), (33, 34));

        let w = compute_page_window(166, 90, 5);
        assert_eq!(w.current_page(), 34);
        assert_eq!(w.prev_page(), 33);
    }

    #[test]
    fn test_single_page_has_no_navigation() {
        let w = compute_page_window(3, 1, 10);
        assert!(!w.has_prev());
        assert!(!w.has_next());
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(-4, 10), 1);
        assert_eq!(clamp_page(0, 10), 1);
        assert_eq!(clamp_page(7, 10), 7);
        assert_eq!(clamp_page(11, 10), 10);
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn test_is_current() {
        let w = compute_page_window(166, 10, 5);
        assert!(w.is_current(Page(10)));
        assert!(!w.is_current(Page(9)));
        assert!(!w.is_current(Ellipsis));
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            compute_page_window(166, 10, 5).summary(),
            "Showing 46 to 50 of 166 results"
        );
        assert_eq!(
            compute_page_window(0, 1, 5).summary(),
            "Showing 0 to 0 of 0 results"
        );
    }

    #[test]
    fn test_json_shape() {
        let json = compute_page_window(166, 10, 5).to_json_string();
        let parsed: JsonValue = miniserde::json::from_str(&json).unwrap();
        let JsonValue::Object(obj) = parsed else {
            panic!("expected object, got {json}");
        };
        assert!(matches!(
            obj.get("totalPages"),
            Some(JsonValue::Number(Number::U64(34)))
        ));
        let Some(JsonValue::Array(tokens)) = obj.get("pageTokens") else {
            panic!("missing pageTokens in {json}");
        };
        assert_eq!(tokens.len(), 7);
        assert!(matches!(tokens.get(1), Some(JsonValue::String(s)) if s == "..."));
    }
}
