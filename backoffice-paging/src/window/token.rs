//! Page tokens and the strip selection rule.

use crate::constants::{EDGE_ZONE, ELLIPSIS, FULL_STRIP_MAX_PAGES};
use miniserde::json::{Number, Value as JsonValue};
use std::fmt;

/// One entry of the page-number control strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PageToken {
    /// A clickable page number (1-based).
    Page(u64),
    /// One or more omitted pages. Never clickable.
    Ellipsis,
}

impl PageToken {
    /// The page number, or `None` for an ellipsis.
    #[must_use]
    pub const fn page(self) -> Option<u64> {
        match self {
            Self::Page(n) => Some(n),
            Self::Ellipsis => None,
        }
    }

    /// Whether this token is an ellipsis marker.
    #[must_use]
    pub const fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis)
    }

    /// JSON form: the page number, or the string `"..."`.
    #[must_use]
    pub fn to_json(self) -> JsonValue {
        match self {
            Self::Page(n) => JsonValue::Number(Number::U64(n)),
            Self::Ellipsis => JsonValue::String(ELLIPSIS.to_string()),
        }
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

impl From<u64> for PageToken {
    fn from(page: u64) -> Self {
        Self::Page(page)
    }
}

/// Select the tokens shown for `page` out of `total_pages`.
///
/// - up to 7 pages: every page
/// - `page <= 3`: `1 2 3 ... N`
/// - `page >= N - 2`: `1 ... N-2 N-1 N`
/// - otherwise: `1 ... p-1 p p+1 ... N`
///
/// `page` may lie outside `1..=total_pages`; it then falls into the nearest
/// edge zone. A `total_pages` of 0 is treated as 1.
#[must_use]
pub fn page_tokens(total_pages: u64, page: i64) -> Vec<PageToken> {
    let n = total_pages.max(1);
    if n <= FULL_STRIP_MAX_PAGES {
        return (1..=n).map(PageToken::Page).collect();
    }

    let p = i128::from(page);
    let last = i128::from(n);
    let edge = i128::from(EDGE_ZONE);

    if p <= edge {
        let mut tokens: Vec<PageToken> = (1..=EDGE_ZONE).map(PageToken::Page).collect();
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(n));
        tokens
    } else if p >= last - (edge - 1) {
        let mut tokens = vec![PageToken::Page(1), PageToken::Ellipsis];
        tokens.extend((n - (EDGE_ZONE - 1)..=n).map(PageToken::Page));
        tokens
    } else {
        // EDGE_ZONE < page < n - 2 here, so the cast is lossless.
        let p = page.unsigned_abs();
        vec![
            PageToken::Page(1),
            PageToken::Ellipsis,
            PageToken::Page(p - 1),
            PageToken::Page(p),
            PageToken::Page(p + 1),
            PageToken::Ellipsis,
            PageToken::Page(n),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::{Ellipsis, Page};

    #[test]
    fn test_small_counts_list_every_page() {
        assert_eq!(page_tokens(1, 1), vec![Page(1)]);
        assert_eq!(page_tokens(4, 2), vec![Page(1), Page(2), Page(3), Page(4)]);
        assert_eq!(page_tokens(7, 7).len(), 7);
    }

    #[test]
    fn test_zero_pages_treated_as_one() {
        assert_eq!(page_tokens(0, 1), vec![Page(1)]);
    }

    #[test]
    fn test_near_start() {
        let expected = vec![Page(1), Page(2), Page(3), Ellipsis, Page(34)];
        for page in 1..=3 {
            assert_eq!(page_tokens(34, page), expected, "page {page}");
        }
    }

    #[test]
    fn test_near_end() {
        let expected = vec![Page(1), Ellipsis, Page(32), Page(33), Page(34)];
        for page in 32..=34 {
            assert_eq!(page_tokens(34, page), expected, "page {page}");
        }
    }

    #[test]
    fn test_middle() {
        assert_eq!(
            page_tokens(34, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(34)]
        );
    }

    #[test]
    fn test_first_and_last_middle_pages() {
        assert_eq!(
            page_tokens(34, 4),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(34)]
        );
        assert_eq!(
            page_tokens(34, 31),
            vec![Page(1), Ellipsis, Page(30), Page(31), Page(32), Ellipsis, Page(34)]
        );
    }

    #[test]
    fn test_eight_pages_has_no_middle_zone_overlap() {
        // n = 8: pages 4 and 5 are the only middle pages.
        assert_eq!(
            page_tokens(8, 5),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(8)]
        );
        assert_eq!(
            page_tokens(8, 6),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8)]
        );
    }

    #[test]
    fn test_out_of_range_pages_use_edge_zones() {
        assert_eq!(page_tokens(34, 0), page_tokens(34, 1));
        assert_eq!(page_tokens(34, -50), page_tokens(34, 1));
        assert_eq!(page_tokens(34, 99), page_tokens(34, 34));
        assert_eq!(page_tokens(34, i64::MAX), page_tokens(34, 34));
        assert_eq!(page_tokens(34, i64::MIN), page_tokens(34, 1));
    }

    #[test]
    fn test_huge_page_count() {
        let tokens = page_tokens(u64::MAX, i64::MAX);
        assert_eq!(tokens.first(), Some(&Page(1)));
        assert_eq!(tokens.last(), Some(&Page(u64::MAX)));
        assert_eq!(tokens.len(), 7);
    }

    #[test]
    fn test_display_and_json() {
        assert_eq!(Page(12).to_string(), "12");
        assert_eq!(Ellipsis.to_string(), "...");
        assert_eq!(miniserde::json::to_string(&Page(3).to_json()), "3");
        assert_eq!(miniserde::json::to_string(&Ellipsis.to_json()), "\"...\"");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Page(4).page(), Some(4));
        assert_eq!(Ellipsis.page(), None);
        assert!(Ellipsis.is_ellipsis());
        assert_eq!(PageToken::from(9), Page(9));
    }
}
