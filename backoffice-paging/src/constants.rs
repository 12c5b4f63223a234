//! Centralized constants for the backoffice-paging crate.
//!
//! Window thresholds, page-size defaults and time helpers live here so the
//! strip layout and the preference service agree on the same numbers.
//!
//! # Environment Variables
//!
//! | Variable                       | Default | Description                          |
//! |--------------------------------|---------|--------------------------------------|
//! | `BACKOFFICE_DEFAULT_PAGE_SIZE` | 10      | Page size used when none is stored   |
//! | `BACKOFFICE_LOG`               | `info`  | Minimum log level (see [`crate::log`]) |

use std::sync::OnceLock;

// ============================================================================
// WINDOW LAYOUT
// ============================================================================

/// Largest page count rendered in full, without any ellipsis.
pub const FULL_STRIP_MAX_PAGES: u64 = 7;

/// Pages `1..=EDGE_ZONE` (and the last `EDGE_ZONE`) use the compact 5-token strip.
pub const EDGE_ZONE: u64 = 3;

/// Text of the ellipsis token, both in `Display` and in JSON output.
pub const ELLIPSIS: &str = "...";

// ============================================================================
// PAGE SIZE
// ============================================================================

/// Page size substituted for a non-positive or unparsable `limit`.
pub const FALLBACK_LIMIT: u64 = 1;

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZE_OPTIONS: [u64; 5] = [5, 10, 20, 50, 100];

/// Preference key the page size is stored under.
pub const PAGE_SIZE_KEY: &str = "page_size";

const DEFAULT_PAGE_SIZE: u64 = 10;

static DEFAULT_PAGE_SIZE_CACHE: OnceLock<u64> = OnceLock::new();

/// Returns the page size used when no preference has been stored.
///
/// Reads `BACKOFFICE_DEFAULT_PAGE_SIZE` on first call and caches it for the
/// lifetime of the process. Zero or unparsable values fall back to 10.
#[inline]
pub fn default_page_size() -> u64 {
    *DEFAULT_PAGE_SIZE_CACHE.get_or_init(|| {
        std::env::var("BACKOFFICE_DEFAULT_PAGE_SIZE")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    })
}

// ============================================================================
// TIME CONSTANTS
// ============================================================================

/// Seconds in a day (24 * 60 * 60).
pub const SECONDS_PER_DAY: u64 = 86400;

/// Seconds in an hour (60 * 60).
pub const SECONDS_PER_HOUR: u64 = 3600;

/// Seconds in a minute.
pub const SECONDS_PER_MINUTE: u64 = 60;
