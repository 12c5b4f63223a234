//! # backoffice-paging - Page windows for back-office tables
//!
//! Every list screen of the console (bookings, clients, invoices, payroll,
//! ...) is a paginated table with the same footer: a "Showing X to Y of Z
//! results" line and a strip of page-number controls. This crate computes
//! that footer and keeps the page-size preference shared by all tables.
//!
//! ## Quick Start
//!
//! ```
//! use backoffice_paging::prelude::*;
//!
//! let window = compute_page_window(166, 1, 5);
//! assert_eq!(window.total_pages, 34);
//! assert_eq!(
//!     window.tokens,
//!     [PageToken::Page(1), PageToken::Page(2), PageToken::Page(3), PageToken::Ellipsis, PageToken::Page(34)]
//! );
//! assert_eq!(window.summary(), "Showing 1 to 5 of 166 results");
//! ```
//!
//! ## Backend Queries
//!
//! ```
//! use backoffice_paging::PageRequest;
//!
//! // Lenient parsing of query parameters, then the row range to fetch.
//! let req = PageRequest::from_query("166", "3", "20");
//! assert_eq!(req.query_range(), (40, 59));
//! ```
//!
//! ## Page-Size Preference
//!
//! ```no_run
//! use backoffice_paging::{FileStore, PageSizePreference, compute_page_window};
//!
//! let mut pref = PageSizePreference::load(FileStore::new("prefs.json"));
//! let limit = i64::try_from(pref.get()).unwrap_or(i64::MAX);
//! let window = compute_page_window(166, 1, limit);
//! pref.set(50).ok();
//! ```
//!
//! ## Modules
//!
//! | Module        | Purpose                                             |
//! |---------------|-----------------------------------------------------|
//! | [`window`]    | Page window computation, requests, memo             |
//! | [`prefs`]     | Page-size preference and its stores                 |
//! | [`mod@log`]   | Structured JSON logging to stderr                   |
//! | [`constants`] | Window thresholds and page-size defaults            |

pub mod constants;
pub mod log;
pub mod prefs;
pub mod window;

pub use constants::{PAGE_SIZE_OPTIONS, default_page_size};
pub use prefs::{FileStore, MemoryStore, PageSizePreference, PreferenceStore, PrefsError};
pub use window::{
    PageRequest, PageToken, PageWindow, RequestError, WindowMemo, clamp_page,
    compute_page_window, page_tokens, parse_lenient,
};

/// Prelude module for convenient imports.
///
/// ```
/// use backoffice_paging::prelude::*;
/// let window = PageRequest::new(20, 2, 5).window();
/// assert_eq!(window.tokens.len(), 4);
/// ```
pub mod prelude {
    pub use crate::{
        FileStore, MemoryStore, PAGE_SIZE_OPTIONS, PageRequest, PageSizePreference, PageToken,
        PageWindow, PreferenceStore, PrefsError, RequestError, WindowMemo, clamp_page,
        compute_page_window, default_page_size, page_tokens, parse_lenient,
    };
}

// ============================================================================
// API Contract Tests (compile-time assertions)
// ============================================================================
