//! Page windows for table footers.
//!
//! A page window is what a back-office table needs under its rows: the
//! "Showing X to Y of Z results" range and the strip of page-number
//! controls, compressed with ellipses once there are more than 7 pages.
//!
//! # Strip Layout
//!
//! | Pages | Current page     | Strip                         |
//! |-------|------------------|-------------------------------|
//! | ≤ 7   | any              | `1 2 3 4 5 6 7`               |
//! | > 7   | `p <= 3`         | `1 2 3 ... N`                 |
//! | > 7   | `p >= N - 2`     | `1 ... N-2 N-1 N`             |
//! | > 7   | otherwise        | `1 ... p-1 p p+1 ... N`       |
//!
//! # Example
//!
//! ```
//! use backoffice_paging::{PageToken, compute_page_window};
//!
//! let window = compute_page_window(166, 10, 5);
//! let strip: Vec<String> = window.tokens.iter().map(PageToken::to_string).collect();
//! assert_eq!(strip, ["1", "...", "9", "10", "11", "...", "34"]);
//! assert!(window.has_prev() && window.has_next());
//! ```
//!
//! # Recovery
//!
//! Inputs are never rejected. A non-positive page size becomes 1, a
//! negative total becomes 0, and an out-of-range page is used as given
//! (see [`clamp_page`] for navigation).

mod memo;
mod page_window;
mod request;
mod token;

pub use memo::WindowMemo;
pub use page_window::{PageWindow, clamp_page, compute_page_window};
pub use request::{PageRequest, RequestError, parse_lenient};
pub use token::{PageToken, page_tokens};
