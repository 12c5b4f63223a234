//! Text rendering of a table footer.

use backoffice_paging::{PAGE_SIZE_OPTIONS, PageWindow};
use miniserde::json::{Array, Number, Object, Value};

const PREV: &str = "‹";
const NEXT: &str = "›";

/// The control strip: `‹ 1 ... 9 [10] 11 ... 34 ›`.
///
/// The current page is bracketed. Arrows only appear when they would do something.
pub fn strip(window: &PageWindow) -> String {
    let mut parts = Vec::with_capacity(window.tokens.len() + 2);
    if window.has_prev() {
        parts.push(PREV.to_string());
    }
    for &token in &window.tokens {
        parts.push(match token.page() {
            Some(n) if window.is_current(token) => format!("[{n}]"),
            _ => token.to_string(),
        });
    }
    if window.has_next() {
        parts.push(NEXT.to_string());
    }
    parts.join(" ")
}

/// Summary line followed by the strip.
pub fn footer(window: &PageWindow) -> String {
    format!("{}\n{}", window.summary(), strip(window))
}

/// The page-size selector, current size bracketed.
///
/// A stored size that is not one of the standard options is appended.
pub fn size_options(current: u64) -> String {
    let mut sizes = PAGE_SIZE_OPTIONS.to_vec();
    if !sizes.contains(&current) {
        sizes.push(current);
        sizes.sort_unstable();
    }
    sizes
        .iter()
        .map(|&s| {
            if s == current {
                format!("[{s}]")
            } else {
                s.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `{"pageSize":N}`.
pub fn size_json(size: u64) -> String {
    let mut obj = Object::new();
    obj.insert("pageSize".to_string(), Value::Number(Number::U64(size)));
    miniserde::json::to_string(&Value::Object(obj))
}

/// `{"options":[...],"pageSize":N}`.
pub fn size_options_json(current: u64) -> String {
    let mut options = Array::new();
    for size in PAGE_SIZE_OPTIONS {
        options.push(Value::Number(Number::U64(size)));
    }
    let mut obj = Object::new();
    obj.insert("options".to_string(), Value::Array(options));
    obj.insert("pageSize".to_string(), Value::Number(Number::U64(current)));
    miniserde::json::to_string(&Value::Object(obj))
}
