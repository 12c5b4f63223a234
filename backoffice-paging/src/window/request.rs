//! Normalized pagination inputs.

use super::page_window::PageWindow;
use crate::constants::FALLBACK_LIMIT;
use miniserde::json::{Number, Object, Value as JsonValue};
use std::fmt;

/// Pagination inputs after invalid values have been recovered.
///
/// - `total` is never negative
/// - `limit` is at least 1
/// - `page` is kept as supplied
///
/// # Example
///
/// ```
/// use backoffice_paging::PageRequest;
///
/// let req = PageRequest::from_query("166", "10", "abc");
/// assert_eq!(req.limit, 1);
///
/// let req = PageRequest::new(166, 10, 5);
/// assert_eq!(req.query_range(), (45, 49));
/// assert_eq!(req.window().total_pages, 34);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct PageRequest {
    /// Total number of items.
    pub total: u64,
    /// Requested page, possibly out of range.
    pub page: i64,
    /// Page size.
    pub limit: u64,
}

/// Error returned when a JSON request cannot be read at all.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RequestError {
    /// Invalid JSON syntax.
    InvalidJson,
    /// The document is valid JSON but not an object.
    ExpectedObject,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson => write!(f, "invalid JSON in pagination request"),
            Self::ExpectedObject => write!(f, "pagination request must be a JSON object"),
        }
    }
}

impl std::error::Error for RequestError {}

impl PageRequest {
    /// Normalize raw inputs: negative `total` becomes 0, non-positive `limit` becomes 1.
    #[must_use]
    pub fn new(total: i64, page: i64, limit: i64) -> Self {
        Self {
            total: u64::try_from(total).unwrap_or(0),
            page,
            limit: u64::try_from(limit)
                .ok()
                .filter(|&l| l > 0)
                .unwrap_or(FALLBACK_LIMIT),
        }
    }

    /// Normalize query-string style inputs.
    ///
    /// Unparsable values are recovered: `total` to 0, `page` to 1, `limit` to 1.
    #[must_use]
    pub fn from_query(total: &str, page: &str, limit: &str) -> Self {
        Self::new(
            parse_lenient(total).unwrap_or(0),
            parse_lenient(page).unwrap_or(1),
            parse_lenient(limit).unwrap_or(0),
        )
    }

    /// Parse `{"total": .., "page": .., "limit": ..}`.
    ///
    /// Fields may be numbers or numeric strings. Missing or non-numeric fields
    /// are recovered like [`from_query`](Self::from_query); fractional numbers
    /// are truncated. Only unreadable JSON or a non-object document is an error.
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        let value: JsonValue =
            miniserde::json::from_str(json).map_err(|_| RequestError::InvalidJson)?;
        let JsonValue::Object(obj) = value else {
            return Err(RequestError::ExpectedObject);
        };
        Ok(Self::new(
            int_field(&obj, "total").unwrap_or(0),
            int_field(&obj, "page").unwrap_or(1),
            int_field(&obj, "limit").unwrap_or(0),
        ))
    }

    /// Compute the window for this request.
    #[must_use]
    pub fn window(self) -> PageWindow {
        PageWindow::from_request(self)
    }

    /// Zero-based inclusive row range `(from, to)` for the backend query.
    ///
    /// Pages below 1 are read as page 1. Saturates instead of overflowing.
    #[must_use]
    pub fn query_range(&self) -> (u64, u64) {
        let from = self.offset();
        (from, from.saturating_add(self.limit - 1))
    }

    /// Number of rows skipped before this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        let page = u64::try_from(self.page).unwrap_or(1).max(1);
        (page - 1).saturating_mul(self.limit)
    }
}

/// Read a number the way [`PageRequest::from_query`] does.
///
/// Surrounding whitespace is ignored and finite fractions are truncated.
/// Anything else, including NaN and infinities, is `None`.
///
/// ```
/// use backoffice_paging::parse_lenient;
///
/// assert_eq!(parse_lenient(" 05 "), Some(5));
/// assert_eq!(parse_lenient("5.9"), Some(5));
/// assert_eq!(parse_lenient("five"), None);
/// ```
#[must_use]
pub fn parse_lenient(s: &str) -> Option<i64> {
    let s = s.trim();
    s.parse::<i64>()
        .ok()
        .or_else(|| s.parse::<f64>().ok().and_then(float_to_int))
}

#[allow(clippy::cast_possible_truncation)] // `as` saturates out-of-range floats
fn float_to_int(f: f64) -> Option<i64> {
    f.is_finite().then(|| f.trunc() as i64)
}

fn int_field(obj: &Object, key: &str) -> Option<i64> {
    match obj.get(key)? {
        JsonValue::Number(Number::I64(i)) => Some(*i),
        JsonValue::Number(Number::U64(u)) => Some(i64::try_from(*u).unwrap_or(i64::MAX)),
        JsonValue::Number(Number::F64(f)) => float_to_int(*f),
        JsonValue::String(s) => parse_lenient(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes() {
        let req = PageRequest::new(-5, -2, 0);
        assert_eq!(req.total, 0);
        assert_eq!(req.page, -2);
        assert_eq!(req.limit, 1);
    }

    #[test]
    fn test_from_query_numeric() {
        let req = PageRequest::from_query("166", "10", "5");
        assert_eq!(req, PageRequest::new(166, 10, 5));
    }

    #[test]
    fn test_from_query_garbage() {
        let req = PageRequest::from_query("lots", "", "NaN");
        assert_eq!(req.total, 0);
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, 1);
    }

    #[test]
    fn test_from_query_trims_and_truncates() {
        let req = PageRequest::from_query(" 40 ", "2.9", "7.5");
        assert_eq!(req.total, 40);
        assert_eq!(req.page, 2);
        assert_eq!(req.limit, 7);
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(parse_lenient("05"), Some(5));
        assert_eq!(parse_lenient("5.0"), Some(5));
        assert_eq!(parse_lenient("-2"), Some(-2));
        assert_eq!(parse_lenient("NaN"), None);
        assert_eq!(parse_lenient(""), None);
    }

    #[test]
    fn test_from_query_infinite_limit() {
        assert_eq!(PageRequest::from_query("10", "1", "inf").limit, 1);
        assert_eq!(PageRequest::from_query("10", "1", "-inf").limit, 1);
    }

    #[test]
    fn test_from_json() {
        let req = PageRequest::from_json(r#"{"total": 166, "page": 10, "limit": 5}"#).unwrap();
        assert_eq!(req, PageRequest::new(166, 10, 5));
    }

    #[test]
    fn test_from_json_lenient_fields() {
        let req = PageRequest::from_json(r#"{"total": "45", "page": 8.0, "limit": null}"#).unwrap();
        assert_eq!(req.total, 45);
        assert_eq!(req.page, 8);
        assert_eq!(req.limit, 1);

        let req = PageRequest::from_json("{}").unwrap();
        assert_eq!(req, PageRequest::new(0, 1, 1));

        let req = PageRequest::from_json(r#"{"total": -3, "page": -1, "limit": -9}"#).unwrap();
        assert_eq!(req, PageRequest::new(0, -1, 1));
    }

    #[test]
    fn test_from_json_errors() {
        assert_eq!(
            PageRequest::from_json("{total: 1"),
            Err(RequestError::InvalidJson)
        );
        assert_eq!(
            PageRequest::from_json("[1, 2, 3]"),
            Err(RequestError::ExpectedObject)
        );
    }

    #[test]
    fn test_query_range() {
        assert_eq!(PageRequest::new(166, 1, 5).query_range(), (0, 4));
        assert_eq!(PageRequest::new(166, 3, 10).query_range(), (20, 29));
        assert_eq!(PageRequest::new(166, 0, 10).query_range(), (0, 9));
        assert_eq!(PageRequest::new(166, -7, 10).offset(), 0);
    }

    #[test]
    fn test_query_range_saturates() {
        let req = PageRequest::new(1, i64::MAX, i64::MAX);
        assert_eq!(req.query_range(), (u64::MAX, u64::MAX));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            RequestError::ExpectedObject.to_string(),
            "pagination request must be a JSON object"
        );
    }
}
