//! The shared page-size preference.

use super::{PreferenceStore, PrefsError};
use crate::constants::{PAGE_SIZE_KEY, default_page_size};
use crate::log;

/// Page size shared by every table of the console.
///
/// Read once at startup, written whenever the user picks a new size.
/// Tables receive the size as a plain `limit` via [`get`](Self::get).
///
/// ```
/// use backoffice_paging::{MemoryStore, PageSizePreference, PreferenceStore};
///
/// let store = MemoryStore::with_values([("page_size", "20")]);
/// let mut pref = PageSizePreference::load(&store);
/// assert_eq!(pref.get(), 20);
///
/// pref.set(50).unwrap();
/// assert_eq!(store.load("page_size").unwrap().as_deref(), Some("50"));
/// ```
#[derive(Debug)]
pub struct PageSizePreference<S> {
    store: S,
    current: u64,
    fallback: u64,
}

impl<S: PreferenceStore> PageSizePreference<S> {
    /// Read the stored size, falling back to [`default_page_size`].
    pub fn load(store: S) -> Self {
        Self::load_or(store, default_page_size())
    }

    /// Read the stored size, falling back to `fallback`.
    ///
    /// Missing values fall back silently. Unreadable or invalid values are
    /// logged as warnings and also fall back. A `fallback` of 0 is read as 1.
    pub fn load_or(store: S, fallback: u64) -> Self {
        let fallback = fallback.max(1);
        let current = match store.load(PAGE_SIZE_KEY) {
            Ok(Some(raw)) => match parse_page_size(&raw) {
                Some(size) => size,
                None => {
                    log!(warn, "stored page size is invalid, using default",
                        value: raw, default: fallback);
                    fallback
                },
            },
            Ok(None) => fallback,
            Err(e) => {
                log!(warn, "could not read page size preference, using default",
                    error: e, default: fallback);
                fallback
            },
        };
        Self {
            store,
            current,
            fallback,
        }
    }

    /// The page size to pass as `limit`.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.current
    }

    /// The size used when nothing valid is stored.
    #[must_use]
    pub const fn fallback(&self) -> u64 {
        self.fallback
    }

    /// Change and persist the page size.
    ///
    /// Non-positive sizes are rejected and leave the preference unchanged.
    /// If persisting fails the new size is still used for this session.
    pub fn set(&mut self, size: i64) -> Result<u64, PrefsError> {
        let size = valid_page_size(size).ok_or(PrefsError::InvalidPageSize(size))?;
        self.current = size;
        self.store.save(PAGE_SIZE_KEY, &size.to_string())?;
        log!(debug, "page size preference saved", size: size);
        Ok(size)
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }
}

/// Sizes `set` accepts: `1..=i64::MAX`. Stored values are held to the same range.
fn valid_page_size(size: i64) -> Option<u64> {
    u64::try_from(size).ok().filter(|&s| s > 0)
}

fn parse_page_size(raw: &str) -> Option<u64> {
    raw.trim().parse::<i64>().ok().and_then(valid_page_size)
}
