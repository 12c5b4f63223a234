//! User preferences that outlive a session.
//!
//! Currently this is only the page size shared by every table. The value is
//! read once at startup through a [`PreferenceStore`] and handed to the
//! window computation as a plain `limit`.
//!
//! | Store           | Lifetime         |
//! |-----------------|------------------|
//! | [`MemoryStore`] | current process  |
//! | [`FileStore`]   | survives restart |

mod page_size;
mod store;

pub use page_size::PageSizePreference;
pub use store::{FileStore, MemoryStore, PreferenceStore};

use std::fmt;
use std::path::{Path, PathBuf};

/// Errors raised by preference stores.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PrefsError {
    /// Reading or writing the backing file failed.
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// OS error description.
        reason: String,
    },
    /// The backing file is not a JSON object.
    Corrupt {
        /// The unreadable file.
        path: PathBuf,
    },
    /// A page size of zero or less was requested.
    InvalidPageSize(i64),
    /// The store cannot be reached at all.
    Unavailable(String),
}

impl PrefsError {
    pub(crate) fn io(path: &Path, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }
}

impl fmt::Display for PrefsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, reason } => write!(f, "{}: {reason}", path.display()),
            Self::Corrupt { path } => {
                write!(f, "{}: preference file is not a JSON object", path.display())
            },
            Self::InvalidPageSize(size) => {
                write!(f, "invalid page size {size} (must be at least 1)")
            },
            Self::Unavailable(reason) => write!(f, "preference store unavailable: {reason}"),
        }
    }
}

impl std::error::Error for PrefsError {}
