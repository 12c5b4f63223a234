//! Preference persistence backends.

use super::PrefsError;
use crate::log;
use miniserde::json::{Object, Value as JsonValue};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Key-value persistence for user preferences.
///
/// Implementations decide where values live (memory, a file, a browser-style
/// local store). Keys and values are plain strings.
pub trait PreferenceStore {
    /// Read a value. A missing key is `Ok(None)`.
    fn load(&self, key: &str) -> Result<Option<String>, PrefsError>;

    /// Write a value, replacing any previous one.
    fn save(&self, key: &str, value: &str) -> Result<(), PrefsError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn load(&self, key: &str) -> Result<Option<String>, PrefsError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        (**self).save(key, value)
    }
}

/// Preferences that last for the current session only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `(key, value)` pairs.
    #[must_use]
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: RefCell::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a flat JSON object in a file.
///
/// A missing file reads as empty. Saving rewrites the whole file through a
/// sibling temp file and a rename, creating parent directories as needed.
/// Non-string values already in the file are kept on save but read back as
/// `None`. Saving over an unreadable file moves it to `<file>.bak` and starts
/// from an empty object.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by `path`. Nothing is read until the first `load`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<file>.<ext>` next to the backing file.
    fn sibling(&self, ext: &str) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".");
        name.push(ext);
        PathBuf::from(name)
    }

    fn read_object(&self) -> Result<Object, PrefsError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Object::new()),
            Err(e) => return Err(PrefsError::io(&self.path, &e)),
        };
        if text.trim().is_empty() {
            return Ok(Object::new());
        }
        match miniserde::json::from_str::<JsonValue>(&text) {
            Ok(JsonValue::Object(obj)) => Ok(obj),
            _ => Err(PrefsError::Corrupt {
                path: self.path.clone(),
            }),
        }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, PrefsError> {
        let obj = self.read_object()?;
        Ok(match obj.get(key) {
            Some(JsonValue::String(s)) => Some(s.clone()),
            _ => None,
        })
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let mut obj = match self.read_object() {
            Ok(obj) => obj,
            Err(PrefsError::Corrupt { path }) => {
                let backup = self.sibling("bak");
                log!(warn, "preference file unreadable, replacing it",
                    path: path.display(), backup: backup.display());
                std::fs::rename(&path, &backup).map_err(|e| PrefsError::io(&path, &e))?;
                Object::new()
            },
            Err(e) => return Err(e),
        };
        obj.insert(key.to_string(), JsonValue::String(value.to_string()));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PrefsError::io(parent, &e))?;
        }
        let text = miniserde::json::to_string(&JsonValue::Object(obj));
        let tmp = self.sibling("tmp");
        std::fs::write(&tmp, text).map_err(|e| PrefsError::io(&tmp, &e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            PrefsError::io(&self.path, &e)
        })
    }
}
