//! `pagewin.toml` loading.
//!
//! ```toml
//! [paging]
//! default_page_size = 20
//! prefs_file = ".pagewin/prefs.json"
//! ```

use anyhow::{Context, Result};
use backoffice_paging::{FileStore, PageSizePreference, default_page_size};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "pagewin.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub paging: PagingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagingConfig {
    /// Used when no page size has been stored yet.
    pub default_page_size: Option<u64>,
    pub prefs_file: PathBuf,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: None,
            prefs_file: PathBuf::from(".pagewin/prefs.json"),
        }
    }
}

impl Config {
    /// Load `explicit` (must exist) or `pagewin.toml` (may be absent).
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && explicit.is_none() => {
                return Ok(Self::default());
            },
            Err(e) => {
                return Err(e).with_context(|| format!("reading config {}", path.display()));
            },
        };
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(text)?;
        if cfg.paging.default_page_size == Some(0) {
            anyhow::bail!("paging.default_page_size must be at least 1");
        }
        Ok(cfg)
    }

    /// Page size used when nothing valid is stored.
    pub fn fallback_page_size(&self) -> u64 {
        self.paging
            .default_page_size
            .unwrap_or_else(default_page_size)
    }

    /// The page-size preference backed by the configured file.
    pub fn page_size_preference(&self) -> PageSizePreference<FileStore> {
        PageSizePreference::load_or(
            FileStore::new(&self.paging.prefs_file),
            self.fallback_page_size(),
        )
    }
}
