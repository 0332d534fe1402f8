//! Store configuration.

use std::path::{Path, PathBuf};

/// Environment variable consulted by [`StoreConfig::from_env`].
pub const DATA_PATH_ENV: &str = "STOCKBOOK_DATA_PATH";

/// Backing path used when [`DATA_PATH_ENV`] is unset.
pub const DEFAULT_DATA_PATH: &str = "inventory_data.json";

/// How the JSON document is laid out on disk. Both read back identically.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum JsonLayout {
    /// Indented, one field per line.
    #[default]
    Pretty,
    /// Single line, no whitespace.
    Compact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    path: PathBuf,
    layout: JsonLayout,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            layout: JsonLayout::default(),
        }
    }

    /// Build a config whose backing path comes from `STOCKBOOK_DATA_PATH`.
    pub fn from_env() -> Self {
        Self::from_var(std::env::var(DATA_PATH_ENV).ok())
    }

    /// Build a config from the raw value of `STOCKBOOK_DATA_PATH`, if any.
    pub fn from_var(value: Option<String>) -> Self {
        let path = value.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| {
            tracing::warn!("{DATA_PATH_ENV} not set; using default {DEFAULT_DATA_PATH}");
            DEFAULT_DATA_PATH.to_string()
        });
        Self::new(path)
    }

    pub fn with_layout(mut self, layout: JsonLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn layout(&self) -> JsonLayout {
        self.layout
    }
}
