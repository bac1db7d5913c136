//! Persisted board options.
//!
//! The grouping and ordering choices survive restarts through a tiny
//! key-value contract ([`OptionStorage`]). Two entries are used,
//! `groupOption` and `orderOption`, each holding the canonical spelling of a
//! dimension. Missing or unreadable entries fall back to the defaults
//! (`Status`, `Priority`).

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TrellisError};
use crate::paths::state_path;
use crate::types::{GroupDimension, OrderDimension, ViewOptions};
use crate::utils::{ensure_parent_dir, format_relative_path};

pub const GROUP_OPTION_KEY: &str = "groupOption";
pub const ORDER_OPTION_KEY: &str = "orderOption";

/// Minimal string key-value storage for persisted options
pub trait OptionStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory storage; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }
}

impl OptionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backed by a flat JSON object on disk.
///
/// A missing file reads as empty. Every `set` rewrites the whole file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the default state file under the trellis root
    pub fn at_default_path() -> Self {
        Self::new(state_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            TrellisError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to read board state at {}: {}",
                    format_relative_path(&self.path),
                    e
                ),
            ))
        })?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl OptionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries().unwrap_or_else(|e| {
            tracing::warn!(
                path = %self.path.display(),
                "discarding unreadable board state: {e}"
            );
            BTreeMap::new()
        });
        entries.insert(key.to_string(), value.to_string());

        ensure_parent_dir(&self.path)?;
        let content = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, content).map_err(|e| {
            TrellisError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to write board state at {}: {}",
                    format_relative_path(&self.path),
                    e
                ),
            ))
        })?;
        Ok(())
    }
}

/// Holds the active [`ViewOptions`] and writes every change through to
/// storage before it becomes visible.
#[derive(Debug, Clone)]
pub struct OptionStore<S: OptionStorage> {
    storage: S,
    current: ViewOptions,
}

impl<S: OptionStorage> OptionStore<S> {
    /// Open a store, restoring options from `storage`.
    pub fn open(storage: S) -> Self {
        let current = read_options(&storage);
        Self { storage, current }
    }

    /// Re-read the persisted options and make them current.
    pub fn load(&mut self) -> ViewOptions {
        self.current = read_options(&self.storage);
        self.current
    }

    pub fn current(&self) -> ViewOptions {
        self.current
    }

    /// Persist a new grouping dimension, then make it current.
    ///
    /// On a storage error the current options are left unchanged.
    pub fn set_group(&mut self, group: GroupDimension) -> Result<ViewOptions> {
        self.storage.set(GROUP_OPTION_KEY, &group.to_string())?;
        self.current.group = group;
        tracing::debug!(%group, "group option updated");
        Ok(self.current)
    }

    /// Persist a new ordering dimension, then make it current.
    pub fn set_order(&mut self, order: OrderDimension) -> Result<ViewOptions> {
        self.storage.set(ORDER_OPTION_KEY, &order.to_string())?;
        self.current.order = order;
        tracing::debug!(%order, "order option updated");
        Ok(self.current)
    }

    /// Like [`set_group`](Self::set_group) for raw input. Values outside the
    /// enumeration are rejected without touching storage.
    pub fn set_group_str(&mut self, value: &str) -> Result<ViewOptions> {
        let group: GroupDimension = value.parse()?;
        self.set_group(group)
    }

    pub fn set_order_str(&mut self, value: &str) -> Result<ViewOptions> {
        let order: OrderDimension = value.parse()?;
        self.set_order(order)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn read_options(storage: &impl OptionStorage) -> ViewOptions {
    ViewOptions {
        group: read_dimension(storage, GROUP_OPTION_KEY),
        order: read_dimension(storage, ORDER_OPTION_KEY),
    }
}

fn read_dimension<T>(storage: &impl OptionStorage, key: &str) -> T
where
    T: std::str::FromStr<Err = TrellisError> + Default,
{
    match storage.get(key) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!(key, "ignoring stored option: {e}");
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(key, "failed to read stored option: {e}");
            T::default()
        }
    }
}
