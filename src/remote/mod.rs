//! Loading the board data.
//!
//! The board is fed by a single fetch returning `{ tickets, users }`. The
//! fetch itself sits behind [`TicketSource`] so the derivation code never
//! depends on transport details; [`HttpSource`] talks to the real service
//! and [`FileSource`]/[`StaticSource`] serve local data.

pub mod http;

use std::future::Future;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, TrellisError};
use crate::types::{Snapshot, Ticket, User};
use crate::utils::format_relative_path;

pub use http::HttpSource;

/// Common interface for board data providers
pub trait TicketSource: Send + Sync {
    /// Fetch the full ticket and user collections
    fn fetch(&self) -> impl Future<Output = Result<Snapshot>> + Send;

    /// Short description used in log messages
    fn describe(&self) -> String;
}

/// Serves a fixed snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    snapshot: Snapshot,
}

impl StaticSource {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

impl TicketSource for StaticSource {
    fn fetch(&self) -> impl Future<Output = Result<Snapshot>> + Send {
        let snapshot = self.snapshot.clone();
        async move { Ok(snapshot) }
    }

    fn describe(&self) -> String {
        "static data".to_string()
    }
}

/// Reads a JSON document with the same shape the service returns.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TicketSource for FileSource {
    fn fetch(&self) -> impl Future<Output = Result<Snapshot>> + Send {
        let path = self.path.clone();
        async move {
            let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
                TrellisError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to read board data at {}: {}",
                        format_relative_path(&path),
                        e
                    ),
                ))
            })?;
            parse_snapshot_str(&content)
        }
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Parse a response body. Invalid JSON is an error; a valid document with
/// missing or malformed parts degrades to empty collections.
pub fn parse_snapshot_str(body: &str) -> Result<Snapshot> {
    let value: Value = serde_json::from_str(body)?;
    Ok(parse_snapshot(value))
}

/// Build a snapshot from a JSON document, record by record.
///
/// A `tickets` or `users` field that is missing or not an array yields an
/// empty collection. Individual records that cannot be read are skipped.
pub fn parse_snapshot(value: Value) -> Snapshot {
    let Value::Object(mut root) = value else {
        tracing::warn!("board data is not a JSON object, using empty collections");
        return Snapshot::default();
    };

    Snapshot {
        tickets: parse_records::<Ticket>(root.remove("tickets"), "tickets"),
        users: parse_records::<User>(root.remove("users"), "users"),
    }
}

fn parse_records<T: DeserializeOwned>(value: Option<Value>, field: &str) -> Vec<T> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .filter_map(|(idx, item)| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(field, index = idx, "skipping malformed record: {e}");
                    None
                }
            })
            .collect(),
        Some(_) => {
            tracing::warn!(field, "expected an array, using an empty collection");
            Vec::new()
        }
    }
}
