//! View option commands.
//!
//! - `group`: persist the grouping dimension
//! - `order`: persist the ordering dimension
//! - `options`: show what is persisted

use owo_colors::{OwoColorize, Stream};
use serde_json::json;

use super::CommandOutput;
use crate::display::render_options;
use crate::error::Result;
use crate::options::{FileStorage, OptionStore};
use crate::utils::format_relative_path;

/// Persist a new grouping dimension
pub fn cmd_group(value: &str, output_json: bool) -> Result<()> {
    let mut store = OptionStore::open(FileStorage::at_default_path());
    let options = store.set_group_str(value)?;

    CommandOutput::new(json!({
        "action": "group_set",
        "group": options.group,
        "success": true,
    }))
    .with_text(format!(
        "Grouping set to {}",
        options.group.if_supports_color(Stream::Stdout, |t| t.cyan())
    ))
    .print(output_json)
}

/// Persist a new ordering dimension
pub fn cmd_order(value: &str, output_json: bool) -> Result<()> {
    let mut store = OptionStore::open(FileStorage::at_default_path());
    let options = store.set_order_str(value)?;

    CommandOutput::new(json!({
        "action": "order_set",
        "order": options.order,
        "success": true,
    }))
    .with_text(format!(
        "Ordering set to {}",
        options.order.if_supports_color(Stream::Stdout, |t| t.cyan())
    ))
    .print(output_json)
}

/// Show the persisted options
pub fn cmd_options(output_json: bool) -> Result<()> {
    let store = OptionStore::open(FileStorage::at_default_path());
    let options = store.current();

    let mut text = render_options(options);
    let state_line = format!("State file: {}", format_relative_path(store.storage().path()));
    text.push_str(&format!(
        "{}",
        state_line.if_supports_color(Stream::Stdout, |t| t.dimmed())
    ));

    CommandOutput::new(json!({
        "group": options.group,
        "order": options.order,
        "state_file": store.storage().path().to_string_lossy(),
    }))
    .with_text(text)
    .print(output_json)
}
