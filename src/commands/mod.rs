mod board;
mod config;
mod options;

pub use board::{BoardArgs, cmd_board};
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use options::{cmd_group, cmd_options, cmd_order};

use serde_json::Value;

use crate::error::Result;

/// Result of a command, printable as JSON or as text
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Render to a string; falls back to JSON when no text was given
    pub fn render(&self, output_json: bool) -> Result<String> {
        match (&self.text, output_json) {
            (Some(text), false) => Ok(text.clone()),
            _ => Ok(serde_json::to_string_pretty(&self.json)?),
        }
    }

    pub fn print(self, output_json: bool) -> Result<()> {
        println!("{}", self.render(output_json)?);
        Ok(())
    }
}
