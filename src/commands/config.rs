//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get`: Read one value
//! - `config set`: Set a configuration value

use owo_colors::{OwoColorize, Stream};
use serde_json::json;

use super::CommandOutput;
use crate::config::{API_URL_ENV_VAR, Config};
use crate::error::Result;
use crate::paths::config_path;

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let effective_url = config.api_url();
    let url_overridden = effective_url != config.api_url;

    let json_output = json!({
        "api_url": effective_url,
        "api_url_from_env": url_overridden,
        "timeout": config.timeout,
        "config_file": config_path().to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!(
        "{}\n\n",
        "Configuration:".if_supports_color(Stream::Stdout, |t| t.bold())
    ));
    text_output.push_str(&format!("api_url: {effective_url}"));
    if url_overridden {
        text_output.push_str(&format!(" (from {API_URL_ENV_VAR})"));
    }
    text_output.push('\n');
    text_output.push_str(&format!("timeout: {}s\n\n", config.timeout));
    let file_line = format!("Config file: {}", config_path().display());
    text_output.push_str(&format!(
        "{}",
        file_line.if_supports_color(Stream::Stdout, |t| t.dimmed())
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output_json)
}

/// Print a single configuration value
pub fn cmd_config_get(key: &str, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let value = config.get(key)?;

    CommandOutput::new(json!({
        "key": key,
        "value": value,
    }))
    .with_text(value)
    .print(output_json)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output_json: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    let stored = config.get(key)?;

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": stored,
        "success": true,
    }))
    .with_text(format!(
        "Set {} to {}",
        key.if_supports_color(Stream::Stdout, |t| t.cyan()),
        stored
    ))
    .print(output_json)
}
