use std::path::PathBuf;

/// Environment variable that overrides the state directory
pub const ROOT_ENV_VAR: &str = "TRELLIS_ROOT";

/// Returns the root trellis directory path.
///
/// Resolution order:
/// 1. `TRELLIS_ROOT` environment variable (if set and non-empty)
/// 2. The platform config directory (e.g. `~/.config/trellis`)
/// 3. `.trellis` in the current working directory
pub fn trellis_root() -> PathBuf {
    if let Ok(root) = std::env::var(ROOT_ENV_VAR)
        && !root.is_empty()
    {
        return PathBuf::from(root);
    }

    directories::ProjectDirs::from("dev", "trellis", "trellis")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".trellis"))
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    trellis_root().join("config.yaml")
}

/// Returns the path to the persisted board options.
pub fn state_path() -> PathBuf {
    trellis_root().join("state.json")
}
