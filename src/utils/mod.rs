pub mod text;

use std::fs;
use std::path::Path;

use crate::error::{Result, TrellisError};
use crate::paths::trellis_root;

pub use text::{ELLIPSIS, initials, truncate_with_ellipsis};

/// Ensure the parent directory of a path exists, creating it if necessary.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            TrellisError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to create directory at {}: {}",
                    format_relative_path(parent),
                    e
                ),
            ))
        })?;
    }
    Ok(())
}

/// Format a path for display relative to the trellis root directory.
///
/// Falls back to the full path when it lives outside the root.
pub fn format_relative_path(path: &Path) -> String {
    path.strip_prefix(trellis_root())
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string())
}
