// src/utils.rs
use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Path argument meaning "read standard input".
pub const STDIN_PATH: &str = "-";

/// Read a document from a file, or from stdin when the path is `-`.
pub async fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut content = String::new();
        tokio::io::stdin()
            .read_to_string(&mut content)
            .await
            .context("Failed to read standard input")?;
        return Ok(content);
    }

    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Drops a leading byte order mark and surrounding whitespace, both common
/// in text pasted from editors.
pub fn normalize_input(content: &str) -> &str {
    content.trim_start_matches('\u{feff}').trim()
}

/// Write file content, creating the parent directory if needed.
pub async fn write_file_content(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
