use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the quadrant directory - checks for a local .quadrant first, then
/// falls back to global ~/.quadrant
pub fn get_quadrant_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_quadrant(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".quadrant"))
}

/// Find a local .quadrant directory by walking up the directory tree
fn find_local_quadrant(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let quadrant_dir = current.join(".quadrant");
        if quadrant_dir.exists() && quadrant_dir.is_dir() {
            return Some(quadrant_dir);
        }

        current = current.parent()?;
    }
}

/// Ensure the quadrant directory exists
pub fn ensure_quadrant_dir() -> Result<PathBuf> {
    let dir = get_quadrant_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// File name of the task list record
pub const TASKS_FILE: &str = "tasks.json";
/// File name of the axis label record
pub const LABELS_FILE: &str = "labels.json";
/// File name of the timer settings record
pub const SETTINGS_FILE: &str = "settings.json";

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return empty string if the file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}
