//! Copying selected files into the compilation folder

use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Destination filename: `"<index:02>. <artist> - <title><ext>"`
///
/// `ext` includes its leading dot (or is empty).
pub fn destination_filename(index: usize, artist: &str, title: &str, ext: &str) -> String {
    format!("{:02}. {} - {}{}", index, artist, title, ext)
}

/// Extension of `name` with its leading dot, case preserved; empty if none
pub fn dotted_extension(name: impl AsRef<Path>) -> String {
    name.as_ref()
        .extension()
        .map(|ext| ext.to_string_lossy())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

/// Copy `source` into `dest_dir` as `dest_name`, replacing any existing file
pub fn copy_into(source: &Path, dest_dir: &Path, dest_name: &str) -> Result<PathBuf> {
    let dest_path = dest_dir.join(dest_name);
    fs::copy(source, &dest_path)?;
    Ok(dest_path)
}
