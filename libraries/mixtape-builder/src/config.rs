//! Build configuration

use crate::resolver::FolderScanner;
use mixtape_core::extensions::default_extensions;
use serde::Deserialize;
use std::path::PathBuf;

/// Settings for compilation builds
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Folder scanned when the catalogue has no candidates; `None` disables the scan
    pub fallback_folder: Option<PathBuf>,

    /// Audio extensions accepted by the fallback scan
    pub extensions: Vec<String>,

    /// Whether the fallback scan follows symbolic links
    pub follow_links: bool,

    /// Write `not_found_tracks.txt` next to the tracklist
    pub write_not_found_report: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            fallback_folder: None,
            extensions: default_extensions(),
            follow_links: false,
            write_not_found_report: false,
        }
    }
}

impl BuildConfig {
    /// Scanner over the fallback folder, if one is configured
    pub fn fallback_scanner(&self) -> Option<FolderScanner> {
        self.fallback_folder.as_ref().map(|folder| {
            FolderScanner::new(folder)
                .extensions(self.extensions.clone())
                .follow_links(self.follow_links)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fallback_by_default() {
        assert!(BuildConfig::default().fallback_scanner().is_none());
    }

    #[test]
    fn test_fallback_scanner_uses_configured_folder() {
        let config = BuildConfig {
            fallback_folder: Some(PathBuf::from("/mnt/usb")),
            ..BuildConfig::default()
        };
        let scanner = config.fallback_scanner().unwrap();
        assert_eq!(scanner.folder(), std::path::Path::new("/mnt/usb"));
    }
}
