//! Common test utilities and fixtures
use mixtape_cli::config::Settings;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch workspace with a music folder, catalogue and output folder
pub struct Workspace {
    pub root: TempDir,
    pub settings: Settings,
}

impl Workspace {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");

        let mut settings = Settings::default();
        settings.catalogue.database_url =
            format!("sqlite://{}", root.path().join("library.db").display());
        settings.library.music_folder = Some(root.path().join("music"));
        settings.build.compilations_file = root.path().join("compilations.json");

        fs::create_dir_all(root.path().join("music")).expect("Failed to create music dir");
        Self { root, settings }
    }

    pub fn music(&self) -> PathBuf {
        self.root.path().join("music")
    }

    pub fn out(&self) -> PathBuf {
        self.root.path().join("out")
    }

    /// Add a fake audio file to the music folder
    pub fn add_song(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.music().join(name);
        fs::write(&path, contents).expect("Failed to write song");
        path
    }

    pub fn write_tracklist(&self, text: &str) -> PathBuf {
        let path = self.root.path().join("tracklist.txt");
        fs::write(&path, text).expect("Failed to write tracklist");
        path
    }
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read file")
}
