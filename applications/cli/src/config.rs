//! Command-line configuration
use anyhow::Context;
use mixtape_builder::BuildConfig;
use mixtape_core::extensions::default_extensions;
use mixtape_metadata::IndexConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file read from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "mixtape.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub catalogue: CatalogueSettings,

    #[serde(default)]
    pub library: LibrarySettings,

    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogueSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LibrarySettings {
    /// Folder indexed by `mixtape index` when none is given
    #[serde(default)]
    pub music_folder: Option<PathBuf>,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub exclude_keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildSettings {
    #[serde(default)]
    pub fallback_folder: Option<PathBuf>,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub follow_links: bool,

    #[serde(default)]
    pub write_not_found_report: bool,

    #[serde(default = "default_compilations_file")]
    pub compilations_file: PathBuf,
}

impl Settings {
    /// Load settings from the config file and `MIXTAPE_*` environment variables
    ///
    /// An explicit `path` must exist; the default `mixtape.toml` is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();

        match path {
            Some(path) => {
                anyhow::ensure!(path.is_file(), "Config file {} not found", path.display());
                builder = builder.add_source(config::File::from(path));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    builder = builder.add_source(config::File::from(default_path));
                }
            }
        }

        // e.g. MIXTAPE_BUILD__FALLBACK_FOLDER=/srv/music
        builder = builder.add_source(
            config::Environment::with_prefix("MIXTAPE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("library.extensions")
                .with_list_parse_key("library.exclude_keywords")
                .with_list_parse_key("build.extensions"),
        );

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn index_config(&self) -> IndexConfig {
        IndexConfig {
            extensions: self.library.extensions.clone(),
            exclude_keywords: self.library.exclude_keywords.clone(),
            ..IndexConfig::default()
        }
    }

    pub fn build_config(&self) -> BuildConfig {
        BuildConfig {
            fallback_folder: self.build.fallback_folder.clone(),
            extensions: self.build.extensions.clone(),
            follow_links: self.build.follow_links,
            write_not_found_report: self.build.write_not_found_report,
        }
    }
}

impl Default for CatalogueSettings {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
        }
    }
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            music_folder: None,
            extensions: default_extensions(),
            exclude_keywords: Vec::new(),
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            fallback_folder: None,
            extensions: default_extensions(),
            follow_links: false,
            write_not_found_report: false,
            compilations_file: default_compilations_file(),
        }
    }
}

// Default values
fn default_database_url() -> String {
    "sqlite://music_library.db".to_string()
}

fn default_compilations_file() -> PathBuf {
    PathBuf::from("compilations.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.catalogue.database_url, "sqlite://music_library.db");
        assert_eq!(settings.build.compilations_file, PathBuf::from("compilations.json"));
        assert!(settings.build.fallback_folder.is_none());
        assert_eq!(settings.library.extensions.len(), 6);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            r#"
[catalogue]
database_url = "sqlite:///srv/mixtape/library.db"

[library]
music_folder = "/srv/music"
exclude_keywords = ["karaoke", "instrumental"]

[build]
fallback_folder = "/mnt/usb"
write_not_found_report = true
"#,
        )
        .unwrap();

        let settings = Settings::load(Some(&path)).unwrap();

        assert_eq!(settings.catalogue.database_url, "sqlite:///srv/mixtape/library.db");
        assert_eq!(settings.library.music_folder, Some(PathBuf::from("/srv/music")));
        assert_eq!(settings.library.exclude_keywords, ["karaoke", "instrumental"]);
        assert_eq!(settings.library.extensions.len(), 6);

        let build = settings.build_config();
        assert_eq!(build.fallback_folder, Some(PathBuf::from("/mnt/usb")));
        assert!(build.write_not_found_report);
        assert!(!build.follow_links);

        let index = settings.index_config();
        assert_eq!(index.exclude_keywords.len(), 2);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(Settings::load(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
