//! Metadata reader implementation using lofty
use crate::error::MetadataError;
use lofty::{Accessor, AudioFile, TaggedFileExt};
use mixtape_core::{AudioProperties, MetadataReader};
use std::path::Path;

/// Metadata reader using the lofty library
pub struct LoftyMetadataReader;

impl LoftyMetadataReader {
    /// Create a new metadata reader
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoftyMetadataReader {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataReader for LoftyMetadataReader {
    fn read_properties(&self, path: &Path) -> mixtape_core::Result<AudioProperties> {
        if !path.exists() {
            return Err(MetadataError::FileNotFound(path.display().to_string()).into());
        }

        let tagged_file = lofty::read_from_path(path).map_err(MetadataError::from)?;

        let properties = tagged_file.properties();
        let duration = properties.duration().as_secs_f64();
        let bitrate = properties
            .audio_bitrate()
            .or_else(|| properties.overall_bitrate())
            .unwrap_or(0);

        // Prefer the format's primary tag (ID3v2 for MP3, Vorbis for OGG/FLAC)
        let album = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag())
            .and_then(|tag| tag.album().map(|a| a.trim().to_string()))
            .unwrap_or_default();

        Ok(AudioProperties {
            duration,
            bitrate,
            album,
        })
    }
}
