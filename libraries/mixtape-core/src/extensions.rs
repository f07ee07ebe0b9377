//! Accepted audio file extensions

use std::path::Path;

/// Extensions indexed and scanned when nothing else is configured
pub const DEFAULT_EXTENSIONS: &[&str] = &["mp3", "flac", "wav", "aac", "ogg", "m4a"];

/// Default extension list as owned strings, for config defaults
pub fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect()
}

/// Lowercase extension of `path` without the dot
pub fn audio_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(str::to_lowercase)
}

/// Check `path` against a configured extension list (case-insensitive)
///
/// Entries may be written with or without the leading dot.
pub fn has_accepted_extension(path: &Path, accepted: &[String]) -> bool {
    let Some(ext) = audio_extension(path) else {
        return false;
    };

    accepted
        .iter()
        .map(|e| e.trim().trim_start_matches('.'))
        .any(|e| e.eq_ignore_ascii_case(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_default_extensions_case_insensitive() {
        let accepted = default_extensions();
        assert!(has_accepted_extension(Path::new("a.mp3"), &accepted));
        assert!(has_accepted_extension(Path::new("a.MP3"), &accepted));
        assert!(has_accepted_extension(Path::new("/x/y/a.m4a"), &accepted));
        assert!(has_accepted_extension(Path::new("a.Flac"), &accepted));
        assert!(!has_accepted_extension(Path::new("track.txt"), &accepted));
        assert!(!has_accepted_extension(Path::new("track"), &accepted));
        assert!(!has_accepted_extension(Path::new("track.opus"), &accepted));
    }

    #[test]
    fn test_accepts_dotted_configuration() {
        let accepted = vec![".MP3".to_string(), " ogg ".to_string()];
        assert!(has_accepted_extension(Path::new("a.mp3"), &accepted));
        assert!(has_accepted_extension(Path::new("a.ogg"), &accepted));
        assert!(!has_accepted_extension(Path::new("a.flac"), &accepted));
    }
}
