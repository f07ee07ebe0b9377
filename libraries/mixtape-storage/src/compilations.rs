//! Saved compilation definitions
//!
//! Definitions live in a single pretty-printed JSON array so they can be
//! edited by hand.

use crate::Result;
use mixtape_core::CompilationDefinition;
use std::fs;
use std::path::Path;

/// Load every saved definition
///
/// A missing file is an empty list.
pub fn load(path: &Path) -> Result<Vec<CompilationDefinition>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str(&contents)?)
}

/// Write every definition, replacing the file
pub fn save(path: &Path, definitions: &[CompilationDefinition]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(definitions)?;
    fs::write(path, json)?;

    tracing::debug!("Saved {} compilation(s) to {}", definitions.len(), path.display());
    Ok(())
}

/// Replace the definition with the same name, or append it
pub fn upsert(definitions: &mut Vec<CompilationDefinition>, definition: CompilationDefinition) {
    if let Some(existing) = definitions.iter_mut().find(|d| d.name == definition.name) {
        *existing = definition;
    } else {
        definitions.push(definition);
    }
}

/// Find a definition by name
pub fn find<'a>(definitions: &'a [CompilationDefinition], name: &str) -> Option<&'a CompilationDefinition> {
    definitions.iter().find(|d| d.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixtape_core::RequestedTrack;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn definition(name: &str, tracks: usize) -> CompilationDefinition {
        CompilationDefinition {
            name: name.to_string(),
            dest_base: PathBuf::from("/tmp/out"),
            tracklist: (0..tracks)
                .map(|i| RequestedTrack::new(format!("Artist {i}"), format!("Title {i}")))
                .collect(),
            selected_paths: None,
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let defs = load(&temp.path().join("compilations.json")).unwrap();
        assert!(defs.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("compilations.json");

        save(&path, &[definition("Party", 2), definition("Chill", 1)]).unwrap();
        let defs = load(&path).unwrap();

        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].name, "Party");
        assert_eq!(defs[0].tracklist[1], RequestedTrack::new("Artist 1", "Title 1"));
    }

    #[test]
    fn test_upsert_replaces_by_name() {
        let mut defs = vec![definition("Party", 2), definition("Chill", 1)];

        upsert(&mut defs, definition("Party", 5));
        assert_eq!(defs.len(), 2);
        assert_eq!(find(&defs, "Party").unwrap().tracklist.len(), 5);

        upsert(&mut defs, definition("Workout", 3));
        assert_eq!(defs.len(), 3);
        assert_eq!(defs[2].name, "Workout");
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("compilations.json");
        fs::write(&path, "{not json").unwrap();

        assert!(load(&path).is_err());
    }
}
