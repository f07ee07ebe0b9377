//! Candidate resolution against catalogues and fallback folders


use mixtape_builder::{find_in_catalogue, CandidateResolver, FolderScanner};
use mixtape_core::TrackRecord;
use std::path::PathBuf;
use tempfile::TempDir;
use test_helpers::*;

#[tokio::test]
async fn test_catalogue_matches_are_ranked() {
    init_tracing();
    let catalogue = MockCatalogue::with_tracks(vec![
        record_for(&PathBuf::from("/m/Queen - Bohemian Rhapsody (Remastered 2011).mp3"), 9_000),
        record_for(&PathBuf::from("/m/Queen - Bohemian Rhapsody.mp3"), 7_000),
        record_for(&PathBuf::from("/m/Queen - Bohemian Rhapsody.ogg"), 30_000),
        record_for(&PathBuf::from("/m/Queen - Radio Ga Ga.mp3"), 5_000),
    ]);

    let matches = find_in_catalogue(&catalogue, "Queen", "Bohemian Rhapsody").await;
    let names: Vec<_> = matches.iter().map(|m| m.filename.as_str()).collect();

    assert_eq!(
        names,
        [
            // Same score, so the larger file wins
            "Queen - Bohemian Rhapsody.ogg",
            "Queen - Bohemian Rhapsody.mp3",
            "Queen - Bohemian Rhapsody (Remastered 2011).mp3",
        ]
    );
    assert!(matches.iter().all(|m| m.score > 0.9 && m.score <= 1.0));
    assert_eq!(matches[0].album, "Test Album");
    assert_eq!(matches[0].bitrate, 320);
}

#[tokio::test]
async fn test_catalogue_matching_ignores_case_and_accents() {
    init_tracing();
    let catalogue = MockCatalogue::with_tracks(vec![record_for(
        &PathBuf::from("/m/BEYONCÉ_-_Halo.m4a"),
        1,
    )]);

    let matches = find_in_catalogue(&catalogue, "Beyonce", "halo").await;
    assert_eq!(matches.len(), 1);
}

#[tokio::test]
async fn test_bare_record_matches_with_default_metadata() {
    init_tracing();
    let record = TrackRecord::new("/m/A - X.mp3", 0, 0.0);
    let catalogue = MockCatalogue::with_tracks(vec![record]);

    let matches = find_in_catalogue(&catalogue, "A", "X").await;
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].duration, 0.0);
    assert_eq!(matches[0].album, "");
}

#[tokio::test]
async fn test_failing_catalogue_yields_nothing() {
    init_tracing();
    let matches = find_in_catalogue(&MockCatalogue::failing(), "A", "X").await;
    assert!(matches.is_empty());
}

#[test]
fn test_fallback_folder_filters_extensions() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    create_audio_file(dir.path(), "track.txt", b"A - X");
    create_audio_file(dir.path(), "A - X.jpg", b"cover");
    create_audio_file(dir.path(), "A - X.Flac", b"flac");
    create_audio_file(dir.path(), "deep/er/A - X.wav", b"wav");

    let matches = FolderScanner::new(dir.path()).find_in_fallback_folder("A", "X");
    let names: Vec<_> = matches.iter().map(|m| m.filename.as_str()).collect();

    assert_eq!(names.len(), 2);
    assert!(names.contains(&"A - X.Flac"));
    assert!(names.contains(&"A - X.wav"));
}

#[test]
fn test_fallback_folder_reports_size_and_default_tags() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    create_audio_file(dir.path(), "A - X.mp3", &[0u8; 64]);

    let matches = FolderScanner::new(dir.path()).find_in_fallback_folder("A", "X");

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].size, 64);
    assert_eq!(matches[0].bitrate, 0);
    assert_eq!(matches[0].album, "");
}

#[test]
fn test_fallback_folder_ranks_by_size_on_equal_score() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    create_audio_file(dir.path(), "a/A - X.mp3", &[0u8; 10]);
    create_audio_file(dir.path(), "b/A - X.mp3", &[0u8; 50]);

    let matches = FolderScanner::new(dir.path()).find_in_fallback_folder("A", "X");

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].size, 50);
    assert_eq!(matches[1].size, 10);
}

#[test]
fn test_custom_extensions() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    create_audio_file(dir.path(), "A - X.opus", b"opus");
    create_audio_file(dir.path(), "A - X.mp3", b"mp3");

    let matches = FolderScanner::new(dir.path())
        .extensions(vec![".opus".to_string()])
        .find_in_fallback_folder("A", "X");

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].filename, "A - X.opus");
}

#[test]
fn test_missing_fallback_folder() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let scanner = FolderScanner::new(dir.path().join("absent"));
    assert!(scanner.find_in_fallback_folder("A", "X").is_empty());
}

#[tokio::test]
async fn test_resolver_prefers_catalogue() {
    init_tracing();
    let catalogue = MockCatalogue::with_tracks(vec![record_for(&PathBuf::from("/m/A - X.mp3"), 1)]);
    let spy = SpyFallback::default();
    let resolver = CandidateResolver::new(&catalogue, &spy);

    assert_eq!(resolver.resolve("A", "X").await.len(), 1);
    assert_eq!(spy.calls(), 0);

    assert!(resolver.resolve("B", "Y").await.is_empty());
    assert_eq!(spy.calls(), 1);
}
