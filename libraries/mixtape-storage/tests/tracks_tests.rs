//! Integration tests for the tracks catalogue
//!
//! Tests catalogue operations including:
//! - Upsert keyed by path (add vs update)
//! - Modification time lookup for change detection
//! - Deletion and path listing
//! - Read-only handles through the `Catalogue` trait


use mixtape_core::{Catalogue, CatalogueIndex, UpsertOutcome};
use mixtape_storage::{tracks, SqliteCatalogue};
use std::path::Path;
use test_helpers::*;

#[tokio::test]
async fn test_upsert_adds_then_updates() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let first = record("/music/Queen - Bohemian Rhapsody.mp3", 5_000_000, "A Night at the Opera");
    let outcome = tracks::upsert(pool, &first).await.unwrap();
    assert_eq!(outcome, UpsertOutcome::Added);

    let mut changed = first.clone();
    changed.size = 6_000_000;
    changed.album = "Greatest Hits".to_string();
    let outcome = tracks::upsert(pool, &changed).await.unwrap();
    assert_eq!(outcome, UpsertOutcome::Updated);

    assert_eq!(tracks::count(pool).await.unwrap(), 1);

    let stored = tracks::get_by_path(pool, &first.path).await.unwrap().unwrap();
    assert_eq!(stored.size, 6_000_000);
    assert_eq!(stored.album, "Greatest Hits");
    assert_eq!(stored.extension, ".mp3");
    assert_eq!(stored.bitrate, 320);
}

#[tokio::test]
async fn test_find_mtime() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    tracks::upsert(pool, &record("/music/a.flac", 10, "")).await.unwrap();

    let mtime = tracks::find_mtime(pool, Path::new("/music/a.flac")).await.unwrap();
    assert_eq!(mtime, Some(1_700_000_000.5));

    let missing = tracks::find_mtime(pool, Path::new("/music/missing.flac")).await.unwrap();
    assert_eq!(missing, None);
}

#[tokio::test]
async fn test_get_all_preserves_insertion_order() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    for name in ["/music/c.mp3", "/music/a.mp3", "/music/b.mp3"] {
        tracks::upsert(pool, &record(name, 1, "")).await.unwrap();
    }

    let all = tracks::get_all(pool).await.unwrap();
    let names: Vec<&str> = all.iter().map(|t| t.filename.as_str()).collect();
    assert_eq!(names, vec!["c.mp3", "a.mp3", "b.mp3"]);
}

#[tokio::test]
async fn test_delete_by_path() {
    let test_db = TestDb::new().await;
    let catalogue = &test_db.catalogue;

    catalogue.upsert(&record("/music/keep.mp3", 1, "")).await.unwrap();
    catalogue.upsert(&record("/music/drop.mp3", 1, "")).await.unwrap();

    catalogue.remove(Path::new("/music/drop.mp3")).await.unwrap();

    let paths = catalogue.indexed_paths().await.unwrap();
    assert_eq!(paths.len(), 1);
    assert!(paths[0].ends_with("keep.mp3"));
}

#[tokio::test]
async fn test_null_columns_degrade_to_defaults() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    sqlx::query("INSERT INTO tracks (path) VALUES (?)")
        .bind("/music/legacy.mp3")
        .execute(pool)
        .await
        .unwrap();

    let all = tracks::get_all(pool).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].filename, "");
    assert_eq!(all[0].size, 0);
    assert_eq!(all[0].album, "");
}

#[tokio::test]
async fn test_read_only_handle_lists_tracks() {
    let test_db = TestDb::new().await;
    tracks::upsert(test_db.pool(), &record("/music/A - X.mp3", 42, "Album"))
        .await
        .unwrap();

    let reader = SqliteCatalogue::open_read_only(&test_db.url).await.unwrap();
    let all = reader.list_all_tracks().await.unwrap();
    reader.close().await;

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].filename, "A - X.mp3");
    assert_eq!(all[0].size, 42);
}

#[tokio::test]
async fn test_read_only_handle_on_missing_database_fails() {
    let temp = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", temp.path().join("absent.db").display());

    assert!(SqliteCatalogue::open_read_only(&url).await.is_err());
}
