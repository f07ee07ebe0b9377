use crate::Result;
use mixtape_core::{TrackRecord, UpsertOutcome};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};

/// Row shape of the `tracks` table; older catalogues may hold NULLs
#[derive(sqlx::FromRow)]
struct TrackRow {
    path: String,
    filename: Option<String>,
    ext: Option<String>,
    size: Option<i64>,
    duration: Option<f64>,
    bitrate: Option<i64>,
    album: Option<String>,
    mtime: Option<f64>,
}

impl From<TrackRow> for TrackRecord {
    fn from(row: TrackRow) -> Self {
        Self {
            path: PathBuf::from(row.path),
            filename: row.filename.unwrap_or_default(),
            extension: row.ext.unwrap_or_default(),
            size: row.size.unwrap_or(0).max(0) as u64,
            duration: row.duration.unwrap_or(0.0),
            bitrate: row.bitrate.unwrap_or(0).max(0) as u32,
            album: row.album.unwrap_or_default(),
            modified_at: row.mtime.unwrap_or(0.0),
        }
    }
}

fn path_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Get every track in the catalogue, in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<TrackRecord>> {
    let rows = sqlx::query_as::<_, TrackRow>(
        r#"
        SELECT path, filename, ext, size, duration, bitrate, album, mtime
        FROM tracks
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(TrackRecord::from).collect())
}

/// Get a single track by path
pub async fn get_by_path(pool: &SqlitePool, path: &Path) -> Result<Option<TrackRecord>> {
    let row = sqlx::query_as::<_, TrackRow>(
        r#"
        SELECT path, filename, ext, size, duration, bitrate, album, mtime
        FROM tracks
        WHERE path = ?
        "#,
    )
    .bind(path_key(path))
    .fetch_optional(pool)
    .await?;

    Ok(row.map(TrackRecord::from))
}

/// Stored modification time for a path
pub async fn find_mtime(pool: &SqlitePool, path: &Path) -> Result<Option<f64>> {
    let mtime: Option<(Option<f64>,)> = sqlx::query_as("SELECT mtime FROM tracks WHERE path = ?")
        .bind(path_key(path))
        .fetch_optional(pool)
        .await?;

    Ok(mtime.map(|(m,)| m.unwrap_or(0.0)))
}

/// Insert or update the record keyed by its path
pub async fn upsert(pool: &SqlitePool, record: &TrackRecord) -> Result<UpsertOutcome> {
    let key = path_key(&record.path);
    let mut tx = pool.begin().await?;

    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM tracks WHERE path = ?")
        .bind(&key)
        .fetch_optional(&mut *tx)
        .await?;

    sqlx::query(
        r#"
        INSERT INTO tracks (path, filename, ext, size, duration, bitrate, album, mtime)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(path) DO UPDATE SET
            filename = excluded.filename,
            ext = excluded.ext,
            size = excluded.size,
            duration = excluded.duration,
            bitrate = excluded.bitrate,
            album = excluded.album,
            mtime = excluded.mtime
        "#,
    )
    .bind(&key)
    .bind(&record.filename)
    .bind(&record.extension)
    .bind(record.size as i64)
    .bind(record.duration)
    .bind(i64::from(record.bitrate))
    .bind(&record.album)
    .bind(record.modified_at)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(if existing.is_some() {
        UpsertOutcome::Updated
    } else {
        UpsertOutcome::Added
    })
}

/// Every indexed path
pub async fn all_paths(pool: &SqlitePool) -> Result<Vec<PathBuf>> {
    let rows: Vec<(String,)> = sqlx::query_as("SELECT path FROM tracks ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|(p,)| PathBuf::from(p)).collect())
}

/// Delete the record for a path
pub async fn delete_by_path(pool: &SqlitePool, path: &Path) -> Result<()> {
    sqlx::query("DELETE FROM tracks WHERE path = ?")
        .bind(path_key(path))
        .execute(pool)
        .await?;

    Ok(())
}

/// Number of indexed tracks
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tracks")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
