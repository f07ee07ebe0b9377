//! Tracklist text files: parsing requests and writing build output

use crate::{BuildError, Result};
use mixtape_core::RequestedTrack;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the tracklist written into every compilation folder
pub const TRACKLIST_FILENAME: &str = "tracklist.txt";

/// Name of the optional report listing unmatched tracks
pub const NOT_FOUND_FILENAME: &str = "not_found_tracks.txt";

const DASHES: &[char] = &['-', '\u{2013}', '\u{2014}', '\u{2012}', '\u{2015}'];

/// A line that could not be read as `Artist - Title`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number
    pub line: usize,
    pub content: String,
}

/// Result of parsing a tracklist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTracklist {
    pub tracks: Vec<RequestedTrack>,
    pub rejected: Vec<RejectedLine>,
}

/// Byte offset and width of the separating dash in `line`
///
/// Prefers a dash with whitespace on both sides so hyphenated names such as
/// `Jay-Z - Song` split in the right place.
fn find_separator(line: &str) -> Option<(usize, usize)> {
    let chars: Vec<(usize, char)> = line.char_indices().collect();

    let spaced = chars.iter().enumerate().find_map(|(i, &(offset, c))| {
        let before = i.checked_sub(1).map(|j| chars[j].1);
        let after = chars.get(i + 1).map(|&(_, c)| c);
        let surrounded = before.is_some_and(char::is_whitespace) && after.is_some_and(char::is_whitespace);
        (DASHES.contains(&c) && surrounded).then_some((offset, c.len_utf8()))
    });

    spaced.or_else(|| {
        chars
            .iter()
            .find(|(_, c)| DASHES.contains(c))
            .map(|&(offset, c)| (offset, c.len_utf8()))
    })
}

fn parse_line(line: &str) -> Option<RequestedTrack> {
    let (offset, width) = find_separator(line)?;
    let artist = line[..offset].trim();
    let title = line[offset + width..].trim();

    if artist.is_empty() || title.is_empty() {
        return None;
    }
    Some(RequestedTrack::new(artist, title))
}

/// Parse one `Artist - Title` entry per line
///
/// Blank lines are ignored; malformed lines are collected in `rejected`.
pub fn parse_tracklist(text: &str) -> ParsedTracklist {
    let mut parsed = ParsedTracklist::default();

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(track) => parsed.tracks.push(track),
            None => parsed.rejected.push(RejectedLine {
                line: i + 1,
                content: line.to_string(),
            }),
        }
    }

    parsed
}

/// Read and parse a tracklist file
pub fn read_tracklist_file(path: &Path) -> Result<ParsedTracklist> {
    if !path.is_file() {
        return Err(BuildError::InvalidPath(format!(
            "{} is not a readable file",
            path.display()
        )));
    }

    let text = fs::read_to_string(path)?;
    let parsed = parse_tracklist(&text);

    for rejected in &parsed.rejected {
        tracing::warn!(
            "{}:{}: expected 'Artist - Title', got {:?}",
            path.display(),
            rejected.line,
            rejected.content
        );
    }

    if parsed.tracks.is_empty() {
        return Err(BuildError::InvalidTracklist(format!(
            "{} contains no 'Artist - Title' lines",
            path.display()
        )));
    }

    Ok(parsed)
}

/// Write `tracklist.txt` into `dir`, one `"<i>. <artist> - <title>"` per line
pub fn write_tracklist(dir: &Path, tracks: &[RequestedTrack]) -> Result<PathBuf> {
    let contents: String = tracks
        .iter()
        .enumerate()
        .map(|(i, track)| format!("{}. {} - {}\n", i + 1, track.artist, track.title))
        .collect();

    let path = dir.join(TRACKLIST_FILENAME);
    fs::write(&path, contents)?;
    Ok(path)
}

/// Write `not_found_tracks.txt` into `dir`, one entry per line
pub fn write_not_found_report(dir: &Path, entries: &[String]) -> Result<PathBuf> {
    let contents: String = entries.iter().map(|entry| format!("{entry}\n")).collect();

    let path = dir.join(NOT_FOUND_FILENAME);
    fs::write(&path, contents)?;
    Ok(path)
}
