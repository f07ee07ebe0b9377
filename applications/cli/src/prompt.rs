//! Interactive candidate selection on stdin

use mixtape_builder::FallbackSource;
use mixtape_core::TrackMatch;
use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Widest filename shown in the candidate table
const FILENAME_WIDTH: usize = 50;

/// What the user typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// 0-based candidate index
    Pick(usize),
    /// Search the fallback folder as well
    SearchFallback,
    Skip,
    Invalid,
}

/// Candidates in display order: highest bitrate first
///
/// The sort is stable, so equal bitrates keep their ranking.
pub fn by_bitrate(candidates: &[TrackMatch]) -> Vec<TrackMatch> {
    let mut shown = candidates.to_vec();
    shown.sort_by(|a, b| b.bitrate.cmp(&a.bitrate));
    shown
}

/// Render the candidate table shown before asking
pub fn render_candidates(artist: &str, title: &str, candidates: &[TrackMatch]) -> String {
    let mut out = format!("\nSeveral files match '{artist} - {title}':\n");
    let _ = writeln!(
        out,
        "  {:>3}  {:<w$} {:>6} {:>8} {:>6}  {}",
        "#",
        "File",
        "Time",
        "Size",
        "kbps",
        "Album",
        w = FILENAME_WIDTH
    );

    for (i, candidate) in candidates.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>3}  {:<w$.w$} {:>6} {:>5.1} MB {:>6}  {}",
            i + 1,
            candidate.filename,
            candidate.duration_display(),
            candidate.size_mb(),
            candidate.bitrate,
            candidate.album,
            w = FILENAME_WIDTH
        );
    }

    out
}

/// Interpret one line of input against `count` candidates
///
/// Numbers are 1-based; `f` searches the fallback folder; an empty line
/// skips the track.
pub fn parse_answer(input: &str, count: usize) -> Answer {
    let input = input.trim();
    if input.is_empty() {
        return Answer::Skip;
    }
    if input.eq_ignore_ascii_case("f") {
        return Answer::SearchFallback;
    }

    match input.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Answer::Pick(n - 1),
        _ => Answer::Invalid,
    }
}

/// Ask on `input` until the user picks a candidate or skips
///
/// Answering `f` replaces the list with what `fallback` finds, even when the
/// catalogue already had candidates. End of input counts as a skip.
pub fn choose<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    artist: &str,
    title: &str,
    candidates: &[TrackMatch],
    fallback: &dyn FallbackSource,
) -> Option<PathBuf> {
    let mut shown = by_bitrate(candidates);
    let _ = write!(output, "{}", render_candidates(artist, title, &shown));

    loop {
        let _ = write!(
            output,
            "Choose 1-{}, f to search the fallback folder, Enter to skip: ",
            shown.len()
        );
        let _ = output.flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }

        match parse_answer(&line, shown.len()) {
            Answer::Pick(i) => return Some(shown[i].path.clone()),
            Answer::Skip => return None,
            Answer::SearchFallback => {
                let found = fallback.find_matches(artist, title);
                if found.is_empty() {
                    let _ = writeln!(output, "Nothing found in the fallback folder");
                } else {
                    shown = by_bitrate(&found);
                    let _ = write!(output, "{}", render_candidates(artist, title, &shown));
                }
            }
            Answer::Invalid => {
                let _ = writeln!(output, "Please enter a number between 1 and {}", shown.len());
            }
        }
    }
}

/// [`choose`] on the terminal
pub fn choose_from_stdin(
    artist: &str,
    title: &str,
    candidates: &[TrackMatch],
    fallback: &dyn FallbackSource,
) -> Option<PathBuf> {
    let stdin = io::stdin();
    choose(&mut stdin.lock(), &mut io::stdout(), artist, title, candidates, fallback)
}
