//! Choosing one candidate per requested track

use mixtape_core::TrackMatch;
use std::path::PathBuf;

/// Caller-supplied chooser: `(artist, title, candidates) -> path`
///
/// Returning `None` declines the track.
pub type ChoiceFn<'a> = dyn FnMut(&str, &str, &[TrackMatch]) -> Option<PathBuf> + 'a;

/// Pick the source file for a track
///
/// A single candidate is taken without asking. With several, the chooser
/// decides if one is given, otherwise the best ranked candidate wins.
pub fn select(
    artist: &str,
    title: &str,
    candidates: &[TrackMatch],
    choice: Option<&mut ChoiceFn<'_>>,
) -> Option<PathBuf> {
    match candidates {
        [] => None,
        [only] => Some(only.path.clone()),
        [best, ..] => match choice {
            Some(choose) => choose(artist, title, candidates),
            None => Some(best.path.clone()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn candidate(path: &str) -> TrackMatch {
        TrackMatch {
            score: 1.0,
            path: PathBuf::from(path),
            filename: path.to_string(),
            duration: 0.0,
            size: 0,
            bitrate: 0,
            album: String::new(),
        }
    }

    #[test]
    fn test_single_candidate_skips_chooser() {
        let mut asked = false;
        let mut chooser = |_: &str, _: &str, _: &[TrackMatch]| -> Option<PathBuf> {
            asked = true;
            None
        };
        let picked = select("A", "X", &[candidate("/a.mp3")], Some(&mut chooser));
        assert_eq!(picked.as_deref(), Some(Path::new("/a.mp3")));
        assert!(!asked);
    }

    #[test]
    fn test_multiple_candidates_without_chooser_take_first() {
        let list = [candidate("/best.mp3"), candidate("/other.mp3")];
        assert_eq!(select("A", "X", &list, None).as_deref(), Some(Path::new("/best.mp3")));
    }

    #[test]
    fn test_chooser_answer_is_returned_verbatim() {
        let list = [candidate("/best.mp3"), candidate("/other.mp3")];
        let mut chooser = |artist: &str, title: &str, c: &[TrackMatch]| -> Option<PathBuf> {
            assert_eq!((artist, title, c.len()), ("A", "X", 2));
            Some(PathBuf::from("/elsewhere.wav"))
        };
        let picked = select("A", "X", &list, Some(&mut chooser));
        assert_eq!(picked.as_deref(), Some(Path::new("/elsewhere.wav")));
    }

    #[test]
    fn test_chooser_can_decline() {
        let list = [candidate("/best.mp3"), candidate("/other.mp3")];
        let mut chooser = |_: &str, _: &str, _: &[TrackMatch]| -> Option<PathBuf> { None };
        assert!(select("A", "X", &list, Some(&mut chooser)).is_none());
    }

    #[test]
    fn test_no_candidates() {
        assert!(select("A", "X", &[], None).is_none());
    }
}
