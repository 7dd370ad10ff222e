// Track store - the ordered list of "Artist - Title" entries for one run
// Built once at startup and only ever read after that

pub mod track;

pub use track::Track;

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// The set we ship with - used when no tracklist file is given
pub const EMBEDDED_TRACKS: &[&str] = &[
    "Mosca - From ere Til Eternity",
    "LWS - Gum Seleks",
    "Ploy - Ramos",
    "Verraco - Godspeed >",
    "Batu - Zeal",
    "Yaleesa Hall - Wet Woofers",
    "Dom Carlo & SSSLIP - Leech",
    "Doctor Jeep - Reso Danz (Hodge Remix)",
    "Danvers - Cascade",
    "DJ Double Oh! - Desvelo",
    "Tom VR - Function",
    "Doctor Jeep - Macumba (Wata Igarashi remix)",
    "Amaliah - Labyrinth",
    "Aquarian - Kool Ranch FM",
    "Nouveau Monica - See The Light (Hodge Remix)",
    "Hyas & Jacky Jeane - Gang Got Turn Up",
    "Spice Merchants - Little Bit Dub (Surrealist Remix)",
    "Doctor Jeep - Push The Body (Aquarian Remix)",
    "SCALER - Deadlock (AQXDM Remix)",
    "Forest Drive West - Cut and Run",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tracklist {
    tracks: Vec<Track>,
}

impl Tracklist {
    pub fn embedded() -> Self {
        Self::from_lines(EMBEDDED_TRACKS)
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tracks = lines
            .into_iter()
            .map(|line| Track::parse(line.as_ref()))
            .collect();
        Self { tracks }
    }

    /// Load one track per line from a text file.
    ///
    /// Blank lines and `#` comments are skipped; everything else becomes a track,
    /// including lines with no " - " (they get an empty title).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::TracklistRead {
            path: path.to_path_buf(),
            source,
        })?;

        let lines = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));
        let tracklist = Self::from_lines(lines);

        let untitled = tracklist.iter().filter(|t| !t.has_title()).count();
        if untitled > 0 {
            debug!("{} line(s) in {} had no ' - ', using empty titles", untitled, path.display());
        }
        info!("Loaded {} tracks from {}", tracklist.len(), path.display());

        Ok(tracklist)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_list() {
        let tracklist = Tracklist::embedded();
        assert_eq!(tracklist.len(), 20);
        assert_eq!(tracklist.get(0), Some(&Track::new("Mosca", "From ere Til Eternity")));
        assert_eq!(tracklist.get(19), Some(&Track::new("Forest Drive West", "Cut and Run")));
        assert!(tracklist.iter().all(Track::has_title));
    }

    #[test]
    fn test_order_is_preserved() {
        let tracklist = Tracklist::from_lines(["A - T1", "B - T2", "C - T3"]);
        let artists: Vec<&str> = tracklist.iter().map(|t| t.artist.as_str()).collect();
        assert_eq!(artists, vec!["A", "B", "C"]);
        assert!(tracklist.get(2).is_some());
        assert!(tracklist.get(3).is_none());
    }

    #[test]
    fn test_from_file_skips_blanks_and_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# warmup").unwrap();
        writeln!(file, "A - T1").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "   B - T2   ").unwrap();
        writeln!(file, "Mystery ID").unwrap();

        let tracklist = Tracklist::from_file(file.path()).unwrap();
        assert_eq!(tracklist.len(), 3);
        assert_eq!(tracklist.get(1), Some(&Track::new("B", "T2")));
        assert_eq!(tracklist.get(2), Some(&Track::new("Mystery ID", "")));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = Tracklist::from_file(&missing).unwrap_err();
        assert!(matches!(err, Error::TracklistRead { ref path, .. } if *path == missing));

        // The io cause is chained as the source, not repeated in the message
        assert_eq!(err.to_string(), format!("failed to read tracklist {}", missing.display()));
        assert!(std::error::Error::source(&err).is_some());
    }
}
