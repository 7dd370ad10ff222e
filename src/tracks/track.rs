use std::fmt;

/// Separator between artist and title in a raw tracklist line
pub const DELIMITER: &str = " - ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub artist: String,
    pub title: String,
}

impl Track {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
        }
    }

    /// Split "Artist - Title" on the first delimiter.
    ///
    /// A line without the delimiter is kept whole as the artist with an empty
    /// title - never an error, a DJ's notes are rarely tidy.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(DELIMITER) {
            Some((artist, title)) => Self::new(artist, title),
            None => Self::new(raw, ""),
        }
    }

    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_title() {
            write!(f, "{}{}{}", self.artist, DELIMITER, self.title)
        } else {
            f.write_str(&self.artist)
        }
    }
}
