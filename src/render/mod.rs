// Renderer - turns tracks and playback position into display lines
// Pure formatting: nothing here touches the terminal, the display loop does that

pub mod style;

pub use style::{AnsiStylist, PlainStylist, Role, Stylist};

use crate::display::RevealedSet;
use crate::tracks::Track;

pub const CURRENT_MARKER: &str = "▶ ";
pub const MASK: &str = "??? - ???";
pub const FILLED_GLYPH: char = '█';
pub const EMPTY_GLYPH: char = '░';
pub const DEFAULT_PROGRESS_WIDTH: usize = 40;
/// Anything wider than this is clamped - no terminal is that wide
pub const MAX_PROGRESS_WIDTH: usize = 512;

const BANNER: &str = r"
 _____ ___  _   ___ _  ___    ___ ___ _____ 
|_   _| _ \/ \ / __| |/ / |  |_ _/ __|_   _|
  | | |   / _ \ (__| ' <| |__ | |\__ \ | |  
  |_| |_|_\_/ \_\___|_|\_\____|___|___/ |_|  
";
const SUBTITLE: &str = "✧ ✧ ✧  TRACKLIST  ✧ ✧ ✧";

pub struct Renderer {
    stylist: Box<dyn Stylist>,
}

impl Renderer {
    pub fn new(stylist: Box<dyn Stylist>) -> Self {
        Self { stylist }
    }

    pub fn ansi() -> Self {
        Self::new(Box::new(AnsiStylist))
    }

    pub fn plain() -> Self {
        Self::new(Box::new(PlainStylist))
    }

    fn paint(&self, role: Role, text: &str) -> String {
        self.stylist.paint(role, text)
    }

    pub fn render_header(&self) -> Vec<String> {
        let mut lines: Vec<String> = BANNER
            .lines()
            .map(|line| self.paint(Role::Banner, line))
            .collect();
        lines.push(String::new());
        lines.push(SUBTITLE.to_string());
        lines.push(String::new());
        lines
    }

    /// Format one entry of the list.
    ///
    /// The current track always shows in full; in secret mode anything not yet
    /// revealed is masked.
    pub fn render_track(
        &self,
        index: usize,
        track: &Track,
        is_current: bool,
        secret_mode: bool,
        revealed: &RevealedSet,
    ) -> String {
        let number = self.paint(Role::Number, &format!("{:02}", index + 1));

        if is_current {
            return format!(
                "{}{} | {} - {}",
                CURRENT_MARKER,
                number,
                self.paint(Role::CurrentArtist, &track.artist),
                self.paint(Role::Title, &track.title),
            );
        }

        if secret_mode && !revealed.contains(index) {
            return format!("  {} | {}", number, self.paint(Role::Masked, MASK));
        }

        format!(
            "  {} | {} - {}",
            number,
            self.paint(Role::Artist, &track.artist),
            self.paint(Role::Title, &track.title),
        )
    }

    /// `None` when there is nothing to measure against (empty list).
    pub fn render_progress_bar(&self, current: usize, total: usize, width: usize) -> Option<String> {
        if total == 0 {
            return None;
        }

        let current = current.min(total);
        let width = width.min(MAX_PROGRESS_WIDTH);
        let filled = filled_glyphs(current, total, width);
        let bar: String = std::iter::repeat(FILLED_GLYPH)
            .take(filled)
            .chain(std::iter::repeat(EMPTY_GLYPH).take(width - filled))
            .collect();
        let percentage = current as f64 / total as f64 * 100.0;

        Some(format!(
            "{}[{}] {}",
            self.paint(Role::ProgressLabel, "Progress: "),
            self.paint(Role::ProgressBar, &bar),
            self.paint(Role::Percentage, &format!("{:.1}%", percentage)),
        ))
    }

    pub fn render_now_playing(&self, track: &Track) -> String {
        self.paint(Role::NowPlaying, &format!("Now Playing: {}", track))
    }

    pub fn render_prompt(&self, text: &str) -> String {
        self.paint(Role::Prompt, text)
    }

    pub fn render_notice(&self, text: &str) -> String {
        self.paint(Role::Notice, text)
    }

    pub fn render_total(&self, count: usize) -> String {
        self.paint(Role::Total, &format!("Total tracks: {}", count))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::ansi()
    }
}

/// floor(width * current / total), assuming total > 0 and current <= total
pub fn filled_glyphs(current: usize, total: usize, width: usize) -> usize {
    (width as u128 * current as u128 / total as u128) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(line: &str, glyph: char) -> usize {
        line.chars().filter(|c| *c == glyph).count()
    }

    #[test]
    fn test_normal_track_line() {
        let renderer = Renderer::plain();
        let line = renderer.render_track(0, &Track::new("Batu", "Zeal"), false, false, &RevealedSet::new());
        assert_eq!(line, "  01 | Batu - Zeal");
    }

    #[test]
    fn test_current_track_line() {
        let renderer = Renderer::plain();
        let line = renderer.render_track(11, &Track::new("Amaliah", "Labyrinth"), true, false, &RevealedSet::new());
        assert_eq!(line, "▶ 12 | Amaliah - Labyrinth");
    }

    #[test]
    fn test_current_is_never_masked() {
        let renderer = Renderer::plain();
        let track = Track::new("Ploy", "Ramos");
        for index in 0..25 {
            let line = renderer.render_track(index, &track, true, true, &RevealedSet::new());
            assert!(line.starts_with(CURRENT_MARKER));
            assert!(line.contains("Ploy - Ramos"));
            assert!(!line.contains(MASK));
        }
    }

    #[test]
    fn test_secret_masks_unrevealed() {
        let renderer = Renderer::plain();
        let track = Track::new("Forest Drive West", "Cut and Run");
        let line = renderer.render_track(3, &track, false, true, &RevealedSet::new());
        assert_eq!(line, "  04 | ??? - ???");
        assert!(!line.contains("Forest Drive West"));
        assert!(!line.contains("Cut and Run"));
    }

    #[test]
    fn test_secret_shows_revealed() {
        let renderer = Renderer::plain();
        let mut revealed = RevealedSet::new();
        revealed.reveal(3);
        let line = renderer.render_track(3, &Track::new("Danvers", "Cascade"), false, true, &revealed);
        assert_eq!(line, "  04 | Danvers - Cascade");
    }

    #[test]
    fn test_revealed_ignored_outside_secret_mode() {
        let renderer = Renderer::plain();
        let line = renderer.render_track(7, &Track::new("Tom VR", "Function"), false, false, &RevealedSet::new());
        assert_eq!(line, "  08 | Tom VR - Function");
    }

    #[test]
    fn test_progress_bar_fill() {
        let renderer = Renderer::plain();
        let line = renderer.render_progress_bar(1, 3, 40).unwrap();
        assert_eq!(count(&line, FILLED_GLYPH), 13);
        assert_eq!(count(&line, EMPTY_GLYPH), 27);
        assert!(line.ends_with("33.3%"));
        assert!(line.starts_with("Progress: ["));
    }

    #[test]
    fn test_progress_bar_floor_matches_formula() {
        let renderer = Renderer::plain();
        for total in 1..=20 {
            for current in 0..=total {
                let line = renderer.render_progress_bar(current, total, 40).unwrap();
                assert_eq!(count(&line, FILLED_GLYPH), 40 * current / total);
                assert_eq!(count(&line, FILLED_GLYPH) + count(&line, EMPTY_GLYPH), 40);
            }
        }
    }

    #[test]
    fn test_progress_bar_complete() {
        let renderer = Renderer::plain();
        let line = renderer.render_progress_bar(20, 20, 40).unwrap();
        assert_eq!(count(&line, FILLED_GLYPH), 40);
        assert_eq!(count(&line, EMPTY_GLYPH), 0);
        assert!(line.ends_with("100.0%"));
    }

    #[test]
    fn test_progress_bar_empty_list() {
        assert_eq!(Renderer::plain().render_progress_bar(0, 0, 40), None);
    }

    #[test]
    fn test_progress_bar_clamps_overshoot() {
        let line = Renderer::plain().render_progress_bar(5, 2, 10).unwrap();
        assert_eq!(count(&line, FILLED_GLYPH), 10);
        assert!(line.ends_with("100.0%"));
    }

    #[test]
    fn test_progress_bar_width_is_clamped() {
        let line = Renderer::plain().render_progress_bar(1, 2, 4_611_686_018_427_387_904).unwrap();
        assert_eq!(count(&line, FILLED_GLYPH), MAX_PROGRESS_WIDTH / 2);
        assert_eq!(count(&line, FILLED_GLYPH) + count(&line, EMPTY_GLYPH), MAX_PROGRESS_WIDTH);
    }

    #[test]
    fn test_filled_glyphs_does_not_overflow() {
        assert_eq!(filled_glyphs(usize::MAX, usize::MAX, usize::MAX), usize::MAX);
        assert_eq!(filled_glyphs(1, 4, 40), 10);
    }

    #[test]
    fn test_now_playing_and_total() {
        let renderer = Renderer::plain();
        assert_eq!(renderer.render_now_playing(&Track::new("A", "T1")), "Now Playing: A - T1");
        assert_eq!(renderer.render_total(20), "Total tracks: 20");
    }

    #[test]
    fn test_header_has_subtitle() {
        let header = Renderer::plain().render_header();
        assert!(header.iter().any(|line| line == SUBTITLE));
        assert!(header.len() > 4);
    }
}
