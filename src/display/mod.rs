// Display loop - walks the tracklist and pushes rendered lines to a terminal
// Owns the playback cursor and the revealed set for the length of one run

mod terminal;

pub use terminal::{Acknowledgment, ConsoleTerminal, Terminal};

use crate::config::Config;
use crate::error::Result;
use crate::render::{Renderer, MAX_PROGRESS_WIDTH};
use crate::tracks::Tracklist;
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, warn};

/// Indices already played in secret mode - only ever grows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealedSet {
    indices: BTreeSet<usize>,
}

impl RevealedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reveal(&mut self, index: usize) {
        self.indices.insert(index);
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct DisplaySettings {
    pub animation_delay: Duration,
    pub progress_width: usize,
    pub secret_intro: Duration,
    pub clear_screen: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for DisplaySettings {
    fn from(config: &Config) -> Self {
        let mut progress_width = config.display.progress_width;
        if progress_width > MAX_PROGRESS_WIDTH {
            warn!(
                "progress_width {} is too wide, using {}",
                progress_width, MAX_PROGRESS_WIDTH
            );
            progress_width = MAX_PROGRESS_WIDTH;
        }

        Self {
            animation_delay: Duration::from_millis(config.display.animation_delay_ms),
            progress_width,
            secret_intro: Duration::from_millis(config.display.secret_intro_ms),
            clear_screen: config.display.clear_screen,
        }
    }
}

pub struct DisplayLoop<'a, T: Terminal> {
    tracks: &'a Tracklist,
    renderer: &'a Renderer,
    terminal: T,
    settings: DisplaySettings,
}

impl<'a, T: Terminal> DisplayLoop<'a, T> {
    pub fn new(tracks: &'a Tracklist, renderer: &'a Renderer, terminal: T, settings: DisplaySettings) -> Self {
        Self {
            tracks,
            renderer,
            terminal,
            settings,
        }
    }

    pub fn tracks(&self) -> &Tracklist {
        self.tracks
    }

    pub fn renderer(&self) -> &Renderer {
        self.renderer
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// Redraw the whole screen: header, every track, and the progress bar when
    /// something is playing.
    pub fn render_full_list(
        &mut self,
        cursor: Option<usize>,
        animate: bool,
        secret_mode: bool,
        revealed: &RevealedSet,
    ) -> Result<()> {
        if self.settings.clear_screen {
            self.terminal.clear()?;
        }

        for line in self.renderer.render_header() {
            self.terminal.write_line(&line)?;
        }

        for (index, track) in self.tracks.iter().enumerate() {
            let is_current = cursor == Some(index);
            let line = self
                .renderer
                .render_track(index, track, is_current, secret_mode, revealed);
            self.terminal.write_line(&line)?;

            if animate && !is_current {
                self.terminal.pause(self.settings.animation_delay);
            }
        }

        if let Some(current) = cursor {
            let bar = self.renderer.render_progress_bar(
                current + 1,
                self.tracks.len(),
                self.settings.progress_width,
            );
            if let Some(bar) = bar {
                self.terminal.write_line("")?;
                self.terminal.write_line(&bar)?;
            }
        }

        debug!(?cursor, animate, secret_mode, revealed = revealed.len(), "rendered tracklist");
        Ok(())
    }

    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.terminal.write_line(line)
    }

    pub fn pause(&mut self, duration: Duration) {
        self.terminal.pause(duration);
    }

    pub fn acknowledge(&mut self, prompt: &str) -> Result<Acknowledgment> {
        let prompt = self.renderer.render_prompt(prompt);
        self.terminal.acknowledge(&prompt)
    }
}
