// Mode selection - which of the four presentations this run gets
// Precedence: secret > play > current > static

use crate::display::{Acknowledgment, DisplayLoop, RevealedSet, Terminal};
use crate::error::Result;
use tracing::{debug, info, warn};

pub const SECRET_NOTICE: &str = "🎵 SECRET MODE: Tracks will be revealed as they play! 🎵";
pub const NEXT_TRACK_PROMPT: &str = "Press Enter for next track...";

/// The raw switches from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeFlags {
    pub play: bool,
    pub current: Option<i64>,
    pub secret: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Whole list, animated, nothing highlighted
    Static,
    /// One track highlighted, with the progress bar
    Current(usize),
    /// Step through every track, waiting for enter between them
    StepPlayback,
    /// Like step playback, but unplayed tracks stay hidden
    SecretPlayback,
}

impl Mode {
    pub fn select(flags: &ModeFlags, track_count: usize) -> Self {
        if flags.secret {
            return Mode::SecretPlayback;
        }
        if flags.play {
            return Mode::StepPlayback;
        }

        match flags.current {
            Some(index) => match usize::try_from(index) {
                Ok(index) if index < track_count => Mode::Current(index),
                _ => {
                    warn!(
                        "--current {} is outside 0..{}, showing the full list instead",
                        index, track_count
                    );
                    Mode::Static
                }
            },
            None => Mode::Static,
        }
    }

    pub fn run<T: Terminal>(self, screen: &mut DisplayLoop<'_, T>) -> Result<()> {
        let count = screen.tracks().len();
        info!("Running {:?} over {} tracks", self, count);
        match self {
            Mode::Static => static_display(screen),
            Mode::Current(index) => screen.render_full_list(Some(index), false, false, &RevealedSet::new()),
            Mode::StepPlayback => step_playback(screen),
            Mode::SecretPlayback => secret_playback(screen).map(|_| ()),
        }
    }
}

fn static_display<T: Terminal>(screen: &mut DisplayLoop<'_, T>) -> Result<()> {
    screen.render_full_list(None, true, false, &RevealedSet::new())?;

    let total = screen.renderer().render_total(screen.tracks().len());
    screen.write_line("")?;
    screen.write_line(&total)
}

fn step_playback<T: Terminal>(screen: &mut DisplayLoop<'_, T>) -> Result<()> {
    for cursor in 0..screen.tracks().len() {
        screen.render_full_list(Some(cursor), false, false, &RevealedSet::new())?;
        announce(screen, cursor)?;

        if screen.acknowledge(NEXT_TRACK_PROMPT)? == Acknowledgment::Closed {
            debug!("Input closed at track {}, stopping playback", cursor);
            break;
        }
    }
    Ok(())
}

/// Returns the revealed set as it stood when playback ended.
fn secret_playback<T: Terminal>(screen: &mut DisplayLoop<'_, T>) -> Result<RevealedSet> {
    let notice = screen.renderer().render_notice(SECRET_NOTICE);
    screen.write_line(&notice)?;
    let intro = screen.settings().secret_intro;
    screen.pause(intro);

    let total = screen.tracks().len();
    let mut revealed = RevealedSet::new();

    for cursor in 0..total {
        revealed.reveal(cursor);
        screen.render_full_list(Some(cursor), false, true, &revealed)?;
        announce(screen, cursor)?;

        let next = if cursor + 1 < total { "next secret track" } else { "finish" };
        let prompt = format!("Press Enter to reveal the {}...", next);
        if screen.acknowledge(&prompt)? == Acknowledgment::Closed {
            debug!("Input closed at track {}, stopping secret playback", cursor);
            break;
        }
    }
    Ok(revealed)
}

fn announce<T: Terminal>(screen: &mut DisplayLoop<'_, T>, cursor: usize) -> Result<()> {
    let Some(track) = screen.tracks().get(cursor) else {
        return Ok(());
    };
    debug!("Now playing {}: {}", cursor, track);
    let line = screen.renderer().render_now_playing(track);
    screen.write_line("")?;
    screen.write_line(&line)
}
