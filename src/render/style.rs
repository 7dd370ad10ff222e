// Semantic styling - the renderer says *what* a piece of text is,
// a Stylist decides how that looks on the current output

use crossterm::style::{style, Color, Stylize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Banner,
    Number,
    Artist,
    CurrentArtist,
    Title,
    Masked,
    ProgressLabel,
    ProgressBar,
    Percentage,
    NowPlaying,
    Prompt,
    Notice,
    Total,
}

pub trait Stylist {
    fn paint(&self, role: Role, text: &str) -> String;
}

/// Bright ANSI colors via crossterm
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStylist;

impl AnsiStylist {
    pub fn color(role: Role) -> Color {
        match role {
            Role::Banner | Role::Title | Role::ProgressBar => Color::Cyan,
            Role::Number | Role::Percentage | Role::Prompt | Role::Total => Color::Yellow,
            Role::Artist | Role::Masked => Color::White,
            Role::CurrentArtist | Role::NowPlaying => Color::Green,
            Role::ProgressLabel => Color::Blue,
            Role::Notice => Color::Magenta,
        }
    }
}

impl Stylist for AnsiStylist {
    fn paint(&self, role: Role, text: &str) -> String {
        style(text).with(Self::color(role)).to_string()
    }
}

/// No escape codes at all - for NO_COLOR, pipes and tests
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStylist;

impl Stylist for PlainStylist {
    fn paint(&self, _role: Role, text: &str) -> String {
        text.to_string()
    }
}
