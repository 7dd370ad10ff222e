// Tracklist Library - everything behind the `tracklist` binary
// Kept as a library so the display logic can be driven by a fake terminal in tests

pub mod config;   // settings file + defaults
pub mod display;  // the display loop and its terminal collaborator
pub mod error;    // typed errors for the library
pub mod logging;  // tracing setup + flush on exit
pub mod mode;     // CLI flags -> presentation mode
pub mod render;   // pure string formatting, no I/O
pub mod tracks;   // the track store

// Export the stuff the binary actually uses
pub use config::Config;
pub use display::{Acknowledgment, ConsoleTerminal, DisplayLoop, DisplaySettings, RevealedSet, Terminal};
pub use error::{Error, Result};
pub use mode::{Mode, ModeFlags};
pub use render::{AnsiStylist, PlainStylist, Renderer, Role, Stylist};
pub use tracks::{Track, Tracklist};
