// tracklist - show a DJ set in the terminal
// Static list, one highlighted track, step-through playback, or secret reveal mode

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Attribute;
use std::path::PathBuf;
use tracing::{debug, info};
use tracklist::{logging, Config, ConsoleTerminal, DisplayLoop, DisplaySettings, Mode, ModeFlags, Renderer, Tracklist};

#[derive(Parser)]
#[command(name = "tracklist")]
#[command(about = "Display your tracklist in a beautiful way")]
struct Args {
    /// Play through the tracklist track by track
    #[arg(long)]
    play: bool,

    /// Show which track is currently playing (start counting from 0)
    #[arg(long, value_name = "INDEX", allow_negative_numbers = true)]
    current: Option<i64>,

    /// Hide upcoming tracks until they're played
    #[arg(long)]
    secret: bool,

    /// Read tracks from a file ("Artist - Title" per line) instead of the built-in set
    #[arg(long, value_name = "FILE")]
    tracklist: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable colored output (also honors NO_COLOR)
    #[arg(long)]
    no_color: bool,

    /// Enable developer logging (debug output to logs/tracklist.log)
    #[arg(long)]
    dev: bool,
}

impl Args {
    fn mode_flags(&self) -> ModeFlags {
        ModeFlags {
            play: self.play,
            current: self.current,
            secret: self.secret,
        }
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    if let Some(path) = &args.tracklist {
        config.tracklist.path = Some(path.clone());
    }
    if args.no_color || std::env::var_os("NO_COLOR").is_some() {
        config.display.color = false;
    }

    Ok(config)
}

fn load_tracklist(config: &Config) -> Result<Tracklist> {
    match &config.tracklist.path {
        Some(path) => Tracklist::from_file(path)
            .with_context(|| format!("loading tracklist {}", path.display())),
        None => {
            info!("Using the built-in tracklist");
            Ok(Tracklist::embedded())
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.dev)?;

    // Ctrl+C while waiting for enter: reset colors, say bye, flush logs, exit cleanly
    ctrlc::set_handler(|| {
        print!("{}\nExiting...\n\n", Attribute::Reset);
        logging::flush();
        std::process::exit(0);
    })
    .context("installing Ctrl+C handler")?;

    let outcome = run(&args);
    logging::flush();
    outcome
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    debug!(?config, "configuration ready");

    let tracks = load_tracklist(&config)?;
    let renderer = if config.display.color {
        Renderer::ansi()
    } else {
        Renderer::plain()
    };

    let mode = Mode::select(&args.mode_flags(), tracks.len());
    let mut screen = DisplayLoop::new(
        &tracks,
        &renderer,
        ConsoleTerminal::stdio(),
        DisplaySettings::from(&config),
    );
    mode.run(&mut screen)?;

    Ok(())
}
