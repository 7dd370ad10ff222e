// The display loop's only window to the outside world
// Real runs use the console; tests swap in a recorder

use crate::error::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// What came back from a "press enter" wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgment {
    Continue,
    /// Input is gone (EOF) - nobody is left to press enter
    Closed,
}

pub trait Terminal {
    fn clear(&mut self) -> Result<()>;
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn pause(&mut self, duration: Duration);
    /// Show `prompt` and block until the user acknowledges it.
    fn acknowledge(&mut self, prompt: &str) -> Result<Acknowledgment>;
}

/// stdout + stdin, screen clearing through crossterm
pub struct ConsoleTerminal<W: Write, R: BufRead> {
    out: W,
    input: R,
}

impl ConsoleTerminal<io::Stdout, io::StdinLock<'static>> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stdin().lock())
    }
}

impl<W: Write, R: BufRead> ConsoleTerminal<W, R> {
    pub fn new(out: W, input: R) -> Self {
        Self { out, input }
    }

    pub fn into_inner(self) -> (W, R) {
        (self.out, self.input)
    }
}

impl<W: Write, R: BufRead> Terminal for ConsoleTerminal<W, R> {
    fn clear(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), Clear(ClearType::Purge), MoveTo(0, 0))?;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        // Flush first or the animation arrives all at once
        let _ = self.out.flush();
        std::thread::sleep(duration);
    }

    fn acknowledge(&mut self, prompt: &str) -> Result<Acknowledgment> {
        write!(self.out, "\n{}", prompt)?;
        self.out.flush()?;

        // Content is ignored, only the newline matters
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            writeln!(self.out)?;
            return Ok(Acknowledgment::Closed);
        }
        Ok(Acknowledgment::Continue)
    }
}
