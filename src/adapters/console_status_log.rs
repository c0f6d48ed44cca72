//! `StatusLog` implementation that writes tagged lines to a console stream.

use std::io::{self, Stdout, Write};

use crate::domain::StatusMessage;
use crate::ports::StatusLog;

/// Writes each status line followed by a flush, so progress shows up
/// before the next step starts.
pub struct ConsoleStatusLog<W: Write = Stdout> {
    out: W,
}

impl ConsoleStatusLog<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleStatusLog<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StatusLog for ConsoleStatusLog<W> {
    fn emit(&mut self, message: &StatusMessage) {
        // A closed stdout must not abort the copy.
        let _ = writeln!(self.out, "{}", message.tagged());
        let _ = self.out.flush();
    }
}
