//! Line sources that feed an interpreter: an interactive reader and a command file.

use crate::error::SessionError;
use crate::interpreter::RobotInterpreter;
use std::borrow::Cow;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

/// The sentinel that ends a session. It never reaches the interpreter.
pub const EXIT: &str = "EXIT";

/// Returns `true` if `line` is the EXIT sentinel, ignoring case and surrounding whitespace.
pub fn is_exit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(EXIT)
}

/// Decodes one raw line, replacing invalid UTF-8 and dropping the line terminator.
fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes)
}

/// Couples an interpreter with the writer its output lines go to.
pub struct Session<W: Write> {
    interpreter: RobotInterpreter,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(interpreter: RobotInterpreter, out: W) -> Self {
        Self { interpreter, out }
    }

    pub fn interpreter(&self) -> &RobotInterpreter {
        &self.interpreter
    }

    /// Consumes the session, returning the interpreter and the writer.
    pub fn into_parts(self) -> (RobotInterpreter, W) {
        (self.interpreter, self.out)
    }

    /// Executes one line and writes the report or diagnostic it produced, if any.
    pub fn feed(&mut self, line: &str) -> Result<(), SessionError> {
        match self.interpreter.execute(line) {
            Ok(Some(report)) => writeln!(self.out, "{report}")?,
            Ok(None) => {}
            Err(err) => writeln!(self.out, "{err}")?,
        }
        self.out.flush()?;
        Ok(())
    }

    /// Reads commands from `input` until EXIT or end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced, so a garbled line is
    /// rejected like any other unknown command.
    pub fn run_console<R: BufRead>(&mut self, mut input: R) -> Result<(), SessionError> {
        info!("reading commands from console");
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = decode_line(&buf);
            if is_exit(&line) {
                break;
            }
            self.feed(&line)?;
        }
        info!(state = ?self.interpreter.state(), "console session finished");
        Ok(())
    }

    /// Runs every line of the file at `path`, echoing each one before it executes.
    ///
    /// The EXIT line is echoed too, then reading stops. Returns
    /// [`SessionError::MissingInputFile`] without executing anything if `path`
    /// is not a file. Invalid UTF-8 is replaced line by line.
    pub fn run_file(&mut self, path: &Path) -> Result<(), SessionError> {
        if !path.is_file() {
            return Err(SessionError::MissingInputFile);
        }
        info!(path = %path.display(), "reading commands from file");
        let bytes = fs::read(path)?;
        let body = bytes.strip_suffix(b"\n").unwrap_or(&bytes[..]);
        let lines = (!bytes.is_empty())
            .then_some(body)
            .into_iter()
            .flat_map(|body| body.split(|&b| b == b'\n'))
            .map(decode_line);
        for line in lines {
            let line = line.as_ref();
            writeln!(self.out, "{line}")?;
            if is_exit(line) {
                break;
            }
            self.feed(line)?;
        }
        self.out.flush()?;
        info!(state = ?self.interpreter.state(), "file session finished");
        Ok(())
    }
}
