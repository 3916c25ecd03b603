//! Input/output boundary of the assistant.
//!
//! The assistant only talks to the user through [`View`], so the command
//! handling can be driven by scripted input in tests.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Where messages go and where command lines come from.
pub trait View {
    /// Show one message to the user.
    fn display(&mut self, message: &str) -> io::Result<()>;

    /// Show `prompt` and read one line of input, without its line ending.
    ///
    /// Returns `None` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// View over a line reader and a writer, normally stdin and stdout.
pub struct ConsoleView<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleView<StdinLock<'static>, Stdout> {
    /// Console view bound to the process's stdin and stdout.
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for ConsoleView<StdinLock<'static>, Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    pub fn with_io(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> View for ConsoleView<R, W> {
    fn display(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", message)
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
