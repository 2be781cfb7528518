//! Line-based console I/O.
//!
//! Everything interactive talks to a [`Console`] rather than to stdin/stdout
//! directly, so the session can be teed to a transcript file or driven by a
//! script in tests.

use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::DeckError;

/// A blocking, line-oriented terminal.
pub trait Console {
    /// Read one line without its line terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write one line, appending a newline.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

/// Read a line, turning end of input into [`DeckError::InputClosed`].
pub fn expect_line<C: Console + ?Sized>(console: &mut C) -> anyhow::Result<String> {
    match console.read_line()? {
        Some(line) => Ok(line),
        None => Err(DeckError::InputClosed.into()),
    }
}

/// Print a prompt and read the answer.
pub fn prompt<C: Console + ?Sized>(console: &mut C, message: &str) -> anyhow::Result<String> {
    console.write_line(message)?;
    expect_line(console)
}

/// The process terminal.
pub struct StdConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.stdin.lock().read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        strip_newline(&mut buf);
        Ok(Some(buf))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = self.stdout.lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}

fn strip_newline(buf: &mut String) {
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
}

/// Tees every line read from or written to the inner console into a
/// transcript file.
///
/// The file is reopened in append mode for every line, so it may be moved
/// away mid-session; the next line starts a fresh file at the same path.
/// Transcript failures are logged and never reach the inner console.
pub struct Transcript<C> {
    inner: C,
    path: PathBuf,
}

impl<C: Console> Transcript<C> {
    pub fn new(inner: C, path: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    fn record(&self, line: &str) {
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{line}"));
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), "transcript write failed: {e}");
        }
    }
}

impl<C: Console> Console for Transcript<C> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let line = self.inner.read_line()?;
        if let Some(entry) = &line {
            self.record(entry.trim_end());
        }
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_line(line)?;
        self.record(line);
        Ok(())
    }
}

/// A console that replays queued input and records output.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Every line written so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Whether any written line contains `needle`.
    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|l| l.contains(needle))
    }

    /// Input lines not yet consumed.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_newline_variants() {
        let mut s = "hello\r\n".to_string();
        strip_newline(&mut s);
        assert_eq!(s, "hello");

        let mut s = "tail  \n".to_string();
        strip_newline(&mut s);
        assert_eq!(s, "tail  ");

        let mut s = "no newline".to_string();
        strip_newline(&mut s);
        assert_eq!(s, "no newline");
    }

    #[test]
    fn scripted_console_replays_and_records() {
        let mut console = ScriptedConsole::new(["first", "second"]);
        assert_eq!(prompt(&mut console, "Name?").unwrap(), "first");
        assert_eq!(console.read_line().unwrap().as_deref(), Some("second"));
        assert_eq!(console.read_line().unwrap(), None);
        assert_eq!(console.output(), ["Name?"]);
    }

    #[test]
    fn expect_line_at_end_of_input() {
        let mut console = ScriptedConsole::default();
        let err = expect_line(&mut console).unwrap_err();
        assert_eq!(err.downcast_ref::<DeckError>(), Some(&DeckError::InputClosed));
    }

    #[test]
    fn transcript_tees_output_and_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.txt");

        let mut console = Transcript::new(ScriptedConsole::new(["answer   "]), &path);
        console.write_line("Question?").unwrap();
        assert_eq!(console.read_line().unwrap().as_deref(), Some("answer   "));

        let inner = console.into_inner();
        assert_eq!(inner.output(), ["Question?"]);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Question?\nanswer\n"
        );
    }

    #[test]
    fn transcript_recreates_moved_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.txt");
        let archived = dir.path().join("archived.txt");

        let mut console = Transcript::new(ScriptedConsole::default(), &path);
        console.write_line("before").unwrap();
        std::fs::rename(&path, &archived).unwrap();
        console.write_line("after").unwrap();

        assert_eq!(std::fs::read_to_string(&archived).unwrap(), "before\n");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "after\n");
    }

    #[test]
    fn transcript_failure_does_not_break_console() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("session.txt");

        let mut console = Transcript::new(ScriptedConsole::default(), path);
        console.write_line("still printed").unwrap();
        assert_eq!(console.into_inner().output(), ["still printed"]);
    }
}
