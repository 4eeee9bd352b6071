//! Line-oriented console over any reader/writer pair

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::constants::BODY_TERMINATOR;

/// Prompting helper. Generic so the shell can be driven by in-memory
/// buffers in tests and by stdin/stdout in the binary.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line without its line terminator; `None` at end of input
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
        }
        if line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Prints `label` (no newline) and reads the answer
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Yes/no question. Only an answer starting with the opposite letter of
    /// the default changes the outcome; anything else keeps the default.
    pub fn confirm(&mut self, label: &str, default: bool) -> Result<bool> {
        let answer = self.prompt(label)?.unwrap_or_default();
        let first = answer.chars().next().map(|c| c.to_ascii_lowercase());
        Ok(match (default, first) {
            (false, Some('y')) => true,
            (true, Some('n')) => false,
            _ => default,
        })
    }

    /// Reads lines until one equals the terminator or input ends, joined with `\n`
    pub fn read_multiline(&mut self) -> Result<String> {
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line == BODY_TERMINATOR {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    /// "Press Enter to continue..."
    pub fn pause(&mut self) -> Result<()> {
        write!(self.output, "\nPress Enter to continue...")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn read_line_strips_crlf_and_detects_eof() {
        let mut c = console("first\r\nsecond\nlast");
        assert_eq!(c.read_line().unwrap().as_deref(), Some("first"));
        assert_eq!(c.read_line().unwrap().as_deref(), Some("second"));
        assert_eq!(c.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(c.read_line().unwrap(), None);
    }

    #[test]
    fn prompt_writes_label() {
        let mut c = console("answer\n");
        assert_eq!(c.prompt("Question: ").unwrap().as_deref(), Some("answer"));
        assert_eq!(c.into_output(), b"Question: ");
    }

    #[test]
    fn confirm_respects_defaults() {
        let mut c = console("y\nYes\n\nn\nx\nN\n\n");
        assert!(c.confirm("", false).unwrap());
        assert!(c.confirm("", false).unwrap());
        assert!(!c.confirm("", false).unwrap());
        assert!(!c.confirm("", false).unwrap());
        assert!(c.confirm("", true).unwrap());
        assert!(!c.confirm("", true).unwrap());
        assert!(c.confirm("", true).unwrap());
        // end of input keeps the default
        assert!(c.confirm("", true).unwrap());
    }

    #[test]
    fn multiline_stops_at_terminator() {
        let mut c = console("{\r\n  \"a\": 1\n}\n@@@\nafter\n");
        assert_eq!(c.read_multiline().unwrap(), "{\n  \"a\": 1\n}");
        assert_eq!(c.read_line().unwrap().as_deref(), Some("after"));
    }

    #[test]
    fn multiline_stops_at_end_of_input() {
        let mut c = console("one\ntwo");
        assert_eq!(c.read_multiline().unwrap(), "one\ntwo");
    }

    #[test]
    fn terminator_must_be_the_whole_line() {
        let mut c = console("a @@@\n@@@ \n@@@\n");
        assert_eq!(c.read_multiline().unwrap(), "a @@@\n@@@ ");
    }
}
