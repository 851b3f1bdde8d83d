//! # Console
//!
//! Line-oriented operator I/O. Generic over reader and writer so tests can
//! drive a whole session from a `Cursor`.
//!
//! The console is also the [`Prompt`] the scan processor talks to:
//!
//! ```text
//! Removing Bolt. Enter quantity: [1] ⏎        → Value("1")   (suggestion)
//! Removing Bolt. Enter quantity: [1] 3⏎       → Value("3")
//! New item detected (ABC123)! Enter item name: ⏎ → Value("")
//! <end of input>                              → Cancelled
//! ```

use std::io::{self, BufRead, Write};

use stockscan_core::prompt::{Prompt, PromptReply, PromptRequest};
use tracing::{debug, warn};

/// Operator console.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps a reader and a writer.
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Reads one line without its line ending.
    ///
    /// ## Returns
    /// * `Ok(Some(line))` - A line (possibly empty)
    /// * `Ok(None)` - End of input
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prints `label` without a newline and reads the answer.
    pub fn ask_line(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} ", label)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prints a line.
    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", text.as_ref())
    }

    /// Prints an operator notification.
    pub fn notify(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "» {}", text.as_ref())
    }

    /// Prints an error notification.
    pub fn alert(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "! {}", text.as_ref())
    }

    /// Prints an empty line.
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Asks `request`, asking again while `discard` matches the raw line.
    ///
    /// An empty answer takes the request's suggestion, if any. End of input
    /// or a console failure cancels.
    pub fn ask_filtered<F>(&mut self, request: &PromptRequest, mut discard: F) -> PromptReply
    where
        F: FnMut(&str) -> bool,
    {
        let label = match request.suggestion() {
            Some(suggestion) => format!("{} [{}]", request, suggestion),
            None => request.to_string(),
        };

        loop {
            match self.ask_line(&label) {
                Ok(Some(answer)) if discard(&answer) => {
                    debug!(answer = %answer, "Discarded prompt answer");
                }
                Ok(Some(answer)) if answer.is_empty() => {
                    return match request.suggestion() {
                        Some(suggestion) => PromptReply::Value(suggestion.to_string()),
                        None => PromptReply::Value(answer),
                    };
                }
                Ok(Some(answer)) => return PromptReply::Value(answer),
                Ok(None) => return PromptReply::Cancelled,
                Err(e) => {
                    warn!(error = %e, "Prompt failed, treating as cancelled");
                    return PromptReply::Cancelled;
                }
            }
        }
    }

    /// Consumes the console and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompt for Console<R, W> {
    fn ask(&mut self, request: &PromptRequest) -> PromptReply {
        self.ask_filtered(request, |_| false)
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
    fn test_read_line_strips_line_endings() {
        let mut c = console("one\r\ntwo\n\nlast");
        assert_eq!(c.read_line().unwrap().as_deref(), Some("one"));
        assert_eq!(c.read_line().unwrap().as_deref(), Some("two"));
        assert_eq!(c.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(c.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(c.read_line().unwrap(), None);
    }

    #[test]
    fn test_prompt_shows_request_and_reads_answer() {
        let mut c = console("Bolt\n");
        let reply = c.ask(&PromptRequest::ItemName {
            id: "ABC123".to_string(),
        });

        assert_eq!(reply, PromptReply::Value("Bolt".to_string()));
        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out, "New item detected (ABC123)! Enter item name: ");
    }

    #[test]
    fn test_empty_answer_takes_suggestion() {
        let mut c = console("\n");
        let reply = c.ask(&PromptRequest::removal("Bolt"));

        assert_eq!(reply, PromptReply::Value("1".to_string()));
        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out, "Removing Bolt. Enter quantity: [1] ");
    }

    #[test]
    fn test_empty_answer_without_suggestion_stays_empty() {
        let mut c = console("\n");
        let reply = c.ask(&PromptRequest::AdminName);
        assert_eq!(reply, PromptReply::Value(String::new()));
    }

    #[test]
    fn test_discarded_answer_is_asked_again() {
        let mut c = console("ABC123\n3\n");
        let reply = c.ask_filtered(&PromptRequest::removal("Bolt"), |line| line == "ABC123");

        assert_eq!(reply, PromptReply::Value("3".to_string()));
        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out.matches("Removing Bolt. Enter quantity: [1] ").count(), 2);
    }

    #[test]
    fn test_end_of_input_cancels() {
        let mut c = console("");
        assert_eq!(c.ask(&PromptRequest::removal("Bolt")), PromptReply::Cancelled);
    }
}
