//! # Terminal Prompts
//!
//! [`Terminal`] writes a prompt, reads one line and repeats until the answer
//! satisfies a [`Validate`] rule. It owns any `BufRead` reader and `Write`
//! sink, so the same code talks to the real console
//! ([`Terminal::stdio`]) or to an in-memory script of answers in tests.
//!
//! ## Features
//! - One generic retry loop, [`Terminal::ask`], behind the integer, float
//!   and menu queries.
//! - A one-shot yes/no question, [`Terminal::ask_bool`], that never
//!   reprompts.
//! - Diagnostics are printed on their own line before the prompt is shown
//!   again.
//!
//! ## Usage
//!
//! ### Scripted answers
//! ```rust
//! use askline_core::Terminal;
//! use std::io::Cursor;
//!
//! let mut terminal = Terminal::new(Cursor::new("abc\n42\n"), Vec::new());
//! let n = terminal.ask_int("Pick a number", 0, 100, None).unwrap();
//! assert_eq!(n, 42);
//!
//! let (_, output) = terminal.into_inner();
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "Pick a number [Min=0, Max=100]: \
//!      Value Error. Requires an integer between 0 and 100\n\
//!      Pick a number [Min=0, Max=100]: "
//! );
//! ```
//!
//! ### Console
//! ```rust,no_run
//! use askline_core::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! if terminal.ask_bool("Proceed?", true)? {
//!     let pi = terminal.ask_float("Enter value for Pi", 3.0, 3.2, Some(3.14))?;
//!     println!("{pi}");
//! }
//! # Ok::<(), askline_core::Error>(())
//! ```

use std::{
    fmt::{Debug, Display},
    io::{self, BufRead, StdinLock, StdoutLock, Write},
};

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::utils::format;
use crate::utils::sanitize::{Bounded, FilterError, Validate, YesNo};

/// A line-oriented console: prompts go to `writer`, answers come from
/// `reader`.
pub struct Terminal<R, W> {
    reader: R,
    writer: W,
}

impl Terminal<StdinLock<'static>, StdoutLock<'static>> {
    /// Binds the process stdin and stdout.
    pub fn stdio() -> Self {
        Terminal::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Terminal { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Writes `prompt` without a newline, flushes, and reads one line with
    /// its line ending removed.
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        trace!(line = %line, "read answer");
        Ok(line)
    }

    fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }

    /// Prints `prompt` and loops until an answer passes `rule`.
    ///
    /// - An empty line with no `default` is reported as
    ///   [`FilterError::Empty`].
    /// - An empty line with a `default` adopts it as the candidate. It is
    ///   only checked, not parsed, so an out-of-range default is rejected
    ///   like any other value.
    /// - Anything else is parsed then checked.
    ///
    /// There is no retry limit. The loop only ends early if the input
    /// closes ([`Error::InputClosed`]) or an I/O call fails.
    pub fn ask<V>(&mut self, prompt: &str, default: Option<V::Output>, rule: &V) -> Result<V::Output>
    where
        V: Validate,
        V::Output: Clone + Debug,
    {
        loop {
            let line = self.read_line(prompt)?;

            let candidate = match (line.is_empty(), &default) {
                (true, None) => Err(FilterError::Empty),
                (true, Some(value)) => rule.check(value).map(|()| value.clone()),
                (false, _) => rule.validate(&line),
            };

            match candidate {
                Ok(value) => {
                    debug!(?value, "answer accepted");
                    return Ok(value);
                }
                Err(e) => {
                    debug!(error = %e, "answer rejected");
                    self.say(&e)?;
                }
            }
        }
    }

    /// Asks a yes/no question and answers after exactly one line.
    ///
    /// See [`YesNo`] for how the line is interpreted.
    pub fn ask_bool(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let line = self.read_line(&format::bool_prompt(prompt, default))?;
        let answer = YesNo::new(default).interpret(&line);
        debug!(answer, default, "yes/no answered");
        Ok(answer)
    }

    /// Asks for an integer in the inclusive range `[min, max]`.
    pub fn ask_int(&mut self, prompt: &str, min: i64, max: i64, default: Option<i64>) -> Result<i64> {
        let prompt = format::range_prompt(prompt, &min, &max, default.as_ref());
        self.ask(&prompt, default, &Bounded::integer(min, max))
    }

    /// Asks for a float in the inclusive range `[min, max]`.
    pub fn ask_float(&mut self, prompt: &str, min: f64, max: f64, default: Option<f64>) -> Result<f64> {
        let prompt = format::range_prompt(prompt, &min, &max, default.as_ref());
        self.ask(&prompt, default, &Bounded::float(min, max))
    }

    /// Lists `items` numbered from 1 and asks for one of them.
    ///
    /// `default` is one-based, like the listing. The answer is the
    /// zero-based index of the chosen item, or `None` for an empty menu, in
    /// which case nothing is printed or read.
    pub fn ask_menu<S: AsRef<str>>(
        &mut self,
        items: &[S],
        prompt: Option<&str>,
        default: usize,
    ) -> Result<Option<usize>> {
        if items.is_empty() {
            debug!("empty menu, nothing to choose");
            return Ok(None);
        }

        self.writer
            .write_all(format::menu_listing(items).as_bytes())?;

        let prompt = format::menu_prompt(prompt, default);
        let default = i64::try_from(default).unwrap_or(i64::MAX);
        let choice = self.ask(&prompt, Some(default), &Bounded::menu(items.len()))?;

        Ok(usize::try_from(choice - 1).ok())
    }
}

#[cfg(test)]
#[allow(clippy::approx_constant)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(terminal: Terminal<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        let (_, out) = terminal.into_inner();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_int_every_value_in_range() {
        for n in -5..=5 {
            let mut terminal = scripted(&format!("{}\n", n));
            assert_eq!(terminal.ask_int("n", -5, 5, None).unwrap(), n);
        }
    }

    #[test]
    fn test_int_bad_then_good() {
        let mut terminal = scripted("abc\n7\n");
        assert_eq!(terminal.ask_int("Enter an integer", 0, 10, None).unwrap(), 7);
        assert_eq!(
            output(terminal),
            "Enter an integer [Min=0, Max=10]: \
             Value Error. Requires an integer between 0 and 10\n\
             Enter an integer [Min=0, Max=10]: "
        );
    }

    #[test]
    fn test_int_empty_with_default() {
        let mut terminal = scripted("\n");
        let age = terminal.ask_int("How old are you?", 1, 100, Some(50)).unwrap();
        assert_eq!(age, 50);
        assert_eq!(output(terminal), "How old are you? [Min=1, Max=100][50]: ");
    }

    #[test]
    fn test_int_empty_without_default_reprompts() {
        let mut terminal = scripted("\n\n30\n");
        let age = terminal.ask_int("How old are you?", 1, 100, None).unwrap();
        assert_eq!(age, 30);

        let out = output(terminal);
        assert_eq!(out.matches("Invalid response\n").count(), 2);
        assert_eq!(out.matches("How old are you? [Min=1, Max=100]: ").count(), 3);
    }

    #[test]
    fn test_int_range_error_bounds_inclusive() {
        let mut terminal = scripted("0\n101\n100\n");
        assert_eq!(terminal.ask_int("Age", 1, 100, None).unwrap(), 100);
        assert_eq!(
            output(terminal)
                .matches("Invalid value. Requires an integer between 1 and 100\n")
                .count(),
            2
        );
    }

    #[test]
    fn test_int_out_of_range_default_is_rejected() {
        let mut terminal = scripted("\n5\n");
        assert_eq!(terminal.ask_int("n", 1, 10, Some(50)).unwrap(), 5);
        assert!(output(terminal).contains("Invalid value. Requires an integer between 1 and 10\n"));
    }

    #[test]
    fn test_int_whitespace_only_is_format_error() {
        let mut terminal = scripted("  \n3\n");
        assert_eq!(terminal.ask_int("n", 0, 10, Some(5)).unwrap(), 3);
        assert!(output(terminal).contains("Value Error. Requires an integer between 0 and 10\n"));
    }

    #[test]
    fn test_float_in_range() {
        let mut terminal = scripted("3.14\n");
        let pi = terminal.ask_float("Enter value for Pi", 3.0, 3.2, None).unwrap();
        assert_eq!(pi, 3.14);
        assert_eq!(output(terminal), "Enter value for Pi [Min=3.0, Max=3.2]: ");
    }

    #[test]
    fn test_float_out_of_range_then_valid() {
        let mut terminal = scripted("4.0\n3.1\n");
        let pi = terminal.ask_float("Enter value for Pi", 3.0, 3.2, None).unwrap();
        assert_eq!(pi, 3.1);
        assert!(output(terminal).contains("Invalid value. Requires a value between 3.0 and 3.2\n"));
    }

    #[test]
    fn test_float_default_and_format_error() {
        let mut terminal = scripted("pie\n\n");
        let pi = terminal
            .ask_float("Enter value for Pi", 3.0, 3.2, Some(3.14))
            .unwrap();
        assert_eq!(pi, 3.14);
        assert_eq!(
            output(terminal),
            "Enter value for Pi [Min=3.0, Max=3.2][3.14]: \
             Value Error. Requires a value between 3.0 and 3.2\n\
             Enter value for Pi [Min=3.0, Max=3.2][3.14]: "
        );
    }

    #[test]
    fn test_float_empty_without_default_reprompts() {
        let mut terminal = scripted("\n2.5\n");
        assert_eq!(terminal.ask_float("x", 0.0, 10.0, None).unwrap(), 2.5);
        assert!(output(terminal).contains("Invalid response\n"));
    }

    #[test]
    fn test_bool_default_true() {
        for (input, expected) in [("\n", true), ("n\n", false), ("xyz\n", false), ("Y\n", true)] {
            let mut terminal = scripted(input);
            assert_eq!(terminal.ask_bool("Proceed?", true).unwrap(), expected, "{:?}", input);
            assert_eq!(output(terminal), "Proceed? [Y/n]: ");
        }
    }

    #[test]
    fn test_bool_default_false() {
        for (input, expected) in [("\n", false), ("y\n", true), ("f\n", false), ("?\n", true)] {
            let mut terminal = scripted(input);
            assert_eq!(terminal.ask_bool("Are you tall?", false).unwrap(), expected, "{:?}", input);
            assert_eq!(output(terminal), "Are you tall? [N/y]: ");
        }
    }

    #[test]
    fn test_bool_reads_exactly_one_line() {
        let mut terminal = scripted("garbage\n5\n");
        assert!(!terminal.ask_bool("Proceed?", true).unwrap());
        assert_eq!(terminal.ask_int("n", 0, 10, None).unwrap(), 5);
    }

    #[test]
    fn test_menu_default() {
        let mut terminal = scripted("\n");
        let index = terminal
            .ask_menu(&["red", "green", "blue"], Some("Choose a colour"), 2)
            .unwrap();
        assert_eq!(index, Some(1));
        assert_eq!(
            output(terminal),
            "\n  1. red\n  2. green\n  3. blue\n\nChoose a colour [2]: "
        );
    }

    #[test]
    fn test_menu_range_errors_then_valid() {
        let mut terminal = scripted("5\n0\n2\n");
        let index = terminal.ask_menu(&["red", "green", "blue"], None, 1).unwrap();
        assert_eq!(index, Some(1));

        let out = output(terminal);
        assert_eq!(
            out.matches("Invalid. Requires a value between 1 and 3\n").count(),
            2
        );
        assert_eq!(out.matches("\nEnter the number of the item [1]: ").count(), 3);
        assert_eq!(out.matches("  1. red\n").count(), 1);
    }

    #[test]
    fn test_menu_format_error() {
        let mut terminal = scripted("green\n3\n");
        let index = terminal.ask_menu(&["red", "green", "blue"], None, 1).unwrap();
        assert_eq!(index, Some(2));
        assert!(output(terminal).contains("Value Error. Requires a value between 1 and 3\n"));
    }

    #[test]
    fn test_menu_empty_returns_sentinel_silently() {
        let mut terminal = scripted("1\n");
        let empty: [&str; 0] = [];
        assert_eq!(terminal.ask_menu(&empty, Some("Choose"), 2).unwrap(), None);

        let (mut reader, out) = terminal.into_inner();
        assert!(out.is_empty());
        let mut rest = String::new();
        reader.read_line(&mut rest).unwrap();
        assert_eq!(rest, "1\n");
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut terminal = scripted("\r\n");
        assert_eq!(terminal.ask_int("n", 0, 10, Some(4)).unwrap(), 4);

        let mut terminal = scripted("8\r\n");
        assert_eq!(terminal.ask_int("n", 0, 10, None).unwrap(), 8);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut terminal = scripted("9");
        assert_eq!(terminal.ask_int("n", 0, 10, None).unwrap(), 9);
    }

    #[test]
    fn test_input_closed() {
        let mut terminal = scripted("abc\n");
        let res = terminal.ask_int("n", 0, 10, None);
        assert!(matches!(res, Err(Error::InputClosed)));

        let mut terminal = scripted("");
        assert!(matches!(terminal.ask_bool("Proceed?", true), Err(Error::InputClosed)));
    }
}
