//! Query requests.
//!
//! Each struct carries the prompt text, the rule parameters and the default
//! of one question, so a question can be built once, tweaked with the
//! `with_*` methods and asked on any [`Terminal`].
//!
//! ```rust
//! use askline_core::{IntQuery, MenuQuery, Query, Terminal};
//! use std::io::Cursor;
//!
//! let mut terminal = Terminal::new(Cursor::new("\n\n"), Vec::new());
//!
//! let age = IntQuery::new("How old are you?", 1, 100).with_default(50);
//! assert_eq!(age.run(&mut terminal).unwrap(), 50);
//!
//! let colour = MenuQuery::new(["red", "green", "blue"]).with_default(2);
//! assert_eq!(colour.run(&mut terminal).unwrap(), Some(1));
//! ```

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::utils::terminal::Terminal;

/// A question that can be asked on a [`Terminal`].
pub trait Query {
    type Answer;

    fn run<R: BufRead, W: Write>(&self, terminal: &mut Terminal<R, W>) -> Result<Self::Answer>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoolQuery {
    pub prompt: String,
    pub default: bool,
}

impl BoolQuery {
    pub const DEFAULT_PROMPT: &'static str = "Proceed?";

    pub fn new(prompt: impl Into<String>, default: bool) -> Self {
        BoolQuery {
            prompt: prompt.into(),
            default,
        }
    }
}

impl Default for BoolQuery {
    fn default() -> Self {
        BoolQuery::new(Self::DEFAULT_PROMPT, true)
    }
}

impl Query for BoolQuery {
    type Answer = bool;

    fn run<R: BufRead, W: Write>(&self, terminal: &mut Terminal<R, W>) -> Result<bool> {
        terminal.ask_bool(&self.prompt, self.default)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntQuery {
    pub prompt: String,
    pub min: i64,
    pub max: i64,
    pub default: Option<i64>,
}

impl IntQuery {
    pub const DEFAULT_PROMPT: &'static str = "Enter an integer";
    pub const DEFAULT_MIN: i64 = 0;
    pub const DEFAULT_MAX: i64 = 10;

    pub fn new(prompt: impl Into<String>, min: i64, max: i64) -> Self {
        IntQuery {
            prompt: prompt.into(),
            min,
            max,
            default: None,
        }
    }

    pub fn with_default(mut self, default: i64) -> Self {
        self.default = Some(default);
        self
    }
}

impl Default for IntQuery {
    fn default() -> Self {
        IntQuery::new(Self::DEFAULT_PROMPT, Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}

impl Query for IntQuery {
    type Answer = i64;

    fn run<R: BufRead, W: Write>(&self, terminal: &mut Terminal<R, W>) -> Result<i64> {
        terminal.ask_int(&self.prompt, self.min, self.max, self.default)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatQuery {
    pub prompt: String,
    pub min: f64,
    pub max: f64,
    pub default: Option<f64>,
}

impl FloatQuery {
    pub const DEFAULT_PROMPT: &'static str = "Enter a float";
    pub const DEFAULT_MIN: f64 = 0.0;
    pub const DEFAULT_MAX: f64 = 10.0;

    pub fn new(prompt: impl Into<String>, min: f64, max: f64) -> Self {
        FloatQuery {
            prompt: prompt.into(),
            min,
            max,
            default: None,
        }
    }

    pub fn with_default(mut self, default: f64) -> Self {
        self.default = Some(default);
        self
    }
}

impl Default for FloatQuery {
    fn default() -> Self {
        FloatQuery::new(Self::DEFAULT_PROMPT, Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}

impl Query for FloatQuery {
    type Answer = f64;

    fn run<R: BufRead, W: Write>(&self, terminal: &mut Terminal<R, W>) -> Result<f64> {
        terminal.ask_float(&self.prompt, self.min, self.max, self.default)
    }
}

/// A single choice out of `items`.
///
/// `default` is one-based. The answer is a zero-based index, `None` when
/// there are no items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuQuery {
    pub items: Vec<String>,
    pub prompt: Option<String>,
    pub default: usize,
}

impl MenuQuery {
    pub const DEFAULT_CHOICE: usize = 1;

    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MenuQuery {
            items: items.into_iter().map(Into::into).collect(),
            prompt: None,
            default: Self::DEFAULT_CHOICE,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_default(mut self, default: usize) -> Self {
        self.default = default;
        self
    }

    /// Label of the item at a zero-based `index`.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }
}

impl Default for MenuQuery {
    fn default() -> Self {
        MenuQuery::new(Vec::<String>::new())
    }
}

impl Query for MenuQuery {
    type Answer = Option<usize>;

    fn run<R: BufRead, W: Write>(&self, terminal: &mut Terminal<R, W>) -> Result<Option<usize>> {
        terminal.ask_menu(&self.items, self.prompt.as_deref(), self.default)
    }
}
