//! # Answer Validation
//!
//! Rules that turn a line typed by the user into a typed value, or into a
//! [`FilterError`] that is printed before the question is asked again.
//!
//! A rule implements [`Validate`], which is split in two steps:
//! - [`Validate::parse`] reads the candidate text into a value,
//! - [`Validate::check`] decides whether that value is acceptable.
//!
//! The split lets a default value skip parsing and still go through
//! `check` (see [`crate::utils::Terminal::ask`]).
//!
//! ## Examples
//!
//! ### Bounded integer
//! ```rust
//! use askline_core::{Bounded, Validate};
//!
//! let rule = Bounded::integer(1, 100);
//! assert_eq!(rule.validate("42").unwrap(), 42);
//! assert_eq!(
//!     rule.validate("abc").unwrap_err().to_string(),
//!     "Value Error. Requires an integer between 1 and 100"
//! );
//! assert_eq!(
//!     rule.validate("101").unwrap_err().to_string(),
//!     "Invalid value. Requires an integer between 1 and 100"
//! );
//! ```
//!
//! ### Yes/no
//! ```rust
//! use askline_core::YesNo;
//!
//! assert!(YesNo::new(true).interpret(""));
//! assert!(!YesNo::new(true).interpret("nope"));
//! assert!(YesNo::new(false).interpret("maybe"));
//! ```
use std::{fmt::Display, str::FromStr};

use thiserror::Error;

use crate::utils::format::Literal;

/// First characters that mean "yes".
const YES: [char; 3] = ['y', 't', '1'];
/// First characters that mean "no".
const NO: [char; 3] = ['n', 'f', '0'];

/// Trait for answer validation.
///
/// `parse` turns trimmed candidate text into a value, `check` is the validity
/// predicate. Both report failure as the [`FilterError`] shown to the user.
pub trait Validate {
    type Output;

    fn parse(&self, candidate: &str) -> Result<Self::Output, FilterError>;

    fn check(&self, value: &Self::Output) -> Result<(), FilterError>;

    /// Parses then checks.
    fn validate(&self, candidate: &str) -> Result<Self::Output, FilterError> {
        let value = self.parse(candidate)?;
        self.check(&value)?;
        Ok(value)
    }
}

/// Why a candidate was rejected.
///
/// The `Display` output is the exact line printed to the user.
/// Bounds are kept as already formatted literals.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Empty answer and no default to fall back on.
    #[error("Invalid response")]
    Empty,
    /// Could not parse as the expected [`DesiredType`].
    #[error("Value Error. Requires {} between {} and {}", .kind.requirement(), .min, .max)]
    Format {
        kind: DesiredType,
        min: String,
        max: String,
    },
    /// Parsed, but outside the inclusive bounds.
    #[error("{} Requires {} between {} and {}", .kind.range_prefix(), .kind.requirement(), .min, .max)]
    Between {
        kind: DesiredType,
        min: String,
        max: String,
    },
}

/// The kind of value a [`Bounded`] rule reads.
///
/// It only changes the wording of the diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesiredType {
    Integer,
    Float,
    /// A one-based position in a menu.
    MenuIndex,
}

impl DesiredType {
    fn requirement(&self) -> &'static str {
        match self {
            Self::Integer => "an integer",
            Self::Float | Self::MenuIndex => "a value",
        }
    }

    fn range_prefix(&self) -> &'static str {
        match self {
            Self::Integer | Self::Float => "Invalid value.",
            Self::MenuIndex => "Invalid.",
        }
    }
}

impl Display for DesiredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::MenuIndex => write!(f, "menu index"),
        }
    }
}

/// Accepts a number within the inclusive range `[min, max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounded<T> {
    min: T,
    max: T,
    kind: DesiredType,
}

impl<T> Bounded<T> {
    pub fn new(min: T, max: T, kind: DesiredType) -> Self {
        Bounded { min, max, kind }
    }

    pub fn min(&self) -> &T {
        &self.min
    }

    pub fn max(&self) -> &T {
        &self.max
    }

    pub fn kind(&self) -> DesiredType {
        self.kind
    }
}

impl Bounded<i64> {
    pub fn integer(min: i64, max: i64) -> Self {
        Bounded::new(min, max, DesiredType::Integer)
    }

    /// One-based positions `1..=len` of a menu with `len` items.
    pub fn menu(len: usize) -> Self {
        let len = i64::try_from(len).unwrap_or(i64::MAX);
        Bounded::new(1, len, DesiredType::MenuIndex)
    }
}

impl Bounded<f64> {
    pub fn float(min: f64, max: f64) -> Self {
        Bounded::new(min, max, DesiredType::Float)
    }
}

impl<T: Literal> Bounded<T> {
    fn format_error(&self) -> FilterError {
        FilterError::Format {
            kind: self.kind,
            min: self.min.literal(),
            max: self.max.literal(),
        }
    }

    fn between_error(&self) -> FilterError {
        FilterError::Between {
            kind: self.kind,
            min: self.min.literal(),
            max: self.max.literal(),
        }
    }
}

impl<T> Validate for Bounded<T>
where
    T: FromStr + PartialOrd + Literal,
{
    type Output = T;

    fn parse(&self, candidate: &str) -> Result<T, FilterError> {
        candidate
            .trim()
            .parse::<T>()
            .map_err(|_| self.format_error())
    }

    // NaN compares false on both sides, so it never passes.
    fn check(&self, value: &T) -> Result<(), FilterError> {
        if *value >= self.min && *value <= self.max {
            Ok(())
        } else {
            Err(self.between_error())
        }
    }
}

/// Interprets a yes/no answer against its default.
///
/// An empty answer stands for the default. Otherwise only the first
/// character counts (case-insensitive), and only the set *opposite* to the
/// default is looked at: with a yes default, anything not starting with
/// `y`, `t` or `1` is a no; with a no default, anything not starting with
/// `n`, `f` or `0` is a yes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YesNo {
    default: bool,
}

impl YesNo {
    pub fn new(default: bool) -> Self {
        YesNo { default }
    }

    pub fn interpret(&self, response: &str) -> bool {
        let token = match (response.is_empty(), self.default) {
            (true, true) => "y",
            (true, false) => "n",
            (false, _) => response,
        };
        let first = token.chars().next().map(|c| c.to_ascii_lowercase());

        if self.default {
            first.is_some_and(|c| YES.contains(&c))
        } else {
            !first.is_some_and(|c| NO.contains(&c))
        }
    }
}
