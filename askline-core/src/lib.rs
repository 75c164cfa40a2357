//! # askline core
//!
//! Validated console prompts for interactive CLI applications.
//!
//! Four shapes of query are supported:
//! - **yes/no confirmation** with a default answer,
//! - **bounded integer** within an inclusive `[min, max]`,
//! - **bounded float** within an inclusive `[min, max]`,
//! - **menu selection** returning a zero-based index into a list.
//!
//! The numeric and menu queries loop until the input is valid (or the
//! default is accepted), printing a diagnostic after each rejected line.
//! The confirmation reads exactly one line and always answers.
//!
//! ## Example
//! ```rust,no_run
//! use askline_core::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! let age = terminal.ask_int("How old are you?", 1, 100, Some(50))?;
//! let tall = terminal.ask_bool("Are you tall?", false)?;
//! let colour = terminal.ask_menu(&["red", "green", "blue"], Some("Choose a colour"), 2)?;
//! println!("{age} {tall} {colour:?}");
//! # Ok::<(), askline_core::Error>(())
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod utils;
pub use utils::{
    BoolQuery, Bounded, DesiredType, FilterError, FloatQuery, IntQuery, Literal, MenuQuery, Query,
    Terminal, Validate, YesNo,
};
