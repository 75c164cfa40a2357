pub mod format;
pub use format::Literal;

pub mod query;
pub use query::{BoolQuery, FloatQuery, IntQuery, MenuQuery, Query};

pub mod sanitize;
pub use sanitize::{Bounded, DesiredType, FilterError, Validate, YesNo};

pub mod terminal;
pub use terminal::Terminal;
