//! Errors raised by the terminal itself.
//!
//! Rejected answers are not errors: they are reported to the user as a
//! [`FilterError`](crate::utils::FilterError) and the question is asked
//! again. Only a broken or closed input/output stream reaches the caller.

use thiserror::Error;

/// Result type alias for askline operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Reading the answer or writing the prompt failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input reached end-of-file before an answer was accepted
    #[error("input closed before a valid answer was given")]
    InputClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: Error = std::io::Error::other("broken pipe").into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "IO error: broken pipe");
    }

    #[test]
    fn test_input_closed_message() {
        assert_eq!(
            Error::InputClosed.to_string(),
            "input closed before a valid answer was given"
        );
    }
}
