//! Error types for the command-line front end.
//!
//! [`ParseTermError`] covers the textual term syntax; [`CliError`] is the
//! single surface `main` reports, aggregating parse failures and malformed
//! decimal codes via `#[from]` conversions so call sites can use `?`.

use thiserror::Error;

/// A failure while tokenizing or parsing the textual term syntax.
///
/// Offsets are byte positions into the input line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseTermError {
    /// A character that no token starts with.
    #[error("unexpected character {found:?} at byte {at}")]
    UnexpectedChar { at: usize, found: char },

    /// `v` or `F` without a following label.
    #[error("expected digits after {prefix:?} at byte {at}")]
    ExpectedDigits { at: usize, prefix: char },

    /// A position where a term had to start but did not.
    #[error("expected a term at byte {at}")]
    ExpectedTerm { at: usize },

    /// A position where `,` or `)` had to follow an argument.
    #[error("expected ',' or ')' at byte {at}")]
    ExpectedDelimiter { at: usize },

    /// Symbols left over after a complete term.
    #[error("trailing input at byte {at}")]
    TrailingInput { at: usize },

    /// Input ended inside an argument list.
    #[error("unexpected end of input")]
    UnexpectedEnd,
}

/// Represents all errors the binary reports.
#[derive(Debug, Error)]
pub enum CliError {
    /// The term argument did not parse.
    #[error("term syntax: {0}")]
    Parse(#[from] ParseTermError),

    /// The code argument was not a decimal natural.
    #[error("code syntax: {0}")]
    Code(#[from] num_bigint::ParseBigIntError),
}
