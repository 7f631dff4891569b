//! Defines [`CodecError`], the unified error type for codec operations.
//!
//! Provides descriptive error variants for malformed parenthesis words,
//! inconsistent skeleton/symbol pairs, and signature lookup failures.

use num_bigint::BigUint;
use smartstring::alias::String;
use thiserror::Error;

/// Represents all possible errors that can occur within the codec.
///
/// [`CodecError`] provides a single error surface for higher-level functions.
/// Every fallible operation in this crate returns it, so `?` composes across
/// the layers without explicit mapping.
///
/// Nothing is retried and nothing is swallowed: an error means the input was
/// outside the domain of the requested bijection, and the offending position
/// or symbol is reported where the codec can name it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A parenthesis word passed to [`Skeleton::rank`] was not balanced.
    ///
    /// [`Skeleton::rank`]: crate::Skeleton::rank
    #[error("parenthesis word is not balanced")]
    NotBalanced,

    /// A skeleton and symbol stream disagree: the skeleton prefix does not
    /// match the term grammar, or one stream ran out (or was left over)
    /// while rebuilding the term.
    #[error("skeleton and symbol streams disagree at bit {at}")]
    MalformedPair { at: usize },

    /// A variable or constant of a fixed-signature term does not occur in
    /// the signature.
    #[error("symbol {symbol} does not occur in the signature")]
    UnknownSymbol { symbol: String },

    /// A function application whose (symbol, arity) pair does not occur in
    /// the signature.
    #[error("no function {symbol}/{arity} in the signature")]
    UnknownFunction { symbol: String, arity: usize },

    /// The same symbol was given twice when building a signature.
    #[error("duplicate symbol {symbol} in the signature")]
    DuplicateSymbol { symbol: String },

    /// A function symbol declared with arity 0; a nullary symbol is a
    /// constant and must be listed as one.
    #[error("function {symbol} has arity 0 and belongs among the constants")]
    NullaryFunction { symbol: String },

    /// A signature without variables and constants has no terms at all.
    #[error("signature has no variables or constants")]
    EmptySignature,

    /// A code too large for a signature without function symbols.
    #[error("code {code} requires a function symbol but the signature has none")]
    CodeOutOfRange { code: BigUint },
}
