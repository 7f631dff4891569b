//! # Goedel Terms
//!
//! A bijective Goedel numbering of term algebras: every natural number
//! decodes to exactly one well-formed term, and every term encodes back to
//! the natural it came from.
//!
//! This crate provides the [`Term`] type for terms over the infinite
//! signature (variables `v0, v1, …` and function symbols `F0, F1, …`, both
//! labeled by arbitrary-precision naturals), together with the codec
//! [`Term::to_code`] / [`Term::from_code`] realizing the bijection with
//! `N`. The codec is the composition of three smaller bijections, each
//! usable on its own:
//!
//! - [`Skeleton::rank`] / [`Skeleton::unrank`] between balanced parenthesis
//!   words (the tree shapes of terms) and `N`,
//! - [`cantor::from_tuple`] / [`cantor::to_tuple`] between `N^k` and `N`,
//!   decoded efficiently through the combinadic number system,
//! - [`Term::to_pair`] / [`Term::from_pair`] between terms and
//!   (skeleton, symbol stream) pairs.
//!
//! The code of a term stays within a small constant factor of the term's
//! own written size, so the numbering is usable as a serialization, not
//! just as a counting argument.
//!
//! A second, independent bijection is provided for *finite* signatures:
//! [`Signature`] enumerates the terms over user-supplied variables,
//! constants, and fixed-arity function symbols via [`Signature::decode`]
//! and [`Signature::encode`].
//!
//! Everything is pure: no global state, no caches spanning calls, no
//! interior mutability. All the traversals — encode, decode, render, even
//! drop — run on explicit work stacks, so pathologically deep terms stay
//! inside a fixed call-stack budget.
//!
//! ## Example
//! ```rust
//! use goedel_terms::{fun, var, Term};
//!
//! let t = fun![7; var![0], fun![1], fun![7; var![3]]];
//! let code = t.to_code();
//! assert_eq!(Term::from_code(&code), t);
//!
//! // Every natural is some term's code.
//! let n = "123456789012345678901234567890".parse().unwrap();
//! let u = Term::from_code(&n);
//! assert_eq!(u.to_code(), n);
//! ```
//!
//! ## Fixed signatures
//! ```rust
//! use goedel_terms::{SigTerm, Signature};
//! use num_bigint::BigUint;
//!
//! let sig = Signature::new(
//!     ["X", "Y"],
//!     ["zero"],
//!     [("s", 1), ("plus", 2)],
//! ).unwrap();
//!
//! let t = sig.decode(&BigUint::from(12345u32)).unwrap();
//! assert_eq!(sig.encode(&t).unwrap(), BigUint::from(12345u32));
//! ```

pub mod cantor;
mod codec;
pub mod combinatorics;
mod display;
mod error;
mod pair;
mod signature;
mod skeleton;
mod term;

pub use error::CodecError;
pub use signature::{SigTerm, Signature};
pub use skeleton::{Paren, Skeleton};
pub use term::Term;
