//! Defines the core [`Term`] type and related constructors.
//!
//! Provides the free-algebra term representation over the infinite
//! signature, where both variables and function symbols are labeled by
//! arbitrary naturals.

use num_bigint::BigUint;

/// A term of the free algebra over countably many variables and function
/// symbols.
///
/// Variables and function symbols are labeled by arbitrary-precision
/// naturals, so the signature never runs out: `v0, v1, v2, …` and
/// `F0, F1, F2, …` with every arity admitted for every function label.
/// Children are ordered and order is semantically significant.
///
/// A nullary function `Fun(f, [])` is a different term from the variable
/// `Var(f)` even though both are leaves with the same label; the codec keeps
/// them apart by the parity of the emitted symbol, not by tree shape.
///
/// Terms are plain owned data: `Clone`, structural `Eq` and `Hash`, no
/// interning and no shared state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// A variable labeled by a natural number.
    Var(BigUint),
    /// A function symbol labeled by a natural number, applied to zero or
    /// more subterms.
    Fun(BigUint, Vec<Term>),
}

impl Term {
    /// Construct a variable term.
    #[inline]
    pub fn var(label: impl Into<BigUint>) -> Self {
        Term::Var(label.into())
    }

    /// Construct a function application.
    #[inline]
    pub fn fun(label: impl Into<BigUint>, children: Vec<Term>) -> Self {
        Term::Fun(label.into(), children)
    }

    /// The label of the root node.
    #[inline]
    pub fn label(&self) -> &BigUint {
        match self {
            Term::Var(i) => i,
            Term::Fun(f, _) => f,
        }
    }

    /// Whether this term is a leaf: a variable or a nullary function.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        match self {
            Term::Var(_) => true,
            Term::Fun(_, children) => children.is_empty(),
        }
    }

    /// Total number of nodes in the term.
    ///
    /// Walks the term with an explicit stack, so arbitrarily deep terms do
    /// not exhaust the call stack.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(term) = stack.pop() {
            count += 1;
            if let Term::Fun(_, children) = term {
                stack.extend(children.iter());
            }
        }
        count
    }
}

// The derived drop glue would unwind a nested term on the call stack; the
// codec accepts terms of unbounded depth, so children are drained onto an
// explicit worklist instead.
impl Drop for Term {
    fn drop(&mut self) {
        if let Term::Fun(_, children) = self {
            if children.is_empty() {
                return;
            }
            let mut worklist = std::mem::take(children);
            while let Some(mut term) = worklist.pop() {
                if let Term::Fun(_, children) = &mut term {
                    worklist.append(children);
                }
            }
        }
    }
}

/// Construct a variable term from an unsigned integer label.
///
/// ```rust
/// # use goedel_terms::{var, Term};
/// assert_eq!(var![7], Term::var(7u64));
/// ```
#[macro_export]
macro_rules! var {
    ($label:expr) => {
        $crate::Term::var($label as u64)
    };
}

/// Construct a function application from an unsigned integer label and a
/// list of children.
///
/// ```rust
/// # use goedel_terms::{fun, var, Term};
/// let nullary = fun![3];
/// let nested = fun![3; var![0], nullary.clone(), fun![1; var![2]]];
/// assert_eq!(nested, Term::fun(3u64, vec![
///     Term::var(0u64),
///     Term::fun(3u64, vec![]),
///     Term::fun(1u64, vec![Term::var(2u64)]),
/// ]));
/// ```
#[macro_export]
macro_rules! fun {
    ($label:expr) => {
        $crate::Term::fun($label as u64, ::std::vec::Vec::new())
    };
    ($label:expr; $($child:expr),* $(,)?) => {
        $crate::Term::fun($label as u64, vec![$($child),*])
    };
}
