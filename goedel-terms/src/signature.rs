//! The fixed-signature codec: a bijection between naturals and the terms
//! over user-supplied finite symbol sets.
//!
//! A signature lists variables, constants, and function symbols with fixed
//! arities. The first `lv + lc` naturals are the leaves; everything above
//! splits off a bijective base-`lf` digit to pick the function symbol and
//! Cantor-unpacks the rest into that symbol's arity of child codes.

use crate::cantor;
use crate::error::CodecError;
use indexmap::IndexSet;
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use smartstring::alias::String;
use std::fmt;
use std::hash::Hash;

/// A term over a fixed signature: a variable, a constant, or a function
/// symbol applied to exactly its arity of subterms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigTerm<A, B> {
    /// A variable drawn from the signature's variable set.
    Var(A),
    /// A constant drawn from the signature's constant set.
    Const(B),
    /// A function application; the codec only handles it when the
    /// (symbol, arity) pair occurs in the signature.
    Fun(B, Vec<SigTerm<A, B>>),
}

// Same concern as for `Term`: nested applications must not unwind on the
// call stack when dropped.
impl<A, B> Drop for SigTerm<A, B> {
    fn drop(&mut self) {
        if let SigTerm::Fun(_, children) = self {
            if children.is_empty() {
                return;
            }
            let mut worklist = std::mem::take(children);
            while let Some(mut term) = worklist.pop() {
                if let SigTerm::Fun(_, children) = &mut term {
                    worklist.append(children);
                }
            }
        }
    }
}

/// A finite signature: variable names of type `A`, constant and function
/// symbols of type `B`, each function symbol paired with a fixed arity.
///
/// Symbols compare structurally (`Eq` + `Hash`); the same `B` may serve as
/// a constant and as a function symbol, or as function symbols of several
/// arities, because functions are keyed by the (symbol, arity) pair. The
/// enumeration order of terms follows the insertion order of the sets.
#[derive(Debug, Clone)]
pub struct Signature<A, B> {
    vars: IndexSet<A>,
    consts: IndexSet<B>,
    funs: IndexSet<(B, usize)>,
}

impl<A, B> Signature<A, B>
where
    A: Clone + Eq + Hash + fmt::Debug,
    B: Clone + Eq + Hash + fmt::Debug,
{
    /// Build a signature from its three symbol classes.
    ///
    /// Fails with [`CodecError::EmptySignature`] when there is neither a
    /// variable nor a constant (no leaf means no term at all), with
    /// [`CodecError::DuplicateSymbol`] when a class repeats an entry, and
    /// with [`CodecError::NullaryFunction`] when a function entry has
    /// arity 0 (a nullary symbol is a constant; decoding it as a function
    /// would drop the residual code and collapse distinct codes onto one
    /// term). Each of these would break the bijection.
    pub fn new(
        vars: impl IntoIterator<Item = A>,
        consts: impl IntoIterator<Item = B>,
        funs: impl IntoIterator<Item = (B, usize)>,
    ) -> Result<Self, CodecError> {
        let mut var_set = IndexSet::new();
        for var in vars {
            if !var_set.insert(var.clone()) {
                return Err(CodecError::DuplicateSymbol {
                    symbol: debug_name(&var),
                });
            }
        }
        let mut const_set = IndexSet::new();
        for c in consts {
            if !const_set.insert(c.clone()) {
                return Err(CodecError::DuplicateSymbol {
                    symbol: debug_name(&c),
                });
            }
        }
        let mut fun_set = IndexSet::new();
        for (f, arity) in funs {
            if arity == 0 {
                return Err(CodecError::NullaryFunction {
                    symbol: debug_name(&f),
                });
            }
            if !fun_set.insert((f.clone(), arity)) {
                return Err(CodecError::DuplicateSymbol {
                    symbol: debug_name(&f),
                });
            }
        }
        if var_set.is_empty() && const_set.is_empty() {
            return Err(CodecError::EmptySignature);
        }
        Ok(Signature {
            vars: var_set,
            consts: const_set,
            funs: fun_set,
        })
    }

    /// Number of variables.
    pub fn var_count(&self) -> usize {
        self.vars.len()
    }

    /// Number of constants.
    pub fn const_count(&self) -> usize {
        self.consts.len()
    }

    /// Number of (symbol, arity) function entries.
    pub fn fun_count(&self) -> usize {
        self.funs.len()
    }

    /// The term numbered `n` in this signature's enumeration; inverse of
    /// [`Signature::encode`].
    ///
    /// Total whenever the signature has a function symbol; without one only
    /// the leaf codes `n < lv + lc` decode and larger codes fail with
    /// [`CodecError::CodeOutOfRange`].
    ///
    /// Child codes shrink strictly at every step, so the decode always
    /// terminates; it runs on an explicit frame stack, so the depth of the
    /// decoded term is bounded by memory, not by the call stack.
    pub fn decode(&self, n: &BigUint) -> Result<SigTerm<A, B>, CodecError> {
        let leaves = self.vars.len() + self.consts.len();
        let mut frames: Vec<DecodeFrame<A, B>> = Vec::new();
        let mut code = n.clone();
        'term: loop {
            let mut term = match code.to_usize().filter(|i| *i < leaves) {
                Some(i) if i < self.vars.len() => SigTerm::Var(self.vars[i].clone()),
                Some(i) => SigTerm::Const(self.consts[i - self.vars.len()].clone()),
                None => {
                    if self.funs.is_empty() {
                        return Err(CodecError::CodeOutOfRange { code });
                    }
                    // Step past the leaves, then split off one bijective
                    // base-lf digit to choose the function symbol.
                    let shifted = &code - BigUint::from(leaves) + 1u32;
                    let (digit, rest) = get_bdigit(self.funs.len(), &shifted);
                    let (symbol, arity) = self.funs[digit].clone();
                    let mut child_codes = cantor::to_tuple(arity, &rest);
                    child_codes.reverse();
                    let next = child_codes
                        .pop()
                        .expect("signature arities are at least one");
                    frames.push(DecodeFrame {
                        symbol,
                        arity,
                        pending: child_codes,
                        children: Vec::new(),
                    });
                    code = next;
                    continue 'term;
                }
            };
            loop {
                let Some(frame) = frames.last_mut() else {
                    return Ok(term);
                };
                frame.children.push(term);
                if let Some(next) = frame.pending.pop() {
                    code = next;
                    continue 'term;
                }
                let frame = frames.pop().expect("frame observed above");
                debug_assert_eq!(frame.children.len(), frame.arity);
                term = SigTerm::Fun(frame.symbol, frame.children);
            }
        }
    }

    /// The number of a term in this signature's enumeration; inverse of
    /// [`Signature::decode`].
    ///
    /// Every symbol of the term must occur in the signature — for an
    /// application, as the exact (symbol, arity) pair — otherwise the
    /// offending symbol is reported.
    pub fn encode(&self, term: &SigTerm<A, B>) -> Result<BigUint, CodecError> {
        enum Walk<'a, A, B> {
            Enter(&'a SigTerm<A, B>),
            Pack(&'a B, usize),
        }

        let leaves = self.vars.len() + self.consts.len();
        let mut stack = vec![Walk::Enter(term)];
        let mut codes: Vec<BigUint> = Vec::new();
        while let Some(step) = stack.pop() {
            match step {
                Walk::Enter(SigTerm::Var(x)) => {
                    let i = self.vars.get_index_of(x).ok_or_else(|| {
                        CodecError::UnknownSymbol {
                            symbol: debug_name(x),
                        }
                    })?;
                    codes.push(BigUint::from(i));
                }
                Walk::Enter(SigTerm::Const(c)) => {
                    let i = self.consts.get_index_of(c).ok_or_else(|| {
                        CodecError::UnknownSymbol {
                            symbol: debug_name(c),
                        }
                    })?;
                    codes.push(BigUint::from(self.vars.len() + i));
                }
                Walk::Enter(SigTerm::Fun(f, children)) => {
                    stack.push(Walk::Pack(f, children.len()));
                    for child in children.iter().rev() {
                        stack.push(Walk::Enter(child));
                    }
                }
                Walk::Pack(f, arity) => {
                    let digit = self
                        .funs
                        .get_index_of(&(f.clone(), arity))
                        .ok_or_else(|| CodecError::UnknownFunction {
                            symbol: debug_name(f),
                            arity,
                        })?;
                    let child_codes = codes.split_off(codes.len() - arity);
                    let rest = cantor::from_tuple(&child_codes);
                    let n = put_bdigit(self.funs.len(), digit, &rest);
                    codes.push(n + BigUint::from(leaves) - 1u32);
                }
            }
        }
        Ok(codes.pop().expect("one code per term"))
    }
}

struct DecodeFrame<A, B> {
    symbol: B,
    arity: usize,
    /// Child codes still to decode, in reverse order.
    pending: Vec<BigUint>,
    children: Vec<SigTerm<A, B>>,
}

fn debug_name<T: fmt::Debug>(symbol: &T) -> String {
    format!("{symbol:?}").into()
}

/// `1 + d + b * m`: prepend one bijective base-`b` digit `d` to `m`.
fn put_bdigit(base: usize, digit: usize, m: &BigUint) -> BigUint {
    m * BigUint::from(base) + BigUint::from(digit) + 1u32
}

/// Split the lowest bijective base-`b` digit off `n >= 1`; inverse of
/// [`put_bdigit`].
fn get_bdigit(base: usize, n: &BigUint) -> (usize, BigUint) {
    debug_assert!(!n.is_zero());
    let b = BigUint::from(base);
    let q = n / &b;
    let r = n % &b;
    if r.is_zero() {
        (base - 1, q - BigUint::one())
    } else {
        (r.to_usize().expect("remainder is below the base") - 1, q)
    }
}
