//! Splitting a term into a skeleton and a symbol stream, and joining the
//! two back.
//!
//! The split is one preorder traversal: every node contributes an opening
//! and a closing paren to the skeleton and exactly one natural to the
//! symbol stream. Leaves tag their label with a parity bit (`2i` for a
//! variable, `2f + 1` for a nullary function) because both leaf kinds share
//! the two-symbol skeleton; interior nodes emit their label untouched, the
//! skeleton already tells them apart.
//!
//! Both directions run on explicit work stacks: a term nested a million
//! levels deep splits and joins without touching call-stack limits.

use crate::error::CodecError;
use crate::skeleton::{Paren, Skeleton};
use crate::term::Term;
use num_bigint::BigUint;

impl Term {
    /// Split the term into its skeleton and symbol stream.
    ///
    /// The skeleton has two symbols per node, the stream one natural per
    /// node, in preorder.
    pub fn to_pair(&self) -> (Skeleton, Vec<BigUint>) {
        enum Walk<'a> {
            Enter(&'a Term),
            Leave,
        }

        let nodes = self.node_count();
        let mut skeleton = Skeleton::with_capacity(2 * nodes);
        let mut syms = Vec::with_capacity(nodes);
        let mut stack = vec![Walk::Enter(self)];
        while let Some(step) = stack.pop() {
            match step {
                Walk::Enter(term) => {
                    skeleton.push(Paren::Open);
                    match term {
                        Term::Var(i) => {
                            syms.push(i << 1u32);
                            skeleton.push(Paren::Close);
                        }
                        Term::Fun(f, children) if children.is_empty() => {
                            syms.push((f << 1u32) + 1u32);
                            skeleton.push(Paren::Close);
                        }
                        Term::Fun(f, children) => {
                            syms.push(f.clone());
                            stack.push(Walk::Leave);
                            for child in children.iter().rev() {
                                stack.push(Walk::Enter(child));
                            }
                        }
                    }
                }
                Walk::Leave => skeleton.push(Paren::Close),
            }
        }
        (skeleton, syms)
    }

    /// Rebuild the term a skeleton/symbol pair was split from.
    ///
    /// Consumes both streams in lockstep and demands that they run out
    /// together; any grammar violation or residue fails with
    /// [`CodecError::MalformedPair`].
    pub fn from_pair(skeleton: &Skeleton, syms: &[BigUint]) -> Result<Term, CodecError> {
        let parens = skeleton.as_parens();
        let mut at = 0;
        let mut next_sym = 0;
        let mut frames: Vec<(BigUint, Vec<Term>)> = Vec::new();
        loop {
            // A node starts here.
            match parens.get(at) {
                Some(Paren::Open) => at += 1,
                _ => return Err(CodecError::MalformedPair { at }),
            }
            let sym = syms
                .get(next_sym)
                .ok_or(CodecError::MalformedPair { at })?;
            next_sym += 1;

            let mut term = match parens.get(at) {
                Some(Paren::Close) => {
                    at += 1;
                    let label = sym >> 1u32;
                    if sym.bit(0) {
                        Term::Fun(label, Vec::new())
                    } else {
                        Term::Var(label)
                    }
                }
                Some(Paren::Open) => {
                    frames.push((sym.clone(), Vec::new()));
                    continue;
                }
                None => return Err(CodecError::MalformedPair { at }),
            };

            // Hand the finished subterm to its parent, closing every frame
            // the skeleton closes here.
            loop {
                match frames.last_mut() {
                    None => {
                        if at != parens.len() || next_sym != syms.len() {
                            return Err(CodecError::MalformedPair { at });
                        }
                        return Ok(term);
                    }
                    Some((_, children)) => children.push(term),
                }
                match parens.get(at) {
                    Some(Paren::Open) => break,
                    Some(Paren::Close) => {
                        at += 1;
                        let (label, children) =
                            frames.pop().expect("frame observed above");
                        term = Term::Fun(label, children);
                    }
                    None => return Err(CodecError::MalformedPair { at }),
                }
            }
        }
    }
}
