//! Rendering of [`Term`] and [`Skeleton`] values.
//!
//! Terms print as `v<i>` for variables, `F<f>` for nullary functions and
//! `F<f>(c1,...,cn)` for applications; skeletons print as parenthesis
//! strings. Rendering walks an explicit action stack, so a deeply nested
//! term prints in bounded call-stack space.

use crate::skeleton::{Paren, Skeleton};
use crate::term::Term;
use std::fmt;

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Action<'a> {
            Render(&'a Term),
            Text(&'static str),
        }

        let mut stack = vec![Action::Render(self)];
        while let Some(action) = stack.pop() {
            match action {
                Action::Text(text) => f.write_str(text)?,
                Action::Render(Term::Var(i)) => write!(f, "v{i}")?,
                Action::Render(Term::Fun(label, children)) => {
                    if children.is_empty() {
                        write!(f, "F{label}")?;
                        continue;
                    }
                    write!(f, "F{label}(")?;
                    stack.push(Action::Text(")"));
                    for (i, child) in children.iter().enumerate().rev() {
                        stack.push(Action::Render(child));
                        if i > 0 {
                            stack.push(Action::Text(","));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Skeleton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for paren in self.as_parens() {
            f.write_str(match paren {
                Paren::Open => "(",
                Paren::Close => ")",
            })?;
        }
        Ok(())
    }
}
