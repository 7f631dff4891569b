//! Parser for the textual term syntax.
//!
//! Grammar: a term is `v<digits>`, `F<digits>`, or `F<digits>(t1, …, tn)`;
//! `F<digits>()` is accepted as the nullary application. The parser runs on
//! an explicit frame stack, so input nesting depth is bounded by memory,
//! not by the call stack.

use crate::error::ParseTermError;
use crate::token::{tokenize, Token};
use goedel_terms::Term;
use num_bigint::BigUint;

/// Parse one complete term; the whole input must be consumed.
pub fn parse_term(input: &str) -> Result<Term, ParseTermError> {
    let tokens = tokenize(input)?;
    let end = input.len();
    let offset = |at: usize| tokens.get(at).map(|(_, o)| *o).unwrap_or(end);

    let mut at = 0;
    let mut frames: Vec<(BigUint, Vec<Term>)> = Vec::new();
    loop {
        // One term starts here.
        let mut term = match tokens.get(at) {
            Some((Token::Var(i), _)) => {
                at += 1;
                Term::Var(i.clone())
            }
            Some((Token::Fun(f), _)) => {
                at += 1;
                match tokens.get(at) {
                    Some((Token::Open, _)) => {
                        at += 1;
                        if let Some((Token::Close, _)) = tokens.get(at) {
                            // `F1()` — an explicit empty argument list.
                            at += 1;
                            Term::Fun(f.clone(), Vec::new())
                        } else {
                            frames.push((f.clone(), Vec::new()));
                            continue;
                        }
                    }
                    _ => Term::Fun(f.clone(), Vec::new()),
                }
            }
            Some(_) => return Err(ParseTermError::ExpectedTerm { at: offset(at) }),
            None => {
                return Err(if frames.is_empty() && at == 0 {
                    ParseTermError::ExpectedTerm { at: end }
                } else {
                    ParseTermError::UnexpectedEnd
                });
            }
        };

        // Deliver it, closing as many argument lists as the input closes.
        loop {
            match frames.last_mut() {
                None => {
                    return if at == tokens.len() {
                        Ok(term)
                    } else {
                        Err(ParseTermError::TrailingInput { at: offset(at) })
                    };
                }
                Some((_, args)) => args.push(term),
            }
            match tokens.get(at) {
                Some((Token::Comma, _)) => {
                    at += 1;
                    break;
                }
                Some((Token::Close, _)) => {
                    at += 1;
                    let (label, args) = frames.pop().expect("frame observed above");
                    term = Term::Fun(label, args);
                }
                Some(_) => {
                    return Err(ParseTermError::ExpectedDelimiter { at: offset(at) })
                }
                None => return Err(ParseTermError::UnexpectedEnd),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goedel_terms::{fun, var};

    #[test]
    fn leaves() {
        assert_eq!(parse_term("v0").unwrap(), var![0]);
        assert_eq!(parse_term("F12").unwrap(), fun![12]);
        assert_eq!(parse_term("F12()").unwrap(), fun![12]);
    }

    #[test]
    fn nested_applications() {
        assert_eq!(
            parse_term("F2(v0,F1,F1(v3, v4))").unwrap(),
            fun![2; var![0], fun![1], fun![1; var![3], var![4]]]
        );
    }

    #[test]
    fn rendering_parses_back() {
        let terms = [
            var![0],
            fun![9],
            fun![1; var![2], fun![3; fun![4], var![5]]],
        ];
        for t in &terms {
            assert_eq!(parse_term(&t.to_string()).unwrap(), *t);
        }
    }

    #[test]
    fn deep_input_parses_iteratively() {
        let depth = 50_000;
        let mut text = String::new();
        for _ in 0..depth {
            text.push_str("F1(");
        }
        text.push_str("v0");
        for _ in 0..depth {
            text.push(')');
        }
        let t = parse_term(&text).unwrap();
        assert_eq!(t.node_count(), depth + 1);
    }

    #[test]
    fn malformed_inputs_are_rejected() {
        assert_eq!(parse_term(""), Err(ParseTermError::ExpectedTerm { at: 0 }));
        assert_eq!(
            parse_term("v0 v1"),
            Err(ParseTermError::TrailingInput { at: 3 })
        );
        assert_eq!(parse_term("F1(v0"), Err(ParseTermError::UnexpectedEnd));
        assert_eq!(parse_term("F1(v0,"), Err(ParseTermError::UnexpectedEnd));
        assert_eq!(
            parse_term("F1(,v0)"),
            Err(ParseTermError::ExpectedTerm { at: 3 })
        );
        assert_eq!(
            parse_term("F1(v0 v1)"),
            Err(ParseTermError::ExpectedDelimiter { at: 6 })
        );
        assert_eq!(
            parse_term("v0)"),
            Err(ParseTermError::TrailingInput { at: 2 })
        );
    }
}
