//! Defines [`Skeleton`], a balanced parenthesis word, and its bijection
//! with the naturals.
//!
//! A term's tree shape, stripped of all labels, is a balanced parenthesis
//! word: one `(` at every node start, one `)` at every node end. Words are
//! enumerated shortest first, and within one length in the lattice-path
//! order of Kreher and Stinson, which ranks and unranks a word in time
//! quadratic in its length instead of searching the whole family.

use crate::combinatorics::binomial;
use crate::error::CodecError;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// One symbol of a parenthesis word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paren {
    /// `(` — a node opens.
    Open,
    /// `)` — a node closes.
    Close,
}

/// A balanced parenthesis word: the shape of a term with the labels erased.
///
/// A well-formed skeleton has even length, at least two symbols, opens with
/// [`Paren::Open`] and keeps a running surplus of opens over closes in every
/// prefix. [`Skeleton::rank`] checks this; [`Skeleton::unrank`] only ever
/// produces such words.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Skeleton {
    parens: Vec<Paren>,
}

impl Skeleton {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Skeleton {
            parens: Vec::with_capacity(capacity),
        }
    }

    /// Wrap an explicit symbol sequence.
    pub fn from_parens(parens: Vec<Paren>) -> Self {
        Skeleton { parens }
    }

    pub(crate) fn push(&mut self, paren: Paren) {
        self.parens.push(paren);
    }

    /// The symbols of the word, in order.
    pub fn as_parens(&self) -> &[Paren] {
        &self.parens
    }

    /// Number of symbols in the word.
    pub fn len(&self) -> usize {
        self.parens.len()
    }

    /// Whether the word has no symbols at all.
    pub fn is_empty(&self) -> bool {
        self.parens.is_empty()
    }

    /// Number of term nodes this skeleton describes: one per symbol pair.
    pub fn node_count(&self) -> usize {
        self.parens.len() / 2
    }

    /// Whether the word is balanced: non-empty, every prefix has at least
    /// as many opens as closes, and the totals agree.
    pub fn is_balanced(&self) -> bool {
        let mut surplus: usize = 0;
        for paren in &self.parens {
            match paren {
                Paren::Open => surplus += 1,
                Paren::Close => match surplus.checked_sub(1) {
                    Some(s) => surplus = s,
                    None => return false,
                },
            }
        }
        surplus == 0 && !self.parens.is_empty()
    }

    /// The position of this word in the enumeration of all skeletons.
    ///
    /// Words are ordered shortest first; words of equal length are ordered
    /// by the lattice-path walk over their interior (the word with the
    /// outermost pair removed), where an open sorts before a close. Fails
    /// with [`CodecError::NotBalanced`] if the word is not balanced.
    pub fn rank(&self) -> Result<BigUint, CodecError> {
        if !self.is_balanced() {
            return Err(CodecError::NotBalanced);
        }
        let interior = self.parens.len() / 2 - 1;
        let mut local = BigUint::zero();
        let mut surplus: i64 = 0;
        for x in 1..=2 * interior {
            match self.parens[x] {
                Paren::Open => surplus += 1,
                Paren::Close => {
                    // Every word that opens here instead sorts before us.
                    local += completions(interior, x, surplus + 1);
                    surplus -= 1;
                }
            }
        }
        Ok(local + words_below(interior))
    }

    /// The `n`-th skeleton; inverse of [`Skeleton::rank`]. Total: every
    /// natural denotes a skeleton.
    pub fn unrank(n: &BigUint) -> Skeleton {
        // Find the interior size whose block of the enumeration holds `n`.
        let mut interior = 0usize;
        let mut below = BigUint::zero();
        let mut cat = BigUint::one();
        while &below + &cat <= *n {
            below += &cat;
            interior += 1;
            cat = cat * BigUint::from(2 * (2 * interior - 1)) / BigUint::from(interior + 1);
        }
        let local = n - below;

        let mut skeleton = Skeleton::with_capacity(2 * interior + 2);
        skeleton.push(Paren::Open);
        let mut low = BigUint::zero();
        let mut surplus: i64 = 0;
        for x in 1..=2 * interior {
            let opens = completions(interior, x, surplus + 1);
            if local < &low + &opens {
                skeleton.push(Paren::Open);
                surplus += 1;
            } else {
                low += opens;
                skeleton.push(Paren::Close);
                surplus -= 1;
            }
        }
        skeleton.push(Paren::Close);
        skeleton
    }
}

impl FromIterator<Paren> for Skeleton {
    fn from_iter<I: IntoIterator<Item = Paren>>(iter: I) -> Self {
        Skeleton {
            parens: iter.into_iter().collect(),
        }
    }
}

/// Number of balanced completions of a word of `pairs` interior pairs whose
/// first `x` interior symbols left a surplus of `y` opens.
///
/// The lattice-path count `C(2p - x, p - (x + y)/2) - C(2p - x, p - (x + y)/2 - 1)`;
/// `x + y` is even whenever the state is reachable.
fn completions(pairs: usize, x: usize, y: i64) -> BigUint {
    debug_assert_eq!((x as i64 + y) % 2, 0);
    let rest = BigUint::from(2 * pairs - x);
    let half = pairs as i64 - (x as i64 + y) / 2;
    if half < 0 {
        return BigUint::zero();
    }
    let all = binomial(&rest, half as usize);
    if half == 0 {
        return all;
    }
    all - binomial(&rest, half as usize - 1)
}

/// Number of skeletons with fewer than `interior` interior pairs: the
/// running sum of Catalan numbers.
fn words_below(interior: usize) -> BigUint {
    let mut below = BigUint::zero();
    let mut cat = BigUint::one();
    for j in 0..interior {
        below += &cat;
        cat = cat * BigUint::from(2 * (2 * j + 1)) / BigUint::from(j + 2);
    }
    below
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinatorics::catalan;
    use num_traits::ToPrimitive;

    fn word(text: &str) -> Skeleton {
        text.chars()
            .map(|c| if c == '(' { Paren::Open } else { Paren::Close })
            .collect()
    }

    #[test]
    fn balance_check() {
        assert!(word("()").is_balanced());
        assert!(word("(()())").is_balanced());
        assert!(word("(())()").is_balanced());
        assert!(!word("").is_balanced());
        assert!(!word("(").is_balanced());
        assert!(!word(")(").is_balanced());
        assert!(!word("(()").is_balanced());
        assert!(!word("())(").is_balanced());
    }

    #[test]
    fn rank_rejects_unbalanced_words() {
        assert_eq!(word(")(").rank(), Err(CodecError::NotBalanced));
        assert_eq!(word("(").rank(), Err(CodecError::NotBalanced));
        assert_eq!(Skeleton::default().rank(), Err(CodecError::NotBalanced));
    }

    #[test]
    fn first_skeletons_in_order() {
        let expected = ["()", "(())", "((()))", "(()())"];
        for (n, text) in expected.iter().enumerate() {
            assert_eq!(Skeleton::unrank(&BigUint::from(n)), word(text), "unrank({n})");
            assert_eq!(
                word(text).rank().unwrap().to_usize().unwrap(),
                n,
                "rank({text})"
            );
        }
    }

    #[test]
    fn rank_unrank_round_trip() {
        for n in 0u32..500 {
            let n = BigUint::from(n);
            let skeleton = Skeleton::unrank(&n);
            assert!(skeleton.is_balanced());
            assert_eq!(skeleton.rank().unwrap(), n);
        }
    }

    #[test]
    fn blocks_follow_catalan_counts() {
        // The skeletons with k + 1 nodes start right after all catalan(j),
        // j < k, smaller ones, and there are catalan(k) of them.
        let mut seen_lengths = Vec::new();
        for n in 0u32..1 + 1 + 2 + 5 + 14 {
            let skeleton = Skeleton::unrank(&BigUint::from(n));
            seen_lengths.push(skeleton.len());
        }
        let mut expected = Vec::new();
        for k in 0usize..5 {
            for _ in 0..catalan(k).to_usize().unwrap() {
                expected.push(2 * k + 2);
            }
        }
        assert_eq!(seen_lengths, expected);
    }

    #[test]
    fn unrank_of_large_code_stays_consistent() {
        let n: BigUint = "98765432109876543210".parse().unwrap();
        let skeleton = Skeleton::unrank(&n);
        assert!(skeleton.is_balanced());
        assert_eq!(skeleton.rank().unwrap(), n);
    }
}
