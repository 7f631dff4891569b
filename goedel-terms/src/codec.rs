//! The total bijection between terms and naturals.
//!
//! A term splits into its skeleton and symbol stream; the skeleton ranks
//! into a natural, the stream packs into another, and the Cantor pairing of
//! the two is the term's code. Decoding inverts each layer: unpair, unrank,
//! and the skeleton's node count tells how wide a tuple the symbol stream
//! was packed into.

use crate::cantor;
use crate::skeleton::Skeleton;
use crate::term::Term;
use num_bigint::BigUint;

impl Term {
    /// The code of this term: a natural number no other term maps to.
    pub fn to_code(&self) -> BigUint {
        let (skeleton, syms) = self.to_pair();
        let r = skeleton
            .rank()
            .expect("a split skeleton is always balanced");
        let x = cantor::from_tuple(&syms);
        cantor::from_tuple(&[r, x])
    }

    /// The term encoded by `n`; inverse of [`Term::to_code`]. Total: every
    /// natural decodes.
    pub fn from_code(n: &BigUint) -> Term {
        let pair = cantor::to_tuple(2, n);
        let skeleton = Skeleton::unrank(&pair[0]);
        let syms = cantor::to_tuple(skeleton.node_count(), &pair[1]);
        Term::from_pair(&skeleton, &syms)
            .expect("an unranked skeleton joins with a tuple of its node count")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fun, var};
    use num_traits::ToPrimitive;

    #[test]
    fn smallest_codes_by_hand() {
        // rank 0 skeleton + symbol 0 pack into code 0, and so on upward.
        assert_eq!(var![0].to_code(), BigUint::from(0u32));
        assert_eq!(fun![0].to_code(), BigUint::from(1u32));
        assert_eq!(fun![0; var![0]].to_code(), BigUint::from(2u32));
        assert_eq!(var![1].to_code(), BigUint::from(3u32));
    }

    #[test]
    fn decoding_inverts_encoding() {
        let terms = [
            var![0],
            fun![0],
            var![100],
            fun![5; var![0], var![1]],
            fun![1; fun![2; fun![3]]],
            fun![0; fun![0], fun![0; var![7], var![7]], var![0]],
        ];
        for t in &terms {
            assert_eq!(Term::from_code(&t.to_code()), *t);
        }
    }

    #[test]
    fn encoding_inverts_decoding() {
        for n in 0u64..4096 {
            let n = BigUint::from(n);
            assert_eq!(Term::from_code(&n).to_code(), n);
        }
    }

    #[test]
    fn small_codes_decode_to_distinct_terms() {
        let mut seen = Vec::new();
        for n in 0u64..512 {
            let t = Term::from_code(&BigUint::from(n));
            assert!(!seen.contains(&t), "code {n} collided");
            seen.push(t);
        }
    }

    #[test]
    fn code_magnitude_tracks_term_size() {
        // A couple of spot checks that codes stay polynomial-sized in the
        // node count for small-labeled terms.
        let mut t = var![0];
        for _ in 0..16 {
            t = fun![1; t, var![0]];
        }
        let bits = t.to_code().bits();
        let nodes = t.node_count() as u64;
        assert!(bits <= 24 * nodes, "{bits} bits for {nodes} nodes");
        assert!(t.to_code().to_u64().is_none(), "a 33-node code is wide");
    }
}
