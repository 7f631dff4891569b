//! Generalized Cantor tupling: the bijection between `N^k` and `N`.
//!
//! A tuple is first turned into a strictly increasing sequence (a canonical
//! finite set) by [`list_to_set`], then summed through the combinadic number
//! system. The inverse peels combinadic digits off with a binary search per
//! digit, so decoding is polynomial in the bit length of the code rather
//! than in its magnitude.

use crate::combinatorics::binomial;
use num_bigint::BigUint;
use num_traits::Zero;

/// Turn an arbitrary sequence of naturals into a strictly increasing one:
/// `ys[i] = xs[0] + … + xs[i] + i`.
pub fn list_to_set(xs: &[BigUint]) -> Vec<BigUint> {
    let mut sum = BigUint::zero();
    let mut ys = Vec::with_capacity(xs.len());
    for (i, x) in xs.iter().enumerate() {
        sum += x;
        ys.push(&sum + BigUint::from(i));
    }
    ys
}

/// Inverse of [`list_to_set`]: recover the gaps of a strictly increasing
/// sequence.
pub fn set_to_list(ys: &[BigUint]) -> Vec<BigUint> {
    let mut xs = Vec::with_capacity(ys.len());
    let mut prev: Option<&BigUint> = None;
    for y in ys {
        match prev {
            None => xs.push(y.clone()),
            Some(p) => xs.push(y - p - 1u32),
        }
        prev = Some(y);
    }
    xs
}

/// Pack a tuple of naturals into a single natural.
///
/// The empty tuple maps to zero; a single value maps to itself.
pub fn from_tuple(xs: &[BigUint]) -> BigUint {
    list_to_set(xs)
        .iter()
        .enumerate()
        .map(|(i, y)| binomial(y, i + 1))
        .sum()
}

/// Unpack `n` into a tuple of `k` naturals; inverse of [`from_tuple`].
///
/// For `k = 0` only `n = 0` has a preimage, and the empty tuple is
/// returned.
pub fn to_tuple(k: usize, n: &BigUint) -> Vec<BigUint> {
    let mut set = to_combinadics(k, n);
    set.reverse();
    set_to_list(&set)
}

/// The combinadic decomposition of `n` with `k` digits: the unique strictly
/// decreasing sequence `m_k > … > m_1 >= 0` with
/// `n = C(m_k, k) + … + C(m_1, 1)`.
pub fn to_combinadics(k: usize, n: &BigUint) -> Vec<BigUint> {
    let mut digits = Vec::with_capacity(k);
    let mut rest = n.clone();
    for j in (1..=k).rev() {
        let digit = first_binomial_above(j, &rest) - 1u32;
        rest -= binomial(&digit, j);
        digits.push(digit);
    }
    digits
}

/// The smallest `m` with `C(m, k) > n`, found by binary search over
/// `[k - 1, n + k]`. The upper bound works because `C(n + k, k) > n` for
/// every `k >= 1`.
fn first_binomial_above(k: usize, n: &BigUint) -> BigUint {
    debug_assert!(k >= 1);
    let mut lo = BigUint::from(k - 1);
    let mut hi = n + BigUint::from(k);
    while lo < hi {
        let mid = (&lo + &hi) >> 1u32;
        if binomial(&mid, k) > *n {
            hi = mid;
        } else {
            lo = mid + 1u32;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuple(xs: &[u64]) -> Vec<BigUint> {
        xs.iter().map(|&x| BigUint::from(x)).collect()
    }

    #[test]
    fn list_to_set_is_strictly_increasing_and_inverts() {
        let xs = tuple(&[3, 0, 0, 7, 1]);
        let ys = list_to_set(&xs);
        assert_eq!(ys, tuple(&[3, 4, 5, 13, 15]));
        for pair in ys.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(set_to_list(&ys), xs);
    }

    #[test]
    fn empty_and_singleton_tuples() {
        assert_eq!(from_tuple(&[]), BigUint::zero());
        assert_eq!(to_tuple(0, &BigUint::zero()), Vec::<BigUint>::new());
        for n in 0u64..50 {
            let n = BigUint::from(n);
            assert_eq!(from_tuple(&[n.clone()]), n);
            assert_eq!(to_tuple(1, &n), vec![n]);
        }
    }

    #[test]
    fn pairing_by_hand() {
        // from_tuple([a, b]) = C(a, 1) + C(a + b + 1, 2)
        assert_eq!(from_tuple(&tuple(&[3, 4])), BigUint::from(31u32));
        assert_eq!(to_tuple(2, &BigUint::from(31u32)), tuple(&[3, 4]));
    }

    #[test]
    fn tuple_round_trip_over_codes() {
        for k in 0usize..6 {
            let n_max = if k == 0 { 1 } else { 200 };
            for n in 0u64..n_max {
                let n = BigUint::from(n);
                let xs = to_tuple(k, &n);
                assert_eq!(xs.len(), k);
                assert_eq!(from_tuple(&xs), n, "k={k}");
            }
        }
    }

    #[test]
    fn tuple_round_trip_over_tuples() {
        let cases: &[&[u64]] = &[
            &[0, 0, 0],
            &[1, 2, 3, 4],
            &[9, 0, 9, 0, 9],
            &[1_000_000, 0, 17],
            &[1, 0, 0, 2, 2, 0, 2, 1, 6, 0, 0, 3],
        ];
        for xs in cases {
            let xs = tuple(xs);
            let n = from_tuple(&xs);
            assert_eq!(to_tuple(xs.len(), &n), xs);
        }
    }

    #[test]
    fn combinadics_digits_decrease_strictly() {
        let digits = to_combinadics(5, &BigUint::from(72u32));
        assert_eq!(digits.len(), 5);
        for pair in digits.windows(2) {
            assert!(pair[0] > pair[1]);
        }
        let total: BigUint = digits
            .iter()
            .enumerate()
            .map(|(i, m)| binomial(m, 5 - i))
            .sum();
        assert_eq!(total, BigUint::from(72u32));
    }

    #[test]
    fn first_binomial_above_bounds() {
        // C(m, 1) = m, so the first m with C(m, 1) > n is n + 1.
        for n in 0u64..40 {
            assert_eq!(
                first_binomial_above(1, &BigUint::from(n)),
                BigUint::from(n + 1)
            );
        }
        // C(4, 2) = 6 is the first pair count above 5.
        assert_eq!(first_binomial_above(2, &BigUint::from(5u32)), BigUint::from(4u32));
    }
}
