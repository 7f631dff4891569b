//! Binomial coefficients and Catalan numbers over arbitrary precision.
//!
//! Both functions are pure and allocate nothing beyond their result; the
//! divisions they perform are exact at every step, provided each
//! multiplication happens before the corresponding division.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

/// The binomial coefficient `C(n, k)`.
///
/// Out-of-range `k` (larger than `n`) yields zero. The upper argument may
/// be arbitrarily large; the lower argument indexes a position in memory
/// and is machine-sized.
pub fn binomial(n: &BigUint, k: usize) -> BigUint {
    if BigUint::from(k) > *n {
        return BigUint::zero();
    }
    let mut k = k;
    if let Some(n) = n.to_usize() {
        // C(n, k) = C(n, n - k); take the shorter product.
        if k > n - k {
            k = n - k;
        }
    }
    let mut b = BigUint::one();
    for i in 0..k {
        b = b * (n - BigUint::from(i)) / BigUint::from(i + 1);
    }
    b
}

/// The `n`-th Catalan number.
///
/// Runs the recurrence `c_n = c_(n-1) * 2(2n - 1) / (n + 1)` from
/// `c_0 = 1`; the division is exact at every step.
pub fn catalan(n: usize) -> BigUint {
    let mut c = BigUint::one();
    for i in 1..=n {
        c = c * BigUint::from(2 * (2 * i - 1)) / BigUint::from(i + 1);
    }
    c
}
