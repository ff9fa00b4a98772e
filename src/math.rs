//! Building-blocks for arbitrary-precision decimal arithmetic.
//!
//! These algorithms assume little-endian order for the digit buffers, so for
//! a `vec![3, 2, 1]`, `1` is the most significant digit and `3` is the least
//! significant. Buffers are sign-free magnitudes; sign resolution happens in
//! the `integer` module.
//!
//! Unless noted otherwise, the functions here expect canonical input: a
//! non-empty buffer with no most-significant zero digits, except the single
//! digit `[0]` denoting zero exactly. Feeding a non-canonical buffer to a
//! function that requires canonical input is a caller bug, checked with
//! `debug_assert!` rather than reported as a recoverable error.

use core::cmp::Ordering;
use core::iter;

// ALIASES
// -------

/// A single decimal digit in `0..=9`.
pub(crate) type Digit = u8;

/// Backing storage for a digit buffer.
pub(crate) type DigitVec = Vec<Digit>;

const RADIX: Digit = 10;

// NORMALIZE
// ---------

/// Check the canonical-form invariant: non-empty, all digits below 10, and
/// no most-significant zero unless the buffer is exactly `[0]`.
pub(crate) fn is_canonical(x: &[Digit]) -> bool {
    match x.last() {
        None => false,
        Some(&most_significant) => {
            (most_significant != 0 || x.len() == 1) && x.iter().all(|&digit| digit < RADIX)
        }
    }
}

/// Normalize the buffer by popping most-significant zero digits.
///
/// An all-zero (or empty) buffer collapses to `[0]`.
pub(crate) fn normalize(x: &mut DigitVec) {
    while x.len() > 1 && x.last() == Some(&0) {
        x.pop();
    }
    if x.is_empty() {
        x.push(0);
    }
}

/// Pad the buffer with most-significant zero digits up to `len`.
///
/// Buffers already at least `len` long are left untouched. The result is
/// generally not canonical; this is the equalization step for multiplication.
pub(crate) fn pad(x: &mut DigitVec, len: usize) {
    if x.len() < len {
        x.resize(len, 0);
    }
}

/// Shift the buffer up by `n` decimal positions, multiplying it by `10^n`.
fn shift_up(x: &mut DigitVec, n: usize) {
    if n != 0 {
        x.splice(0..0, iter::repeat(0).take(n));
    }
}

// COMPARISON
// ----------

/// Compare the values of two canonical digit buffers.
///
/// A longer buffer is always the larger one, since canonical form forbids
/// leading zero padding. Equal-length buffers compare digit by digit from
/// the most significant position down; the first differing digit decides.
pub(crate) fn compare(x: &[Digit], y: &[Digit]) -> Ordering {
    debug_assert!(is_canonical(x) && is_canonical(y));

    match x.len().cmp(&y.len()) {
        Ordering::Equal => {}
        unequal => return unequal,
    }
    for (xi, yi) in x.iter().rev().zip(y.iter().rev()) {
        match xi.cmp(yi) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

// ADDITION
// --------

/// Add two digit buffers of possibly different lengths.
///
/// Walks from the least significant position up, carrying into at most one
/// extra digit past the longer operand. Total: never fails, and tolerates
/// non-canonical input (the Karatsuba recursion feeds it padded halves).
pub(crate) fn add(x: &[Digit], y: &[Digit]) -> DigitVec {
    let (smaller, greater) = if x.len() <= y.len() { (x, y) } else { (y, x) };
    let mut sum = greater.to_vec();

    let mut carry = 0;
    for (digit, &si) in sum.iter_mut().zip(smaller.iter()) {
        let total = *digit + si + carry;
        carry = total / RADIX;
        *digit = total % RADIX;
    }

    for digit in sum.iter_mut().skip(smaller.len()) {
        if carry == 0 {
            break;
        }
        let total = *digit + carry;
        carry = total / RADIX;
        *digit = total % RADIX;
    }

    if carry != 0 {
        sum.push(carry);
    }
    sum
}

// SUBTRACTION
// -----------

/// Compute `|x - y|` together with which operand was the smaller one.
///
/// The returned flag is true when `x` was the smaller operand, i.e. when the
/// true difference `x - y` is negative; on equal magnitudes it is false. The
/// comparator picks the larger buffer to walk, borrowing digit by digit from
/// it, and the result is canonical.
pub(crate) fn sub(x: &[Digit], y: &[Digit]) -> (bool, DigitVec) {
    let (smaller, greater, x_was_smaller) = match compare(x, y) {
        Ordering::Less => (x, y, true),
        _ => (y, x, false),
    };

    let mut difference = DigitVec::with_capacity(greater.len());
    let mut borrow = 0;
    for (i, &gi) in greater.iter().enumerate() {
        let si = borrow + if i < smaller.len() { smaller[i] } else { 0 };
        if gi < si {
            borrow = 1;
            difference.push(gi + RADIX - si);
        } else {
            borrow = 0;
            difference.push(gi - si);
        }
    }

    normalize(&mut difference);
    (x_was_smaller, difference)
}

// MULTIPLICATION
// --------------

/// Multiply two canonical digit buffers with the Karatsuba algorithm.
///
/// Operands are zero-padded to a common length here, at the multiplier's
/// entry, so callers never need to equalize lengths themselves. The result
/// is canonical.
pub(crate) fn mul(x: &[Digit], y: &[Digit]) -> DigitVec {
    debug_assert!(is_canonical(x) && is_canonical(y));

    if x.len() == y.len() {
        karatsuba(x, y)
    } else {
        let len = x.len().max(y.len());
        let mut xp = x.to_vec();
        let mut yp = y.to_vec();
        pad(&mut xp, len);
        pad(&mut yp, len);
        karatsuba(&xp, &yp)
    }
}

/// Karatsuba recursion over equal-length buffers. Returns a canonical buffer.
///
/// Splits both operands at the midpoint, computes the three half-width
/// products, and recombines them shifted by one and two half-widths:
///
/// ```text
/// x * y = z2 * 10^(2m) + z1 * 10^m + z0
/// z2 = x1 * y1
/// z0 = x0 * y0
/// z1 = (x0 + x1)(y0 + y1) - z2 - z0
/// ```
///
/// The cross sums `x0 + x1` and `y0 + y1` may outgrow the halves by a carry
/// digit and may differ in length from each other, so they are re-equalized
/// before the recursive multiply at every level. The `z1` subtraction can
/// never underflow when the identity holds; an underflow there is an
/// implementation defect, not bad input.
fn karatsuba(x: &[Digit], y: &[Digit]) -> DigitVec {
    debug_assert!(x.len() == y.len());
    debug_assert!(!x.is_empty());

    if x.len() == 1 {
        // Single-digit product, at most 81: one digit plus an optional carry.
        let product = x[0] * y[0];
        let mut result = vec![product % RADIX];
        if product >= RADIX {
            result.push(product / RADIX);
        }
        return result;
    }

    let middle = x.len() / 2;
    let (x0, x1) = x.split_at(middle);
    let (y0, y1) = y.split_at(middle);

    let mut z2 = karatsuba(x1, y1);
    let z0 = karatsuba(x0, y0);

    let mut s1 = add(x0, x1);
    let mut s2 = add(y0, y1);
    let len = s1.len().max(s2.len());
    pad(&mut s1, len);
    pad(&mut s2, len);
    let cross = karatsuba(&s1, &s2);

    let (underflow, mut z1) = sub(&cross, &add(&z2, &z0));
    debug_assert!(!underflow);

    shift_up(&mut z2, 2 * middle);
    shift_up(&mut z1, middle);
    let mut result = add(&z2, &add(&z1, &z0));
    normalize(&mut result);
    result
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    /// Grade-school multiplication, the reference the recursive algorithm is
    /// checked against.
    fn long_mul(x: &[Digit], y: &[Digit]) -> DigitVec {
        let mut product = vec![0; x.len() + y.len()];
        for (i, &xi) in x.iter().enumerate() {
            let mut carry = 0;
            for (j, &yj) in y.iter().enumerate() {
                let total = product[i + j] + xi * yj + carry;
                carry = total / RADIX;
                product[i + j] = total % RADIX;
            }
            let mut k = i + y.len();
            while carry != 0 {
                let total = product[k] + carry;
                carry = total / RADIX;
                product[k] = total % RADIX;
                k += 1;
            }
        }
        normalize(&mut product);
        product
    }

    struct Lcg(u64);

    impl Lcg {
        fn next_digit(&mut self) -> Digit {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((self.0 >> 33) % u64::from(RADIX)) as Digit
        }
    }

    /// Random canonical buffer of exactly `len` digits.
    fn random_digits(rng: &mut Lcg, len: usize) -> DigitVec {
        let mut digits: DigitVec = (0..len).map(|_| rng.next_digit()).collect();
        if let Some(last) = digits.last_mut() {
            if *last == 0 {
                *last = 1;
            }
        }
        digits
    }

    #[test]
    fn normalize_test() {
        let mut x = vec![5, 1, 0, 0];
        normalize(&mut x);
        assert_eq!(x, [5, 1]);

        let mut x = vec![0, 0, 0];
        normalize(&mut x);
        assert_eq!(x, [0]);

        let mut x = vec![];
        normalize(&mut x);
        assert_eq!(x, [0]);

        let mut x = vec![7];
        normalize(&mut x);
        assert_eq!(x, [7]);
    }

    #[test]
    fn pad_test() {
        let mut x = vec![1, 2];
        pad(&mut x, 4);
        assert_eq!(x, [1, 2, 0, 0]);

        pad(&mut x, 3);
        assert_eq!(x, [1, 2, 0, 0]);
    }

    #[test]
    fn shift_up_test() {
        let mut x = vec![1, 2];
        shift_up(&mut x, 3);
        assert_eq!(x, [0, 0, 0, 1, 2]);

        let mut x = vec![9];
        shift_up(&mut x, 0);
        assert_eq!(x, [9]);
    }

    #[test]
    fn compare_test() {
        // Length decides.
        assert_eq!(compare(&[9, 9], &[1, 0, 1]), Ordering::Less);
        assert_eq!(compare(&[1, 0, 1], &[9, 9]), Ordering::Greater);

        // Same length, decided from the most significant digit down.
        assert_eq!(compare(&[9, 2, 1], &[1, 3, 1]), Ordering::Less);
        assert_eq!(compare(&[0, 0, 2], &[9, 9, 1]), Ordering::Greater);
        assert_eq!(compare(&[4, 3], &[4, 3]), Ordering::Equal);
        assert_eq!(compare(&[0], &[0]), Ordering::Equal);
    }

    #[test]
    fn add_test() {
        // 34 + 1299 = 1333
        assert_eq!(add(&[4, 3], &[9, 9, 2, 1]), [3, 3, 3, 1]);
        // 999 + 1 = 1000, carry ripples through the longer operand.
        assert_eq!(add(&[9, 9, 9], &[1]), [0, 0, 0, 1]);
        // 9 + 9 = 18, final carry appends a digit.
        assert_eq!(add(&[9], &[9]), [8, 1]);
        // Zero is the identity.
        assert_eq!(add(&[0], &[7, 2]), [7, 2]);
    }

    #[test]
    fn sub_test() {
        // 34 - 1299 = -(1265)
        assert_eq!(sub(&[4, 3], &[9, 9, 2, 1]), (true, vec![5, 6, 2, 1]));
        // 1299 - 34, same magnitude pair the other way around.
        assert_eq!(sub(&[9, 9, 2, 1], &[4, 3]), (false, vec![5, 6, 2, 1]));
        // 1000 - 1, borrow chain across zeros.
        assert_eq!(sub(&[0, 0, 0, 1], &[1]), (false, vec![9, 9, 9]));
        // Equal operands collapse to canonical zero, flagged non-negative.
        assert_eq!(sub(&[7, 1], &[7, 1]), (false, vec![0]));
    }

    #[test]
    fn mul_small_test() {
        // 12 * 34 = 408
        assert_eq!(mul(&[2, 1], &[4, 3]), [8, 0, 4]);
        // 123 * 456 = 56088
        assert_eq!(mul(&[3, 2, 1], &[6, 5, 4]), [8, 8, 0, 6, 5]);
        // Single-digit base cases, with and without a carry digit.
        assert_eq!(mul(&[3], &[2]), [6]);
        assert_eq!(mul(&[9], &[9]), [1, 8]);
        // Zero collapses to canonical [0].
        assert_eq!(mul(&[0], &[9, 9, 2, 1]), [0]);
        assert_eq!(mul(&[1], &[9, 9, 2, 1]), [9, 9, 2, 1]);
    }

    #[test]
    fn mul_pads_uneven_lengths() {
        // 9999999 * 3 = 29999997; entry padding equalizes the operands.
        assert_eq!(
            mul(&[9, 9, 9, 9, 9, 9, 9], &[3]),
            [7, 9, 9, 9, 9, 9, 9, 2]
        );
        assert_eq!(mul(&[3], &[9, 9, 9, 9, 9, 9, 9]), [7, 9, 9, 9, 9, 9, 9, 2]);
    }

    #[test]
    fn mul_matches_long_mul() {
        // Randomized magnitudes across every length pair up to 24 digits,
        // covering odd splits, carry growth in the cross sums, and deep
        // re-equalization.
        let mut rng = Lcg(0x9E3779B97F4A7C15);
        for xlen in 1..=24 {
            for ylen in 1..=24 {
                let x = random_digits(&mut rng, xlen);
                let y = random_digits(&mut rng, ylen);
                assert_eq!(mul(&x, &y), long_mul(&x, &y), "{x:?} * {y:?}");
            }
        }
    }

    #[test]
    fn mul_matches_long_mul_large() {
        let mut rng = Lcg(0x243F6A8885A308D3);
        for &len in &[63, 64, 100, 127, 128, 255] {
            let x = random_digits(&mut rng, len);
            let y = random_digits(&mut rng, len);
            assert_eq!(mul(&x, &y), long_mul(&x, &y));
        }
    }
}
