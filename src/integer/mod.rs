//! The signed arbitrary-precision integer value type.

use crate::math::{self, DigitVec};
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use core::ops::{Index, Neg};

#[cfg(feature = "serde")]
mod de;
mod from;
mod ops;
mod partial_eq;
#[cfg(feature = "serde")]
mod ser;

/// An arbitrary-precision signed integer.
///
/// Stored in sign-magnitude form: a negative flag plus a little-endian buffer
/// of decimal digits. The representation is canonical — no most-significant
/// zero digits, and zero is never negative — so every value has exactly one
/// encoding and equality is a field-by-field comparison.
///
/// Values are immutable: every arithmetic operation produces a new `BigInt`
/// and never mutates its operands. Machine integers promote through `From`,
/// and the operators accept them directly on either side.
///
/// ```
/// use decint::BigInt;
///
/// let n = BigInt::from(-12);
/// assert_eq!(&n * &n, 144);
/// assert_eq!(n + 5, -7);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    digits: DigitVec,
}

impl BigInt {
    /// The number zero.
    pub fn zero() -> BigInt {
        BigInt {
            negative: false,
            digits: vec![0],
        }
    }

    /// Returns true if the value is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns true if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Number of decimal digits in the magnitude. Zero has one digit.
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// The magnitude's digit at position `i`, least significant first.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not below [`digit_count`](BigInt::digit_count);
    /// supplying an in-range index is the caller's responsibility.
    pub fn digit(&self, i: usize) -> u8 {
        self.digits[i]
    }

    /// Assemble a value from a sign flag and a digit buffer, normalizing the
    /// buffer and forcing the sign to non-negative when the magnitude is
    /// zero. Every arithmetic result funnels through here.
    pub(crate) fn from_parts(negative: bool, mut digits: DigitVec) -> BigInt {
        math::normalize(&mut digits);
        let negative = negative && digits != [0];
        BigInt { negative, digits }
    }
}

impl Default for BigInt {
    /// The default value is zero.
    fn default() -> BigInt {
        BigInt::zero()
    }
}

impl Display for BigInt {
    /// Renders the decimal form: most significant digit first, a leading `-`
    /// if and only if the value is negative, and zero as `"0"`.
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let mut rendered = String::with_capacity(self.digits.len() + 1);
        if self.negative {
            rendered.push('-');
        }
        for &digit in self.digits.iter().rev() {
            rendered.push((b'0' + digit) as char);
        }
        formatter.write_str(&rendered)
    }
}

impl Debug for BigInt {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "BigInt({})", self)
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    /// Flips the sign. Zero stays non-negative.
    fn neg(mut self) -> BigInt {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl Index<usize> for BigInt {
    type Output = u8;

    /// The magnitude's digit at position `index`, least significant first.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range, like [`digit`](BigInt::digit).
    fn index(&self, index: usize) -> &u8 {
        &self.digits[index]
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    /// Total order over values: any negative number sorts below any
    /// non-negative one, and between equal signs the magnitude comparison
    /// decides, inverted for two negatives.
    fn cmp(&self, other: &BigInt) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => math::compare(&self.digits, &other.digits),
            (true, true) => math::compare(&other.digits, &self.digits),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}
