//! Arithmetic operators: sign combination over the magnitude algorithms.
//!
//! Every signed operation delegates to the magnitude-level functions in
//! `math`, re-derives the result's sign, and canonicalizes through
//! `BigInt::from_parts` so a zero result is never negative.

use super::BigInt;
use crate::math;
use core::ops::{Add, Mul, Sub};

fn add_impl(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    if lhs.negative == rhs.negative {
        BigInt::from_parts(lhs.negative, math::add(&lhs.digits, &rhs.digits))
    } else {
        // Present the non-negative operand's magnitude first; the subtractor
        // then flags whether the negative operand's magnitude won, which is
        // exactly the sign of the sum.
        let (negative, digits) = if lhs.negative {
            math::sub(&rhs.digits, &lhs.digits)
        } else {
            math::sub(&lhs.digits, &rhs.digits)
        };
        BigInt::from_parts(negative, digits)
    }
}

fn sub_impl(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    if lhs.negative != rhs.negative {
        BigInt::from_parts(lhs.negative, math::add(&lhs.digits, &rhs.digits))
    } else {
        // Equal signs reduce to a magnitude difference. For two negatives
        // the roles swap, since a - b == -(|a| - |b|) there.
        let (negative, digits) = if lhs.negative {
            math::sub(&rhs.digits, &lhs.digits)
        } else {
            math::sub(&lhs.digits, &rhs.digits)
        };
        BigInt::from_parts(negative, digits)
    }
}

fn mul_impl(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    BigInt::from_parts(
        lhs.negative != rhs.negative,
        math::mul(&lhs.digits, &rhs.digits),
    )
}

macro_rules! binop {
    ($imp:ident, $method:ident, $function:ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, other: BigInt) -> BigInt {
                $function(&self, &other)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, other: &BigInt) -> BigInt {
                $function(&self, other)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, other: BigInt) -> BigInt {
                $function(self, &other)
            }
        }

        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, other: &BigInt) -> BigInt {
                $function(self, other)
            }
        }
    };
}

binop!(Add, add, add_impl);
binop!(Sub, sub, sub_impl);
binop!(Mul, mul, mul_impl);

macro_rules! binop_numeric {
    ($($ty:ty)*) => {
        $(
            impl Add<$ty> for BigInt {
                type Output = BigInt;

                fn add(self, other: $ty) -> BigInt {
                    add_impl(&self, &BigInt::from(other))
                }
            }

            impl Add<$ty> for &BigInt {
                type Output = BigInt;

                fn add(self, other: $ty) -> BigInt {
                    add_impl(self, &BigInt::from(other))
                }
            }

            impl Add<BigInt> for $ty {
                type Output = BigInt;

                fn add(self, other: BigInt) -> BigInt {
                    add_impl(&BigInt::from(self), &other)
                }
            }

            impl Add<&BigInt> for $ty {
                type Output = BigInt;

                fn add(self, other: &BigInt) -> BigInt {
                    add_impl(&BigInt::from(self), other)
                }
            }

            impl Sub<$ty> for BigInt {
                type Output = BigInt;

                fn sub(self, other: $ty) -> BigInt {
                    sub_impl(&self, &BigInt::from(other))
                }
            }

            impl Sub<$ty> for &BigInt {
                type Output = BigInt;

                fn sub(self, other: $ty) -> BigInt {
                    sub_impl(self, &BigInt::from(other))
                }
            }

            impl Sub<BigInt> for $ty {
                type Output = BigInt;

                fn sub(self, other: BigInt) -> BigInt {
                    sub_impl(&BigInt::from(self), &other)
                }
            }

            impl Sub<&BigInt> for $ty {
                type Output = BigInt;

                fn sub(self, other: &BigInt) -> BigInt {
                    sub_impl(&BigInt::from(self), other)
                }
            }

            impl Mul<$ty> for BigInt {
                type Output = BigInt;

                fn mul(self, other: $ty) -> BigInt {
                    mul_impl(&self, &BigInt::from(other))
                }
            }

            impl Mul<$ty> for &BigInt {
                type Output = BigInt;

                fn mul(self, other: $ty) -> BigInt {
                    mul_impl(self, &BigInt::from(other))
                }
            }

            impl Mul<BigInt> for $ty {
                type Output = BigInt;

                fn mul(self, other: BigInt) -> BigInt {
                    mul_impl(&BigInt::from(self), &other)
                }
            }

            impl Mul<&BigInt> for $ty {
                type Output = BigInt;

                fn mul(self, other: &BigInt) -> BigInt {
                    mul_impl(&BigInt::from(self), other)
                }
            }
        )*
    };
}

binop_numeric! {
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
}
