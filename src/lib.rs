//! Arbitrary-precision signed integer arithmetic over decimal digits.
//!
//! The value type of this crate is [`BigInt`], a sign-magnitude integer
//! whose magnitude is a little-endian buffer of decimal digits. Results are
//! never bounded by machine word width: addition, subtraction, and
//! multiplication allocate as many digits as the result needs, and
//! multiplication uses the Karatsuba algorithm, recombining three half-width
//! recursive products instead of one full-width schoolbook pass.
//!
//! Machine integers promote into [`BigInt`] through `From`, and the
//! arithmetic and comparison operators accept them directly on either side:
//!
//! ```
//! use decint::BigInt;
//!
//! let a = BigInt::from(34);
//! let b = BigInt::from(1299);
//!
//! assert_eq!(&a + &b, 1333);
//! assert_eq!(&a - &b, -1265);
//! assert_eq!(BigInt::from(123) * 456, 56088);
//! assert_eq!((&b * &b).to_string(), "1687401");
//! ```
//!
//! Values are immutable and contain no shared state, so they can be read
//! from any number of threads without synchronization.
//!
//! # Optional features
//!
//! - `serde`: `Serialize` and `Deserialize` impls encoding a value as its
//!   `(negative, digits)` pair.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod integer;
mod math;

pub use crate::integer::BigInt;
