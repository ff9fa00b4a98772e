use super::BigInt;
use crate::math::DigitVec;
use serde::de::{Deserialize, Deserializer, Error, Unexpected};

impl<'de> Deserialize<'de> for BigInt {
    /// Deserialize the `(negative, digits)` pair produced by the `Serialize`
    /// impl. The digit buffer is validated and renormalized, so hand-written
    /// input cannot smuggle in an out-of-range digit or a non-canonical
    /// encoding such as a negative zero.
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (negative, digits): (bool, DigitVec) = Deserialize::deserialize(deserializer)?;
        if digits.is_empty() {
            return Err(D::Error::invalid_length(0, &"at least one digit"));
        }
        if let Some(&digit) = digits.iter().find(|&&digit| digit > 9) {
            return Err(D::Error::invalid_value(
                Unexpected::Unsigned(u64::from(digit)),
                &"a decimal digit in 0..=9",
            ));
        }
        Ok(BigInt::from_parts(negative, digits))
    }
}
