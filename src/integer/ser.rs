use super::BigInt;
use serde::{Serialize, Serializer};

impl Serialize for BigInt {
    /// Serialize as a `(negative, digits)` pair, digits least significant
    /// first. The pair survives any self-describing format and deserializes
    /// without decimal-string parsing.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.negative, &self.digits).serialize(serializer)
    }
}
