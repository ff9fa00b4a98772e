use super::BigInt;
use crate::math::DigitVec;

macro_rules! from_integer {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                /// Promote a machine integer, recording its sign and
                /// extracting the decimal digits of its absolute value,
                /// least significant first.
                fn from(value: $ty) -> Self {
                    let mut buffer = itoa::Buffer::new();
                    let rendered = buffer.format(value);
                    let negative = rendered.starts_with('-');
                    let digits: DigitVec = rendered.as_bytes()[negative as usize..]
                        .iter()
                        .rev()
                        .map(|&byte| byte - b'0')
                        .collect();
                    BigInt { negative, digits }
                }
            }
        )*
    };
}

from_integer! {
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
}
