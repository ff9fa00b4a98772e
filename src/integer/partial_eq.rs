use super::BigInt;

macro_rules! partialeq_numeric {
    ($($ty:ty)*) => {
        $(
            impl PartialEq<$ty> for BigInt {
                fn eq(&self, other: &$ty) -> bool {
                    *self == BigInt::from(*other)
                }
            }

            impl PartialEq<BigInt> for $ty {
                fn eq(&self, other: &BigInt) -> bool {
                    *other == BigInt::from(*self)
                }
            }

            impl<'a> PartialEq<$ty> for &'a BigInt {
                fn eq(&self, other: &$ty) -> bool {
                    **self == BigInt::from(*other)
                }
            }
        )*
    };
}

partialeq_numeric! {
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
}
