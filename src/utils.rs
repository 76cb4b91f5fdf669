use std::{
    fmt::{Debug, Display, LowerHex},
    ops::*,
};

use crate::config::layout_config::{BINARY32, BINARY64, FieldLayout};

pub trait TruncateFrom<T>: Sized {
    fn truncate_from(value: T) -> Self;
}

pub trait TruncateTo<T>: Sized {
    fn truncate_to(self) -> T;
}

impl<T, U> TruncateTo<U> for T
where
    U: TruncateFrom<T>,
{
    #[inline]
    fn truncate_to(self) -> U {
        U::truncate_from(self)
    }
}

macro_rules! impl_truncate_from {
    ($from:ty, $to:ty) => {
        impl TruncateFrom<$from> for $to {
            #[inline]
            fn truncate_from(val: $from) -> Self {
                val as $to
            }
        }
    };
}

impl_truncate_from!(u32, u32);
impl_truncate_from!(u32, u64);
impl_truncate_from!(u64, u32);
impl_truncate_from!(u64, u64);

/// Storage type of a bit pattern.
pub trait UnsignedInteger:
    Copy
    + Sized
    + From<u8>
    + Into<u64>
    + Default
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + BitXorAssign
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Debug
    + Display
    + LowerHex
    + Send
    + Sync
    + TruncateFrom<u64>
    + TruncateTo<u32>
{
    const ZERO: Self;
    const MAX: Self;

    const BITS: u32;
}

impl UnsignedInteger for u32 {
    const ZERO: u32 = 0;
    const MAX: u32 = u32::MAX;
    const BITS: u32 = 32;
}

impl UnsignedInteger for u64 {
    const ZERO: u64 = 0;
    const MAX: u64 = u64::MAX;
    const BITS: u32 = 64;
}

pub trait InBits<U> {
    fn from_bits(x: U) -> Self;
    fn to_bits(self) -> U;
}

/// A binary IEEE-754 floating-point type whose bit pattern has a fixed
/// [`FieldLayout`].
pub trait FloatPoint:
    Sub<Output = Self>
    + PartialEq
    + PartialOrd
    + Copy
    + Debug
    + Display
    + Send
    + Sync
    + InBits<Self::BitsType>
{
    type BitsType: UnsignedInteger;

    const LAYOUT: FieldLayout;
}

impl InBits<u32> for f32 {
    #[inline]
    fn from_bits(x: u32) -> Self {
        f32::from_bits(x)
    }

    #[inline]
    fn to_bits(self) -> u32 {
        self.to_bits()
    }
}

impl InBits<u64> for f64 {
    #[inline]
    fn from_bits(x: u64) -> Self {
        f64::from_bits(x)
    }

    #[inline]
    fn to_bits(self) -> u64 {
        self.to_bits()
    }
}

impl FloatPoint for f32 {
    type BitsType = u32;

    const LAYOUT: FieldLayout = BINARY32;
}

impl FloatPoint for f64 {
    type BitsType = u64;

    const LAYOUT: FieldLayout = BINARY64;
}

const _: () = assert!(BINARY32.width == u32::BITS);
const _: () = assert!(BINARY64.width == u64::BITS);

pub fn read_bit<T>(data: &T, idx: u32) -> bool
where
    T: BitAnd<Output = T> + From<u8> + Shl<u32, Output = T> + Copy + Eq,
{
    (*data & (T::from(1u8) << idx)) != T::from(0u8)
}
