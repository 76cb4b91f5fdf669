mod bits;
mod classify;
mod compare;
mod magnitude;
mod sign;

pub use bits::{FieldError, Fields, compose, decompose, from_bits, to_bits};
pub use classify::{
    class, class_mask, classify, is_finite, is_infinite, is_nan, is_negative_infinite,
    is_negative_zero, is_normal, is_positive_infinite, is_positive_zero, is_quiet_nan,
    is_signaling_nan, is_subnormal, is_zero,
};
pub use compare::{
    compare_any, equal_any, equal_precision, greater_any, greater_precision, less_any,
    less_precision,
};
pub use magnitude::{abs, clamp, max, min};
pub use sign::{copy_sign, is_sign_bit_set, negate};

use bitflags::bitflags;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The five value categories. Every bit pattern falls in exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    NaN,
    Infinite,
    Zero,
    Subnormal,
    Normal,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::NaN,
        Category::Infinite,
        Category::Zero,
        Category::Subnormal,
        Category::Normal,
    ];

    #[inline]
    pub fn is_finite(self) -> bool {
        !matches!(self, Category::NaN | Category::Infinite)
    }
}

/// Sign-aware class, one bit per variant in the RISC-V `fclass` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum Class {
    NegativeInfinity = 0x1,
    NormalNegative = 0x2,
    SubnormalNegative = 0x4,
    NegativeZero = 0x8,
    PositiveZero = 0x10,
    SubnormalPositive = 0x20,
    NormalPositive = 0x40,
    PositiveInfinity = 0x80,
    SignalingNaN = 0x100,
    QuietNaN = 0x200,
}

impl From<Class> for Category {
    fn from(class: Class) -> Self {
        match class {
            Class::NegativeInfinity | Class::PositiveInfinity => Category::Infinite,
            Class::NormalNegative | Class::NormalPositive => Category::Normal,
            Class::SubnormalNegative | Class::SubnormalPositive => Category::Subnormal,
            Class::NegativeZero | Class::PositiveZero => Category::Zero,
            Class::SignalingNaN | Class::QuietNaN => Category::NaN,
        }
    }
}

bitflags! {
    /// A set of [`Class`]es, bit-compatible with `u16::from(Class)`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClassMask: u16 {
        const NEGATIVE_INFINITY = 0x1;
        const NORMAL_NEGATIVE = 0x2;
        const SUBNORMAL_NEGATIVE = 0x4;
        const NEGATIVE_ZERO = 0x8;
        const POSITIVE_ZERO = 0x10;
        const SUBNORMAL_POSITIVE = 0x20;
        const NORMAL_POSITIVE = 0x40;
        const POSITIVE_INFINITY = 0x80;
        const SIGNALING_NAN = 0x100;
        const QUIET_NAN = 0x200;

        const INFINITE = Self::NEGATIVE_INFINITY.bits() | Self::POSITIVE_INFINITY.bits();
        const NORMAL = Self::NORMAL_NEGATIVE.bits() | Self::NORMAL_POSITIVE.bits();
        const SUBNORMAL = Self::SUBNORMAL_NEGATIVE.bits() | Self::SUBNORMAL_POSITIVE.bits();
        const ZERO = Self::NEGATIVE_ZERO.bits() | Self::POSITIVE_ZERO.bits();
        const NAN = Self::SIGNALING_NAN.bits() | Self::QUIET_NAN.bits();
        const FINITE = Self::NORMAL.bits() | Self::SUBNORMAL.bits() | Self::ZERO.bits();

        // NaN carries no sign in either set.
        const NEGATIVE = Self::NEGATIVE_INFINITY.bits()
            | Self::NORMAL_NEGATIVE.bits()
            | Self::SUBNORMAL_NEGATIVE.bits()
            | Self::NEGATIVE_ZERO.bits();
        const POSITIVE = Self::POSITIVE_ZERO.bits()
            | Self::SUBNORMAL_POSITIVE.bits()
            | Self::NORMAL_POSITIVE.bits()
            | Self::POSITIVE_INFINITY.bits();
    }
}

impl From<Class> for ClassMask {
    fn from(class: Class) -> Self {
        ClassMask::from_bits_retain(class.into())
    }
}
