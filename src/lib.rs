//! Bit-exact inspection, classification and ordering of IEEE-754 binary32 and
//! binary64 values, working on the raw bit patterns.

#[macro_use]
mod width;

mod utils;

pub mod config;
pub mod ieee;

pub use ieee::{Category, Class, ClassMask, FieldError, Fields};
pub use utils::{FloatPoint, InBits, UnsignedInteger};

/// Operations on `f32` and its `u32` bit pattern.
#[cfg(feature = "binary32")]
pub mod binary32 {
    define_width_api!(f32, u32);
}

/// Operations on `f64` and its `u64` bit pattern.
#[cfg(feature = "binary64")]
pub mod binary64 {
    define_width_api!(f64, u64);
}
