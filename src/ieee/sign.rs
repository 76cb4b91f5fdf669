use super::bits::sign_mask;
use crate::utils::{FloatPoint, InBits, read_bit};

/// Reads the top bit of the pattern as is. A NaN reports whatever sign bit it
/// happens to carry.
#[inline]
pub fn is_sign_bit_set<F: FloatPoint>(value: F) -> bool {
    read_bit(&value.to_bits(), F::LAYOUT.sign_shift())
}

/// Flips the sign bit; the payload of a NaN is left untouched.
#[inline]
pub fn negate<F: FloatPoint>(value: F) -> F {
    F::from_bits(value.to_bits() ^ sign_mask::<F>())
}

/// `magnitude` with the sign bit of `sign`.
#[inline]
pub fn copy_sign<F: FloatPoint>(magnitude: F, sign: F) -> F {
    let mask = sign_mask::<F>();
    F::from_bits((magnitude.to_bits() & !mask) | (sign.to_bits() & mask))
}
