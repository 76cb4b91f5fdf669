use super::{
    bits::sign_mask,
    classify::{is_nan, is_negative_zero, is_positive_zero},
};
use crate::utils::{FloatPoint, InBits};

/// Clears the sign bit. Exponent and significand, NaN payloads included, pass
/// through unchanged.
#[inline]
pub fn abs<F: FloatPoint>(value: F) -> F {
    F::from_bits(value.to_bits() & !sign_mask::<F>())
}

/// Smaller of `a` and `b`, with `-0` below `+0`.
///
/// A NaN `a` yields `b`; otherwise a NaN `b` yields `a`. This is not IEEE
/// `minNum`: two NaNs give back `b`.
pub fn min<F: FloatPoint>(a: F, b: F) -> F {
    if is_nan(a) {
        return b;
    }
    if is_nan(b) {
        return a;
    }

    if is_positive_zero(a) && is_negative_zero(b) {
        return b;
    }
    if is_negative_zero(a) && is_positive_zero(b) {
        return a;
    }

    if a < b { a } else { b }
}

/// Larger of `a` and `b`, with `+0` above `-0`. NaN handling mirrors [`min`].
pub fn max<F: FloatPoint>(a: F, b: F) -> F {
    if is_nan(a) {
        return b;
    }
    if is_nan(b) {
        return a;
    }

    if is_positive_zero(a) && is_negative_zero(b) {
        return a;
    }
    if is_negative_zero(a) && is_positive_zero(b) {
        return b;
    }

    if a > b { a } else { b }
}

/// `min(max(value, lo), hi)`, in that order.
///
/// Inverted bounds are not corrected: with `lo > hi` the result is always `hi`,
/// e.g. `clamp(-1.0, inf, -inf) == -inf`.
pub fn clamp<F: FloatPoint>(value: F, lo: F, hi: F) -> F {
    if lo > hi {
        log::trace!("clamp bounds are inverted: lo = {:?}, hi = {:?}", lo, hi);
    }
    min(max(value, lo), hi)
}
