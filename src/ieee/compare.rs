use std::cmp::Ordering;

use super::{
    classify::{
        is_infinite, is_nan, is_negative_infinite, is_negative_zero, is_positive_infinite,
        is_positive_zero, is_zero,
    },
    magnitude::abs,
    sign::is_sign_bit_set,
};
use crate::utils::{FloatPoint, InBits};

/// Equality within an absolute `precision`.
///
/// NaN never matches. Two infinities match iff their signs agree, two zeros
/// always match, anything else needs `|a - b| <= precision`. A negative
/// `precision` therefore only ever matches through the infinity and zero cases.
pub fn equal_precision<F: FloatPoint>(a: F, b: F, precision: F) -> bool {
    if is_nan(a) || is_nan(b) {
        return false;
    }
    if is_infinite(a) && is_infinite(b) {
        return is_positive_infinite(a) == is_positive_infinite(b);
    }
    if is_zero(a) && is_zero(b) {
        return true;
    }

    if is_nan(precision) || (is_sign_bit_set(precision) && !is_zero(precision)) {
        log::trace!("precision {:?} matches no nonzero distance", precision);
    }
    abs(a - b) <= precision
}

/// Bitwise identity. Two NaNs with the same pattern are equal, `+0` and `-0`
/// are not.
#[inline]
pub fn equal_any<F: FloatPoint>(a: F, b: F) -> bool {
    a.to_bits() == b.to_bits()
}

/// `a < b` by more than `precision`. Infinities are ordered by sign; NaN is
/// never less.
pub fn less_precision<F: FloatPoint>(a: F, b: F, precision: F) -> bool {
    if is_nan(a) || is_nan(b) {
        return false;
    }
    if is_infinite(a) {
        return is_negative_infinite(a) && !is_negative_infinite(b);
    }
    if is_infinite(b) {
        return !is_positive_infinite(a) && is_positive_infinite(b);
    }

    a < b && !equal_precision(a, b, precision)
}

/// `a > b` by more than `precision`. See [`less_precision`].
pub fn greater_precision<F: FloatPoint>(a: F, b: F, precision: F) -> bool {
    if is_nan(a) || is_nan(b) {
        return false;
    }
    if is_infinite(a) {
        return is_positive_infinite(a) && !is_positive_infinite(b);
    }
    if is_infinite(b) {
        return !is_negative_infinite(a) && is_negative_infinite(b);
    }

    a > b && !equal_precision(a, b, precision)
}

/// Sign-aware strict order over every non-NaN value.
///
/// Every negative value (`-0` included) is less than every positive one. Within
/// one sign, values order as their bit patterns do, so among negatives the
/// smaller magnitude comes first: `less_any(-1.0, -2.0)` holds.
///
/// This is not IEEE 754-2008 `totalOrder`: any NaN operand gives `false`.
pub fn less_any<F: FloatPoint>(a: F, b: F) -> bool {
    if is_nan(a) || is_nan(b) {
        return false;
    }

    if is_zero(a) && is_zero(b) {
        return is_negative_zero(a) && is_positive_zero(b);
    }

    let a_sign = is_sign_bit_set(a);
    let b_sign = is_sign_bit_set(b);
    if a_sign != b_sign {
        return a_sign;
    }

    // Both negative: numeric order reversed.
    if a_sign { b < a } else { a < b }
}

/// Mirror of [`less_any`], with `+0 > -0`.
pub fn greater_any<F: FloatPoint>(a: F, b: F) -> bool {
    if is_nan(a) || is_nan(b) {
        return false;
    }

    if is_zero(a) && is_zero(b) {
        return is_positive_zero(a) && is_negative_zero(b);
    }

    let a_sign = is_sign_bit_set(a);
    let b_sign = is_sign_bit_set(b);
    if a_sign != b_sign {
        return b_sign;
    }

    if a_sign { a < b } else { a > b }
}

/// The order of [`less_any`]/[`greater_any`] as an [`Ordering`]; `None` when
/// either side is NaN. `Equal` means the bit patterns are identical.
pub fn compare_any<F: FloatPoint>(a: F, b: F) -> Option<Ordering> {
    if is_nan(a) || is_nan(b) {
        None
    } else if less_any(a, b) {
        Some(Ordering::Less)
    } else if greater_any(a, b) {
        Some(Ordering::Greater)
    } else {
        Some(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_precision() {
        assert!(equal_precision(3.14f32, 3.14, 0.001));
        assert!(equal_precision(3.14f32, 3.141, 0.002));
        assert!(!equal_precision(3.14f32, 3.15, 0.001));
        assert!(equal_precision(3.1415f32, 3.14, 0.0015));
        assert!(equal_precision(f32::INFINITY, f32::INFINITY, 0.1));
        assert!(!equal_precision(f32::INFINITY, f32::NEG_INFINITY, 0.1));
        assert!(!equal_precision(f32::NAN, 0.0, 0.1));
        assert!(!equal_precision(0.0, f32::NAN, f32::INFINITY));

        assert!(equal_precision(3.14f64, 3.141, 0.002));
        assert!(!equal_precision(3.14f64, 3.15, 0.001));
        assert!(equal_precision(f64::NEG_INFINITY, f64::NEG_INFINITY, 0.0));
    }

    #[test]
    fn test_equal_precision_edge_cases() {
        // Zeros match regardless of sign or precision.
        assert!(equal_precision(0.0f32, -0.0, -1.0));
        assert!(equal_precision(-0.0f64, 0.0, f64::NAN));

        // Negative precision never matches a plain distance, not even zero.
        assert!(!equal_precision(1.0f32, 1.0, -0.5));
        assert!(equal_precision(f64::INFINITY, f64::INFINITY, -1.0));

        // Exactly `precision` apart still counts as equal.
        assert!(equal_precision(1.0f64, 1.5, 0.5));

        // One infinity against a finite value falls through to the distance.
        assert!(!equal_precision(f32::INFINITY, 1.0, f32::MAX));
        assert!(equal_precision(f32::INFINITY, 1.0, f32::INFINITY));
    }

    #[test]
    fn test_equal_any() {
        assert!(equal_any(3.14f32, 3.14));
        assert!(!equal_any(3.14f32, 3.141));
        assert!(equal_any(f32::INFINITY, f32::INFINITY));
        assert!(!equal_any(f32::INFINITY, f32::NEG_INFINITY));
        assert!(equal_any(f32::NAN, f32::NAN));
        assert!(!equal_any(0.0f32, -0.0));

        assert!(equal_any(8.8f64, 8.80));
        assert!(!equal_any(8.8f64, 8.801));
        assert!(!equal_any(
            f64::from_bits(0x7FF8_0000_0000_0001),
            f64::from_bits(0x7FF8_0000_0000_0002)
        ));
    }

    #[test]
    fn test_less_precision() {
        assert!(less_precision(3.0f32, 3.14, 0.1));
        assert!(!less_precision(3.0f32, 3.05, 0.1));
        assert!(!less_precision(3.2f32, 3.14, 0.1));
        assert!(less_precision(f32::NEG_INFINITY, 0.0, 0.1));
        assert!(!less_precision(f32::INFINITY, 0.0, 0.1));
        assert!(!less_precision(f32::NAN, 3.0, 4.0));

        assert!(less_precision(3.0f64, 3.14, 0.1));
        assert!(!less_precision(3.0f64, 3.05, 0.1));
        assert!(!less_precision(f64::NAN, 3.0, 4.0));
        assert!(!less_precision(0.0f64, f64::NAN, 4.0));
    }

    #[test]
    fn test_less_precision_infinities() {
        assert!(less_precision(f64::NEG_INFINITY, f64::INFINITY, 0.0));
        assert!(!less_precision(f64::NEG_INFINITY, f64::NEG_INFINITY, 0.0));
        assert!(!less_precision(f64::INFINITY, f64::INFINITY, 0.0));
        assert!(less_precision(f64::MAX, f64::INFINITY, 1e300));
        assert!(!less_precision(f64::MIN, f64::NEG_INFINITY, 0.0));
    }

    #[test]
    fn test_greater_precision() {
        assert!(greater_precision(3.14f32, 3.0, 0.1));
        assert!(!greater_precision(3.05f32, 3.0, 0.1));
        assert!(!greater_precision(3.14f32, 3.2, 0.1));
        assert!(greater_precision(0.0f32, f32::NEG_INFINITY, 0.1));
        assert!(!greater_precision(0.0f32, f32::INFINITY, 0.1));
        assert!(!greater_precision(f32::NAN, 0.0, 0.1));

        assert!(greater_precision(f64::INFINITY, f64::NEG_INFINITY, 0.0));
        assert!(!greater_precision(f64::INFINITY, f64::INFINITY, 0.0));
        assert!(greater_precision(f64::INFINITY, 1.0, 0.0));
    }

    #[test]
    fn test_precision_edges_are_equal() {
        assert!(!less_precision(1.0f32, 1.5, 0.5));
        assert!(!greater_precision(1.5f32, 1.0, 0.5));
        assert!(equal_precision(1.0f32, 1.5, 0.5));
        assert!(less_precision(1.0f32, 1.5, 0.25));
    }

    #[test]
    fn test_less_any() {
        assert!(less_any(3.0f32, 3.14));
        assert!(!less_any(3.14f32, 3.14));
        assert!(!less_any(3.15f32, 3.14));
        assert!(less_any(f32::NEG_INFINITY, 0.0));
        assert!(!less_any(f32::INFINITY, 0.0));
        assert!(!less_any(f32::NAN, 0.0));
        assert!(!less_any(0.0f32, f32::NAN));

        assert!(less_any(-0.0f64, 0.0));
        assert!(!less_any(0.0f64, -0.0));
        assert!(!less_any(-0.0f64, -0.0));
        assert!(less_any(-1.0f64, -2.0));
        assert!(!less_any(-2.0f64, -1.0));
        assert!(less_any(-0.0f64, -1.0));
        assert!(less_any(f64::MIN, f64::NEG_INFINITY));
        assert!(less_any(-1.0f64, 0.0));
        assert!(less_any(-0.0f64, f64::from_bits(1)));
    }

    #[test]
    fn test_greater_any() {
        assert!(greater_any(3.14f32, 3.0));
        assert!(!greater_any(3.14f32, 3.14));
        assert!(!greater_any(3.14f32, 3.15));
        assert!(greater_any(0.0f32, f32::NEG_INFINITY));
        assert!(!greater_any(0.0f32, f32::INFINITY));
        assert!(!greater_any(f32::NAN, 0.0));
        assert!(!greater_any(0.0f32, f32::NAN));

        assert!(greater_any(0.0f64, -0.0));
        assert!(!greater_any(-0.0f64, 0.0));
        assert!(greater_any(-2.0f64, -1.0));
        assert!(!greater_any(-1.0f64, -2.0));
        assert!(greater_any(0.0f64, -1.0));
        assert!(greater_any(0.0f64, f64::NEG_INFINITY));
    }

    #[test]
    fn test_compare_any() {
        assert_eq!(compare_any(-0.0f32, 0.0), Some(Ordering::Less));
        assert_eq!(compare_any(0.0f32, -0.0), Some(Ordering::Greater));
        assert_eq!(compare_any(-0.0f32, -0.0), Some(Ordering::Equal));
        assert_eq!(compare_any(f64::NEG_INFINITY, f64::MIN), Some(Ordering::Greater));
        assert_eq!(compare_any(f64::NEG_INFINITY, 0.0), Some(Ordering::Less));
        assert_eq!(compare_any(f64::NAN, f64::NAN), None);
        assert_eq!(compare_any(1.0f64, f64::NAN), None);
    }

    #[test]
    fn test_compare_any_sort_order() {
        let mut values = [1.0f32, 0.0, -0.0, -1.0, f32::NEG_INFINITY, -0.0, f32::INFINITY];
        values.sort_by(|a, b| compare_any(*a, *b).unwrap());

        let bits: Vec<u32> = values.iter().map(|v| v.to_bits()).collect();
        assert_eq!(
            bits,
            [
                0x8000_0000,
                0x8000_0000,
                (-1.0f32).to_bits(),
                f32::NEG_INFINITY.to_bits(),
                0,
                1.0f32.to_bits(),
                f32::INFINITY.to_bits(),
            ]
        );
    }
}
