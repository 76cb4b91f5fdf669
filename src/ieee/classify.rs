use super::{Category, Class, ClassMask, bits::decompose};
use crate::utils::FloatPoint;

#[inline]
pub fn classify<F: FloatPoint>(value: F) -> Category {
    decompose(value).category()
}

#[inline]
pub fn is_nan<F: FloatPoint>(value: F) -> bool {
    classify(value) == Category::NaN
}

#[inline]
pub fn is_infinite<F: FloatPoint>(value: F) -> bool {
    classify(value) == Category::Infinite
}

#[inline]
pub fn is_positive_infinite<F: FloatPoint>(value: F) -> bool {
    let fields = decompose(value);
    !fields.sign && fields.category() == Category::Infinite
}

#[inline]
pub fn is_negative_infinite<F: FloatPoint>(value: F) -> bool {
    let fields = decompose(value);
    fields.sign && fields.category() == Category::Infinite
}

/// True for both `+0` and `-0`.
#[inline]
pub fn is_zero<F: FloatPoint>(value: F) -> bool {
    classify(value) == Category::Zero
}

#[inline]
pub fn is_positive_zero<F: FloatPoint>(value: F) -> bool {
    let fields = decompose(value);
    !fields.sign && fields.category() == Category::Zero
}

#[inline]
pub fn is_negative_zero<F: FloatPoint>(value: F) -> bool {
    let fields = decompose(value);
    fields.sign && fields.category() == Category::Zero
}

#[inline]
pub fn is_normal<F: FloatPoint>(value: F) -> bool {
    classify(value) == Category::Normal
}

#[inline]
pub fn is_subnormal<F: FloatPoint>(value: F) -> bool {
    classify(value) == Category::Subnormal
}

/// Neither NaN nor infinite, i.e. the exponent field is not all ones.
#[inline]
pub fn is_finite<F: FloatPoint>(value: F) -> bool {
    classify(value).is_finite()
}

#[inline]
pub fn is_quiet_nan<F: FloatPoint>(value: F) -> bool {
    let fields = decompose(value);
    fields.category() == Category::NaN && fields.is_quiet()
}

#[inline]
pub fn is_signaling_nan<F: FloatPoint>(value: F) -> bool {
    let fields = decompose(value);
    fields.category() == Category::NaN && !fields.is_quiet()
}

pub fn class<F: FloatPoint>(value: F) -> Class {
    let fields = decompose(value);
    match (fields.category(), fields.sign) {
        (Category::Normal, true) => Class::NormalNegative,
        (Category::Normal, false) => Class::NormalPositive,
        (Category::Subnormal, true) => Class::SubnormalNegative,
        (Category::Subnormal, false) => Class::SubnormalPositive,
        (Category::Zero, true) => Class::NegativeZero,
        (Category::Zero, false) => Class::PositiveZero,
        (Category::Infinite, true) => Class::NegativeInfinity,
        (Category::Infinite, false) => Class::PositiveInfinity,
        (Category::NaN, _) => {
            if fields.is_quiet() {
                Class::QuietNaN
            } else {
                Class::SignalingNaN
            }
        }
    }
}

#[inline]
pub fn class_mask<F: FloatPoint>(value: F) -> ClassMask {
    class(value).into()
}
