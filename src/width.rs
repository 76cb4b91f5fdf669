/// Generates the monomorphic operation set for one binary format on top of the
/// generic implementation in [`crate::ieee`].
macro_rules! define_width_api {
    (@forward $float:ty;
        $(
            $(#[$meta:meta])*
            fn $name:ident($($arg:ident: $ty:ty),*) -> $ret:ty;
        )*
    ) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name($($arg: $ty),*) -> $ret {
                ieee::$name::<$float>($($arg),*)
            }
        )*
    };

    ($float:ty, $bits:ty) => {
        use std::cmp::Ordering;

        use $crate::ieee::{self, Category, Class, ClassMask, FieldError};

        pub type Bits = $bits;
        pub type Fields = ieee::Fields<$float>;

        define_width_api!(@forward $float;
            /// Exact reinterpretation of the value's storage bits.
            fn to_bits(value: $float) -> $bits;
            /// Exact inverse of [`to_bits`].
            fn from_bits(bits: $bits) -> $float;
            fn decompose(value: $float) -> Fields;
            fn compose(sign: bool, exponent: u32, significand: $bits) -> Result<$float, FieldError>;

            fn classify(value: $float) -> Category;
            fn class(value: $float) -> Class;
            fn class_mask(value: $float) -> ClassMask;
            fn is_nan(value: $float) -> bool;
            fn is_quiet_nan(value: $float) -> bool;
            fn is_signaling_nan(value: $float) -> bool;
            fn is_infinite(value: $float) -> bool;
            fn is_positive_infinite(value: $float) -> bool;
            fn is_negative_infinite(value: $float) -> bool;
            fn is_zero(value: $float) -> bool;
            fn is_positive_zero(value: $float) -> bool;
            fn is_negative_zero(value: $float) -> bool;
            fn is_normal(value: $float) -> bool;
            fn is_subnormal(value: $float) -> bool;
            fn is_finite(value: $float) -> bool;

            /// Raw top bit, NaN included.
            fn is_sign_bit_set(value: $float) -> bool;
            fn negate(value: $float) -> $float;
            fn copy_sign(magnitude: $float, sign: $float) -> $float;

            fn abs(value: $float) -> $float;
            /// NaN `a` yields `b`, else NaN `b` yields `a`; `-0 < +0`.
            fn min(a: $float, b: $float) -> $float;
            /// NaN `a` yields `b`, else NaN `b` yields `a`; `+0 > -0`.
            fn max(a: $float, b: $float) -> $float;
            /// `min(max(value, lo), hi)`.
            fn clamp(value: $float, lo: $float, hi: $float) -> $float;

            fn equal_precision(a: $float, b: $float, precision: $float) -> bool;
            /// Bitwise identity.
            fn equal_any(a: $float, b: $float) -> bool;
            fn less_precision(a: $float, b: $float, precision: $float) -> bool;
            fn greater_precision(a: $float, b: $float, precision: $float) -> bool;
            fn less_any(a: $float, b: $float) -> bool;
            fn greater_any(a: $float, b: $float) -> bool;
            fn compare_any(a: $float, b: $float) -> Option<Ordering>;
        );
    };
}
