pub mod layout_config {
    /// Fixed bit layout of an IEEE-754 binary interchange format.
    ///
    /// From the most significant bit down: 1 sign bit, `exponent_bits` biased
    /// exponent bits, `significand_bits` trailing significand bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FieldLayout {
        pub width: u32,
        pub exponent_bits: u32,
        pub significand_bits: u32,
    }

    impl FieldLayout {
        #[inline]
        pub const fn sign_shift(&self) -> u32 {
            self.width - 1
        }

        /// Sign bit in place.
        #[inline]
        pub const fn sign_mask(&self) -> u64 {
            1u64 << self.sign_shift()
        }

        /// All-ones exponent field, not shifted into place.
        #[inline]
        pub const fn exponent_mask(&self) -> u64 {
            (1u64 << self.exponent_bits) - 1
        }

        #[inline]
        pub const fn significand_mask(&self) -> u64 {
            (1u64 << self.significand_bits) - 1
        }

        /// Top significand bit; set on a quiet NaN.
        #[inline]
        pub const fn quiet_bit(&self) -> u64 {
            1u64 << (self.significand_bits - 1)
        }

        #[inline]
        pub const fn exponent_bias(&self) -> i32 {
            (1i32 << (self.exponent_bits - 1)) - 1
        }
    }

    macro_rules! layout_config {
        (
            $(
                @item
                $name:ident => {
                    width: $width:expr,
                    exponent: $exponent:expr,
                    significand: $significand:expr,
                }
            ),* $(,)?
        ) => {
            $(
                pub const $name: FieldLayout = FieldLayout {
                    width: $width,
                    exponent_bits: $exponent,
                    significand_bits: $significand,
                };

                const _: () = assert!($width == 1 + $exponent + $significand);
            )*
        };
    }

    layout_config! {
        @item BINARY32 => {
            width: 32,
            exponent: 8,
            significand: 23,
        },
        @item BINARY64 => {
            width: 64,
            exponent: 11,
            significand: 52,
        },
    }

}
