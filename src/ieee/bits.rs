use super::Category;
use crate::utils::{FloatPoint, InBits, TruncateFrom, TruncateTo, UnsignedInteger, read_bit};

/// Reinterprets `value` as its raw bit pattern. Not a numeric cast.
#[inline]
pub fn to_bits<F: FloatPoint>(value: F) -> F::BitsType {
    value.to_bits()
}

/// Exact inverse of [`to_bits`]; every pattern, NaN payloads included, survives.
#[inline]
pub fn from_bits<F: FloatPoint>(bits: F::BitsType) -> F {
    F::from_bits(bits)
}

#[inline]
pub(crate) fn sign_mask<F: FloatPoint>() -> F::BitsType {
    F::BitsType::truncate_from(F::LAYOUT.sign_mask())
}

#[inline]
pub(crate) fn exponent_mask<F: FloatPoint>() -> F::BitsType {
    F::BitsType::truncate_from(F::LAYOUT.exponent_mask())
}

#[inline]
pub(crate) fn significand_mask<F: FloatPoint>() -> F::BitsType {
    F::BitsType::truncate_from(F::LAYOUT.significand_mask())
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("exponent field {exponent:#x} does not fit in {bits} bits")]
    ExponentOverflow { exponent: u32, bits: u32 },

    #[error("significand field {significand:#x} does not fit in {bits} bits")]
    SignificandOverflow { significand: u64, bits: u32 },
}

/// The sign, biased exponent and trailing significand of a value of type `F`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fields<F: FloatPoint> {
    pub sign: bool,
    pub exponent: u32,
    pub significand: F::BitsType,
}

impl<F: FloatPoint> Fields<F> {
    pub fn new(sign: bool, exponent: u32, significand: F::BitsType) -> Self {
        Self {
            sign,
            exponent,
            significand,
        }
    }

    #[inline]
    fn exponent_all_ones(&self) -> bool {
        u64::from(self.exponent) == F::LAYOUT.exponent_mask()
    }

    pub fn category(&self) -> Category {
        let empty = self.significand == F::BitsType::ZERO;
        if self.exponent_all_ones() {
            if empty { Category::Infinite } else { Category::NaN }
        } else if self.exponent == 0 {
            if empty { Category::Zero } else { Category::Subnormal }
        } else {
            Category::Normal
        }
    }

    /// Whether the top significand bit is set. Only meaningful for NaN.
    #[inline]
    pub fn is_quiet(&self) -> bool {
        read_bit(&self.significand, F::LAYOUT.significand_bits - 1)
    }

    /// Reassembles the bit pattern, rejecting fields wider than the layout.
    pub fn compose(self) -> Result<F, FieldError> {
        let layout = F::LAYOUT;
        if u64::from(self.exponent) > layout.exponent_mask() {
            return Err(FieldError::ExponentOverflow {
                exponent: self.exponent,
                bits: layout.exponent_bits,
            });
        }
        if self.significand & !significand_mask::<F>() != F::BitsType::ZERO {
            return Err(FieldError::SignificandOverflow {
                significand: self.significand.into(),
                bits: layout.significand_bits,
            });
        }

        let mut bits =
            F::BitsType::truncate_from(u64::from(self.exponent)) << layout.significand_bits;
        bits |= self.significand;
        if self.sign {
            bits |= sign_mask::<F>();
        }
        Ok(F::from_bits(bits))
    }
}

/// Splits `value` into its three fields by fixed masks.
pub fn decompose<F: FloatPoint>(value: F) -> Fields<F> {
    let bits = value.to_bits();
    let layout = F::LAYOUT;
    Fields {
        sign: read_bit(&bits, layout.sign_shift()),
        exponent: ((bits >> layout.significand_bits) & exponent_mask::<F>()).truncate_to(),
        significand: bits & significand_mask::<F>(),
    }
}

pub fn compose<F: FloatPoint>(
    sign: bool,
    exponent: u32,
    significand: F::BitsType,
) -> Result<F, FieldError> {
    Fields::<F>::new(sign, exponent, significand).compose()
}
