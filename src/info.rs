use core::fmt;

use crate::{FloatFormat, pow2::exp2i};

/// Range and precision figures of a format.
///
/// These use the IEEE formulas for every format, including the extended ones
/// whose all-ones exponent actually holds finite values, so for fp8 E4M3 and
/// fp4 E2M1 `max_positive_normal` is smaller than the largest value the
/// encoder produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatInfo {
    /// Smallest positive subnormal value.
    pub min_positive_subnormal: f64,
    /// Largest positive normal value.
    pub max_positive_normal: f64,
    /// Gap between 1.0 and the next representable value.
    pub epsilon: f64,
    /// Unbiased exponent of the smallest normal number.
    pub min_normal_exponent: i32,
    /// Unbiased exponent of the largest normal number.
    pub max_normal_exponent: i32,
}

/// Range and precision figures derived from `format`'s field widths and bias.
pub fn info(format: &FloatFormat) -> FormatInfo {
    let mantissa_bits = format.mantissa_bits() as i32;
    let min_normal_exponent = format.min_normal_exponent();
    let max_normal_exponent =
        (1i32 << format.exponent_bits()) - 2 - format.exponent_bias();
    let epsilon = exp2i(-mantissa_bits);

    FormatInfo {
        min_positive_subnormal: exp2i(min_normal_exponent - mantissa_bits),
        max_positive_normal: (2.0 - epsilon) * exp2i(max_normal_exponent),
        epsilon,
        min_normal_exponent,
        max_normal_exponent,
    }
}

impl fmt::Display for FormatInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "min subnormal: {:.4e}", self.min_positive_subnormal)?;
        writeln!(f, "max normal:    {:.4e}", self.max_positive_normal)?;
        writeln!(f, "epsilon:       {:.4e}", self.epsilon)?;
        write!(
            f,
            "exponent:      {}..={}",
            self.min_normal_exponent, self.max_normal_exponent
        )
    }
}
