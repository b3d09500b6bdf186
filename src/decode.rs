use crate::{BitEncoding, FloatFormat, Result, SpecialValuePolicy, pow2::exp2i};

/// Decode the three bit fields of `format` back into a real number.
///
/// Fields must be strings of `'0'`/`'1'` of exactly the format's widths;
/// anything else is rejected rather than guessed at. Decoding a pattern with
/// a format other than the one that produced it is not detected and yields a
/// different value.
pub fn decode(
    sign: &str,
    exponent: &str,
    mantissa: &str,
    format: &FloatFormat,
) -> Result<f64> {
    Ok(BitEncoding::from_parts(sign, exponent, mantissa, format)?.value())
}

/// Decode already-validated, right-aligned fields.
pub(crate) fn decode_fields(
    negative: bool,
    exponent: u64,
    mantissa: u64,
    format: &FloatFormat,
) -> f64 {
    let signed = |magnitude: f64| if negative { -magnitude } else { magnitude };
    let mantissa_bits = format.mantissa_bits() as i32;

    if exponent == 0 {
        if mantissa == 0 {
            return signed(0.0);
        }
        // mantissa / 2^(mantissa_bits + bias - 1), kept as a multiplication
        // so that fp64 subnormals do not go through 2^1074.
        let scale = exp2i(format.min_normal_exponent() - mantissa_bits);
        return signed(mantissa as f64 * scale);
    }

    if exponent == format.all_ones_exponent() {
        match format.policy() {
            SpecialValuePolicy::NoSpecialValues => {}
            SpecialValuePolicy::InfinityOnly | SpecialValuePolicy::Standard
                if mantissa == 0 =>
            {
                return signed(f64::INFINITY);
            }
            SpecialValuePolicy::InfinityOnly => {}
            SpecialValuePolicy::Standard => return signed(f64::NAN),
        }
    }

    let unbiased = exponent as i32 - format.exponent_bias();
    let fraction = mantissa as f64 * exp2i(-mantissa_bits);
    signed((1.0 + fraction) * exp2i(unbiased))
}
