use crate::{
    BitEncoding, FloatFormat,
    pow2::{exp2i, floor_log2},
};

/// Encode `value` into the bit fields of `format`.
///
/// The 32- and 64-bit formats reinterpret the native IEEE‑754 pattern. Every
/// narrower format is synthesized bit by bit: the mantissa is rounded half
/// away from zero (not ties-to-even), overflow produces Infinity in the
/// standard formats and saturates to the largest finite magnitude in the
/// extended ones.
pub fn encode(value: f64, format: &FloatFormat) -> BitEncoding {
    match format.total_bits() {
        32 => {
            log::trace!("{}: native reinterpretation of {value}", format.key());
            reinterpret(u64::from((value as f32).to_bits()), format)
        }
        64 => {
            log::trace!("{}: native reinterpretation of {value}", format.key());
            reinterpret(value.to_bits(), format)
        }
        _ => synthesize(value, format),
    }
}

fn reinterpret(bits: u64, format: &FloatFormat) -> BitEncoding {
    let m_width = format.mantissa_bits();
    BitEncoding::from_fields(
        (bits >> (format.total_bits() - 1)) & 1 == 1,
        (bits >> m_width) & format.all_ones_exponent(),
        bits & format.all_ones_mantissa(),
        format,
    )
}

fn synthesize(value: f64, format: &FloatFormat) -> BitEncoding {
    let negative = value < 0.0 || (value == 0.0 && value.is_sign_negative());
    let magnitude = value.abs();
    let policy = format.policy();
    let key = format.key();

    let zero = || BitEncoding::from_fields(negative, 0, 0, format);
    let infinity =
        || BitEncoding::from_fields(negative, format.all_ones_exponent(), 0, format);
    // Largest finite magnitude in the extended formats, NaN in the standard
    // ones.
    let all_ones = || {
        BitEncoding::from_fields(
            negative,
            format.all_ones_exponent(),
            format.all_ones_mantissa(),
            format,
        )
    };
    let overflow = || {
        if policy.is_extended() {
            log::debug!("{key}: {value} out of range, saturating");
            all_ones()
        } else {
            log::debug!("{key}: {value} out of range, overflowing to infinity");
            infinity()
        }
    };

    if magnitude == 0.0 {
        return zero();
    }

    if !value.is_finite() {
        if value.is_infinite() && policy.has_infinity() {
            return infinity();
        }
        if policy.is_extended() {
            log::debug!("{key}: no encoding for {value}, saturating");
        }
        return all_ones();
    }

    let exponent = floor_log2(magnitude);
    let bias = format.exponent_bias();
    let mantissa_bits = format.mantissa_bits() as i32;
    let max_biased = format.max_biased_exponent();
    let min_exponent = format.min_normal_exponent();

    if i64::from(exponent) + i64::from(bias) > max_biased as i64 {
        return overflow();
    }

    if exponent < min_exponent {
        let denormal_exponent = min_exponent - mantissa_bits;
        let mantissa = (magnitude / exp2i(denormal_exponent)).round() as u64;
        if mantissa == 0 {
            log::debug!("{key}: {value} underflows to zero");
            return zero();
        }
        if mantissa > format.all_ones_mantissa() {
            // Carry into the exponent field: the result is the smallest
            // normal number. Truncating the carry would wrap to zero.
            return BitEncoding::from_fields(negative, 1, 0, format);
        }
        return BitEncoding::from_fields(negative, 0, mantissa, format);
    }

    let mut biased = (exponent + bias) as u64;
    let fraction = magnitude / exp2i(exponent) - 1.0;
    let mut mantissa = (fraction * exp2i(mantissa_bits)).round() as u64;
    if mantissa > format.all_ones_mantissa() {
        mantissa = 0;
        biased += 1;
        if biased > max_biased {
            return overflow();
        }
    }
    BitEncoding::from_fields(negative, biased, mantissa, format)
}
