//! Exact powers of two and binary logarithms on `f64` bit patterns.

const F64_MANTISSA_BITS: u32 = 52;
const F64_BIAS: i32 = 1023;
const F64_FRACTION_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;

/// `2^k` as an exact `f64`, including the subnormal range. Saturates to 0 or
/// Infinity outside of what `f64` can hold.
pub(crate) fn exp2i(k: i32) -> f64 {
    match k {
        1024.. => f64::INFINITY,
        -1022..=1023 => f64::from_bits(((k + F64_BIAS) as u64) << F64_MANTISSA_BITS),
        -1074..=-1023 => f64::from_bits(1u64 << (k + 1074)),
        _ => 0.0,
    }
}

/// `floor(log2(x))` for a finite, nonzero `x`, read straight from the bit
/// pattern so that values just below a power of two never round up.
pub(crate) fn floor_log2(x: f64) -> i32 {
    let bits = x.to_bits();
    let biased = ((bits >> F64_MANTISSA_BITS) & 0x7FF) as i32;
    if biased == 0 {
        // Subnormal: x = fraction * 2^-1074.
        let fraction = bits & F64_FRACTION_MASK;
        (u64::BITS - 1 - fraction.leading_zeros()) as i32 - 1074
    } else {
        biased - F64_BIAS
    }
}
