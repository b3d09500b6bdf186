use core::{fmt, str::FromStr};

use crate::{Error, Result, SpecialValuePolicy};

/// A binary floating-point layout: one sign bit, an exponent field and a
/// mantissa (fraction) field, most significant first.
///
/// Formats are identified by a stable key (`"fp32"`, `"bf16"`, …) and are
/// only ever handed out from the fixed registry below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatFormat {
    key: &'static str,
    name: &'static str,
    total_bits: u32,
    sign_bits: u32,
    exponent_bits: u32,
    mantissa_bits: u32,
    exponent_bias: i32,
    policy: SpecialValuePolicy,
}

// ──────────────────────────────── Registry ──────────────────────────────────

pub const FP32: FloatFormat = FloatFormat::new(
    "fp32",
    "FP32 (Single Precision)",
    8,
    23,
    127,
    SpecialValuePolicy::Standard,
);

pub const FP64: FloatFormat = FloatFormat::new(
    "fp64",
    "FP64 (Double Precision)",
    11,
    52,
    1023,
    SpecialValuePolicy::Standard,
);

pub const FP16: FloatFormat = FloatFormat::new(
    "fp16",
    "Half (E5M10)",
    5,
    10,
    15,
    SpecialValuePolicy::Standard,
);

pub const BF16: FloatFormat = FloatFormat::new(
    "bf16",
    "BFloat16 (E8M7)",
    8,
    7,
    127,
    SpecialValuePolicy::Standard,
);

pub const FP8_E4M3: FloatFormat = FloatFormat::new(
    "fp8_e4m3",
    "FP8 Training (E4M3)",
    4,
    3,
    7,
    SpecialValuePolicy::InfinityOnly,
);

pub const FP8_E5M2: FloatFormat = FloatFormat::new(
    "fp8_e5m2",
    "FP8 Inference (E5M2)",
    5,
    2,
    15,
    SpecialValuePolicy::Standard,
);

pub const FP4_E2M1: FloatFormat = FloatFormat::new(
    "fp4_e2m1",
    "FP4 E2M1",
    2,
    1,
    1,
    SpecialValuePolicy::NoSpecialValues,
);

static REGISTRY: [FloatFormat; 7] = FloatFormat::ALL;

/// Look up a registered format by its key.
pub fn lookup(key: &str) -> Result<&'static FloatFormat> {
    REGISTRY
        .iter()
        .find(|format| format.key == key)
        .ok_or_else(|| Error::UnknownFormat(key.to_string()))
}

impl FloatFormat {
    /// Every registered format, in display order.
    pub const ALL: [FloatFormat; 7] =
        [FP32, FP64, FP16, BF16, FP8_E4M3, FP8_E5M2, FP4_E2M1];

    const fn new(
        key: &'static str,
        name: &'static str,
        exponent_bits: u32,
        mantissa_bits: u32,
        exponent_bias: i32,
        policy: SpecialValuePolicy,
    ) -> Self {
        Self {
            key,
            name,
            total_bits: 1 + exponent_bits + mantissa_bits,
            sign_bits: 1,
            exponent_bits,
            mantissa_bits,
            exponent_bias,
            policy,
        }
    }

    // ───────────────────────────── Accessors ────────────────────────────────

    pub fn key(&self) -> &'static str { self.key }

    pub fn name(&self) -> &'static str { self.name }

    pub fn total_bits(&self) -> u32 { self.total_bits }

    pub fn sign_bits(&self) -> u32 { self.sign_bits }

    pub fn exponent_bits(&self) -> u32 { self.exponent_bits }

    pub fn mantissa_bits(&self) -> u32 { self.mantissa_bits }

    pub fn exponent_bias(&self) -> i32 { self.exponent_bias }

    pub fn policy(&self) -> SpecialValuePolicy { self.policy }

    // ───────────────────────────── Derived ──────────────────────────────────

    /// The exponent field with every bit set.
    pub fn all_ones_exponent(&self) -> u64 { (1u64 << self.exponent_bits) - 1 }

    /// The largest biased exponent that still encodes a finite value.
    ///
    /// Standard formats reserve the all-ones code for Infinity/NaN; the
    /// extended formats use it for ordinary numbers.
    pub fn max_biased_exponent(&self) -> u64 {
        if self.policy.is_extended() {
            self.all_ones_exponent()
        } else {
            self.all_ones_exponent() - 1
        }
    }

    /// Unbiased exponent of the smallest normal number, `1 - bias`.
    pub fn min_normal_exponent(&self) -> i32 { 1 - self.exponent_bias }

    /// The mantissa field with every bit set.
    pub fn all_ones_mantissa(&self) -> u64 { (1u64 << self.mantissa_bits) - 1 }

    /// Number of hex digits needed to show the whole bit pattern.
    pub fn hex_digits(&self) -> usize { self.total_bits.div_ceil(4) as usize }

    /// Number of bytes needed to hold the whole bit pattern.
    pub fn byte_len(&self) -> usize { self.total_bits.div_ceil(8) as usize }
}

impl FromStr for FloatFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> { lookup(s).copied() }
}

impl fmt::Display for FloatFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: 1+{}+{} bits, bias {}",
            self.name, self.exponent_bits, self.mantissa_bits, self.exponent_bias
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_widths_sum_to_total() {
        for format in FloatFormat::ALL {
            assert_eq!(
                format.sign_bits + format.exponent_bits + format.mantissa_bits,
                format.total_bits,
                "{}",
                format.key
            );
        }
    }

    #[test]
    fn bias_follows_ieee_convention() {
        for format in FloatFormat::ALL {
            assert_eq!(
                format.exponent_bias,
                (1 << (format.exponent_bits - 1)) - 1,
                "{}",
                format.key
            );
        }
    }

    #[test]
    fn keys_are_unique() {
        for (i, a) in FloatFormat::ALL.iter().enumerate() {
            for b in &FloatFormat::ALL[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn max_biased_exponent_depends_on_policy() {
        assert_eq!(FP16.max_biased_exponent(), 30);
        assert_eq!(FP8_E5M2.max_biased_exponent(), 30);
        assert_eq!(FP8_E4M3.max_biased_exponent(), 15);
        assert_eq!(FP4_E2M1.max_biased_exponent(), 3);
    }
}
