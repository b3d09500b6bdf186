use core::{fmt, num::FpCategory};

use crate::{Error, FloatFormat, Result, SpecialValuePolicy, decode::decode_fields};

/// One of the three bit fields of a floating-point encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Sign,
    Exponent,
    Mantissa,
}

impl Field {
    /// Width of this field in `format`.
    pub fn width(self, format: &FloatFormat) -> usize {
        match self {
            Self::Sign => format.sign_bits() as usize,
            Self::Exponent => format.exponent_bits() as usize,
            Self::Mantissa => format.mantissa_bits() as usize,
        }
    }

    /// Position, within the whole word, of the `index`th bit of this field
    /// counted from the field's most significant bit. The sign bit is at
    /// position `total_bits - 1`, the last mantissa bit at position 0.
    pub fn bit_position(self, format: &FloatFormat, index: usize) -> Result<u32> {
        let width = self.width(format);
        if index >= width {
            return Err(Error::BitIndexOutOfRange { field: self, index, width });
        }
        let top = format.total_bits() - 1;
        let skip = match self {
            Self::Sign => 0,
            Self::Exponent => format.sign_bits(),
            Self::Mantissa => format.sign_bits() + format.exponent_bits(),
        };
        Ok(top - skip - index as u32)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sign => "sign",
            Self::Exponent => "exponent",
            Self::Mantissa => "mantissa",
        })
    }
}

/// The bit-level encoding of one value in one [`FloatFormat`].
///
/// Each field is kept as a string of `'0'`/`'1'` characters, most significant
/// bit first, with exactly the width the format prescribes. An encoding is
/// only meaningful together with the format that produced it, so the format
/// travels with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitEncoding {
    sign: String,
    exponent: String,
    mantissa: String,
    format: FloatFormat,
}

impl BitEncoding {
    // ───────────────────────────── Constructors ─────────────────────────────

    /// Assemble an encoding from right-aligned integer fields. The caller
    /// guarantees that each value fits its field.
    pub(crate) fn from_fields(
        negative: bool,
        exponent: u64,
        mantissa: u64,
        format: &FloatFormat,
    ) -> Self {
        let e_width = format.exponent_bits() as usize;
        let m_width = format.mantissa_bits() as usize;
        Self {
            sign: if negative { "1" } else { "0" }.to_string(),
            exponent: format!("{exponent:0e_width$b}"),
            mantissa: format!("{mantissa:0m_width$b}"),
            format: *format,
        }
    }

    /// Construct from the three bit strings, validating widths and digits.
    pub fn from_parts(
        sign: &str,
        exponent: &str,
        mantissa: &str,
        format: &FloatFormat,
    ) -> Result<Self> {
        check_field(Field::Sign, sign, format)?;
        check_field(Field::Exponent, exponent, format)?;
        check_field(Field::Mantissa, mantissa, format)?;
        Ok(Self {
            sign: sign.to_string(),
            exponent: exponent.to_string(),
            mantissa: mantissa.to_string(),
            format: *format,
        })
    }

    /// Construct from a right-aligned bit pattern of `format.total_bits()`
    /// bits.
    pub fn from_bits(bits: u64, format: &FloatFormat) -> Result<Self> {
        let total = format.total_bits();
        if total < u64::BITS && bits >> total != 0 {
            return Err(Error::PatternTooWide { bits: total });
        }
        let m_width = format.mantissa_bits();
        let e_width = format.exponent_bits();
        let mantissa = bits & format.all_ones_mantissa();
        let exponent = (bits >> m_width) & format.all_ones_exponent();
        let negative = (bits >> (m_width + e_width)) & 1 == 1;
        Ok(Self::from_fields(negative, exponent, mantissa, format))
    }

    /// Construct from big‑endian bytes. The slice must be exactly
    /// `format.byte_len()` long; for formats narrower than a byte the unused
    /// high bits must be zero.
    pub fn from_be_bytes(bytes: impl AsRef<[u8]>, format: &FloatFormat) -> Result<Self> {
        let b = bytes.as_ref();
        if b.len() != format.byte_len() {
            return Err(Error::InvalidLength {
                expected: format.byte_len(),
                found: b.len(),
            });
        }
        let bits = b.iter().fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte));
        Self::from_bits(bits, format)
    }

    /// Construct from a hex string such as `"0x3FC00000"`. The `0x` prefix is
    /// optional and short inputs are zero-extended on the left.
    pub fn from_hex(s: &str, format: &FloatFormat) -> Result<Self> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty() {
            return Err(Error::InvalidLength { expected: format.byte_len(), found: 0 });
        }
        let digits = if digits.len() % 2 == 1 {
            format!("0{digits}")
        } else {
            digits.to_string()
        };
        let bytes = hex::decode(digits)?;
        let len = format.byte_len();
        if bytes.len() > len {
            return Err(Error::InvalidLength { expected: len, found: bytes.len() });
        }
        let mut padded = vec![0u8; len - bytes.len()];
        padded.extend_from_slice(&bytes);
        Self::from_be_bytes(padded, format)
    }

    // ───────────────────────────── Accessors ────────────────────────────────

    pub fn sign(&self) -> &str { &self.sign }

    pub fn exponent(&self) -> &str { &self.exponent }

    pub fn mantissa(&self) -> &str { &self.mantissa }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Sign => &self.sign,
            Field::Exponent => &self.exponent,
            Field::Mantissa => &self.mantissa,
        }
    }

    pub fn format(&self) -> &FloatFormat { &self.format }

    /// All three fields concatenated: sign, exponent, mantissa.
    pub fn bits(&self) -> String {
        [self.sign.as_str(), self.exponent.as_str(), self.mantissa.as_str()].concat()
    }

    /// Returns the sign bit (true if set).
    pub fn sign_bit(&self) -> bool { self.sign == "1" }

    /// Unsigned value of the (biased) exponent field.
    pub fn exponent_value(&self) -> u64 { binary_value(&self.exponent) }

    /// Unsigned value of the mantissa field.
    pub fn mantissa_value(&self) -> u64 { binary_value(&self.mantissa) }

    /// The whole pattern as a right-aligned integer.
    pub fn to_bits(&self) -> u64 {
        let m_width = self.format.mantissa_bits();
        let e_width = self.format.exponent_bits();
        (u64::from(self.sign_bit()) << (m_width + e_width))
            | (self.exponent_value() << m_width)
            | self.mantissa_value()
    }

    /// The pattern as `format.byte_len()` big‑endian bytes.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let len = self.format.byte_len();
        self.to_bits().to_be_bytes()[8 - len..].to_vec()
    }

    /// The pattern as upper-case hex with a `0x` prefix, one digit per four
    /// bits of the format.
    pub fn to_hex(&self) -> String {
        let digits = hex::encode_upper(self.to_be_bytes());
        format!("0x{}", &digits[digits.len() - self.format.hex_digits()..])
    }

    // ─────────────────────────── Classification ─────────────────────────────

    /// Classify the encoding under its format's special-value policy.
    pub fn category(&self) -> FpCategory {
        let exponent = self.exponent_value();
        let mantissa = self.mantissa_value();
        if exponent == 0 {
            return if mantissa == 0 {
                FpCategory::Zero
            } else {
                FpCategory::Subnormal
            };
        }
        if exponent != self.format.all_ones_exponent() {
            return FpCategory::Normal;
        }
        match self.format.policy() {
            SpecialValuePolicy::NoSpecialValues => FpCategory::Normal,
            SpecialValuePolicy::InfinityOnly if mantissa == 0 => FpCategory::Infinite,
            SpecialValuePolicy::InfinityOnly => FpCategory::Normal,
            SpecialValuePolicy::Standard if mantissa == 0 => FpCategory::Infinite,
            SpecialValuePolicy::Standard => FpCategory::Nan,
        }
    }

    pub fn is_zero(&self) -> bool { self.category() == FpCategory::Zero }

    pub fn is_subnormal(&self) -> bool { self.category() == FpCategory::Subnormal }

    pub fn is_normal(&self) -> bool { self.category() == FpCategory::Normal }

    pub fn is_infinite(&self) -> bool { self.category() == FpCategory::Infinite }

    pub fn is_nan(&self) -> bool { self.category() == FpCategory::Nan }

    // ────────────────────────────── Values ──────────────────────────────────

    /// The real number this encoding represents.
    pub fn value(&self) -> f64 {
        decode_fields(
            self.sign_bit(),
            self.exponent_value(),
            self.mantissa_value(),
            &self.format,
        )
    }

    /// A copy of this encoding with one bit inverted.
    pub fn with_bit_flipped(&self, field: Field, index: usize) -> Result<Self> {
        let width = field.width(&self.format);
        if index >= width {
            return Err(Error::BitIndexOutOfRange { field, index, width });
        }
        let mut flipped = self.clone();
        let target = match field {
            Field::Sign => &mut flipped.sign,
            Field::Exponent => &mut flipped.exponent,
            Field::Mantissa => &mut flipped.mantissa,
        };
        *target = target
            .chars()
            .enumerate()
            .map(|(i, c)| match (i == index, c) {
                (true, '0') => '1',
                (true, _) => '0',
                (false, c) => c,
            })
            .collect();
        Ok(flipped)
    }
}

// ───────────────────────────────── Display ──────────────────────────────────

impl fmt::Display for BitEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = match self.category() {
            FpCategory::Zero => "zero",
            FpCategory::Subnormal => "subnormal",
            FpCategory::Normal => "normal",
            FpCategory::Infinite => "infinity",
            FpCategory::Nan => "NaN",
        };
        write!(
            f,
            "{}: {} {} {} ({}) {}",
            self.format.key(),
            self.sign,
            self.exponent,
            self.mantissa,
            self.to_hex(),
            category,
        )
    }
}

// ────────────────────────────── Internals ───────────────────────────────────

fn check_field(field: Field, bits: &str, format: &FloatFormat) -> Result<()> {
    if let Some(found) = bits.chars().find(|c| !matches!(c, '0' | '1')) {
        return Err(Error::NonBinaryDigit { field, found });
    }
    let expected = field.width(format);
    if bits.len() != expected {
        return Err(Error::InvalidFieldWidth { field, expected, found: bits.len() });
    }
    Ok(())
}

/// Callers only pass validated strings of at most 64 digits.
fn binary_value(bits: &str) -> u64 {
    bits.bytes().fold(0u64, |acc, b| (acc << 1) | u64::from(b == b'1'))
}
