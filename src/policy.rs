/// How a format interprets the all-ones exponent field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialValuePolicy {
    /// IEEE‑754: zero mantissa is ±Infinity, anything else is NaN.
    Standard,
    /// Zero mantissa is ±Infinity; nonzero mantissa is an ordinary normal
    /// number. There is no NaN (fp8 E4M3).
    InfinityOnly,
    /// The all-ones exponent is always an ordinary normal number; the format
    /// saturates instead of overflowing (fp4 E2M1).
    NoSpecialValues,
}

impl SpecialValuePolicy {
    pub fn has_infinity(self) -> bool {
        matches!(self, Self::Standard | Self::InfinityOnly)
    }

    pub fn has_nan(self) -> bool {
        matches!(self, Self::Standard)
    }

    /// True for the narrow formats that reuse the all-ones exponent for
    /// finite values.
    pub fn is_extended(self) -> bool {
        !matches!(self, Self::Standard)
    }
}
