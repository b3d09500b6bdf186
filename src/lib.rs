//! Bit-exact encoding and decoding of binary floating-point formats.
//!
//! A [`FloatFormat`] describes a layout of one sign bit, an exponent field and
//! a mantissa field. The registry holds the IEEE‑754 formats (fp32, fp64,
//! fp16), bfloat16, and the narrow ML formats fp8 E4M3, fp8 E5M2 and
//! fp4 E2M1. Two of the narrow formats deviate from IEEE‑754: E4M3 keeps
//! Infinity but has no NaN and uses the all-ones exponent for finite values;
//! E2M1 has neither and saturates on overflow.
//!
//! ```
//! use float_bits::{decode, encode, lookup};
//!
//! let fp32 = lookup("fp32").unwrap();
//! let bits = encode(1.5, fp32);
//! assert_eq!(bits.exponent(), "01111111");
//! assert_eq!(bits.to_hex(), "0x3FC00000");
//!
//! let value = decode(bits.sign(), bits.exponent(), bits.mantissa(), fp32).unwrap();
//! assert_eq!(value, 1.5);
//! ```
//!
//! NOTE: Narrow formats round the mantissa half away from zero, not to even.

mod pow2;

mod error;
pub use error::*;
mod policy;
pub use policy::*;
mod format;
pub use format::*;
mod bit_encoding;
pub use bit_encoding::*;
mod encode;
pub use encode::*;
mod decode;
pub use decode::decode;
mod info;
pub use info::*;
