//! IEEE 754 binary32 field access.
//!
//! Fields are exposed exactly as stored. NaN, infinity, subnormals and
//! signed zero are just particular `(exponent, mantissa)` states and pass
//! through untouched.

use floatsplit_core::{EXPONENT_BITS, MANTISSA_BITS};

const MANTISSA_MASK: u32 = (1 << MANTISSA_BITS) - 1;
const EXPONENT_MASK: u32 = (1 << EXPONENT_BITS) - 1;
const SIGN_SHIFT: u32 = (MANTISSA_BITS + EXPONENT_BITS) as u32;

/// The three raw bit groups of an `f32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatParts {
    /// 0 or 1.
    pub sign: u32,
    /// Biased exponent, 0..=255.
    pub exponent: u32,
    /// 23 fraction bits.
    pub mantissa: u32,
}

/// Split `x` into sign, exponent and mantissa.
#[inline]
pub fn decompose(x: f32) -> FloatParts {
    let raw = x.to_bits();
    FloatParts {
        sign: raw >> SIGN_SHIFT,
        exponent: (raw >> MANTISSA_BITS) & EXPONENT_MASK,
        mantissa: raw & MANTISSA_MASK,
    }
}

/// Inverse of [`decompose`]. Out-of-range field bits are masked off.
#[inline]
pub fn recompose(sign: u32, exponent: u32, mantissa: u32) -> f32 {
    f32::from_bits(
        ((sign & 1) << SIGN_SHIFT)
            | ((exponent & EXPONENT_MASK) << MANTISSA_BITS)
            | (mantissa & MANTISSA_MASK),
    )
}

/// Build an `f32` from a truncated mantissa.
///
/// The `primary_bits` high mantissa bits are left-justified into the
/// 23-bit field and the low bits are zero. This truncates toward a
/// smaller magnitude; it never rounds.
#[inline]
pub fn recompose_lossy(sign: u32, exponent: u32, primary_mantissa: u32, primary_bits: u8) -> f32 {
    let shift = MANTISSA_BITS.saturating_sub(primary_bits);
    recompose(sign, exponent, primary_mantissa << shift)
}
