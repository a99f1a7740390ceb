//! Core type definitions for split encoding.

use crate::config::validate_aggression;
use crate::error::{Error, Result};

/// Sign field width of an IEEE 754 binary32 value.
pub const SIGN_BITS: u8 = 1;

/// Exponent field width of an IEEE 754 binary32 value.
pub const EXPONENT_BITS: u8 = 8;

/// Explicit mantissa (fraction) width of an IEEE 754 binary32 value.
pub const MANTISSA_BITS: u8 = 23;

/// Bits of every primary record that are not mantissa.
pub const HEADER_BITS: u8 = SIGN_BITS + EXPONENT_BITS;

/// How the 23 mantissa bits are divided between the two streams.
///
/// `primary_mantissa_bits + residual_mantissa_bits == 23` always holds;
/// the fields are private so the pair cannot drift apart.
///
/// Equality compares the integer split only. Aggression is not persisted,
/// so two splits that lay out streams identically are equal.
#[derive(Debug, Clone, Copy)]
pub struct SplitParameters {
    aggression: f32,
    primary_mantissa_bits: u8,
    residual_mantissa_bits: u8,
}

impl SplitParameters {
    /// Build parameters from a planned aggression and its primary width.
    ///
    /// Fails with `InvalidParameter` when `aggression` is outside `[0, 1]`
    /// or the width exceeds 23.
    pub fn new(aggression: f32, primary_mantissa_bits: u8) -> Result<Self> {
        validate_aggression(aggression)?;
        if primary_mantissa_bits > MANTISSA_BITS {
            return Err(Error::invalid_parameter(
                "primary_mantissa_bits",
                format!("must be at most {MANTISSA_BITS}, got {primary_mantissa_bits}"),
            ));
        }
        Ok(SplitParameters {
            aggression,
            primary_mantissa_bits,
            residual_mantissa_bits: MANTISSA_BITS - primary_mantissa_bits,
        })
    }

    /// Rebuild parameters from persisted metadata.
    ///
    /// Aggression is not stored on the wire; it is reported as
    /// `1 - primary / 23` and is informational only.
    pub fn from_primary_bits(primary_mantissa_bits: u8) -> Result<Self> {
        let aggression = 1.0 - f32::from(primary_mantissa_bits.min(MANTISSA_BITS))
            / f32::from(MANTISSA_BITS);
        Self::new(aggression, primary_mantissa_bits)
    }

    /// Aggression this split was planned from.
    pub fn aggression(&self) -> f32 {
        self.aggression
    }

    /// Mantissa bits kept in the primary stream.
    pub fn primary_mantissa_bits(&self) -> u8 {
        self.primary_mantissa_bits
    }

    /// Mantissa bits deferred to the residual stream.
    pub fn residual_mantissa_bits(&self) -> u8 {
        self.residual_mantissa_bits
    }

    /// Width of one primary record: sign, exponent and upper mantissa.
    pub fn primary_record_bits(&self) -> u8 {
        HEADER_BITS + self.primary_mantissa_bits
    }

    /// Width of one residual record.
    pub fn residual_record_bits(&self) -> u8 {
        self.residual_mantissa_bits
    }

    /// Mask selecting the residual bits of a mantissa.
    pub fn residual_mask(&self) -> u32 {
        (1u32 << self.residual_mantissa_bits) - 1
    }

    /// Bytes needed for a primary stream of `element_count` records.
    ///
    /// Fails with `Corrupted` when the length is not addressable, which
    /// only a forged element count can cause.
    pub fn primary_stream_len(&self, element_count: usize) -> Result<usize> {
        stream_len(element_count, self.primary_record_bits())
    }

    /// Bytes needed for a residual stream of `element_count` records.
    pub fn residual_stream_len(&self, element_count: usize) -> Result<usize> {
        stream_len(element_count, self.residual_record_bits())
    }
}

impl PartialEq for SplitParameters {
    fn eq(&self, other: &Self) -> bool {
        self.primary_mantissa_bits == other.primary_mantissa_bits
    }
}

impl Eq for SplitParameters {}

impl Default for SplitParameters {
    /// The split planned for aggression 0.5: 12 primary, 11 residual bits.
    fn default() -> Self {
        SplitParameters {
            aggression: 0.5,
            primary_mantissa_bits: 12,
            residual_mantissa_bits: 11,
        }
    }
}

/// Bytes occupied by `count` records of `bits` each, zero padded.
///
/// Every 8 records fill exactly `bits` bytes, so the bulk is computed in
/// bytes; `None` when the result does not fit `usize`.
pub fn packed_len(count: usize, bits: u8) -> Option<usize> {
    let bits = usize::from(bits);
    let whole = (count / 8).checked_mul(bits)?;
    whole.checked_add((count % 8 * bits).div_ceil(8))
}

fn stream_len(count: usize, bits: u8) -> Result<usize> {
    packed_len(count, bits).ok_or_else(|| {
        Error::corrupted(format!("{count} records of {bits} bits exceed addressable memory"))
    })
}

/// Storage ratio of a split artifact against raw `f32` storage.
#[derive(Debug, Clone, Copy)]
pub struct StorageRatio {
    /// Raw size in bytes (`4 * element_count`).
    pub original_size: usize,
    /// Size of the stream(s) being measured.
    pub stored_size: usize,
}

impl StorageRatio {
    /// Create new ratio from sizes.
    pub fn new(original: usize, stored: usize) -> Self {
        StorageRatio {
            original_size: original,
            stored_size: stored,
        }
    }

    /// Calculate ratio (original / stored).
    /// Higher is better.
    pub fn ratio(&self) -> f64 {
        if self.stored_size == 0 {
            return 0.0;
        }
        self.original_size as f64 / self.stored_size as f64
    }
}
