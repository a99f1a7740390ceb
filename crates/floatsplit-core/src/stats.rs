//! Statistics for split encoding operations.

use crate::types::StorageRatio;

/// Statistics describing one encoded artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitStats {
    /// Number of `f32` elements encoded.
    pub element_count: usize,

    /// Mantissa bits kept in the primary stream.
    pub primary_mantissa_bits: u8,

    /// Primary stream size in bytes.
    pub primary_size: usize,

    /// Residual stream size in bytes.
    pub residual_size: usize,
}

impl SplitStats {
    /// Raw `f32` storage in bytes.
    pub fn original_size(&self) -> usize {
        self.element_count * 4
    }

    /// Ratio of raw storage to the primary stream alone.
    pub fn primary_ratio(&self) -> StorageRatio {
        StorageRatio::new(self.original_size(), self.primary_size)
    }

    /// Primary stream bits per element, padding included.
    pub fn primary_bits_per_element(&self) -> f64 {
        if self.element_count == 0 {
            return 0.0;
        }
        (self.primary_size * 8) as f64 / self.element_count as f64
    }
}
