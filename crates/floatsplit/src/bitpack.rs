//! MSB-first bit packing.
//!
//! Each written group is emitted most-significant bit first and groups are
//! concatenated in call order. The final partial byte is zero padded.
//!
//! ```text
//! write_bits(0b1, 1); write_bits(0b0111_1111, 8);
//! byte 0: 1 0111111    byte 1: 1 0000000
//!         ^ ^^^^^^^            ^ padding
//! ```

use floatsplit_core::{Error, Result};

/// Largest group a single call may read or write.
pub const MAX_GROUP_BITS: u8 = 32;

#[inline]
fn low_mask(n: u32) -> u64 {
    (1u64 << n) - 1
}

/// Bit writer over a growable byte buffer.
pub struct BitWriter {
    data: Vec<u8>,
    bit_buf: u64,
    bit_count: u32,
}

impl BitWriter {
    /// Create a new bit writer.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            bit_buf: 0,
            bit_count: 0,
        }
    }

    /// Create with capacity in bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            bit_buf: 0,
            bit_count: 0,
        }
    }

    /// Append the low `n` bits of `value`, MSB first.
    ///
    /// `n` must be at most 32; `n == 0` writes nothing.
    #[inline]
    pub fn write_bits(&mut self, value: u32, n: u8) {
        debug_assert!(n <= MAX_GROUP_BITS, "group of {n} bits exceeds 32");
        let n = u32::from(n.min(MAX_GROUP_BITS));
        if n == 0 {
            return;
        }

        self.bit_buf = (self.bit_buf << n) | (u64::from(value) & low_mask(n));
        self.bit_count += n;

        while self.bit_count >= 8 {
            self.bit_count -= 8;
            self.data.push((self.bit_buf >> self.bit_count) as u8);
        }
        self.bit_buf &= low_mask(self.bit_count);
    }

    /// Flush remaining bits (pad with zeros).
    pub fn finish(mut self) -> Vec<u8> {
        if self.bit_count > 0 {
            self.data.push((self.bit_buf << (8 - self.bit_count)) as u8);
        }
        self.data
    }

    /// Total bits written so far.
    pub fn bit_len(&self) -> usize {
        self.data.len() * 8 + self.bit_count as usize
    }

    /// Get current length in bytes, counting a partial byte.
    pub fn len(&self) -> usize {
        self.data.len() + usize::from(self.bit_count > 0)
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.bit_count == 0
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Bit reader over a borrowed byte buffer.
pub struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
    bit_buf: u64,
    bit_count: u32,
}

impl<'a> BitReader<'a> {
    /// Create a new bit reader.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            bit_buf: 0,
            bit_count: 0,
        }
    }

    /// Bits not yet consumed, padding included.
    #[inline]
    pub fn bits_remaining(&self) -> usize {
        (self.data.len() - self.pos) * 8 + self.bit_count as usize
    }

    /// Bits consumed so far.
    #[inline]
    pub fn bit_position(&self) -> usize {
        self.pos * 8 - self.bit_count as usize
    }

    /// Read the next `n` bits as an unsigned value.
    ///
    /// Fails with `OutOfBounds` without consuming anything when fewer
    /// than `n` bits remain.
    #[inline]
    pub fn read_bits(&mut self, n: u8) -> Result<u32> {
        if n > MAX_GROUP_BITS {
            return Err(Error::invalid_parameter(
                "bit_width",
                format!("must be at most {MAX_GROUP_BITS}, got {n}"),
            ));
        }
        let n = u32::from(n);
        if n == 0 {
            return Ok(0);
        }
        let remaining = self.bits_remaining();
        if remaining < n as usize {
            return Err(Error::out_of_bounds(n as usize, remaining));
        }

        // bit_count < n <= 32 on entry, so at most 39 bits are buffered.
        while self.bit_count < n {
            self.bit_buf = (self.bit_buf << 8) | u64::from(self.data[self.pos]);
            self.pos += 1;
            self.bit_count += 8;
        }

        self.bit_count -= n;
        let value = (self.bit_buf >> self.bit_count) & low_mask(n);
        self.bit_buf &= low_mask(self.bit_count);
        Ok(value as u32)
    }

    /// Check if at end of input.
    pub fn is_empty(&self) -> bool {
        self.bits_remaining() == 0
    }
}
