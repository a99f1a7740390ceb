//! Core traits for split encoding and decoding.
//!
//! ## Trait Hierarchy
//!
//! ```text
//! FloatCodec                 (typed: &[f32] <-> artifact)
//!       ↓
//! Compressor / Decompressor  (byte-level: little-endian f32 bytes <-> container)
//!       ↓
//! Codec                      (combined compress + decompress)
//! ```

use crate::error::{Error, Result};
use crate::types::{SplitParameters, StorageRatio};

/// Typed split codec over a flat `f32` sequence.
pub trait FloatCodec {
    /// Encoded form produced by [`FloatCodec::encode`].
    type Artifact;

    /// Split parameters this codec encodes with.
    fn split(&self) -> SplitParameters;

    /// Split `elements` into primary and residual streams.
    fn encode(&self, elements: &[f32]) -> Result<Self::Artifact>;

    /// Reconstruct the exact input from both streams.
    fn decode(&self, artifact: &Self::Artifact) -> Result<Vec<f32>>;

    /// Approximate the input from the primary stream alone.
    fn decode_lossy(&self, artifact: &Self::Artifact) -> Result<Vec<f32>>;

    /// Encode then decode losslessly.
    /// Returns true if every element matches bit for bit.
    fn verify_lossless(&self, elements: &[f32]) -> Result<bool> {
        let artifact = self.encode(elements)?;
        let decoded = self.decode(&artifact)?;
        Ok(decoded.len() == elements.len()
            && decoded
                .iter()
                .zip(elements)
                .all(|(a, b)| a.to_bits() == b.to_bits()))
    }
}

/// One-shot byte-level encoding.
///
/// Input is a buffer of little-endian `f32` values; output is a
/// serialized container holding both streams.
pub trait Compressor {
    /// Get the configured split.
    fn split(&self) -> SplitParameters;

    /// Encode little-endian `f32` bytes into a container.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Calculate the container size for `input_len` bytes of `f32` input.
    /// Useful for pre-allocating output buffers.
    fn max_compressed_size(&self, input_len: usize) -> usize;
}

/// One-shot byte-level decoding.
pub trait Decompressor {
    /// Decode a container back to little-endian `f32` bytes, exactly.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Decode a container from its primary stream only.
    fn decompress_lossy(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// Combined codec for both encoding and decoding.
pub trait Codec: Compressor + Decompressor {
    /// Round-trip test: compress then decompress.
    /// Returns true if data matches.
    fn verify_roundtrip(&self, data: &[u8]) -> Result<bool> {
        let compressed = self.compress(data)?;
        let decompressed = self.decompress(&compressed)?;
        Ok(data == decompressed.as_slice())
    }

    /// Get the full container ratio for given data.
    fn measure_ratio(&self, data: &[u8]) -> Result<StorageRatio> {
        let compressed = self.compress(data)?;
        Ok(StorageRatio::new(data.len(), compressed.len()))
    }
}

/// Interpret a byte buffer as little-endian `f32` values.
pub fn f32_from_le_bytes(input: &[u8]) -> Result<Vec<f32>> {
    if input.len() % 4 != 0 {
        return Err(Error::invalid_parameter(
            "input",
            format!("length {} is not a multiple of 4", input.len()),
        ));
    }
    Ok(input
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Serialize `f32` values as little-endian bytes.
pub fn f32_to_le_bytes(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}
