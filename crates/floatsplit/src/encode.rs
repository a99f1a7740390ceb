//! Split encoding.

use tracing::debug;

use floatsplit_core::{Result, SplitParameters, EXPONENT_BITS, SIGN_BITS};

use crate::artifact::EncodedArtifact;
use crate::bitpack::BitWriter;
use crate::layout::decompose;
use crate::planner::plan;

/// Encode `elements` with the split planned from `aggression`.
///
/// Fails with `InvalidParameter` before producing any output when
/// `aggression` is non-finite or outside `[0, 1]`.
pub fn encode(elements: &[f32], aggression: f32) -> Result<EncodedArtifact> {
    let split = plan(aggression)?;
    Ok(encode_with(elements, split))
}

/// Encode `elements` with an already planned split.
pub fn encode_with(elements: &[f32], split: SplitParameters) -> EncodedArtifact {
    let (primary, residual) = encode_streams(elements, &split);

    debug!(
        elements = elements.len(),
        primary_mantissa_bits = split.primary_mantissa_bits(),
        primary_bytes = primary.len(),
        residual_bytes = residual.len(),
        "encoded split streams"
    );

    EncodedArtifact::from_parts(primary, residual, elements.len(), split)
}

/// Pack both streams for `elements`, in input order.
pub(crate) fn encode_streams(elements: &[f32], split: &SplitParameters) -> (Vec<u8>, Vec<u8>) {
    let primary_bits = split.primary_mantissa_bits();
    let residual_bits = split.residual_mantissa_bits();
    let residual_mask = split.residual_mask();

    let count = elements.len();
    let mut primary = BitWriter::with_capacity(split.primary_stream_len(count).unwrap_or(0));
    let mut residual = BitWriter::with_capacity(split.residual_stream_len(count).unwrap_or(0));

    for &x in elements {
        let parts = decompose(x);
        primary.write_bits(parts.sign, SIGN_BITS);
        primary.write_bits(parts.exponent, EXPONENT_BITS);
        primary.write_bits(parts.mantissa >> residual_bits, primary_bits);
        residual.write_bits(parts.mantissa & residual_mask, residual_bits);
    }

    (primary.finish(), residual.finish())
}
