//! Lossless and lossy decoding.
//!
//! Both paths check stream lengths before reading a single bit, so a
//! truncated stream never yields a partial result.

use tracing::{debug, warn};

use floatsplit_core::{Error, Result, SplitParameters, StreamKind, EXPONENT_BITS, SIGN_BITS};

use crate::artifact::EncodedArtifact;
use crate::bitpack::BitReader;
use crate::layout::{recompose, recompose_lossy};

/// Reconstruct every element exactly from both streams.
///
/// Fails with `StreamLengthMismatch` when either stream holds fewer than
/// `element_count` records.
pub fn decode_lossless(artifact: &EncodedArtifact) -> Result<Vec<f32>> {
    let split = artifact.split();
    let count = artifact.element_count();

    check_len(StreamKind::Primary, artifact.primary(), split.primary_stream_len(count)?)?;
    if let Err(e) = check_len(
        StreamKind::Residual,
        artifact.residual(),
        split.residual_stream_len(count)?,
    ) {
        warn!(
            elements = count,
            residual_bytes = artifact.residual().len(),
            error = e.category(),
            "residual stream incomplete, only lossy decoding is possible"
        );
        return Err(e);
    }

    let mut out = Vec::with_capacity(count);
    decode_lossless_into(artifact.primary(), artifact.residual(), count, &split, &mut out)?;

    debug!(
        elements = count,
        primary_mantissa_bits = split.primary_mantissa_bits(),
        "decoded lossless"
    );
    Ok(out)
}

/// Approximate every element from the primary stream alone.
///
/// The residual stream is never consulted; missing mantissa bits are
/// zero, so magnitudes are truncated toward zero.
pub fn decode_lossy(
    primary: &[u8],
    element_count: usize,
    split: SplitParameters,
) -> Result<Vec<f32>> {
    check_len(StreamKind::Primary, primary, split.primary_stream_len(element_count)?)?;

    let mut out = Vec::with_capacity(element_count);
    decode_lossy_into(primary, element_count, &split, &mut out)?;

    debug!(
        elements = element_count,
        primary_mantissa_bits = split.primary_mantissa_bits(),
        "decoded lossy"
    );
    Ok(out)
}

/// Append `count` exact values decoded from length-checked streams.
pub(crate) fn decode_lossless_into(
    primary: &[u8],
    residual: &[u8],
    count: usize,
    split: &SplitParameters,
    out: &mut Vec<f32>,
) -> Result<()> {
    let primary_bits = split.primary_mantissa_bits();
    let residual_bits = split.residual_mantissa_bits();

    let mut primary_reader = BitReader::new(primary);
    let mut residual_reader = BitReader::new(residual);

    for _ in 0..count {
        let sign = primary_reader.read_bits(SIGN_BITS)?;
        let exponent = primary_reader.read_bits(EXPONENT_BITS)?;
        let high = primary_reader.read_bits(primary_bits)?;
        let low = residual_reader.read_bits(residual_bits)?;
        out.push(recompose(sign, exponent, (high << residual_bits) | low));
    }
    Ok(())
}

/// Append `count` truncated values decoded from a length-checked primary stream.
pub(crate) fn decode_lossy_into(
    primary: &[u8],
    count: usize,
    split: &SplitParameters,
    out: &mut Vec<f32>,
) -> Result<()> {
    let primary_bits = split.primary_mantissa_bits();
    let mut reader = BitReader::new(primary);

    for _ in 0..count {
        let sign = reader.read_bits(SIGN_BITS)?;
        let exponent = reader.read_bits(EXPONENT_BITS)?;
        let high = reader.read_bits(primary_bits)?;
        out.push(recompose_lossy(sign, exponent, high, primary_bits));
    }
    Ok(())
}

pub(crate) fn check_len(stream: StreamKind, data: &[u8], required: usize) -> Result<()> {
    if data.len() < required {
        return Err(Error::stream_length_mismatch(stream, required, data.len()));
    }
    Ok(())
}
