//! Chunk-parallel encoding and decoding.
//!
//! Chunks hold a multiple of 8 elements, so every chunk's records end on
//! a byte boundary in both streams (8 records of `w` bits are `w` bytes).
//! Chunks can therefore be packed independently and concatenated, and the
//! result is byte-identical to the sequential encoder.

use rayon::prelude::*;
use tracing::{debug, trace};

use floatsplit_core::{Result, SplitParameters, StreamKind};

use crate::artifact::EncodedArtifact;
use crate::decode::{check_len, decode_lossless_into, decode_lossy_into};
use crate::encode::encode_streams;

/// Round `chunk_elements` up to a non-zero multiple of 8.
fn aligned_chunk(chunk_elements: usize) -> usize {
    chunk_elements.max(1).div_ceil(8) * 8
}

/// Encode `elements` over rayon, `chunk_elements` at a time.
pub fn encode_chunked(
    elements: &[f32],
    split: SplitParameters,
    chunk_elements: usize,
) -> EncodedArtifact {
    let chunk = aligned_chunk(chunk_elements);

    let parts: Vec<(Vec<u8>, Vec<u8>)> = elements
        .par_chunks(chunk)
        .map(|c| encode_streams(c, &split))
        .collect();

    let mut primary = Vec::with_capacity(split.primary_stream_len(elements.len()).unwrap_or(0));
    let mut residual = Vec::with_capacity(split.residual_stream_len(elements.len()).unwrap_or(0));
    for (p, r) in &parts {
        primary.extend_from_slice(p);
        residual.extend_from_slice(r);
    }

    debug!(
        elements = elements.len(),
        chunks = parts.len(),
        chunk_elements = chunk,
        primary_mantissa_bits = split.primary_mantissa_bits(),
        "encoded split streams in parallel"
    );

    EncodedArtifact::from_parts(primary, residual, elements.len(), split)
}

/// Decode `artifact` exactly over rayon, `chunk_elements` at a time.
pub fn decode_lossless_chunked(
    artifact: &EncodedArtifact,
    chunk_elements: usize,
) -> Result<Vec<f32>> {
    let split = artifact.split();
    let count = artifact.element_count();
    let primary = artifact.primary();
    let residual = artifact.residual();

    check_len(StreamKind::Primary, primary, split.primary_stream_len(count)?)?;
    check_len(StreamKind::Residual, residual, split.residual_stream_len(count)?)?;

    decode_chunks(count, chunk_elements, |start, len, out| {
        let p = slice_records(primary, start, len, split.primary_record_bits());
        let r = slice_records(residual, start, len, split.residual_record_bits());
        decode_lossless_into(p, r, len, &split, out)
    })
}

/// Decode the primary stream only over rayon, `chunk_elements` at a time.
pub fn decode_lossy_chunked(
    primary: &[u8],
    element_count: usize,
    split: SplitParameters,
    chunk_elements: usize,
) -> Result<Vec<f32>> {
    check_len(StreamKind::Primary, primary, split.primary_stream_len(element_count)?)?;

    decode_chunks(element_count, chunk_elements, |start, len, out| {
        let p = slice_records(primary, start, len, split.primary_record_bits());
        decode_lossy_into(p, len, &split, out)
    })
}

fn decode_chunks<F>(count: usize, chunk_elements: usize, decode: F) -> Result<Vec<f32>>
where
    F: Fn(usize, usize, &mut Vec<f32>) -> Result<()> + Sync,
{
    let chunk = aligned_chunk(chunk_elements);
    let chunks = count.div_ceil(chunk);

    let decoded: Vec<Vec<f32>> = (0..chunks)
        .into_par_iter()
        .map(|i| {
            let start = i * chunk;
            let len = chunk.min(count - start);
            trace!(chunk = i, start, len, "decoding chunk");
            let mut out = Vec::with_capacity(len);
            decode(start, len, &mut out)?;
            Ok(out)
        })
        .collect::<Result<_>>()?;

    let mut out = Vec::with_capacity(count);
    for part in decoded {
        out.extend(part);
    }
    debug!(elements = count, chunks, "decoded in parallel");
    Ok(out)
}

/// Bytes holding records `start..start + len`; `start` is a multiple of 8.
///
/// The streams were length checked, so these offsets cannot overflow.
fn slice_records(data: &[u8], start: usize, len: usize, bits: u8) -> &[u8] {
    let bits = usize::from(bits);
    let begin = start / 8 * bits;
    let end = begin + len / 8 * bits + (len % 8 * bits).div_ceil(8);
    &data[begin..end]
}
