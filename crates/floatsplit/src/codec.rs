//! Configured split codec.

use floatsplit_core::{
    f32_from_le_bytes, f32_to_le_bytes, Codec, Compressor, Decompressor, FloatCodec, Result,
    SplitConfig, SplitParameters,
};

use crate::artifact::{EncodedArtifact, HEADER_SIZE};
use crate::decode::{decode_lossless, decode_lossy};
use crate::encode::encode_with;
use crate::planner::plan;

/// Split codec with a fixed, pre-planned split.
///
/// The split is planned once at construction and reused for every call,
/// so a codec instance always produces streams of the same layout.
#[derive(Debug, Clone)]
pub struct SplitCodec {
    split: SplitParameters,
    parallel_chunk_elements: usize,
}

impl SplitCodec {
    /// Create a codec for `aggression` in `[0, 1]`.
    pub fn new(aggression: f32) -> Result<Self> {
        Self::from_config(&SplitConfig::new(aggression))
    }

    /// Create a codec from a validated config.
    pub fn from_config(config: &SplitConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            split: plan(config.aggression)?,
            parallel_chunk_elements: config.parallel_chunk_elements,
        })
    }

    /// Create a codec that reuses an existing split, e.g. one read from a
    /// container header.
    pub fn with_split(split: SplitParameters) -> Self {
        Self {
            split,
            parallel_chunk_elements: SplitConfig::default().parallel_chunk_elements,
        }
    }

    /// Split this codec encodes with.
    pub fn split(&self) -> SplitParameters {
        self.split
    }

    /// Elements per chunk used by the parallel paths.
    pub fn parallel_chunk_elements(&self) -> usize {
        self.parallel_chunk_elements
    }

    /// Encode using rayon over fixed-size chunks.
    ///
    /// Produces the same bytes as [`FloatCodec::encode`].
    #[cfg(feature = "parallel")]
    pub fn encode_parallel(&self, elements: &[f32]) -> EncodedArtifact {
        crate::parallel::encode_chunked(elements, self.split, self.parallel_chunk_elements)
    }

    /// Decode losslessly using rayon over fixed-size chunks.
    #[cfg(feature = "parallel")]
    pub fn decode_parallel(&self, artifact: &EncodedArtifact) -> Result<Vec<f32>> {
        crate::parallel::decode_lossless_chunked(artifact, self.parallel_chunk_elements)
    }
}

impl Default for SplitCodec {
    fn default() -> Self {
        Self::with_split(SplitParameters::default())
    }
}

impl FloatCodec for SplitCodec {
    type Artifact = EncodedArtifact;

    fn split(&self) -> SplitParameters {
        self.split
    }

    fn encode(&self, elements: &[f32]) -> Result<EncodedArtifact> {
        Ok(encode_with(elements, self.split))
    }

    /// Decodes with the split recorded in the artifact, not this codec's.
    fn decode(&self, artifact: &EncodedArtifact) -> Result<Vec<f32>> {
        decode_lossless(artifact)
    }

    fn decode_lossy(&self, artifact: &EncodedArtifact) -> Result<Vec<f32>> {
        decode_lossy(artifact.primary(), artifact.element_count(), artifact.split())
    }
}

impl Compressor for SplitCodec {
    fn split(&self) -> SplitParameters {
        self.split
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let elements = f32_from_le_bytes(input)?;
        encode_with(&elements, self.split).to_bytes()
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        let count = input_len / 4;
        let primary = self.split.primary_stream_len(count).unwrap_or(usize::MAX);
        let residual = self.split.residual_stream_len(count).unwrap_or(usize::MAX);
        (HEADER_SIZE + 4)
            .saturating_add(primary)
            .saturating_add(residual)
    }
}

impl Decompressor for SplitCodec {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let artifact = EncodedArtifact::from_bytes(input)?;
        Ok(f32_to_le_bytes(&decode_lossless(&artifact)?))
    }

    fn decompress_lossy(&self, input: &[u8]) -> Result<Vec<u8>> {
        let artifact = EncodedArtifact::from_bytes(input)?;
        let values = decode_lossy(artifact.primary(), artifact.element_count(), artifact.split())?;
        Ok(f32_to_le_bytes(&values))
    }
}

impl Codec for SplitCodec {}
