//! Encoded artifact and its container format.
//!
//! ## Container Layout
//!
//! All integers are little-endian.
//!
//! ```text
//! +---------------+---------+-------------+---------+--------------+----------+
//! | element_count | primary | primary_len | primary | residual_len | residual |
//! | u32           | bits u8 | u32         | bytes   | u32          | bytes    |
//! +---------------+---------+-------------+---------+--------------+----------+
//! ```
//!
//! Aggression itself is not stored; only the integer split is needed to
//! decode. A container whose residual section is empty while the split
//! expects residual bits is a valid *primary-only* container: it decodes
//! lossily but not losslessly.

use std::io::{Read, Write};

use floatsplit_core::{Error, Result, SplitParameters, SplitStats, StreamKind};

/// Fixed bytes before the primary stream.
pub const HEADER_SIZE: usize = 4 + 1 + 4;

/// Primary and residual streams with the metadata needed to decode them.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedArtifact {
    primary: Vec<u8>,
    residual: Vec<u8>,
    element_count: usize,
    split: SplitParameters,
}

impl EncodedArtifact {
    /// Assemble an artifact from already encoded streams.
    ///
    /// Stream lengths are not checked here; decoding validates them.
    pub fn from_parts(
        primary: Vec<u8>,
        residual: Vec<u8>,
        element_count: usize,
        split: SplitParameters,
    ) -> Self {
        Self {
            primary,
            residual,
            element_count,
            split,
        }
    }

    /// Sign, exponent and upper mantissa records.
    pub fn primary(&self) -> &[u8] {
        &self.primary
    }

    /// Lower mantissa records.
    pub fn residual(&self) -> &[u8] {
        &self.residual
    }

    /// Number of encoded elements.
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Split used to produce the streams.
    pub fn split(&self) -> SplitParameters {
        self.split
    }

    /// Drop the residual stream, keeping what a lossy decode needs.
    pub fn into_primary_only(self) -> Self {
        Self {
            residual: Vec::new(),
            ..self
        }
    }

    /// True when the residual stream is long enough for exact decoding.
    pub fn has_residual(&self) -> bool {
        self.split
            .residual_stream_len(self.element_count)
            .is_ok_and(|required| self.residual.len() >= required)
    }

    /// Split streams into their raw parts.
    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>, usize, SplitParameters) {
        (self.primary, self.residual, self.element_count, self.split)
    }

    /// Size statistics for this artifact.
    pub fn stats(&self) -> SplitStats {
        SplitStats {
            element_count: self.element_count,
            primary_mantissa_bits: self.split.primary_mantissa_bits(),
            primary_size: self.primary.len(),
            residual_size: self.residual.len(),
        }
    }

    /// Bytes [`EncodedArtifact::to_bytes`] will produce.
    pub fn serialized_len(&self) -> usize {
        HEADER_SIZE + self.primary.len() + 4 + self.residual.len()
    }

    /// Serialize into the container layout.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.serialized_len());
        self.write_to(&mut out)?;
        Ok(out)
    }

    /// Write the container layout to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let element_count = to_u32("element_count", self.element_count)?;
        let primary_len = to_u32("primary_len", self.primary.len())?;
        let residual_len = to_u32("residual_len", self.residual.len())?;

        writer.write_all(&element_count.to_le_bytes())?;
        writer.write_all(&[self.split.primary_mantissa_bits()])?;
        writer.write_all(&primary_len.to_le_bytes())?;
        writer.write_all(&self.primary)?;
        writer.write_all(&residual_len.to_le_bytes())?;
        writer.write_all(&self.residual)?;
        Ok(())
    }

    /// Parse a container from a complete buffer.
    ///
    /// Trailing bytes after the residual stream are rejected.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut cursor = data;
        let artifact = Self::read_from(&mut cursor)?;
        if !cursor.is_empty() {
            return Err(Error::corrupted_at(
                format!("{} trailing bytes", cursor.len()),
                data.len() - cursor.len(),
            ));
        }
        Ok(artifact)
    }

    /// Read one container from `reader`.
    ///
    /// A reader that ends inside a stream section yields
    /// `StreamLengthMismatch`; one that ends inside a header field yields
    /// `Corrupted`.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let element_count = read_u32(&mut reader, "element_count")? as usize;
        let primary_bits = read_array::<1, _>(&mut reader, "primary_mantissa_bits")?[0];
        let split = SplitParameters::from_primary_bits(primary_bits)?;

        let primary_len = read_u32(&mut reader, "primary_len")? as usize;
        let primary = read_stream(&mut reader, primary_len, StreamKind::Primary)?;

        let residual_len = read_u32(&mut reader, "residual_len")? as usize;
        let residual = read_stream(&mut reader, residual_len, StreamKind::Residual)?;

        Ok(Self {
            primary,
            residual,
            element_count,
            split,
        })
    }
}

fn to_u32(name: &'static str, value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        Error::invalid_parameter(name, format!("{value} does not fit the 32-bit header field"))
    })
}

fn read_array<const N: usize, R: Read>(reader: &mut R, field: &str) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => {
            Error::corrupted(format!("container truncated in {field}"))
        }
        _ => Error::Io(e),
    })?;
    Ok(buf)
}

fn read_u32<R: Read>(reader: &mut R, field: &str) -> Result<u32> {
    Ok(u32::from_le_bytes(read_array::<4, _>(reader, field)?))
}

fn read_stream<R: Read>(reader: &mut R, len: usize, stream: StreamKind) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let read = reader.take(len as u64).read_to_end(&mut buf)?;
    if read < len {
        return Err(Error::stream_length_mismatch(stream, len, read));
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EncodedArtifact {
        let split = SplitParameters::from_primary_bits(12).unwrap();
        EncodedArtifact::from_parts(vec![0x3F, 0xC0, 0x00], vec![0x00, 0x00], 1, split)
    }

    #[test]
    fn test_layout_bytes() {
        let bytes = sample().to_bytes().unwrap();
        assert_eq!(
            bytes,
            vec![
                1, 0, 0, 0, // element_count
                12, // primary_mantissa_bits
                3, 0, 0, 0, // primary_len
                0x3F, 0xC0, 0x00, // primary
                2, 0, 0, 0, // residual_len
                0x00, 0x00, // residual
            ]
        );
        assert_eq!(bytes.len(), sample().serialized_len());
    }

    #[test]
    fn test_container_roundtrip() {
        let artifact = sample();
        let parsed = EncodedArtifact::from_bytes(&artifact.to_bytes().unwrap()).unwrap();
        assert_eq!(parsed.primary(), artifact.primary());
        assert_eq!(parsed.residual(), artifact.residual());
        assert_eq!(parsed.element_count(), 1);
        assert_eq!(parsed.split().primary_mantissa_bits(), 12);
    }

    #[test]
    fn test_encoded_artifact_survives_container() {
        let artifact = crate::encode::encode(&[1.5, -2.75], 0.5).unwrap();
        let parsed = EncodedArtifact::from_bytes(&artifact.to_bytes().unwrap()).unwrap();
        assert_eq!(parsed, artifact);
        assert_eq!(parsed.split(), artifact.split());
        assert_eq!(parsed.stats(), artifact.stats());
    }

    #[test]
    fn test_rejects_wide_split_before_streams() {
        let mut bytes = sample().to_bytes().unwrap();
        bytes[4] = 24;
        let err = EncodedArtifact::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { .. }));
    }

    #[test]
    fn test_truncated_residual() {
        let bytes = sample().to_bytes().unwrap();
        let err = EncodedArtifact::from_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(matches!(
            err,
            Error::StreamLengthMismatch {
                stream: StreamKind::Residual,
                required: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_truncated_header() {
        let err = EncodedArtifact::from_bytes(&[1, 0, 0]).unwrap_err();
        assert!(matches!(err, Error::Corrupted(_)));
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut bytes = sample().to_bytes().unwrap();
        bytes.push(0xFF);
        let err = EncodedArtifact::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, Error::Corrupted(_)));
    }

    #[test]
    fn test_primary_only() {
        let artifact = sample();
        assert!(artifact.has_residual());
        let primary_only = artifact.into_primary_only();
        assert!(primary_only.residual().is_empty());
        assert!(!primary_only.has_residual());

        let parsed = EncodedArtifact::from_bytes(&primary_only.to_bytes().unwrap()).unwrap();
        assert_eq!(parsed, primary_only);
    }
}
