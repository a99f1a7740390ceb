//! Container serialization and partial-transfer workflows.

use std::io::Cursor;

use floatsplit::artifact::HEADER_SIZE;
use floatsplit::{
    decode_lossless, decode_lossy, encode, Codec, Compressor, Decompressor, EncodedArtifact,
    Error, SplitCodec,
};
use floatsplit_core::{f32_from_le_bytes, f32_to_le_bytes, StreamKind};

fn weights(n: usize) -> Vec<f32> {
    (0..n)
        .map(|i| {
            let t = i as f32 * 0.013;
            (t.sin() * 0.02) + (t * 3.1).cos() * 0.001
        })
        .collect()
}

#[test]
fn test_container_roundtrip_preserves_everything() {
    let values = weights(1000);
    let artifact = encode(&values, 0.6).unwrap();
    let bytes = artifact.to_bytes().unwrap();
    assert_eq!(bytes.len(), artifact.serialized_len());

    let parsed = EncodedArtifact::from_bytes(&bytes).unwrap();
    assert_eq!(parsed, artifact);
    assert_eq!(parsed.split(), artifact.split());
    assert_eq!(parsed.element_count(), 1000);

    let decoded = decode_lossless(&parsed).unwrap();
    assert!(decoded
        .iter()
        .zip(&values)
        .all(|(a, b)| a.to_bits() == b.to_bits()));
}

#[test]
fn test_primary_only_transfer() {
    let values = weights(333);
    let artifact = encode(&values, 0.8).unwrap();
    let full = artifact.clone();

    // ship only the primary stream
    let bytes = artifact.into_primary_only().to_bytes().unwrap();
    let received = EncodedArtifact::from_bytes(&bytes).unwrap();
    assert!(!received.has_residual());

    let err = decode_lossless(&received).unwrap_err();
    assert!(matches!(
        err,
        Error::StreamLengthMismatch {
            stream: StreamKind::Residual,
            ..
        }
    ));
    assert!(err.is_truncation());

    let approx = decode_lossy(received.primary(), received.element_count(), received.split())
        .unwrap();
    let from_full = decode_lossy(full.primary(), full.element_count(), full.split()).unwrap();
    assert_eq!(approx, from_full);

    // 5 primary mantissa bits: relative error below 2^-5
    for (a, x) in approx.iter().zip(&values) {
        assert!((a - x).abs() <= x.abs() / 32.0);
    }
}

#[test]
fn test_sequential_containers_on_one_stream() {
    let first = encode(&weights(10), 0.1).unwrap();
    let second = encode(&weights(77), 0.9).unwrap();

    let mut wire = Vec::new();
    first.write_to(&mut wire).unwrap();
    second.write_to(&mut wire).unwrap();

    let mut cursor = Cursor::new(wire);
    let a = EncodedArtifact::read_from(&mut cursor).unwrap();
    let b = EncodedArtifact::read_from(&mut cursor).unwrap();
    assert_eq!(a, EncodedArtifact::from_bytes(&first.to_bytes().unwrap()).unwrap());
    assert_eq!(b.element_count(), 77);
    assert_eq!(b.split().primary_mantissa_bits(), 3);
    assert_eq!(cursor.position() as usize, cursor.get_ref().len());
}

#[test]
fn test_corrupted_headers() {
    let bytes = encode(&weights(4), 0.5).unwrap().to_bytes().unwrap();

    let mut wide = bytes.clone();
    wide[4] = 200;
    assert!(matches!(
        EncodedArtifact::from_bytes(&wide),
        Err(Error::InvalidParameter { .. })
    ));

    assert!(matches!(
        EncodedArtifact::from_bytes(&bytes[..HEADER_SIZE - 1]),
        Err(Error::Corrupted(_))
    ));

    // claims more primary bytes than present
    let mut long = bytes.clone();
    long[5] = 0xFF;
    assert!(matches!(
        EncodedArtifact::from_bytes(&long),
        Err(Error::StreamLengthMismatch {
            stream: StreamKind::Primary,
            ..
        })
    ));

    // element count larger than the streams carry
    let mut many = bytes;
    many[0] = 100;
    let parsed = EncodedArtifact::from_bytes(&many).unwrap();
    assert!(decode_lossless(&parsed).is_err());
}

#[test]
fn test_byte_level_codec() {
    let codec = SplitCodec::new(0.4).unwrap();
    let data = f32_to_le_bytes(&weights(512));

    assert!(codec.verify_roundtrip(&data).unwrap());
    let compressed = codec.compress(&data).unwrap();
    assert_eq!(compressed.len(), codec.max_compressed_size(data.len()));

    let exact = codec.decompress(&compressed).unwrap();
    assert_eq!(exact, data);

    let lossy = f32_from_le_bytes(&codec.decompress_lossy(&compressed).unwrap()).unwrap();
    assert_eq!(lossy.len(), 512);

    let ratio = codec.measure_ratio(&data).unwrap();
    assert!(ratio.stored_size > data.len());
}
