//! Concrete encode/decode scenarios with known bit layouts.

use floatsplit::layout::decompose;
use floatsplit::{decode_lossless, decode_lossy, encode, FloatCodec, SplitCodec};

#[test]
fn test_one_point_five_at_half_aggression() {
    let artifact = encode(&[1.5], 0.5).unwrap();
    let split = artifact.split();
    assert_eq!(split.primary_mantissa_bits(), 12);
    assert_eq!(split.residual_mantissa_bits(), 11);

    // sign 0, exponent 127, top 12 mantissa bits 0x800
    let record = (u32::from(artifact.primary()[0]) << 13)
        | (u32::from(artifact.primary()[1]) << 5)
        | (u32::from(artifact.primary()[2]) >> 3);
    assert_eq!(record >> 20, 0);
    assert_eq!((record >> 12) & 0xFF, 127);
    assert_eq!(record & 0xFFF, 0x800);

    // residual: 11 zero bits
    assert_eq!(artifact.residual(), &[0, 0]);

    assert_eq!(decode_lossless(&artifact).unwrap(), vec![1.5]);
    assert_eq!(decode_lossy(artifact.primary(), 1, split).unwrap(), vec![1.5]);
}

#[test]
fn test_smallest_mantissa_lost_at_full_aggression() {
    let x = 1.0f32 + f32::EPSILON;
    assert_eq!(decompose(x).mantissa, 1);

    let artifact = encode(&[x], 1.0).unwrap();
    assert_eq!(artifact.split().primary_mantissa_bits(), 0);
    assert_eq!(artifact.primary().len(), 2);

    let lossy = decode_lossy(artifact.primary(), 1, artifact.split()).unwrap();
    assert_eq!(lossy, vec![1.0]);
    assert_eq!(decode_lossless(&artifact).unwrap()[0].to_bits(), x.to_bits());
}

#[test]
fn test_zero_aggression_primary_is_exact() {
    let values: Vec<f32> = (0..257).map(|i| (i as f32).sqrt() - 7.5).collect();
    let artifact = encode(&values, 0.0).unwrap();
    assert!(artifact.residual().is_empty());

    let lossy = decode_lossy(artifact.primary(), values.len(), artifact.split()).unwrap();
    let expected: Vec<u32> = values.iter().map(|v| v.to_bits()).collect();
    let actual: Vec<u32> = lossy.iter().map(|v| v.to_bits()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_special_values_survive_every_split() {
    let specials = [
        0.0f32,
        -0.0,
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::NAN,
        f32::from_bits(0x7F80_0001), // signaling NaN, minimal payload
        f32::from_bits(0xFFFF_FFFF),
        f32::from_bits(0x0000_0001), // smallest subnormal
        f32::from_bits(0x807F_FFFF), // largest negative subnormal
        f32::MIN_POSITIVE,
        f32::MAX,
        f32::MIN,
    ];
    for step in 0..=23 {
        let codec = SplitCodec::new(step as f32 / 23.0).unwrap();
        let artifact = codec.encode(&specials).unwrap();
        let decoded = codec.decode(&artifact).unwrap();
        for (a, b) in specials.iter().zip(&decoded) {
            assert_eq!(a.to_bits(), b.to_bits(), "step {step}");
        }
    }
}

#[test]
fn test_lossy_error_grows_with_aggression() {
    let x = std::f32::consts::PI;
    let mut previous = 0.0f32;
    for aggression in [0.0f32, 0.25, 0.5, 0.75, 1.0] {
        let artifact = encode(&[x], aggression).unwrap();
        let lossy = decode_lossy(artifact.primary(), 1, artifact.split()).unwrap()[0];
        let error = (lossy - x).abs();
        assert!(error >= previous, "aggression {aggression}");
        previous = error;
    }
    // only sign and exponent left: pi truncates to 2
    assert_eq!(previous, x - 2.0);
}
