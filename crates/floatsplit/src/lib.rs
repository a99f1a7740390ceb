//! # Floatsplit
//!
//! Splits IEEE 754 `f32` arrays into two bitstreams with a tunable
//! precision boundary.
//!
//! ## Streams
//!
//! | Stream | Per element | Alone gives |
//! |--------|-------------|-------------|
//! | Primary | sign, exponent, top `p` mantissa bits | truncated approximation |
//! | Residual | low `23 - p` mantissa bits | nothing |
//! | Both | all 32 bits | exact value |
//!
//! `p = ceil((1 - aggression) * 23)`. Aggression 0 keeps every mantissa bit
//! in the primary stream; aggression 1 leaves it with sign and exponent only.
//!
//! ## Architecture
//!
//! ```text
//! &[f32] → layout::decompose → planner split → bitpack (MSB first) → EncodedArtifact
//! EncodedArtifact → bitpack → layout::recompose[_lossy] → Vec<f32>
//! ```
//!
//! ## Example
//!
//! ```
//! use floatsplit::{decode_lossless, decode_lossy, encode};
//!
//! let artifact = encode(&[1.5, -2.75, 0.0, 100.125], 0.5)?;
//! assert_eq!(artifact.split().primary_mantissa_bits(), 12);
//!
//! let exact = decode_lossless(&artifact)?;
//! let approx = decode_lossy(artifact.primary(), artifact.element_count(), artifact.split())?;
//! assert_eq!(exact, approx);
//! # Ok::<(), floatsplit::Error>(())
//! ```
//!
//! ## Features
//!
//! - `parallel`: rayon chunked encode/decode producing identical bytes.

pub mod artifact;
pub mod bitpack;
pub mod codec;
pub mod decode;
pub mod encode;
pub mod layout;
pub mod planner;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export main types
pub use artifact::EncodedArtifact;
pub use codec::SplitCodec;
pub use decode::{decode_lossless, decode_lossy};
pub use encode::{encode, encode_with};
pub use planner::plan;

pub use floatsplit_core::{
    Codec, Compressor, Decompressor, Error, FloatCodec, Result, SplitConfig, SplitParameters,
    SplitStats,
};
