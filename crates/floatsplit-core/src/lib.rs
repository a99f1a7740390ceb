//! # Floatsplit Core
//!
//! Shared error type, split parameters, traits, statistics and
//! configuration for the floatsplit codec.
//!
//! An IEEE 754 binary32 value is stored as two records: a *primary*
//! record with sign, exponent and the upper mantissa bits, and a
//! *residual* record with the remaining mantissa bits. How many bits go
//! where is described by [`SplitParameters`].
//!
//! ## Core Traits
//!
//! - [`FloatCodec`] - Typed encode/decode over `&[f32]`
//! - [`Compressor`] - Byte-level encoding into a container
//! - [`Decompressor`] - Byte-level decoding from a container
//! - [`Codec`] - Combined compress/decompress capability
//!
//! ## Example
//!
//! ```ignore
//! use floatsplit_core::FloatCodec;
//! use floatsplit::SplitCodec;
//!
//! let codec = SplitCodec::new(0.5)?;
//! let artifact = codec.encode(&weights)?;
//! let exact = codec.decode(&artifact)?;
//! let approx = codec.decode_lossy(&artifact)?;
//! ```

pub mod config;
pub mod error;
pub mod stats;
pub mod traits;
pub mod types;

pub use config::{validate_aggression, SplitConfig};
pub use error::{Error, Result, StreamKind};
pub use stats::SplitStats;
pub use traits::{f32_from_le_bytes, f32_to_le_bytes, Codec, Compressor, Decompressor, FloatCodec};
pub use types::{
    packed_len, SplitParameters, StorageRatio, EXPONENT_BITS, HEADER_BITS, MANTISSA_BITS,
    SIGN_BITS,
};
