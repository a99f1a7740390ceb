//! Walk a small array through the split codec.
//!
//! Run with: `RUST_LOG=debug cargo run -p floatsplit --example split_demo`

use floatsplit::{decode_lossless, decode_lossy, encode, EncodedArtifact};
use tracing_subscriber::EnvFilter;

fn main() -> floatsplit::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let values = [1.5f32, -2.75, 0.0, 100.125, 0.1];

    for aggression in [0.0f32, 0.5, 0.9, 1.0] {
        let artifact = encode(&values, aggression)?;
        let split = artifact.split();
        println!(
            "aggression {aggression:.2}: {} primary / {} residual mantissa bits",
            split.primary_mantissa_bits(),
            split.residual_mantissa_bits()
        );

        let exact = decode_lossless(&artifact)?;
        let approx = decode_lossy(artifact.primary(), artifact.element_count(), split)?;

        for ((original, exact), approx) in values.iter().zip(&exact).zip(&approx) {
            println!("  {original:>12} -> lossless {exact:>12}  lossy {approx:>12}");
        }

        let stats = artifact.stats();
        println!(
            "  primary {} B, residual {} B, raw {} B ({:.2}x primary ratio, {:.1} bits/element)",
            stats.primary_size,
            stats.residual_size,
            stats.original_size(),
            stats.primary_ratio().ratio(),
            stats.primary_bits_per_element()
        );

        // Ship only the primary stream and read it back.
        let bytes = artifact.into_primary_only().to_bytes()?;
        let received = EncodedArtifact::from_bytes(&bytes)?;
        println!(
            "  primary-only container: {} B, residual present: {}",
            bytes.len(),
            received.has_residual()
        );
    }

    Ok(())
}
