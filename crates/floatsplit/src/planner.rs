//! Aggression to mantissa split.

use floatsplit_core::{validate_aggression, Result, SplitParameters, MANTISSA_BITS};

/// Plan the mantissa split for `aggression`.
///
/// `primary = ceil((1 - aggression) * 23)`, clamped to `[0, 23]`. The
/// mapping is piecewise constant, so nearby aggression values often share
/// a split.
pub fn plan(aggression: f32) -> Result<SplitParameters> {
    validate_aggression(aggression)?;

    let mantissa = f64::from(MANTISSA_BITS);
    let primary = ((1.0 - f64::from(aggression)) * mantissa)
        .ceil()
        .clamp(0.0, mantissa) as u8;

    SplitParameters::new(aggression, primary)
}
