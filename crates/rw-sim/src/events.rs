//! Clamping and parameter guards shared by the engine.

use crate::error::{SimError, SimResult};
use rw_core::{Real, ensure_finite};

/// Clamp a velocity to be non-negative. The boat never moves backward.
#[inline]
pub(crate) fn clamp_non_negative(v: Real) -> Real {
    if v < 0.0 { 0.0 } else { v }
}

/// Finite and strictly positive.
pub(crate) fn require_positive(val: Real, name: &'static str) -> SimResult<Real> {
    ensure_finite(val, name)?;
    if val <= 0.0 {
        return Err(SimError::InvalidParameter {
            name,
            value: val,
            reason: "must be positive",
        });
    }
    Ok(val)
}

/// Finite and not negative.
pub(crate) fn require_non_negative(val: Real, name: &'static str) -> SimResult<Real> {
    ensure_finite(val, name)?;
    if val < 0.0 {
        return Err(SimError::InvalidParameter {
            name,
            value: val,
            reason: "must not be negative",
        });
    }
    Ok(val)
}
