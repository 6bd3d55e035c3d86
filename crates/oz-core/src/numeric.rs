//! Scalar helpers shared by every stage: guards on the way in, saturation
//! and rounding on the way out.

/// Floating point type used throughout system
pub type Real = f64;

/// Largest magnitude a reported value may take before rounding.
pub const MAX_REPORTED: Real = 1e12;

/// Floor at zero. NaN collapses to zero as well.
#[inline]
pub fn non_negative(v: Real) -> Real {
    if v > 0.0 { v } else { 0.0 }
}

/// Substitute `fallback` for a denominator that is zero, negative or non-finite.
#[inline]
pub fn positive_or(v: Real, fallback: Real) -> Real {
    if v.is_finite() && v > 0.0 { v } else { fallback }
}

/// Clamp into `[-MAX_REPORTED, MAX_REPORTED]`, mapping NaN to zero.
#[inline]
pub fn saturate(v: Real) -> Real {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(-MAX_REPORTED, MAX_REPORTED)
    }
}

/// Round half away from zero to `decimals` places.
///
/// The input is saturated first so the output is always finite, and a
/// negative zero is normalised to `0.0` so equal results compare bit-equal.
pub fn round_to(v: Real, decimals: i32) -> Real {
    let scale = 10f64.powi(decimals);
    let rounded = (saturate(v) * scale).round() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}
