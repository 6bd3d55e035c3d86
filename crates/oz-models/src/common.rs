//! Shared correlations.

/// Temperature the empirical correlations are referenced to (°C).
pub const REFERENCE_TEMPERATURE_C: f64 = 20.0;

/// Ozone molar mass, used to convert mg/L doses to mol/L.
pub const OZONE_MG_PER_MOL: f64 = 48_000.0;

/// Arrhenius-style multiplier `base^(T - 20)`.
///
/// Greater than one above the reference temperature, less than one below.
pub fn temperature_multiplier(base: f64, temperature_c: f64) -> f64 {
    base.powf(temperature_c - REFERENCE_TEMPERATURE_C)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unity_at_reference() {
        assert_eq!(temperature_multiplier(1.04, REFERENCE_TEMPERATURE_C), 1.0);
    }

    #[test]
    fn colder_is_slower() {
        assert!(temperature_multiplier(1.04, 15.0) < 1.0);
        assert!(temperature_multiplier(1.04, 25.0) > 1.0);
        assert!((temperature_multiplier(1.04, 21.0) - 1.04).abs() < 1e-12);
    }
}
