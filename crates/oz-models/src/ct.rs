//! CT accumulator.

use oz_core::units::{Time, in_minutes};

/// Residual (mg/L) times T10, in mg·min/L.
pub fn ct_value(residual_mg_l: f64, t10: Time) -> f64 {
    residual_mg_l * in_minutes(t10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oz_core::units::minutes;

    #[test]
    fn product_of_residual_and_t10() {
        assert!((ct_value(0.5, minutes(10.0)) - 5.0).abs() < 1e-12);
        assert_eq!(ct_value(0.0, minutes(10.0)), 0.0);
    }
}
