//! Scenario validation logic.

use crate::schema::Scenario;
use oz_core::OzError;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value in {section}: {source}")]
    InvalidValue {
        section: &'static str,
        #[source]
        source: OzError,
    },

    #[error("Scenario name must not be empty")]
    EmptyName,

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version == 0 || scenario.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }
    if scenario.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    scenario.system.validate().map_err(in_section("system"))?;
    scenario.water.validate().map_err(in_section("water"))?;
    if let Some(kinetics) = &scenario.kinetics {
        kinetics.validate().map_err(in_section("kinetics"))?;
    }
    Ok(())
}

fn in_section(section: &'static str) -> impl FnOnce(OzError) -> ValidationError {
    move |source| ValidationError::InvalidValue { section, source }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_is_valid() {
        assert!(validate_scenario(&Scenario::reference()).is_ok());
    }

    #[test]
    fn zero_flow_rejected() {
        let mut s = Scenario::reference();
        s.system.flow_rate_m3_h = 0.0;
        let err = validate_scenario(&s).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidValue {
                section: "system",
                source: OzError::NotPositive { what: "flow rate" }
            }
        ));
    }

    #[test]
    fn baffling_above_one_rejected() {
        let mut s = Scenario::reference();
        s.system.baffling_factor = 1.2;
        assert!(validate_scenario(&s).is_err());
    }

    #[test]
    fn future_version_rejected() {
        let mut s = Scenario::reference();
        s.version = crate::LATEST_VERSION + 1;
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn negative_rate_constant_rejected() {
        let mut s = Scenario::reference();
        let mut k = oz_core::KineticParams::LITERATURE;
        k.geosmin.k_oh = -1.0;
        s.kinetics = Some(k);
        let err = validate_scenario(&s).unwrap_err();
        assert!(err.to_string().contains("kinetics"));
    }
}
