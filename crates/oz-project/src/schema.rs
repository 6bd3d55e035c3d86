//! Scenario file schema.

use oz_core::{KineticParams, SystemParams, WaterQualityParams};
use oz_sim::ComplianceLimits;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub system: SystemParams,
    pub water: WaterQualityParams,
    /// Rate-constant override; literature values when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kinetics: Option<KineticParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<ComplianceLimits>,
}

impl Scenario {
    /// The reference contactor: 15 x 5 x 4 m basin at 1000 m³/h, 2.5 mg/L ozone.
    pub fn reference() -> Self {
        Self {
            version: crate::LATEST_VERSION,
            name: "Reference contactor".to_string(),
            description: Some("Ozone-only baseline on a moderately brominated surface water".to_string()),
            system: SystemParams::default(),
            water: WaterQualityParams::default(),
            kinetics: None,
            limits: None,
        }
    }

    pub fn limits_or_default(&self) -> ComplianceLimits {
        self.limits.unwrap_or_default()
    }
}
