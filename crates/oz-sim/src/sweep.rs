//! Parametric sweeps over one scalar input.
//!
//! Each point is an independent simulation, so points are evaluated in
//! parallel; results come back in sweep order.

use crate::error::SweepError;
use crate::result::TreatmentResult;
use crate::simulator::simulate;
use oz_core::{KineticParams, SystemParams, WaterQualityParams};
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepType {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Input that a sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SweepParameter {
    OzoneDose,
    H2o2Dose,
    FlowRate,
    BafflingFactor,
    Ph,
    Bromide,
    Ammonia,
    Doc,
    Temperature,
}

impl SweepParameter {
    pub const ALL: [SweepParameter; 9] = [
        SweepParameter::OzoneDose,
        SweepParameter::H2o2Dose,
        SweepParameter::FlowRate,
        SweepParameter::BafflingFactor,
        SweepParameter::Ph,
        SweepParameter::Bromide,
        SweepParameter::Ammonia,
        SweepParameter::Doc,
        SweepParameter::Temperature,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::OzoneDose => "ozone_dose",
            Self::H2o2Dose => "h2o2_dose",
            Self::FlowRate => "flow_rate",
            Self::BafflingFactor => "baffling_factor",
            Self::Ph => "ph",
            Self::Bromide => "bromide",
            Self::Ammonia => "ammonia",
            Self::Doc => "doc",
            Self::Temperature => "temperature",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::OzoneDose | Self::H2o2Dose | Self::Ammonia | Self::Doc => "mg/L",
            Self::FlowRate => "m3/h",
            Self::BafflingFactor | Self::Ph => "-",
            Self::Bromide => "ug/L",
            Self::Temperature => "degC",
        }
    }

    /// Copy of the inputs with this parameter set to `value`.
    pub fn apply(
        self,
        system: &SystemParams,
        water: &WaterQualityParams,
        value: f64,
    ) -> (SystemParams, WaterQualityParams) {
        let mut system = *system;
        let mut water = *water;
        match self {
            Self::OzoneDose => system.ozone_dose_mg_l = value,
            Self::H2o2Dose => system.h2o2_dose_mg_l = value,
            Self::FlowRate => system.flow_rate_m3_h = value,
            Self::BafflingFactor => system.baffling_factor = value,
            Self::Ph => water.ph = value,
            Self::Bromide => water.bromide_ug_l = value,
            Self::Ammonia => water.ammonia_mg_l = value,
            Self::Doc => water.doc_mg_l = value,
            Self::Temperature => water.temperature_c = value,
        }
        (system, water)
    }
}

impl FromStr for SweepParameter {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|p| p.name() == key)
            .ok_or_else(|| SweepError::UnknownParameter { name: s.to_string() })
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Definition of a single parameter sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    pub parameter: SweepParameter,
    pub start: f64,
    pub end: f64,
    /// Number of points to generate
    pub num_points: usize,
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    pub fn new(
        parameter: SweepParameter,
        start: f64,
        end: f64,
        num_points: usize,
        sweep_type: SweepType,
    ) -> Result<Self, SweepError> {
        if !start.is_finite() {
            return Err(SweepError::NonFinite {
                what: "start",
                value: start,
            });
        }
        if !end.is_finite() {
            return Err(SweepError::NonFinite {
                what: "end",
                value: end,
            });
        }
        if num_points < 2 {
            return Err(SweepError::TooFewPoints { num_points });
        }
        if (start - end).abs() < 1e-12 {
            return Err(SweepError::IdenticalBounds);
        }
        Ok(Self {
            parameter,
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.sweep_type {
            SweepType::Linear => self.generate_linear(),
            SweepType::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        // Both bounds must be positive for log spacing
        if self.start <= 0.0 || self.end <= 0.0 {
            return self.generate_linear();
        }

        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();

        // Ensure exact endpoints
        points[0] = self.start;
        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} {} ({} points, {})",
            self.parameter,
            self.start,
            self.end,
            self.parameter.unit(),
            self.num_points,
            self.sweep_type
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub value: f64,
    pub result: TreatmentResult,
}

/// Result of a sweep, one point per generated value.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub definition: SweepDefinition,
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    /// Independent variable values
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// One output column by its `TreatmentResult::fields` name.
    pub fn column(&self, field: &str) -> Option<Vec<f64>> {
        self.points
            .iter()
            .map(|p| {
                p.result
                    .fields()
                    .into_iter()
                    .find(|(name, _)| *name == field)
                    .map(|(_, v)| v)
            })
            .collect()
    }

    /// CSV with the swept parameter first, then every result field.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from(self.definition.parameter.name());
        if let Some(first) = self.points.first() {
            for (name, _) in first.result.fields() {
                csv.push(',');
                csv.push_str(name);
            }
        }
        csv.push('\n');
        for point in &self.points {
            csv.push_str(&point.value.to_string());
            for (_, v) in point.result.fields() {
                csv.push(',');
                csv.push_str(&v.to_string());
            }
            csv.push('\n');
        }
        csv
    }
}

/// Simulate every point of `definition`, in parallel.
pub fn execute_sweep(
    definition: &SweepDefinition,
    system: &SystemParams,
    water: &WaterQualityParams,
    kinetics: Option<&KineticParams>,
) -> SweepResult {
    let values = definition.generate_points();
    debug!(sweep = %definition, points = values.len(), "executing sweep");

    let points = values
        .par_iter()
        .map(|&value| {
            let (system, water) = definition.parameter.apply(system, water, value);
            SweepPoint {
                value,
                result: simulate(&system, &water, kinetics),
            }
        })
        .collect();

    SweepResult {
        definition: definition.clone(),
        points,
    }
}
