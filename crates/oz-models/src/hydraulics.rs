//! Basin hydraulics: retention time and baffled contact time.

use oz_core::units::{Length, Time, Volume, in_minutes, m, m3, m3ph};
use oz_core::numeric::{MAX_REPORTED, positive_or};
use oz_core::SystemParams;
use uom::si::time::second;

/// Rectangular contact basin.
#[derive(Debug, Clone, Copy)]
pub struct Basin {
    pub length: Length,
    pub width: Length,
    pub depth: Length,
    /// T10 / HRT for the basin's baffling arrangement.
    pub baffling_factor: f64,
}

/// Residence times for one flow rate through a basin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactTime {
    pub volume: Volume,
    pub hydraulic_retention: Time,
    /// Time within which 10% of the water has passed.
    pub t10: Time,
}

impl ContactTime {
    pub fn hydraulic_retention_min(&self) -> f64 {
        in_minutes(self.hydraulic_retention)
    }

    pub fn t10_min(&self) -> f64 {
        in_minutes(self.t10)
    }
}

impl Basin {
    pub fn new(length_m: f64, width_m: f64, depth_m: f64, baffling_factor: f64) -> Self {
        Self {
            length: m(length_m),
            width: m(width_m),
            depth: m(depth_m),
            baffling_factor,
        }
    }

    pub fn from_system(system: &SystemParams) -> Self {
        Self::new(
            system.basin_length_m,
            system.basin_width_m,
            system.basin_depth_m,
            system.baffling_factor,
        )
    }

    pub fn volume(&self) -> Volume {
        m3(self.length.value * self.width.value * self.depth.value)
    }

    /// Retention and T10 for a flow in m³/h.
    ///
    /// A zero flow is replaced by 1 m³/h, and retention is capped at
    /// `MAX_REPORTED` minutes so a vanishing flow cannot overflow T10.
    pub fn contact_time(&self, flow_rate_m3_h: f64) -> ContactTime {
        let volume = self.volume();
        let flow = m3ph(positive_or(flow_rate_m3_h, 1.0));
        let retention_s = (volume.value / flow.value).min(MAX_REPORTED * 60.0);
        let hydraulic_retention = Time::new::<second>(retention_s);
        let t10 = hydraulic_retention * self.baffling_factor;
        ContactTime {
            volume,
            hydraulic_retention,
            t10,
        }
    }
}
