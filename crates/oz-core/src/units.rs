// oz-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, Time as UomTime, Volume as UomVolume, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Time = UomTime;
pub type Volume = UomVolume;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

#[inline]
pub fn m3ph(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_hour;
    VolumeRate::new::<cubic_meter_per_hour>(v)
}

#[inline]
pub fn minutes(v: f64) -> Time {
    use uom::si::time::minute;
    Time::new::<minute>(v)
}

/// Read a time back out in minutes, the unit CT tables are stated in.
#[inline]
pub fn in_minutes(t: Time) -> f64 {
    use uom::si::time::minute;
    t.get::<minute>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _l = m(15.0);
        let _v = m3(300.0);
        let _q = m3ph(1000.0);
        let t = minutes(18.0);
        assert!((in_minutes(t) - 18.0).abs() < 1e-12);
    }

    #[test]
    fn flow_is_stored_in_si() {
        let q = m3ph(3600.0);
        assert!((q.value - 1.0).abs() < 1e-12);
    }
}
