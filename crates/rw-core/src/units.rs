// rw-core/src/units.rs

use uom::si::f64::{Energy as UomEnergy, Power as UomPower, Velocity as UomVelocity};

// Public canonical unit types (SI, f64)
pub type Energy = UomEnergy;
pub type Power = UomPower;
pub type Velocity = UomVelocity;

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn joule(v: f64) -> Energy {
    use uom::si::energy::joule;
    Energy::new::<joule>(v)
}

#[inline]
pub fn watt(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}
