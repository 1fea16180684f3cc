//! Energy bookkeeping consistent with the forward-Euler update.

use rw_core::Real;

use crate::model::StepForces;

/// Running totals of work done by thrust and dissipated by drag.
///
/// Both use the left-rectangle rule on the velocity at the start of each
/// step, matching the state update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EnergyLedger {
    /// Work input by the crew (J)
    pub input: Real,
    /// Energy dissipated by drag (J)
    pub drag: Real,
}

impl EnergyLedger {
    pub fn accumulate(&mut self, forces: &StepForces, v_prev: Real, dt: Real) {
        let p_in = forces.thrust * v_prev;
        let p_drag = forces.drag * v_prev;
        self.input += p_in * dt;
        self.drag += p_drag * dt;
    }
}

/// Kinetic energy `½·m·v²` (J).
#[inline]
pub fn kinetic_energy(mass: Real, v: Real) -> Real {
    0.5 * mass * (v * v)
}

/// Net kinetic energy gain over energy input, zero when nothing was put in.
pub fn efficiency(delta_e_k: Real, energy_input: Real) -> Real {
    if energy_input > 0.0 {
        delta_e_k / energy_input
    } else {
        0.0
    }
}
