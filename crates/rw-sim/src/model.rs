//! PropulsionModel trait and the rowing boat model.

use rw_core::Real;

use crate::params::SimulationParameters;
use crate::stroke::StrokeCycle;

/// Forces acting on the boat during one step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepForces {
    /// Propulsive force (N)
    pub thrust: Real,
    /// Drag magnitude (N), always non-negative
    pub drag: Real,
}

impl StepForces {
    /// Net force (N), positive forward.
    #[inline]
    pub fn net(&self) -> Real {
        self.thrust - self.drag
    }

    #[inline]
    pub fn acceleration(&self, mass: Real) -> Real {
        self.net() / mass
    }
}

/// Trait for one-dimensional hull models driven by an applied force.
///
/// Implementations must be pure: the same `(t, v)` always yields the same
/// forces.
pub trait PropulsionModel {
    /// Moving mass (kg), must be positive.
    fn mass(&self) -> Real;

    /// Forces at time `t` for hull velocity `v`.
    fn forces(&self, t: Real, v: Real) -> StepForces;
}

/// Rowing shell: two-level stroke thrust against quadratic drag.
#[derive(Clone, Debug)]
pub struct BoatModel {
    mass: Real,
    k_drag: Real,
    f_drive: Real,
    stroke: StrokeCycle,
}

impl BoatModel {
    pub fn new(params: &SimulationParameters) -> Self {
        Self {
            mass: params.mass,
            k_drag: params.k_drag,
            f_drive: params.f_drive,
            stroke: params.stroke(),
        }
    }

    /// Quadratic drag magnitude for velocity `v`.
    #[inline]
    pub fn drag(&self, v: Real) -> Real {
        self.k_drag * (v * v)
    }
}

impl PropulsionModel for BoatModel {
    fn mass(&self) -> Real {
        self.mass
    }

    fn forces(&self, t: Real, v: Real) -> StepForces {
        StepForces {
            thrust: self.stroke.thrust(t, self.f_drive),
            drag: self.drag(v),
        }
    }
}
