//! Fixed-step time integrators.

use rw_core::Real;

use crate::model::{PropulsionModel, StepForces};

/// Outcome of advancing the velocity by one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    /// Velocity at the end of the step, before any clamping (m/s)
    pub velocity: Real,
    /// Forces the update was computed from
    pub forces: StepForces,
}

/// Trait for time integrators.
pub trait Integrator {
    /// Advance velocity `v_prev` to the sample at time `t`, using only
    /// state already committed.
    fn step<M: PropulsionModel>(&self, model: &M, t: Real, v_prev: Real, dt: Real) -> Step;
}

/// Forward Euler (explicit, 1st order).
///
/// Thrust is evaluated at the new sample time, drag at the previous
/// velocity. One `forces()` call per step.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step<M: PropulsionModel>(&self, model: &M, t: Real, v_prev: Real, dt: Real) -> Step {
        let forces = model.forces(t, v_prev);
        let a = forces.acceleration(model.mass());
        Step {
            velocity: v_prev + a * dt,
            forces,
        }
    }
}
