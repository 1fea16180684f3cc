//! Simulation parameter set.

use serde::{Deserialize, Serialize};

use rw_core::Real;

use crate::error::SimResult;
use crate::events::{require_non_negative, require_positive};
use crate::stroke::StrokeCycle;

/// Immutable inputs of one simulation run.
///
/// Fields are raw SI values so the engine arithmetic runs on plain `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Duration of the run (s)
    pub total_time: Real,
    /// Integration time step (s)
    pub dt: Real,
    /// Boat plus crew mass (kg)
    pub mass: Real,
    /// Quadratic drag coefficient (N·s²/m²)
    pub k_drag: Real,
    /// Propulsive force during the drive phase (N)
    #[serde(alias = "F_drive")]
    pub f_drive: Real,
    /// Portion of each stroke cycle with force applied (s)
    pub drive_time: Real,
    /// Period of one stroke cycle (s)
    pub cycle_time: Real,
    /// Velocity at t = 0 (m/s)
    #[serde(default)]
    pub initial_velocity: Real,
}

impl SimulationParameters {
    /// Eight-oared shell at roughly 30 strokes per minute, starting from rest.
    pub const BASELINE: Self = Self {
        total_time: 20.0,
        dt: 0.01,
        mass: 766.5,
        k_drag: 40.0,
        f_drive: 3000.0,
        drive_time: 0.9,
        cycle_time: 2.0,
        initial_velocity: 0.0,
    };

    /// Check every field against its physical constraint.
    ///
    /// `drive_time` may exceed `cycle_time`; thrust is then always on.
    pub fn validate(&self) -> SimResult<()> {
        require_positive(self.dt, "dt")?;
        require_positive(self.total_time, "total_time")?;
        require_positive(self.mass, "mass")?;
        require_positive(self.cycle_time, "cycle_time")?;
        require_non_negative(self.drive_time, "drive_time")?;
        require_non_negative(self.k_drag, "k_drag")?;
        require_non_negative(self.f_drive, "f_drive")?;
        require_non_negative(self.initial_velocity, "initial_velocity")?;
        Ok(())
    }

    pub fn stroke(&self) -> StrokeCycle {
        StrokeCycle::new(self.drive_time, self.cycle_time)
    }

    /// Stroke rate in strokes per minute.
    pub fn stroke_rate_spm(&self) -> Real {
        self.stroke().stroke_rate_spm()
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::BASELINE
    }
}
