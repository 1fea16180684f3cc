//! Two-level stroke cycle: drive phase with constant force, then recovery.

use rw_core::Real;

/// Timing of one stroke cycle.
///
/// Force is applied while `phase(t) < drive_time`. A `drive_time` at or
/// beyond `cycle_time` keeps the force on for the whole cycle; zero never
/// applies it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeCycle {
    /// Drive duration within each cycle (seconds)
    pub drive_time: Real,
    /// Cycle period (seconds), must be positive
    pub cycle_time: Real,
}

impl StrokeCycle {
    pub fn new(drive_time: Real, cycle_time: Real) -> Self {
        Self {
            drive_time,
            cycle_time,
        }
    }

    /// Position of `t` within the current cycle, in `[0, cycle_time)`.
    #[inline]
    pub fn phase(&self, t: Real) -> Real {
        t % self.cycle_time
    }

    #[inline]
    pub fn in_drive(&self, t: Real) -> bool {
        self.phase(t) < self.drive_time
    }

    /// Propulsive force at time `t` for a drive-phase force of `f_drive`.
    #[inline]
    pub fn thrust(&self, t: Real, f_drive: Real) -> Real {
        if self.in_drive(t) { f_drive } else { 0.0 }
    }

    pub fn stroke_rate_spm(&self) -> Real {
        60.0 / self.cycle_time
    }

}
