//! Simulation runner and result recording.

use serde::{Deserialize, Serialize};
use tracing::debug;

use rw_core::units::{Energy, Power, Velocity, joule, mps, watt};
use rw_core::{Real, max_value, mean};

use crate::energy::{EnergyLedger, efficiency, kinetic_energy};
use crate::error::{SimError, SimResult};
use crate::events::{clamp_non_negative, require_non_negative, require_positive};
use crate::integrator::{ForwardEuler, Integrator};
use crate::model::{BoatModel, PropulsionModel};
use crate::params::SimulationParameters;

/// Upper bound on the number of samples a single run may allocate.
pub const MAX_SAMPLES: usize = 100_000_000;

/// Full record of one run, owned by the caller.
///
/// `time`, `velocity` and `thrust` are index-aligned. `thrust[0]` is zero:
/// the first sample is the initial condition only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Sample instants, `time[i] = i * dt` (s)
    pub time: Vec<Real>,
    /// Boat velocity, never negative (m/s)
    pub velocity: Vec<Real>,
    /// Applied propulsive force (N)
    pub thrust: Vec<Real>,
    /// Work done by the crew (J)
    pub energy_input: Real,
    /// Energy dissipated by drag (J)
    pub energy_drag: Real,
    /// Kinetic energy at the last sample minus at the first (J)
    pub delta_e_k: Real,
    /// `delta_e_k / energy_input`, zero when no energy was put in
    pub efficiency: Real,
    /// Mean velocity over samples `N/2..N` (m/s)
    pub avg_velocity: Real,
    /// Maximum velocity over the whole run (m/s)
    pub max_velocity: Real,
}

/// Energy totals of a run as SI quantities.
#[derive(Clone, Copy, Debug)]
pub struct EnergySummary {
    pub input: Energy,
    pub drag: Energy,
    pub delta_kinetic: Energy,
}

impl SimulationResult {
    /// Number of samples N.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Always false for a result produced by the engine.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Timestamp of the last sample, `(N-1)·dt` (s).
    pub fn final_time(&self) -> Real {
        self.time.last().copied().unwrap_or(0.0)
    }

    pub fn efficiency_pct(&self) -> Real {
        self.efficiency * 100.0
    }

    /// Input minus drag losses minus kinetic energy gained (J).
    ///
    /// Zero for an exact integration; the forward-Euler quadrature leaves a
    /// residual that shrinks with `dt`.
    pub fn energy_balance(&self) -> Real {
        self.energy_input - self.energy_drag - self.delta_e_k
    }

    pub fn energies(&self) -> EnergySummary {
        EnergySummary {
            input: joule(self.energy_input),
            drag: joule(self.energy_drag),
            delta_kinetic: joule(self.delta_e_k),
        }
    }

    pub fn peak_velocity(&self) -> Velocity {
        mps(self.max_velocity)
    }

    pub fn mean_velocity(&self) -> Velocity {
        mps(self.avg_velocity)
    }

    /// Crew work divided by elapsed time, zero for a single-sample run.
    pub fn average_input_power(&self) -> Power {
        let elapsed = self.final_time();
        if elapsed > 0.0 {
            watt(self.energy_input / elapsed)
        } else {
            watt(0.0)
        }
    }

    /// `(t, v, thrust)` triples in time order.
    pub fn samples(&self) -> impl Iterator<Item = (Real, Real, Real)> + '_ {
        self.time
            .iter()
            .zip(&self.velocity)
            .zip(&self.thrust)
            .map(|((&t, &v), &f)| (t, v, f))
    }
}

/// Number of samples `floor(total_time / dt) + 1` for a run.
pub fn sample_count(total_time: Real, dt: Real) -> SimResult<usize> {
    require_positive(total_time, "total_time")?;
    require_positive(dt, "dt")?;
    let samples = (total_time / dt).floor() + 1.0;
    if !samples.is_finite() || samples > MAX_SAMPLES as Real {
        return Err(SimError::TooManySamples {
            samples,
            limit: MAX_SAMPLES,
        });
    }
    Ok(samples as usize)
}

/// Run the rowing boat model for `params`.
///
/// Parameters are validated before anything is allocated.
pub fn simulate(params: &SimulationParameters) -> SimResult<SimulationResult> {
    params.validate()?;
    let samples = sample_count(params.total_time, params.dt)?;
    let model = BoatModel::new(params);
    integrate(
        &model,
        &ForwardEuler,
        params.initial_velocity,
        params.dt,
        samples,
    )
}

/// Integrate any propulsion model over `samples` evenly spaced instants.
///
/// Each step reads only the previous sample. Velocities below zero are
/// clamped to zero before being committed.
pub fn integrate<M: PropulsionModel, I: Integrator>(
    model: &M,
    integrator: &I,
    initial_velocity: Real,
    dt: Real,
    samples: usize,
) -> SimResult<SimulationResult> {
    require_positive(dt, "dt")?;
    require_positive(model.mass(), "mass")?;
    require_non_negative(initial_velocity, "initial_velocity")?;
    if samples == 0 {
        return Err(SimError::InvalidParameter {
            name: "samples",
            value: 0.0,
            reason: "must be at least one",
        });
    }
    if samples > MAX_SAMPLES {
        return Err(SimError::TooManySamples {
            samples: samples as Real,
            limit: MAX_SAMPLES,
        });
    }

    let time: Vec<Real> = (0..samples).map(|i| i as Real * dt).collect();
    let mut velocity = vec![0.0; samples];
    let mut thrust = vec![0.0; samples];
    let mut ledger = EnergyLedger::default();

    velocity[0] = initial_velocity;
    for i in 1..samples {
        let v_prev = velocity[i - 1];
        let step = integrator.step(model, time[i], v_prev, dt);
        thrust[i] = step.forces.thrust;
        velocity[i] = clamp_non_negative(step.velocity);
        ledger.accumulate(&step.forces, v_prev, dt);
    }

    let mass = model.mass();
    let e_initial = kinetic_energy(mass, velocity[0]);
    let e_final = kinetic_energy(mass, velocity[samples - 1]);
    let delta_e_k = e_final - e_initial;
    let efficiency = efficiency(delta_e_k, ledger.input);

    let half_idx = samples / 2;
    let avg_velocity = mean(&velocity[half_idx..]).unwrap_or(0.0);
    let max_velocity = max_value(&velocity).unwrap_or(0.0);

    debug!(
        samples,
        energy_input = ledger.input,
        energy_drag = ledger.drag,
        delta_e_k,
        avg_velocity,
        max_velocity,
        "simulation complete"
    );

    Ok(SimulationResult {
        time,
        velocity,
        thrust,
        energy_input: ledger.input,
        energy_drag: ledger.drag,
        delta_e_k,
        efficiency,
        avg_velocity,
        max_velocity,
    })
}
