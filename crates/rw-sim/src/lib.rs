//! Rowing boat simulation engine.
//!
//! Provides:
//! - Two-level stroke cycle (drive / recovery) thrust schedule
//! - Quadratic-drag boat model behind the `PropulsionModel` trait
//! - Fixed-step forward Euler integrator
//! - Energy bookkeeping and summary metrics per run

pub mod energy;
pub mod error;
pub mod integrator;
pub mod model;
pub mod params;
pub mod sim;
pub mod stroke;

// Internal modules
mod events;

// Re-exports for public API
pub use energy::EnergyLedger;
pub use error::{SimError, SimResult};
pub use integrator::{ForwardEuler, Integrator, Step};
pub use model::{BoatModel, PropulsionModel, StepForces};
pub use params::SimulationParameters;
pub use sim::{EnergySummary, MAX_SAMPLES, SimulationResult, integrate, sample_count, simulate};
pub use stroke::StrokeCycle;
