//! The integration loop accepts any `PropulsionModel`.

use rw_sim::{ForwardEuler, PropulsionModel, SimError, StepForces, integrate};

/// Constant thrust with linear drag, counting nothing but its inputs.
struct LinearDragHull {
    mass: f64,
    thrust: f64,
    c: f64,
}

impl PropulsionModel for LinearDragHull {
    fn mass(&self) -> f64 {
        self.mass
    }

    fn forces(&self, _t: f64, v: f64) -> StepForces {
        StepForces {
            thrust: self.thrust,
            drag: self.c * v,
        }
    }
}

#[test]
fn linear_drag_hull_approaches_terminal_speed() {
    let hull = LinearDragHull {
        mass: 100.0,
        thrust: 50.0,
        c: 10.0,
    };
    let result = integrate(&hull, &ForwardEuler, 0.0, 0.01, 5001).expect("valid run");

    assert_eq!(result.len(), 5001);
    // Terminal speed thrust / c = 5 m/s, time constant m / c = 10 s, run 50 s.
    assert!((result.velocity[5000] - 5.0).abs() < 0.05);
    assert!(result.max_velocity < 5.0);
    assert!(result.efficiency > 0.0);
}

#[test]
fn integrate_rejects_massless_model() {
    let hull = LinearDragHull {
        mass: 0.0,
        thrust: 1.0,
        c: 1.0,
    };
    assert!(matches!(
        integrate(&hull, &ForwardEuler, 0.0, 0.1, 10),
        Err(SimError::InvalidParameter { name: "mass", .. })
    ));
}
