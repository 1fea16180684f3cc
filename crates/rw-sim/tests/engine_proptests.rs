//! Property tests over randomized parameter sets.

use proptest::prelude::*;
use rw_core::{Tolerances, nearly_equal};
use rw_sim::{SimulationParameters, sample_count, simulate};

fn params_strategy() -> impl Strategy<Value = SimulationParameters> {
    (
        0.01_f64..30.0,
        0.005_f64..0.5,
        100.0_f64..1500.0,
        0.0_f64..80.0,
        0.0_f64..5000.0,
        0.0_f64..3.0,
        0.5_f64..3.0,
        0.0_f64..6.0,
    )
        .prop_map(
            |(total_time, dt, mass, k_drag, f_drive, drive_time, cycle_time, initial_velocity)| {
                SimulationParameters {
                    total_time,
                    dt,
                    mass,
                    k_drag,
                    f_drive,
                    drive_time,
                    cycle_time,
                    initial_velocity,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sequences_share_expected_length(params in params_strategy()) {
        let result = simulate(&params).unwrap();
        let n = (params.total_time / params.dt).floor() as usize + 1;
        prop_assert_eq!(result.time.len(), n);
        prop_assert_eq!(result.velocity.len(), n);
        prop_assert_eq!(result.thrust.len(), n);
        prop_assert_eq!(sample_count(params.total_time, params.dt).unwrap(), n);
    }

    #[test]
    fn velocity_never_negative(params in params_strategy()) {
        let result = simulate(&params).unwrap();
        prop_assert!(result.velocity.iter().all(|&v| v >= 0.0));
        prop_assert!(result.energy_input >= 0.0);
        prop_assert!(result.energy_drag >= 0.0);
    }

    #[test]
    fn time_is_evenly_spaced(params in params_strategy()) {
        let result = simulate(&params).unwrap();
        let tol = Tolerances { abs: 1e-12, rel: 1e-12 };
        for (i, &t) in result.time.iter().enumerate() {
            prop_assert!(nearly_equal(t, i as f64 * params.dt, tol));
        }
        for w in result.time.windows(2) {
            prop_assert!(w[1] > w[0]);
        }
    }

    #[test]
    fn thrust_is_two_level(params in params_strategy()) {
        let result = simulate(&params).unwrap();
        prop_assert_eq!(result.thrust[0], 0.0);
        prop_assert!(result.thrust.iter().all(|&f| f == 0.0 || f == params.f_drive));
    }

    #[test]
    fn runs_are_deterministic(params in params_strategy()) {
        prop_assert_eq!(simulate(&params).unwrap(), simulate(&params).unwrap());
    }

    #[test]
    fn max_bounds_average(params in params_strategy()) {
        let result = simulate(&params).unwrap();
        prop_assert!(result.avg_velocity <= result.max_velocity + 1e-12);
        let observed = result.velocity.iter().copied().fold(0.0_f64, f64::max);
        prop_assert_eq!(result.max_velocity, observed);
    }

    #[test]
    fn lower_drag_never_lowers_peak_speed(
        params in params_strategy(),
        factor in 0.0_f64..1.0,
    ) {
        let base = SimulationParameters { dt: params.dt.min(0.05), ..params };
        let lighter = SimulationParameters { k_drag: base.k_drag * factor, ..base };
        let heavy = simulate(&base).unwrap();
        let light = simulate(&lighter).unwrap();
        prop_assert!(light.max_velocity >= heavy.max_velocity * (1.0 - 1e-9) - 1e-9);
    }
}
