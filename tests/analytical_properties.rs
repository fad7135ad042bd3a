//! Cross-model properties of the analytical formulas.

use proptest::prelude::*;
use queuesim::analytical::{gg1, ggc, mg1, mgc, mm1, mmc};
use queuesim::prelude::*;

fn little(result: &AnalyticalResult, lambda: f64, mu: f64) {
    let s = result.steady_state.expect("stable");
    let tol = 1e-9 * s.avg_number_in_system.max(1.0);
    assert!((s.avg_wait_in_queue - s.avg_number_in_queue / lambda).abs() < tol);
    assert!((s.avg_wait_in_system - (s.avg_wait_in_queue + 1.0 / mu)).abs() < tol);
    assert!((s.avg_number_in_system - lambda * s.avg_wait_in_system).abs() < tol);
}

#[test]
fn test_little_relations_hold_for_every_model() {
    let uniform = Distribution::Uniform { min: 1.0, max: 3.0 };
    let normal = Distribution::Normal {
        mean: 1.0,
        std_dev: 0.2,
    };

    little(&mm1(1.0, 2.0).unwrap(), 1.0, 2.0);
    little(&mmc(2.0, 3.0, 4).unwrap(), 2.0, 3.0);
    little(&mg1(0.4, &uniform).unwrap(), 0.4, 0.5);
    little(&mgc(0.8, &uniform, 2).unwrap(), 0.8, 0.5);
    little(&gg1(&uniform, &normal).unwrap(), 0.5, 1.0);
    little(&ggc(&normal, &uniform, 3).unwrap(), 1.0, 0.5);
}

#[test]
fn test_reference_scenarios_rounded() {
    let r = mm1(1.0, 2.0).unwrap();
    let s = r.steady_state.unwrap();
    let round2 = |v: f64| (v * 100.0).round() / 100.0;
    assert_eq!(round2(r.utilization), 0.5);
    assert_eq!(round2(s.avg_number_in_queue), 0.5);
    assert_eq!(round2(s.avg_wait_in_queue), 0.5);
    assert_eq!(round2(s.avg_wait_in_system), 1.0);
    assert_eq!(round2(s.avg_number_in_system), 1.0);

    let r = mmc(2.0, 3.0, 4).unwrap();
    assert_eq!((r.utilization * 1000.0).round() / 1000.0, 0.167);
    let lq = r.avg_number_in_queue().unwrap();
    assert!(lq > 0.0 && lq.is_finite());

    let r = mm1(3.0, 2.0).unwrap();
    assert_eq!(r.utilization, 1.5);
    assert!(r.steady_state.is_none());
}

#[test]
fn test_every_model_reports_divergence_without_error() {
    let slow = Distribution::Uniform { min: 4.0, max: 6.0 };
    let fast = Distribution::Uniform { min: 0.5, max: 1.5 };
    let results = [
        mm1(5.0, 1.0).unwrap(),
        mmc(5.0, 1.0, 2).unwrap(),
        mg1(1.0, &slow).unwrap(),
        mgc(1.0, &slow, 2).unwrap(),
        gg1(&fast, &slow).unwrap(),
        ggc(&fast, &slow, 2).unwrap(),
    ];
    for r in results {
        assert!(r.utilization >= 1.0);
        assert!(!r.is_stable());
    }
}

#[test]
fn test_dispatch_covers_gg_models() {
    let model = QueueModel::Gg1 {
        arrival: Distribution::Uniform { min: 1.0, max: 3.0 },
        service: Distribution::Normal {
            mean: 1.5,
            std_dev: 0.3,
        },
    };
    let direct = gg1(
        &Distribution::Uniform { min: 1.0, max: 3.0 },
        &Distribution::Normal {
            mean: 1.5,
            std_dev: 0.3,
        },
    )
    .unwrap();
    assert_eq!(run_analytical(&model).unwrap(), direct);
}

#[test]
fn test_simulation_tracks_analytical_utilization() {
    let model = QueueModel::Mgc {
        arrival_rate: 3.0,
        service: Distribution::Uniform { min: 0.5, max: 1.5 },
        servers: 4,
    };
    let analytical = run_analytical(&model).unwrap();
    let simulated = run_simulation(&model, &mut SimRng::new(42)).unwrap();
    assert!((analytical.utilization - simulated.summary.utilization).abs() < 1e-12);
}

proptest! {
    #[test]
    fn prop_mm1_system_minus_queue_is_rho(mu in 0.1f64..50.0, load in 0.01f64..0.99) {
        let lambda = load * mu;
        let r = mm1(lambda, mu).unwrap();
        let s = r.steady_state.unwrap();
        prop_assert!((s.avg_number_in_system - s.avg_number_in_queue - r.utilization).abs() < 1e-6);
    }

    #[test]
    fn prop_mmc_one_server_equals_mm1(mu in 0.1f64..50.0, load in 0.01f64..0.99) {
        let lambda = load * mu;
        let a = mm1(lambda, mu).unwrap().steady_state.unwrap();
        let b = mmc(lambda, mu, 1).unwrap().steady_state.unwrap();
        prop_assert!((a.avg_number_in_queue - b.avg_number_in_queue).abs() < 1e-9 * a.avg_number_in_queue.max(1.0));
    }

    #[test]
    fn prop_more_servers_never_lengthen_queue(mu in 0.5f64..5.0, lambda in 0.1f64..2.0, c in 1u32..30) {
        prop_assume!(lambda / (f64::from(c) * mu) < 0.99);
        let fewer = mmc(lambda, mu, c).unwrap().steady_state.unwrap();
        let more = mmc(lambda, mu, c + 1).unwrap().steady_state.unwrap();
        prop_assert!(more.avg_number_in_queue <= fewer.avg_number_in_queue + 1e-12);
    }

    #[test]
    fn prop_invalid_rates_are_domain_errors(bad in -100.0f64..=0.0) {
        prop_assert!(mm1(bad, 1.0).unwrap_err().is_domain_error());
        prop_assert!(mmc(1.0, bad, 2).unwrap_err().is_domain_error());
        let exp_service = Distribution::Exponential { rate: 1.0 };
        prop_assert!(mg1(bad, &exp_service).unwrap_err().is_domain_error());
    }
}
