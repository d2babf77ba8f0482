use approx::assert_relative_eq;
use ndarray::{Array1, array};
use rand::{Rng, SeedableRng, rngs::StdRng};

use nano_core::{
    Function, Problem,
    functions::{Beale, Himmelblau, Rosenbrock, Sphere},
};

use crate::{State, fixtures::Ball};

use super::{Config, LineSearch, LineSearchError, Strategy};

const STRATEGIES: [Strategy; 3] = [
    Strategy::Backtracking,
    Strategy::StrongWolfe,
    Strategy::CgDescent,
];

fn random_start(rng: &mut StdRng, size: usize, scale: f64) -> Array1<f64> {
    Array1::from_shape_fn(size, |_| rng.gen_range(-scale..scale))
}

// --- Exact slices ---

#[test]
fn finds_exact_minimizer_of_quadratic_slice() {
    let sphere = Sphere::new(3);
    let problem = Problem::new(&sphere);

    // φ(t) = |x|² (1 − 2t)² is minimized at t = 0.5.
    for strategy in STRATEGIES {
        let mut state = State::new(&problem, array![1.0, -2.0, 0.5]).expect("valid start");
        let mut search = LineSearch::new(strategy, Config::wolfe(0.1, 0.9).expect("valid"));

        search.search(&problem, &mut state, 1.0).expect("quadratic slice");

        assert_relative_eq!(state.t(), 0.5, epsilon = 1e-10);
        assert_relative_eq!(state.f(), 0.0, epsilon = 1e-12);
    }
}

#[test]
fn accepts_initial_step_when_good_enough() {
    let sphere = Sphere::new(2);
    let problem = Problem::new(&sphere);

    for strategy in STRATEGIES {
        let mut state = State::new(&problem, array![3.0, 4.0]).expect("valid start");
        let mut search = LineSearch::new(strategy, Config::default());

        search.search(&problem, &mut state, 0.45).expect("good initial step");
        assert_relative_eq!(state.t(), 0.45);
    }
}

// --- Acceptance conditions on accepted steps ---

#[test]
fn accepted_steps_satisfy_conditions() {
    let mut rng = StdRng::seed_from_u64(17);
    let rosenbrock = Rosenbrock::new(2);
    let functions: [(&dyn Function, f64); 3] =
        [(&rosenbrock, 2.0), (&Beale, 1.5), (&Himmelblau, 4.0)];

    for (function, scale) in functions {
        let problem = Problem::new(function);

        for _ in 0..50 {
            let x0 = random_start(&mut rng, function.size(), scale);
            let state0 = State::new(&problem, x0).expect("finite start");
            if state0.gradient_norm() < 1e-8 {
                continue;
            }

            for strategy in STRATEGIES {
                let config = Config::wolfe(1e-4, 0.9).expect("valid");
                let mut search = LineSearch::new(strategy, config);
                let mut state = state0.clone();

                let result = search.search(&problem, &mut state, 1.0);

                match strategy {
                    Strategy::Backtracking => {
                        result.expect("backtracking succeeds on smooth functions");
                        assert!(state.has_armijo(&state0, config.c1()));
                    }
                    Strategy::StrongWolfe => {
                        result.expect("strong Wolfe succeeds on smooth functions");
                        assert!(state.has_armijo(&state0, config.c1()));
                        assert!(state.has_strong_wolfe(&state0, config.c2()));
                    }
                    Strategy::CgDescent => {
                        if result.is_ok() {
                            let wolfe = state.has_armijo(&state0, config.c1())
                                && state.has_wolfe(&state0, config.c2());
                            let approx = state.has_approx_wolfe(&state0, config.c1(), config.c2());
                            assert!(wolfe || approx);
                        } else {
                            assert_eq!(state, state0);
                        }
                    }
                }

                assert!(state.f() <= state0.f() + 1e-6 * state0.f().abs().max(1.0));
            }
        }
    }
}

// --- Failures ---

#[test]
fn rejects_ascent_direction() {
    let sphere = Sphere::new(2);
    let problem = Problem::new(&sphere);
    let mut state = State::new(&problem, array![1.0, 1.0]).expect("valid start");
    state.set_direction(array![1.0, 1.0]);
    let before = state.clone();

    for strategy in STRATEGIES {
        let mut search = LineSearch::new(strategy, Config::default());
        assert_eq!(
            search.search(&problem, &mut state, 1.0),
            Err(LineSearchError::NotDescent)
        );
        assert_eq!(state, before);
    }
}

#[test]
fn fails_cleanly_at_domain_boundary() {
    // The objective keeps decreasing up to the edge of its domain, so no
    // step satisfies a curvature condition.
    let problem = Problem::new(&Ball);

    for strategy in [Strategy::StrongWolfe, Strategy::CgDescent] {
        let mut state = State::new(&problem, array![0.5, 0.0]).expect("inside ball");
        let before = state.clone();
        let mut search = LineSearch::new(strategy, Config::default());

        let error = search
            .search(&problem, &mut state, 1.0)
            .expect_err("no curvature step exists");

        assert_ne!(error, LineSearchError::NotDescent);
        assert_eq!(state, before);
        assert!(state.x().iter().all(|v| v.is_finite()));
    }
}

#[test]
fn backtracking_retreats_from_non_finite_region() {
    let problem = Problem::new(&Ball);
    let mut state = State::new(&problem, array![0.5, 0.0]).expect("inside ball");
    let mut search = LineSearch::new(Strategy::Backtracking, Config::default());

    search.search(&problem, &mut state, 4.0).expect("short steps are finite");

    assert!(state.x()[0] < 1.0);
    assert!(state.f() < -0.5);
}

#[test]
fn sanitizes_initial_step() {
    let sphere = Sphere::new(1);
    let problem = Problem::new(&sphere);

    for t0 in [f64::NAN, -1.0, 0.0, f64::INFINITY] {
        let mut state = State::new(&problem, array![1.0]).expect("valid start");
        let mut search = LineSearch::new(Strategy::StrongWolfe, Config::default());
        search.search(&problem, &mut state, t0).expect("recovers with a unit step");
        assert!(state.f() < 1.0);
    }
}

#[test]
fn parses_strategy_names() {
    assert_eq!("strong-wolfe".parse(), Ok(Strategy::StrongWolfe));
    assert_eq!("cg-descent".parse(), Ok(Strategy::CgDescent));
    assert_eq!(Strategy::Backtracking.to_string().parse(), Ok(Strategy::Backtracking));
    assert!("more-thuente".parse::<Strategy>().is_err());
}
