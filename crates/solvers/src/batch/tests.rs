use approx::assert_relative_eq;
use ndarray::{Array1, array};

use nano_core::functions::{Booth, Matyas, Rosenbrock, Sphere, Trid};

use crate::{
    State, StateError,
    fixtures::{Ball, LongGradient},
    linesearch::{self, Strategy},
};

use super::{
    Action, Beta, Config, ConfigError, Direction, Error, Event, Status, minimize,
    minimize_unobserved,
};

const BETAS: [Beta; 9] = [
    Beta::HestenesStiefel,
    Beta::FletcherReeves,
    Beta::PolakRibiere,
    Beta::ConjugateDescent,
    Beta::LiuStorey,
    Beta::DaiYuan,
    Beta::HagerZhang,
    Beta::DaiYuanHestenesStiefel,
    Beta::DaiYuanConjugateDescent,
];

fn distance(x: &Array1<f64>, target: &Array1<f64>) -> f64 {
    (x - target).iter().fold(0.0, |max, v| max.max(v.abs()))
}

// --- Convergence ---

#[test]
fn conjugate_gradient_solves_rosenbrock() {
    let config = Config::new(Direction::Conjugate(Beta::PolakRibiere)).with_max_iters(10_000);

    let solution =
        minimize_unobserved(&Rosenbrock::new(2), array![-1.2, 1.0], &config).expect("valid run");

    assert!(solution.state.x().iter().all(|v| v.is_finite()));
    match solution.status {
        Status::Converged => {
            assert!(distance(solution.state.x(), &array![1.0, 1.0]) < 1e-2);
        }
        status => assert_eq!(status, Status::MaxIters),
    }
}

#[test]
fn lbfgs_solves_trid() {
    let n = 6;
    let config = Config::new(Direction::Lbfgs { history: 6 });

    let solution = minimize_unobserved(&Trid::new(n), Array1::zeros(n), &config).expect("valid run");

    assert_eq!(solution.status, Status::Converged);
    let expected = Array1::from_shape_fn(n, |i| ((i + 1) * (n - i)) as f64);
    assert!(distance(solution.state.x(), &expected) < 1e-3);
    assert_relative_eq!(solution.state.f(), -50.0, epsilon = 1e-6);
}

#[test]
fn backtracking_gradient_descent_solves_booth() {
    let config = Config::new(Direction::Gradient).with_line_search(Strategy::Backtracking);

    let solution = minimize_unobserved(&Booth, array![-4.0, 8.0], &config).expect("valid run");

    assert_eq!(solution.status, Status::Converged);
    assert!(distance(solution.state.x(), &array![1.0, 3.0]) < 1e-4);
}

#[test]
fn cg_descent_line_search_solves_rosenbrock() {
    let wolfe = linesearch::Config::wolfe(0.1, 0.9).expect("valid constants");
    let config = Config::new(Direction::Conjugate(Beta::HagerZhang))
        .with_line_search(Strategy::CgDescent)
        .with_wolfe(wolfe)
        .with_max_iters(10_000);

    let solution =
        minimize_unobserved(&Rosenbrock::new(2), array![-1.2, 1.0], &config).expect("valid run");

    assert!(solution.state.x().iter().all(|v| v.is_finite()));
    match solution.status {
        Status::Converged => {
            assert!(distance(solution.state.x(), &array![1.0, 1.0]) < 1e-2);
        }
        status => assert_eq!(status, Status::MaxIters),
    }
}

#[test]
fn starting_at_minimum_converges_immediately() {
    let config = Config::default();
    let solution = minimize_unobserved(&Sphere::new(3), Array1::zeros(3), &config).expect("valid run");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.fcalls, 1);
    assert_eq!(solution.gcalls, 1);
}

// --- Invariants ---

#[test]
fn every_direction_descends_and_every_step_decreases() {
    for beta in BETAS {
        let config = Config::new(Direction::Conjugate(beta)).with_max_iters(200);
        let (c1, c2) = (config.wolfe().c1(), config.wolfe().c2());

        let mut before: Option<State> = None;
        let mut descents = 0;

        let observer = |event: &Event<'_>| {
            match event {
                Event::Descent { state, .. } => {
                    assert!(state.dg() < 0.0, "{beta}: direction is not downhill");
                    before = Some((*state).clone());
                    descents += 1;
                }
                Event::Accepted { state, .. } => {
                    let state0 = before.as_ref().expect("descent precedes acceptance");
                    assert!(state.has_armijo(state0, c1), "{beta}: Armijo violated");
                    assert!(
                        state.has_strong_wolfe(state0, c2),
                        "{beta}: strong Wolfe violated"
                    );
                    assert!(state.f() <= state0.f());
                }
                Event::LineSearchFailed { .. } => {}
            }
            None
        };

        let solution = minimize(&Rosenbrock::new(2), array![-1.2, 1.0], &config, observer)
            .expect("valid run");

        assert!(descents > 0);
        assert!(solution.state.f().is_finite());
        assert!(solution.state.f() < 24.2);
    }
}

#[test]
fn counts_evaluations() {
    let config = Config::new(Direction::Gradient);
    let solution = minimize_unobserved(&Matyas, array![1.0, -3.0], &config).expect("valid run");

    assert!(solution.gcalls >= solution.iters + 1);
    assert!(solution.fcalls >= solution.gcalls);
}

// --- Failures ---

#[test]
fn non_finite_region_fails_line_search() {
    let config = Config::new(Direction::Gradient).with_line_search(Strategy::StrongWolfe);

    let mut failures = 0;
    let observer = |event: &Event<'_>| {
        if let Event::LineSearchFailed { .. } = event {
            failures += 1;
        }
        None
    };

    let solution = minimize(&Ball, array![0.5, 0.0], &config, observer).expect("valid start");

    assert_eq!(solution.status, Status::LineSearchFailed);
    assert_eq!(failures, 1);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.state.x(), &array![0.5, 0.0]);
    assert_relative_eq!(solution.state.f(), -0.5);
}

#[test]
fn rejects_invalid_inputs() {
    let config = Config::default();

    assert_eq!(
        minimize_unobserved(&Sphere::new(2), array![1.0, 2.0, 3.0], &config).map(|s| s.status),
        Err(Error::State(StateError::DimensionMismatch {
            expected: 2,
            found: 3
        }))
    );

    assert_eq!(
        minimize_unobserved(&Ball, array![2.0, 0.0], &config).map(|s| s.status),
        Err(Error::State(StateError::NonFinite))
    );

    assert_eq!(
        minimize_unobserved(&LongGradient, array![1.0, 1.0], &config).map(|s| s.status),
        Err(Error::State(StateError::DimensionMismatch {
            expected: 2,
            found: 3
        }))
    );

    let config = config.with_epsilon(-1.0);
    assert_eq!(
        minimize_unobserved(&Sphere::new(2), array![1.0, 2.0], &config).map(|s| s.status),
        Err(Error::Config(ConfigError::Epsilon))
    );
}

// --- Observer ---

#[test]
fn observer_can_stop_early() {
    let config = Config::new(Direction::Gradient);

    let observer = |event: &Event<'_>| match event {
        Event::Accepted { iter: 2, .. } => Some(Action::StopEarly),
        _ => None,
    };

    let solution = minimize(&Rosenbrock::new(2), array![-1.2, 1.0], &config, observer)
        .expect("valid run");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
}

#[test]
fn observer_sees_restarts() {
    // A tiny threshold restarts whenever successive gradients are not
    // exactly orthogonal.
    let config = Config::new(Direction::Conjugate(Beta::FletcherReeves))
        .with_orthotest(1e-6)
        .with_max_iters(50);

    let mut restarts = 0;
    let observer = |event: &Event<'_>| {
        if let Event::Descent {
            restarted: true, ..
        } = event
        {
            restarts += 1;
        }
        None
    };

    let _ = minimize(&Rosenbrock::new(2), array![-1.2, 1.0], &config, observer)
        .expect("valid run");

    assert!(restarts > 0);
}
