use nano_core::Observer;

use crate::traits::{CanStopEarly, HasObjective};

/// Stops a run once the objective stops improving.
///
/// An objective counts as an improvement when it is below the best seen so
/// far by more than `tolerance · max(1, |best|)`. After `patience`
/// consecutive reported iterates without improvement the observer requests
/// an early stop. Events without an objective are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Stall {
    patience: usize,
    tolerance: f64,
    best: f64,
    stalled: usize,
}

impl Stall {
    #[must_use]
    pub fn new(patience: usize, tolerance: f64) -> Self {
        Self {
            patience,
            tolerance,
            best: f64::INFINITY,
            stalled: 0,
        }
    }

    /// The smallest objective observed so far.
    #[must_use]
    pub fn best(&self) -> f64 {
        self.best
    }

    /// Consecutive iterates without improvement.
    #[must_use]
    pub fn stalled(&self) -> usize {
        self.stalled
    }
}

impl<E, A> Observer<E, A> for Stall
where
    E: HasObjective,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let f = event.objective();
        if f.is_nan() {
            return None;
        }

        let threshold = if self.best.is_finite() {
            self.best - self.tolerance * self.best.abs().max(1.0)
        } else {
            f64::INFINITY
        };

        if f < threshold {
            self.best = f;
            self.stalled = 0;
            return None;
        }

        self.best = self.best.min(f);
        self.stalled += 1;
        (self.stalled >= self.patience).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    use nano_core::functions::Matyas;
    use nano_solvers::accelerated::{self, Action, Config, Event, Restart, Status};

    struct Objective(f64);

    impl HasObjective for Objective {
        fn objective(&self) -> f64 {
            self.0
        }
    }

    #[derive(Debug, PartialEq)]
    struct Stop;

    impl CanStopEarly for Stop {
        fn stop_early() -> Self {
            Stop
        }
    }

    #[test]
    fn stops_after_patience_runs_out() {
        let mut stall = Stall::new(2, 1e-3);

        assert_eq!(stall.observe(&Objective(10.0)), None::<Stop>);
        assert_eq!(stall.observe(&Objective(5.0)), None::<Stop>);
        assert_eq!(stall.observe(&Objective(4.999)), None::<Stop>);
        assert_eq!(stall.stalled(), 1);
        assert_eq!(stall.observe(&Objective(6.0)), Some(Stop));
    }

    #[test]
    fn improvement_resets_the_count() {
        let mut stall = Stall::new(2, 0.0);

        assert_eq!(stall.observe(&Objective(1.0)), None::<Stop>);
        assert_eq!(stall.observe(&Objective(1.0)), None::<Stop>);
        assert_eq!(stall.observe(&Objective(0.5)), None::<Stop>);
        assert_eq!(stall.stalled(), 0);
        assert_eq!(stall.best(), 0.5);
    }

    #[test]
    fn ignores_events_without_objective() {
        let mut stall = Stall::new(1, 0.0);

        assert_eq!(stall.observe(&Objective(1.0)), None::<Stop>);
        assert_eq!(stall.observe(&Objective(f64::NAN)), None::<Stop>);
        assert_eq!(stall.stalled(), 0);
    }

    #[test]
    fn ends_a_slow_run() {
        // A tiny step crawls; a loose tolerance flags it as stalled.
        let config = Config::new(1e-6, 0.0)
            .expect("valid parameters")
            .with_restart(Restart::None);
        let mut stall = Stall::new(5, 1e-3);

        let solution = accelerated::minimize(
            &Matyas,
            array![5.0, 5.0],
            &config,
            |event: &Event<'_>| -> Option<Action> { stall.observe(event) },
        )
        .expect("valid run");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.iters < config.max_iters());
    }
}
