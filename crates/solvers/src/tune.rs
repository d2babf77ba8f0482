//! Grid search over solver parameters.
//!
//! [`fixed`] evaluates every candidate in order; [`fixed_parallel`] spreads
//! the candidates over a [`ThreadPool`] and waits for all of them. Both keep
//! the candidate with the smallest score. NaN scores rank last and ties keep
//! the earliest candidate, so the two functions always agree.

use std::sync::Arc;

use nano_parallel::{TaskError, ThreadPool};

/// The winning candidate of a grid search.
#[derive(Debug, Clone, PartialEq)]
pub struct Best<T, R> {
    /// The candidate parameter.
    pub value: T,

    /// Its score; smaller is better.
    pub score: f64,

    /// Whatever the evaluation produced alongside the score.
    pub result: R,
}

/// Evaluates `op` on each value and returns the one with the smallest score.
///
/// Returns `None` if `values` is empty.
pub fn fixed<T, R, Op>(values: impl IntoIterator<Item = T>, mut op: Op) -> Option<Best<T, R>>
where
    Op: FnMut(&T) -> (f64, R),
{
    values
        .into_iter()
        .map(|value| {
            let (score, result) = op(&value);
            Best {
                value,
                score,
                result,
            }
        })
        .reduce(better)
}

/// Evaluates `op` on each value using the pool's workers.
///
/// Each worker handles a contiguous slice of `values`. Blocks until every
/// evaluation has finished.
///
/// # Errors
///
/// Returns a [`TaskError`] if any evaluation panicked.
pub fn fixed_parallel<T, R, Op>(
    pool: &ThreadPool,
    values: Vec<T>,
    op: Op,
) -> Result<Option<Best<T, R>>, TaskError>
where
    T: Clone + Send + Sync + 'static,
    R: Send + 'static,
    Op: Fn(&T) -> (f64, R) + Send + Sync + 'static,
{
    let values = Arc::new(values);
    let shared = Arc::clone(&values);

    let partitions = pool.map_ranges(values.len(), move |range| {
        range
            .map(|index| {
                let (score, result) = op(&shared[index]);
                (index, score, result)
            })
            .collect::<Vec<_>>()
    })?;

    Ok(partitions
        .into_iter()
        .flatten()
        .map(|(index, score, result)| Best {
            value: values[index].clone(),
            score,
            result,
        })
        .reduce(better))
}

fn better<T, R>(best: Best<T, R>, other: Best<T, R>) -> Best<T, R> {
    if rank(other.score) < rank(best.score) {
        other
    } else {
        best
    }
}

fn rank(score: f64) -> f64 {
    if score.is_nan() { f64::INFINITY } else { score }
}
