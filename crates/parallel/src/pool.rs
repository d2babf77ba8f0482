use std::{
    collections::VecDeque,
    mem,
    num::NonZeroUsize,
    ops::Range,
    panic::{self, AssertUnwindSafe},
    sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError, mpsc},
    thread::{self, JoinHandle},
};

use crate::{Section, TaskError, split};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// A fixed set of worker threads consuming a shared FIFO queue.
///
/// Workers block while the queue is empty. Dropping the pool wakes every
/// worker, discards tasks that have not started (their [`Task`] handles
/// report [`TaskError::Cancelled`]), and joins the threads after they finish
/// whatever they are currently running.
pub struct ThreadPool {
    queue: Arc<Queue>,
    workers: Vec<JoinHandle<()>>,
}

/// Handle to the result of a task submitted with [`ThreadPool::enqueue`].
#[derive(Debug)]
pub struct Task<R> {
    receiver: mpsc::Receiver<Result<R, TaskError>>,
}

struct Queue {
    inner: Mutex<Inner>,
    ready: Condvar,
}

struct Inner {
    jobs: VecDeque<Job>,
    stop: bool,
}

impl ThreadPool {
    /// Starts a pool with `workers` threads.
    ///
    /// A count of zero uses the available hardware parallelism.
    #[must_use]
    pub fn new(workers: usize) -> Self {
        let count = if workers == 0 {
            thread::available_parallelism().map_or(1, NonZeroUsize::get)
        } else {
            workers
        };

        let queue = Arc::new(Queue {
            inner: Mutex::new(Inner {
                jobs: VecDeque::new(),
                stop: false,
            }),
            ready: Condvar::new(),
        });

        let workers = (0..count)
            .map(|_| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || {
                    while let Some(job) = queue.pop() {
                        job();
                    }
                })
            })
            .collect();

        Self { queue, workers }
    }

    /// Returns the number of worker threads.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers.len()
    }

    /// Queues `task` for execution and returns a handle to its result.
    ///
    /// A panic inside the task is caught; the worker survives and the
    /// handle reports [`TaskError::Panicked`].
    pub fn enqueue<F, R>(&self, task: F) -> Task<R>
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();

        self.queue.push(Box::new(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(task)).map_err(|_| TaskError::Panicked);
            // The caller may have dropped the handle.
            let _ = sender.send(result);
        }));

        Task { receiver }
    }

    /// Runs `op` over `0..n` split into one contiguous range per worker.
    ///
    /// Blocks until every partition has finished and returns the partition
    /// results in range order.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaskError`] if any partition panicked. All
    /// partitions still run to completion before this returns.
    pub fn map_ranges<F, R>(&self, n: usize, op: F) -> Result<Vec<R>, TaskError>
    where
        F: Fn(Range<usize>) -> R + Send + Sync + 'static,
        R: Send + 'static,
    {
        let op = Arc::new(op);
        let mut section = Section::new();

        for range in split(n, self.workers()) {
            let op = Arc::clone(&op);
            section.push(self.enqueue(move || op(range)));
        }

        section.wait()
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        let pending = self.queue.stop();
        drop(pending);

        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

impl<R> Task<R> {
    /// Blocks until the task finishes and returns its result.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Panicked`] if the task panicked, or
    /// [`TaskError::Cancelled`] if the pool was dropped before it ran.
    pub fn wait(self) -> Result<R, TaskError> {
        self.receiver.recv().unwrap_or(Err(TaskError::Cancelled))
    }
}

impl Queue {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Jobs run outside the lock, so a poisoned guard still holds a valid queue.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, job: Job) {
        self.lock().jobs.push_back(job);
        self.ready.notify_one();
    }

    /// Waits for the next job, or `None` once the pool is stopping.
    fn pop(&self) -> Option<Job> {
        let mut inner = self.lock();
        loop {
            if inner.stop {
                return None;
            }
            if let Some(job) = inner.jobs.pop_front() {
                return Some(job);
            }
            inner = self
                .ready
                .wait(inner)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Signals shutdown and hands back the jobs that never started.
    fn stop(&self) -> VecDeque<Job> {
        let pending = {
            let mut inner = self.lock();
            inner.stop = true;
            mem::take(&mut inner.jobs)
        };
        self.ready.notify_all();
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    #[test]
    fn runs_every_task() {
        let pool = ThreadPool::new(3);
        let counter = Arc::new(AtomicUsize::new(0));

        let tasks: Vec<_> = (0..100)
            .map(|i| {
                let counter = Arc::clone(&counter);
                pool.enqueue(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                    i * 2
                })
            })
            .collect();

        let results: Vec<usize> = tasks
            .into_iter()
            .map(|task| task.wait().expect("task succeeds"))
            .collect();

        assert_eq!(counter.load(Ordering::SeqCst), 100);
        assert_eq!(results, (0..100).map(|i| i * 2).collect::<Vec<_>>());
    }

    #[test]
    fn zero_workers_uses_available_parallelism() {
        let pool = ThreadPool::new(0);
        assert!(pool.workers() >= 1);
    }

    #[test]
    fn panicking_task_does_not_kill_worker() {
        let pool = ThreadPool::new(1);

        let failed = pool.enqueue(|| -> usize { panic!("boom") });
        let ok = pool.enqueue(|| 7);

        assert_eq!(failed.wait(), Err(TaskError::Panicked));
        assert_eq!(ok.wait(), Ok(7));
    }

    #[test]
    fn drop_cancels_pending_tasks() {
        let pool = ThreadPool::new(1);
        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();

        let running = pool.enqueue(move || {
            started_tx.send(()).expect("test receiver alive");
            release_rx.recv().expect("test sender alive");
            1
        });
        let pending = pool.enqueue(|| 2);

        // Only drop once the single worker is busy with the first task.
        started_rx.recv().expect("first task starts");
        let releaser = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            release_tx.send(()).expect("task still waiting");
        });
        drop(pool);
        releaser.join().expect("releaser finishes");

        assert_eq!(running.wait(), Ok(1));
        assert_eq!(pending.wait(), Err(TaskError::Cancelled));
    }

    #[test]
    fn map_ranges_returns_results_in_order() {
        let pool = ThreadPool::new(4);
        let ranges = pool
            .map_ranges(10, |range| (range.start, range.end))
            .expect("no panics");

        assert_eq!(ranges, vec![(0, 3), (3, 6), (6, 8), (8, 10)]);
    }

    #[test]
    fn map_ranges_reports_panics_after_all_partitions() {
        let pool = ThreadPool::new(2);
        let visited = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&visited);

        let result = pool.map_ranges(4, move |range| {
            seen.fetch_add(range.len(), Ordering::SeqCst);
            assert!(range.start != 0, "first partition fails");
        });

        assert_eq!(result, Err(TaskError::Panicked));
        assert_eq!(visited.load(Ordering::SeqCst), 4);
    }
}
