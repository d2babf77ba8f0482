//! Fixed-size worker pool and split-loop barrier.
//!
//! A [`ThreadPool`] owns a set of worker threads that pull boxed tasks from a
//! shared FIFO queue. Each submitted task returns a [`Task`] handle that can
//! be waited on for its result. A [`Section`] groups handles and blocks until
//! every one of them has finished, and [`ThreadPool::map_ranges`] splits an
//! index range evenly across the workers and waits for all partitions.
//!
//! The pool is constructed explicitly and passed by reference to whatever
//! needs it. Dropping the pool stops the workers, cancels tasks still in the
//! queue, and joins every thread.
//!
//! # Example
//!
//! ```rust
//! use nano_parallel::ThreadPool;
//!
//! let pool = ThreadPool::new(4);
//! let sums = pool
//!     .map_ranges(1000, |range| range.sum::<usize>())
//!     .expect("no task panics");
//!
//! assert_eq!(sums.iter().sum::<usize>(), 999 * 1000 / 2);
//! ```

mod error;
mod pool;
mod section;
mod split;

pub use error::TaskError;
pub use pool::{Task, ThreadPool};
pub use section::Section;
pub use split::split;
