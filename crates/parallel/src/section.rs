use std::mem;

use crate::{Task, TaskError};

/// A barrier over a group of pool tasks.
///
/// Tasks pushed into a section are waited on together by [`Section::wait`].
/// A section dropped without being waited on still blocks until its tasks
/// have finished, so no task outlives the scope that created it.
#[derive(Debug)]
pub struct Section<R> {
    tasks: Vec<Task<R>>,
}

impl<R> Section<R> {
    /// Creates an empty section.
    #[must_use]
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Adds a task to the section.
    pub fn push(&mut self, task: Task<R>) {
        self.tasks.push(task);
    }

    /// Returns the number of tasks in the section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if no tasks have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Blocks until every task has finished and returns their results in
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns the first task error encountered. Every task is still waited
    /// on before returning.
    pub fn wait(mut self) -> Result<Vec<R>, TaskError> {
        let results: Vec<_> = mem::take(&mut self.tasks)
            .into_iter()
            .map(Task::wait)
            .collect();

        results.into_iter().collect()
    }
}

impl<R> Default for Section<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Drop for Section<R> {
    fn drop(&mut self) {
        for task in self.tasks.drain(..) {
            let _ = task.wait();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use crate::ThreadPool;

    #[test]
    fn waits_for_all_tasks() {
        let pool = ThreadPool::new(2);
        let mut section = Section::new();

        for i in 0..8 {
            section.push(pool.enqueue(move || i * i));
        }
        assert_eq!(section.len(), 8);

        let squares = section.wait().expect("no panics");
        assert_eq!(squares, vec![0, 1, 4, 9, 16, 25, 36, 49]);
    }

    #[test]
    fn drop_blocks_until_done() {
        let pool = ThreadPool::new(2);
        let done = Arc::new(AtomicUsize::new(0));

        {
            let mut section = Section::new();
            for _ in 0..6 {
                let done = Arc::clone(&done);
                section.push(pool.enqueue(move || {
                    done.fetch_add(1, Ordering::SeqCst);
                }));
            }
        }

        assert_eq!(done.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn empty_section_waits_trivially() {
        let section: Section<()> = Section::default();
        assert!(section.is_empty());
        assert_eq!(section.wait(), Ok(Vec::new()));
    }
}
