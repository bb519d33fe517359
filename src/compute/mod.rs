use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{Result, WordFreqError};


/// Fixed-size pool of worker threads, used for the bulk parallel stages of a pipeline.
///
/// Every call to `par_map` blocks the caller until all items are processed.
pub struct WorkerPool {
    pool: ThreadPool,
}

impl WorkerPool {

    /// Pool sized to the number of logical cpus.
    pub fn new() -> Result<WorkerPool> {
        return WorkerPool::with_workers(num_cpus::get());
    }

    pub fn with_workers(n_workers: usize) -> Result<WorkerPool> {
        if n_workers == 0 {
            return Err(WordFreqError::Validation(String::from("worker pool needs at least one worker")));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(n_workers)
            .thread_name(|i| format!("word-freq-worker-{}", i))
            .build()?;
        log::debug!("worker pool started with {} threads", n_workers);
        return Ok(WorkerPool { pool });
    }

    pub fn n_workers(&self) -> usize {
        return self.pool.current_num_threads();
    }

    // apply f to every item on the pool, wait for all of them.
    // output keeps the input order. a panic in f is re-raised here.
    pub fn par_map<T, U, F>(&self, items: Vec<T>, f: F) -> Vec<U>
    where
        T: Send,
        U: Send,
        F: Fn(T) -> U + Send + Sync,
    {
        return self.pool.install(|| items.into_par_iter().map(f).collect());
    }
}
