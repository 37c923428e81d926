//! A bounded worker pool for the embarrassingly parallel sub-steps.
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::{
    common::constants::ALL_CORES,
    error::{CbossError, Result},
};


/// Runs independent units of work either on the calling thread
/// or on a dedicated `rayon` pool.
///
/// - `n_jobs == -1` uses every available core,
/// - `n_jobs > 1` uses exactly `n_jobs` threads,
/// - any other value runs sequentially.
pub struct Workers {
    pool: Option<ThreadPool>,
}


impl Workers {
    /// Construct the workers for the given degree of parallelism.
    pub fn new(n_jobs: i32) -> Result<Self> {
        let n_threads = match n_jobs {
            ALL_CORES => 0,
            n if n > 1 => n as usize,
            _ => return Ok(Self::sequential()),
        };
        // `num_threads(0)` lets rayon pick one thread per core.
        let pool = ThreadPoolBuilder::new()
            .num_threads(n_threads)
            .build()
            .map_err(|e| CbossError::ThreadPool(e.to_string()))?;
        Ok(Self { pool: Some(pool) })
    }


    /// Construct workers that run everything on the calling thread.
    #[inline]
    pub fn sequential() -> Self {
        Self { pool: None }
    }


    /// Returns `true` if the work runs on a pool.
    #[inline]
    pub fn is_parallel(&self) -> bool {
        self.pool.is_some()
    }


    /// Returns the number of threads doing the work.
    #[inline]
    pub fn n_threads(&self) -> usize {
        self.pool.as_ref()
            .map(|pool| pool.current_num_threads())
            .unwrap_or(1)
    }


    /// Applies `f` to every item and collects the results in item order.
    /// The first error aborts the whole call.
    pub fn try_map<T, U, F>(&self, items: &[T], f: F) -> Result<Vec<U>>
        where T: Sync,
              U: Send,
              F: Fn(&T) -> Result<U> + Sync + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(|| {
                items.par_iter()
                    .map(&f)
                    .collect::<Result<Vec<_>>>()
            }),
            None => items.iter()
                .map(f)
                .collect::<Result<Vec<_>>>(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_for_small_n_jobs() {
        for n_jobs in [-3, 0, 1] {
            let workers = Workers::new(n_jobs).unwrap();
            assert!(!workers.is_parallel());
            assert_eq!(workers.n_threads(), 1);
        }
    }

    #[test]
    fn parallel_keeps_item_order() {
        let workers = Workers::new(3).unwrap();
        assert_eq!(workers.n_threads(), 3);
        let items = (0..100).collect::<Vec<usize>>();
        let out = workers.try_map(&items, |&i| Ok(i * 2)).unwrap();
        assert_eq!(out, (0..100).map(|i| i * 2).collect::<Vec<_>>());
    }

    #[test]
    fn a_failing_item_fails_the_call() {
        let workers = Workers::new(2).unwrap();
        let items = (0..10).collect::<Vec<usize>>();
        let res = workers.try_map(&items, |&i| {
            if i == 7 {
                Err(CbossError::BaseLearner("boom".into()))
            } else {
                Ok(i)
            }
        });
        assert!(res.is_err());
    }
}
