//! Ordered parallel map for per-window work.
//!
//! The apply engine never schedules work itself. It hands a list of tasks to
//! a [`ParallelMap`] and relies on two guarantees:
//!
//! - results come back in task order, whatever order they finished in
//! - the first failing task fails the whole map, with no partial output
//!
//! Three implementations are provided:
//!
//! - [`Sequential`]: in-process, in order, stops at the first error
//! - [`ThreadPoolMap`]: a dedicated rayon pool with a fixed worker count
//! - [`GlobalPoolMap`]: the rayon global pool
//!
//! The rayon-backed maps require the `parallel` feature (enabled by default).
//! Without it they run sequentially.
//!
//! # Example
//!
//! ```
//! use fast_window::dispatch::{ParallelMap, Parallelism};
//!
//! let map = Parallelism::Workers(4).build().unwrap();
//! let squares = map
//!     .map_ordered((0..100_u64).collect(), |x: u64| Ok(x * x))
//!     .unwrap();
//! assert_eq!(squares[10], 100);
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{Error, Result};

/// An order-preserving, all-or-nothing map over a list of tasks.
pub trait ParallelMap {
    /// Number of workers the map may use.
    fn workers(&self) -> usize;

    /// Applies `f` to every task and returns the results in task order.
    ///
    /// # Errors
    ///
    /// Returns the error of a failing task. Which error is reported when
    /// several tasks fail concurrently is unspecified for parallel maps;
    /// [`Sequential`] always reports the first.
    fn map_ordered<I, R, F>(&self, tasks: Vec<I>, f: F) -> Result<Vec<R>>
    where
        I: Send,
        R: Send,
        F: Fn(I) -> Result<R> + Send + Sync;
}

/// Runs every task in the calling thread, in order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sequential;

impl ParallelMap for Sequential {
    fn workers(&self) -> usize {
        1
    }

    fn map_ordered<I, R, F>(&self, tasks: Vec<I>, f: F) -> Result<Vec<R>>
    where
        I: Send,
        R: Send,
        F: Fn(I) -> Result<R> + Send + Sync,
    {
        let mut results = Vec::with_capacity(tasks.len());
        for task in tasks {
            results.push(f(task)?);
        }
        Ok(results)
    }
}

/// Runs tasks on a dedicated rayon pool.
///
/// The pool lives as long as this value; dropping it joins the workers.
#[derive(Debug)]
pub struct ThreadPoolMap {
    workers: usize,
    #[cfg(feature = "parallel")]
    pool: rayon::ThreadPool,
}

impl ThreadPoolMap {
    /// Builds a pool with `workers` threads.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidParallelism` if `workers` is zero
    /// - `Error::WorkerPool` if the threads cannot be spawned
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(Error::InvalidParallelism);
        }

        #[cfg(feature = "parallel")]
        {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .thread_name(|i| format!("fast-window-{i}"))
                .build()
                .map_err(|e| Error::WorkerPool {
                    reason: e.to_string(),
                })?;
            log::debug!("built worker pool with {workers} threads");
            Ok(Self { workers, pool })
        }

        #[cfg(not(feature = "parallel"))]
        {
            log::warn!("parallel feature disabled, {workers} workers requested, running sequentially");
            Ok(Self { workers })
        }
    }
}

impl ParallelMap for ThreadPoolMap {
    fn workers(&self) -> usize {
        self.workers
    }

    #[cfg(feature = "parallel")]
    fn map_ordered<I, R, F>(&self, tasks: Vec<I>, f: F) -> Result<Vec<R>>
    where
        I: Send,
        R: Send,
        F: Fn(I) -> Result<R> + Send + Sync,
    {
        self.pool
            .install(|| tasks.into_par_iter().map(&f).collect::<Result<Vec<R>>>())
    }

    #[cfg(not(feature = "parallel"))]
    fn map_ordered<I, R, F>(&self, tasks: Vec<I>, f: F) -> Result<Vec<R>>
    where
        I: Send,
        R: Send,
        F: Fn(I) -> Result<R> + Send + Sync,
    {
        Sequential.map_ordered(tasks, f)
    }
}

/// Runs tasks on the rayon global pool, sized to the available cores.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GlobalPoolMap;

impl ParallelMap for GlobalPoolMap {
    fn workers(&self) -> usize {
        #[cfg(feature = "parallel")]
        {
            rayon::current_num_threads()
        }
        #[cfg(not(feature = "parallel"))]
        {
            1
        }
    }

    #[cfg(feature = "parallel")]
    fn map_ordered<I, R, F>(&self, tasks: Vec<I>, f: F) -> Result<Vec<R>>
    where
        I: Send,
        R: Send,
        F: Fn(I) -> Result<R> + Send + Sync,
    {
        tasks.into_par_iter().map(&f).collect::<Result<Vec<R>>>()
    }

    #[cfg(not(feature = "parallel"))]
    fn map_ordered<I, R, F>(&self, tasks: Vec<I>, f: F) -> Result<Vec<R>>
    where
        I: Send,
        R: Send,
        F: Fn(I) -> Result<R> + Send + Sync,
    {
        log::warn!("parallel feature disabled, running on the global pool sequentially");
        Sequential.map_ordered(tasks, f)
    }
}

/// How many workers an apply call may use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Parallelism {
    /// One window after another in the calling thread.
    #[default]
    Sequential,
    /// A dedicated pool of this many workers. `Workers(1)` is sequential.
    Workers(usize),
    /// The rayon global pool, one worker per available core.
    Available,
}

impl Parallelism {
    /// Checks the worker count.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParallelism` for `Workers(0)`.
    pub const fn validate(self) -> Result<()> {
        match self {
            Self::Workers(0) => Err(Error::InvalidParallelism),
            _ => Ok(()),
        }
    }

    /// Builds the map for this setting.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidParallelism` for `Workers(0)`
    /// - `Error::WorkerPool` if a dedicated pool cannot be built
    pub fn build(self) -> Result<Dispatcher> {
        self.validate()?;
        Ok(match self {
            Self::Sequential | Self::Workers(1) => Dispatcher::Sequential(Sequential),
            Self::Workers(n) => Dispatcher::Pool(ThreadPoolMap::new(n)?),
            Self::Available => Dispatcher::Global(GlobalPoolMap),
        })
    }
}

impl From<usize> for Parallelism {
    /// `0` and `1` map to sequential, `n` to `Workers(n)`.
    fn from(workers: usize) -> Self {
        match workers {
            0 | 1 => Self::Sequential,
            n => Self::Workers(n),
        }
    }
}

/// The map selected by a [`Parallelism`] value.
#[derive(Debug)]
pub enum Dispatcher {
    /// See [`Sequential`].
    Sequential(Sequential),
    /// See [`ThreadPoolMap`].
    Pool(ThreadPoolMap),
    /// See [`GlobalPoolMap`].
    Global(GlobalPoolMap),
}

impl ParallelMap for Dispatcher {
    fn workers(&self) -> usize {
        match self {
            Self::Sequential(map) => map.workers(),
            Self::Pool(map) => map.workers(),
            Self::Global(map) => map.workers(),
        }
    }

    fn map_ordered<I, R, F>(&self, tasks: Vec<I>, f: F) -> Result<Vec<R>>
    where
        I: Send,
        R: Send,
        F: Fn(I) -> Result<R> + Send + Sync,
    {
        match self {
            Self::Sequential(map) => map.map_ordered(tasks, f),
            Self::Pool(map) => map.map_ordered(tasks, f),
            Self::Global(map) => map.map_ordered(tasks, f),
        }
    }
}
