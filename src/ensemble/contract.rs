//! Stopping rule of the randomized search.
use std::time::{Duration, Instant};


/// Decides when the randomized search stops.
///
/// A positive time limit turns the search into a pure time contract:
/// the candidate target is forced to `0`.
/// Otherwise the search runs until `target` candidates were tried.
/// In both cases the search stops once the grid is exhausted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchContract {
    time_limit: Duration,
    target: usize,
    timed: bool,
}


impl SearchContract {
    /// Construct the contract from a time limit in minutes
    /// and a candidate count.
    /// A limit too large for a [`Duration`] saturates to `Duration::MAX`.
    pub fn new(time_limit_in_minutes: f64, n_parameter_samples: usize)
        -> Self
    {
        let timed = time_limit_in_minutes > 0f64;
        let time_limit = if timed {
            Duration::try_from_secs_f64(time_limit_in_minutes * 60f64)
                .unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        };
        let target = if timed { 0 } else { n_parameter_samples };
        Self { time_limit, target, timed }
    }


    /// Construct a contract from both budgets as given,
    /// without resolving one against the other.
    /// The search then stops only once both are met.
    pub fn both(time_limit: Duration, target: usize) -> Self {
        let timed = time_limit > Duration::ZERO;
        Self { time_limit, target, timed }
    }


    /// Returns the time limit. `Duration::ZERO` means no limit.
    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }


    /// Returns the number of candidates to try.
    #[inline]
    pub fn target(&self) -> usize {
        self.target
    }


    /// Returns `true` if the search is time-boxed.
    #[inline]
    pub fn is_timed(&self) -> bool {
        self.timed
    }


    /// Returns `true` while the search should draw another candidate.
    #[inline]
    pub fn should_continue(&self, progress: &SearchProgress, remaining: usize)
        -> bool
    {
        (progress.elapsed < self.time_limit || progress.n_tried < self.target)
            && remaining > 0
    }
}


/// Loop-local bookkeeping of the search.
/// The elapsed time is refreshed once per completed candidate,
/// so an in-flight candidate always finishes.
#[derive(Debug, Clone, Copy)]
pub struct SearchProgress {
    started: Instant,
    elapsed: Duration,
    n_tried: usize,
}


impl SearchProgress {
    /// Start measuring.
    #[inline]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            elapsed: Duration::ZERO,
            n_tried: 0,
        }
    }


    /// Records a completed candidate and refreshes the elapsed time.
    #[inline]
    pub fn record(&mut self) {
        self.n_tried += 1;
        self.elapsed = self.started.elapsed();
    }


    /// Returns the elapsed time as of the last completed candidate.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }


    /// Returns the number of candidates tried so far.
    #[inline]
    pub fn n_tried(&self) -> usize {
        self.n_tried
    }
}
