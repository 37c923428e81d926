//! Leave-one-out accuracy estimation with early abandonment.
//!
//! A fitted base learner is scored on its own subsample:
//! each instance is predicted by the model that excludes it.
//! Given the accuracy `lowest_acc` the candidate must beat,
//! evaluation stops as soon as the remaining instances
//! cannot lift the number of correct predictions to
//! `floor(lowest_acc * n)`, and [`ABANDONED_ACCURACY`] is reported.
//!
//! Both estimators below produce the same value for the same input.
//! [`ParallelEstimator`] computes every prediction up front
//! and applies the abandonment check afterwards,
//! so it only saves work in [`SequentialEstimator`].
use crate::{
    SeriesClassifier,
    common::constants::ABANDONED_ACCURACY,
    error::Result,
};
use super::workers::Workers;


/// A trait that estimates the leave-one-out training accuracy
/// of a fitted base learner.
pub trait AccuracyEstimator {
    /// Returns the leave-one-out accuracy of `model`
    /// on its training subsample labeled by `classes`,
    /// or [`ABANDONED_ACCURACY`] if it cannot exceed `lowest_acc`.
    fn estimate<M>(
        &self,
        model: &M,
        classes: &[usize],
        lowest_acc: f64,
    ) -> Result<f64>
        where M: SeriesClassifier;
}


/// Number of correct predictions needed to reach `lowest_acc`.
#[inline(always)]
pub(crate) fn required_correct(lowest_acc: f64, n: usize) -> usize {
    (lowest_acc * n as f64).max(0f64) as usize
}


/// `true` if even a perfect record on instances `i..n`
/// cannot reach `required`.
#[inline(always)]
fn hopeless(correct: usize, n: usize, i: usize, required: usize) -> bool {
    correct + (n - i) < required
}


/// Evaluates the instances one by one on the calling thread
/// and stops as soon as the candidate is hopeless.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialEstimator;


impl AccuracyEstimator for SequentialEstimator {
    fn estimate<M>(
        &self,
        model: &M,
        classes: &[usize],
        lowest_acc: f64,
    ) -> Result<f64>
        where M: SeriesClassifier,
    {
        let n = classes.len();
        let required = required_correct(lowest_acc, n);

        let mut correct = 0_usize;
        for (i, &y) in classes.iter().enumerate() {
            if hopeless(correct, n, i, required) {
                log::trace!(
                    "abandoned after {i}/{n} instances \
                     ({correct} correct, {required} required)"
                );
                return Ok(ABANDONED_ACCURACY);
            }
            if model.train_predict(i)? == y {
                correct += 1;
            }
        }
        Ok(correct as f64 / n as f64)
    }
}


/// Evaluates every instance on the worker pool,
/// then replays the abandonment check on the collected predictions.
pub struct ParallelEstimator<'a> {
    workers: &'a Workers,
}


impl<'a> ParallelEstimator<'a> {
    /// Construct a new estimator running on `workers`.
    #[inline]
    pub fn new(workers: &'a Workers) -> Self {
        Self { workers }
    }
}


impl AccuracyEstimator for ParallelEstimator<'_> {
    fn estimate<M>(
        &self,
        model: &M,
        classes: &[usize],
        lowest_acc: f64,
    ) -> Result<f64>
        where M: SeriesClassifier,
    {
        let n = classes.len();
        let required = required_correct(lowest_acc, n);

        let ix = (0..n).collect::<Vec<_>>();
        let predictions = self.workers
            .try_map(&ix, |&i| model.train_predict(i))?;

        let mut correct = 0_usize;
        for (i, (&y, p)) in classes.iter().zip(predictions).enumerate() {
            if hopeless(correct, n, i, required) {
                log::trace!(
                    "abandoned after {i}/{n} instances \
                     ({correct} correct, {required} required)"
                );
                return Ok(ABANDONED_ACCURACY);
            }
            if p == y {
                correct += 1;
            }
        }
        Ok(correct as f64 / n as f64)
    }
}


/// Scores `model` with the estimator matching `workers`.
pub(crate) fn estimate_with<M>(
    workers: &Workers,
    model: &M,
    classes: &[usize],
    lowest_acc: f64,
) -> Result<f64>
    where M: SeriesClassifier,
{
    if workers.is_parallel() {
        ParallelEstimator::new(workers).estimate(model, classes, lowest_acc)
    } else {
        SequentialEstimator.estimate(model, classes, lowest_acc)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Series;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed leave-one-out prediction per instance
    /// and counts the calls.
    struct Scripted {
        loo: Vec<usize>,
        calls: AtomicUsize,
    }

    impl Scripted {
        fn new(loo: Vec<usize>) -> Self {
            Self { loo, calls: AtomicUsize::new(0) }
        }
    }

    impl SeriesClassifier for Scripted {
        fn predict(&self, _: &Series, _: usize) -> Result<usize> {
            Ok(0)
        }

        fn train_predict(&self, i: usize) -> Result<usize> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.loo[i])
        }
    }

    #[test]
    fn required_correct_floors() {
        assert_eq!(required_correct(0.6, 10), 6);
        assert_eq!(required_correct(0.65, 10), 6);
        assert_eq!(required_correct(0f64, 10), 0);
        assert_eq!(required_correct(-1f64, 10), 0);
    }

    #[test]
    fn sequential_without_threshold_is_plain_accuracy() {
        let model = Scripted::new(vec![0, 1, 1, 0]);
        let acc = SequentialEstimator
            .estimate(&model, &[0, 1, 0, 0], 0f64)
            .unwrap();
        assert_eq!(acc, 0.75);
        assert_eq!(model.calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn sequential_abandons_early() {
        // Every prediction is wrong; 8 of 10 are required.
        // After 3 wrong answers only 7 instances remain.
        let model = Scripted::new(vec![1; 10]);
        let acc = SequentialEstimator
            .estimate(&model, &[0; 10], 0.8)
            .unwrap();
        assert_eq!(acc, ABANDONED_ACCURACY);
        assert_eq!(model.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn parallel_evaluates_everything_but_reports_the_same() {
        let workers = Workers::new(2).unwrap();
        let model = Scripted::new(vec![1; 10]);
        let acc = ParallelEstimator::new(&workers)
            .estimate(&model, &[0; 10], 0.8)
            .unwrap();
        assert_eq!(acc, ABANDONED_ACCURACY);
        assert_eq!(model.calls.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn reaching_the_threshold_exactly_is_not_abandoned() {
        let model = Scripted::new(vec![0, 0, 0, 1, 1]);
        let acc = SequentialEstimator
            .estimate(&model, &[0; 5], 0.6)
            .unwrap();
        assert_eq!(acc, 0.6);
    }
}
