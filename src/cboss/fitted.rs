//! The ensemble returned by [`ContractableBoss::fit`].
//!
//! [`ContractableBoss::fit`]: crate::ContractableBoss::fit
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    ClassIndex,
    Series,
    SeriesClassifier,
    ensemble::{
        aggregator,
        Ensemble,
        TrainedMember,
        Workers,
    },
    error::{CbossError, Result},
};

use std::time::Duration;


/// A fitted cBOSS ensemble.
///
/// Predictions are the weighted vote of the retained members,
/// where each member weighs `accuracy^4`.
/// Labels are reported in the type `L` seen during fit.
#[derive(Debug, Clone)]
pub struct FittedCboss<L, M> {
    class_index: ClassIndex<L>,
    ensemble: Ensemble<M>,
    series_length: usize,
    n_instances: usize,
    n_candidates_tried: usize,
    elapsed: Duration,
    seed: u64,
    n_jobs: i32,
}


impl<L, M> FittedCboss<L, M> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        class_index: ClassIndex<L>,
        ensemble: Ensemble<M>,
        series_length: usize,
        n_instances: usize,
        n_candidates_tried: usize,
        elapsed: Duration,
        seed: u64,
        n_jobs: i32,
    ) -> Self
    {
        Self {
            class_index,
            ensemble,
            series_length,
            n_instances,
            n_candidates_tried,
            elapsed,
            seed,
            n_jobs,
        }
    }


    /// Returns the label ↔ index mapping learned during fit.
    #[inline]
    pub fn class_index(&self) -> &ClassIndex<L> {
        &self.class_index
    }


    /// Returns the number of retained base learners.
    #[inline]
    pub fn n_estimators(&self) -> usize {
        self.ensemble.len()
    }


    /// Returns the retained base learners.
    #[inline]
    pub fn members(&self) -> &[TrainedMember<M>] {
        self.ensemble.members()
    }


    /// Returns the weight of each retained base learner.
    #[inline]
    pub fn weights(&self) -> &[f64] {
        self.ensemble.weights()
    }


    /// Returns the sum of [`FittedCboss::weights`].
    #[inline]
    pub fn weight_sum(&self) -> f64 {
        self.ensemble.weight_sum()
    }


    /// Returns the length of the training series.
    #[inline]
    pub fn series_length(&self) -> usize {
        self.series_length
    }


    /// Returns the number of training instances.
    #[inline]
    pub fn n_instances(&self) -> usize {
        self.n_instances
    }


    /// Returns the number of candidates evaluated during the search.
    #[inline]
    pub fn n_candidates_tried(&self) -> usize {
        self.n_candidates_tried
    }


    /// Returns the wall-clock time of the search.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }


    /// Returns the seed used by the search.
    /// Ties in [`FittedCboss::predict`] are broken with it as well.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}


impl<L, M> FittedCboss<L, M>
    where L: Ord + Clone,
          M: SeriesClassifier,
{
    /// Returns the sorted class labels.
    /// Column `k` of the probability rows refers to `classes()[k]`.
    #[inline]
    pub fn classes(&self) -> &[L] {
        self.class_index.classes()
    }


    /// Returns the number of classes.
    #[inline]
    pub fn n_classes(&self) -> usize {
        self.class_index.n_classes()
    }


    /// Predicts the label of every series in `series`.
    ///
    /// Ties between equally probable classes are broken at random,
    /// with a generator re-seeded on every call,
    /// so repeated calls return the same labels.
    pub fn predict(&self, series: &Series) -> Result<Vec<L>> {
        let probas = self.predict_proba(series)?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        let predictions = aggregator::break_ties(&probas, &mut rng)
            .into_iter()
            .map(|k| self.class_index.label(k).clone())
            .collect();
        Ok(predictions)
    }


    /// Returns the class probabilities of every series in `series`.
    /// Each row sums to `1`.
    pub fn predict_proba(&self, series: &Series) -> Result<Vec<Vec<f64>>> {
        if series.series_length() != self.series_length {
            return Err(CbossError::ShapeMismatch {
                expected: format!("series of length {}", self.series_length),
                actual: format!("series of length {}", series.series_length()),
            });
        }
        let workers = Workers::new(self.n_jobs)?;
        aggregator::predict_proba(
            self.ensemble.members(),
            self.ensemble.weight_sum(),
            series,
            self.n_classes(),
            &workers,
        )
    }


    /// Returns the out-of-bag class probabilities of the training set.
    ///
    /// Row `i` is the weighted vote of the members
    /// whose subsample contains instance `i`,
    /// each using its leave-one-out prediction of `i`.
    /// Instances no member saw get the uniform distribution.
    pub fn train_proba(&self) -> Result<Vec<Vec<f64>>> {
        let workers = Workers::new(self.n_jobs)?;
        aggregator::train_proba(
            self.ensemble.members(),
            self.n_instances,
            self.n_classes(),
            &workers,
        )
    }
}
