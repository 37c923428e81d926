//! The capability interface between the ensemble and its base learners.
//!
//! The ensemble never looks inside a base learner.
//! It only needs to
//! 1. fit one on a labeled subsample for a given [`Candidate`],
//! 2. ask the fitted model for a leave-one-out prediction
//!    of one of its own training instances, and
//! 3. ask the fitted model for predictions on unseen series.
//!
//! Labels cross this boundary as dense class indices
//! (see [`ClassIndex`](crate::ClassIndex)).
use crate::{
    Candidate,
    Series,
    error::Result,
};


/// A trait that defines the behavor of a fitted base learner.
/// You need to implement [`SeriesClassifier::predict`]
/// and [`SeriesClassifier::train_predict`].
pub trait SeriesClassifier: Send + Sync {
    /// Predicts the class index of the `row`-th series of `series`.
    fn predict(&self, series: &Series, row: usize) -> Result<usize>;


    /// Predicts the class index of the `local_index`-th instance
    /// of the subsample this model was fit on,
    /// using a model that excludes that instance.
    fn train_predict(&self, local_index: usize) -> Result<usize>;


    /// Predicts the class indices of every series in `series`.
    fn predict_all(&self, series: &Series) -> Result<Vec<usize>> {
        (0..series.n_instances())
            .map(|row| self.predict(series, row))
            .collect()
    }
}


/// A trait that builds [`SeriesClassifier`]s
/// from a parameter [`Candidate`] and a labeled subsample.
pub trait BaseLearner: Sync {
    /// The fitted model this learner returns.
    type Model: SeriesClassifier;


    /// Returns the name of the base learner.
    fn name(&self) -> &str;


    /// Returns the information of the base learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Fits a model with the hyper-parameters `candidate`
    /// on `series` labeled by `classes`.
    /// Each entry of `classes` is in `0..n_classes`.
    fn fit(
        &self,
        candidate: &Candidate,
        series: &Series,
        classes: &[usize],
        n_classes: usize,
    ) -> Result<Self::Model>;
}
