//! Deterministic base learners shared by the integration tests.
#![allow(dead_code)]
use cboss::prelude::*;
use cboss::Result;

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;


pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}


/// `n` rows of length `len`, row `i` filled with `i`.
pub fn flat_series(n: usize, len: usize) -> Series {
    let rows = (0..n)
        .map(|i| vec![i as f64; len])
        .collect::<Vec<_>>();
    Series::from_rows(&rows).unwrap()
}


/// Alternating binary labels.
pub fn alternating_labels(n: usize) -> Vec<u32> {
    (0..n).map(|i| (i % 2) as u32).collect()
}


/// A learner whose leave-one-out accuracy is scripted per candidate.
///
/// The model fit for a candidate `c` predicts the first
/// `correct(c)` instances of its subsample right
/// and every other instance wrong.
/// On unseen series it predicts class `0`.
/// Every fit is counted and its candidate recorded.
pub struct ScriptedLearner {
    correct: fn(&Candidate, usize) -> usize,
    delay: Duration,
    fits: AtomicUsize,
    seen: Mutex<Vec<Candidate>>,
}


impl ScriptedLearner {
    /// `correct(candidate, subsample_size)` is clamped to the subsample size.
    pub fn new(correct: fn(&Candidate, usize) -> usize) -> Self {
        Self {
            correct,
            delay: Duration::ZERO,
            fits: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }


    /// Every candidate scores perfectly.
    pub fn perfect() -> Self {
        Self::new(|_, n| n)
    }


    /// Sleep this long in each fit.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }


    pub fn fits(&self) -> usize {
        self.fits.load(Ordering::SeqCst)
    }


    pub fn seen(&self) -> Vec<Candidate> {
        self.seen.lock().unwrap().clone()
    }
}


pub struct ScriptedModel {
    classes: Vec<usize>,
    n_classes: usize,
    correct: usize,
}


impl SeriesClassifier for ScriptedModel {
    fn predict(&self, _series: &Series, _row: usize) -> Result<usize> {
        Ok(0)
    }


    fn train_predict(&self, local_index: usize) -> Result<usize> {
        let y = self.classes[local_index];
        if local_index < self.correct {
            Ok(y)
        } else {
            Ok((y + 1) % self.n_classes)
        }
    }
}


impl BaseLearner for ScriptedLearner {
    type Model = ScriptedModel;


    fn name(&self) -> &str {
        "Scripted"
    }


    fn fit(
        &self,
        candidate: &Candidate,
        _series: &Series,
        classes: &[usize],
        n_classes: usize,
    ) -> Result<Self::Model>
    {
        self.fits.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(*candidate);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        let correct = (self.correct)(candidate, classes.len())
            .min(classes.len());
        Ok(ScriptedModel {
            classes: classes.to_vec(),
            n_classes,
            correct,
        })
    }
}


/// A learner that fails on every fit.
pub struct FailingLearner;


impl BaseLearner for FailingLearner {
    type Model = ScriptedModel;


    fn name(&self) -> &str {
        "Failing"
    }


    fn fit(&self, _: &Candidate, _: &Series, _: &[usize], _: usize)
        -> Result<Self::Model>
    {
        Err(CbossError::BaseLearner("refusing to fit".into()))
    }
}
