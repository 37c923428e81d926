//! A 1-nearest-neighbor base learner over windowed
//! piecewise-aggregate approximations.
use crate::{
    BaseLearner,
    SeriesClassifier,
    Candidate,
    Series,
    error::{CbossError, Result},
};


/// Windows whose standard deviation is below this value
/// are only mean-centered when normalizing.
const FLAT_WINDOW_STD: f64 = 1e-8;


/// A nearest-neighbor learner that summarizes each series
/// by the piecewise-aggregate approximation (PAA)
/// of its sliding windows.
///
/// For a [`Candidate`] `(window, word_length, normalize)`,
/// every series is cut into windows of length `window`,
/// each window is optionally z-normalized and reduced to
/// `min(word_length, window)` segment means.
/// Series are compared by the squared Euclidean distance
/// between the concatenated approximations.
///
/// # Example
/// ```no_run
/// use cboss::prelude::*;
///
/// let learner = PaaNearestNeighbor::init()
///     .stride_divisor(2);
/// ```
#[derive(Debug, Clone)]
pub struct PaaNearestNeighbor {
    stride_divisor: usize,
}


impl PaaNearestNeighbor {
    /// Construct a new instance of [`PaaNearestNeighbor`].
    /// Windows overlap by half by default.
    #[inline]
    pub fn init() -> Self {
        Self { stride_divisor: 2 }
    }


    /// Set the window stride as `ceil(window / divisor)`.
    /// `divisor = 1` gives non-overlapping windows.
    #[inline]
    pub fn stride_divisor(mut self, divisor: usize) -> Self {
        assert!(divisor > 0, "stride divisor must be positive");
        self.stride_divisor = divisor;
        self
    }
}


impl Default for PaaNearestNeighbor {
    fn default() -> Self {
        Self::init()
    }
}


/// The model returned by [`PaaNearestNeighbor`].
#[derive(Debug, Clone)]
pub struct PaaNNClassifier {
    window: usize,
    word_length: usize,
    normalize: bool,
    stride: usize,
    train: Vec<Vec<f64>>,
    classes: Vec<usize>,
}


impl PaaNNClassifier {
    fn transform(&self, series: &[f64]) -> Result<Vec<f64>> {
        let n = series.len();
        if self.window > n {
            return Err(CbossError::BaseLearner(format!(
                "window {} is longer than the series ({n})",
                self.window
            )));
        }
        let mut features = Vec::new();
        for start in (0..=n - self.window).step_by(self.stride) {
            let window = &series[start..start + self.window];
            let (mean, std) = moments(window);
            let scale = if self.normalize && std > FLAT_WINDOW_STD {
                std
            } else {
                1f64
            };
            let offset = if self.normalize { mean } else { 0f64 };
            for k in 0..self.word_length {
                let lo = k * self.window / self.word_length;
                let hi = (k + 1) * self.window / self.word_length;
                let seg = &window[lo..hi];
                let avg = seg.iter().sum::<f64>() / seg.len() as f64;
                features.push((avg - offset) / scale);
            }
        }
        Ok(features)
    }


    /// Returns the class of the nearest training instance,
    /// skipping `exclude`.
    /// Ties go to the smaller training index.
    fn nearest(&self, query: &[f64], exclude: Option<usize>)
        -> Result<usize>
    {
        let mut best: Option<(usize, f64)> = None;
        for (j, x) in self.train.iter().enumerate() {
            if Some(j) == exclude { continue; }
            let dist = query.iter()
                .zip(x)
                .map(|(a, b)| (a - b).powi(2))
                .sum::<f64>();
            if best.map_or(true, |(_, d)| dist < d) {
                best = Some((j, dist));
            }
        }
        best.map(|(j, _)| self.classes[j])
            .ok_or_else(|| {
                CbossError::BaseLearner(
                    "no training instance left to compare with".into()
                )
            })
    }
}


impl SeriesClassifier for PaaNNClassifier {
    fn predict(&self, series: &Series, row: usize) -> Result<usize> {
        let query = self.transform(series.row(row))?;
        self.nearest(&query, None)
    }


    fn train_predict(&self, local_index: usize) -> Result<usize> {
        let query = self.train.get(local_index)
            .ok_or_else(|| {
                CbossError::BaseLearner(format!(
                    "training index {local_index} is out of range \
                     (fit on {} instances)",
                    self.train.len()
                ))
            })?;
        self.nearest(query, Some(local_index))
    }
}


impl BaseLearner for PaaNearestNeighbor {
    type Model = PaaNNClassifier;


    fn name(&self) -> &str {
        "PAA 1-Nearest Neighbor"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Stride divisor", format!("{}", self.stride_divisor)),
        ]);
        Some(info)
    }


    fn fit(
        &self,
        candidate: &Candidate,
        series: &Series,
        classes: &[usize],
        _n_classes: usize,
    ) -> Result<Self::Model>
    {
        let window = candidate.window_size;
        if window == 0 {
            return Err(CbossError::BaseLearner("window must be positive".into()));
        }
        let mut model = PaaNNClassifier {
            window,
            word_length: candidate.word_length.min(window).max(1),
            normalize: candidate.normalize,
            stride: (window + self.stride_divisor - 1) / self.stride_divisor,
            train: Vec::with_capacity(series.n_instances()),
            classes: classes.to_vec(),
        };
        model.train = series.rows()
            .map(|row| model.transform(row))
            .collect::<Result<Vec<_>>>()?;
        Ok(model)
    }
}


/// Returns the mean and the population standard deviation.
#[inline(always)]
fn moments(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter()
        .map(|v| (v - mean).powi(2))
        .sum::<f64>() / n;
    (mean, var.sqrt())
}
