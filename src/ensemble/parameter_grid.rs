//! Enumerates the candidate hyper-parameters.
use rand::Rng;

use crate::{
    Candidate,
    common::constants::{
        NORM_OPTIONS,
        WORD_LENGTHS,
        WINDOW_SEARCH_DIVISOR,
    },
    error::{CbossError, Result},
};


/// The finite set of [`Candidate`]s a single fit may try.
///
/// The grid is the cross product
/// `normalize × window × word_length`,
/// enumerated in this order,
/// where the windows run from `min_window` to `max_window`
/// (inclusive) with step `window_increment`.
/// The step grows with the window range so that
/// roughly `series_length / 4` window positions are searched.
///
/// Sampling removes the drawn candidate,
/// so no candidate is drawn twice.
#[derive(Debug, Clone)]
pub struct ParameterGrid {
    min_window: usize,
    max_window: usize,
    window_increment: usize,
    word_lengths: Vec<usize>,
    normalize_options: Vec<bool>,
    remaining: Vec<Candidate>,
}


impl ParameterGrid {
    /// Construct the grid for series of length `series_length`.
    /// The maximal window is `floor(series_length * max_win_len_prop)`.
    ///
    /// Returns [`CbossError::InvalidWindow`]
    /// if `min_window > max_window + 1`.
    pub fn new(
        series_length: usize,
        min_window: usize,
        max_win_len_prop: f64,
    ) -> Result<Self>
    {
        let max_window = (series_length as f64 * max_win_len_prop) as usize;
        if min_window > max_window + 1 {
            return Err(CbossError::InvalidWindow {
                min_window,
                max_window,
                series_length,
            });
        }

        let searches = series_length as f64 / WINDOW_SEARCH_DIVISOR;
        let span = max_window as f64 - min_window as f64;
        // Truncation toward zero; a negative span yields `1`.
        let window_increment = ((span / searches) as i64).max(1) as usize;

        let mut grid = Self {
            min_window,
            max_window,
            window_increment,
            word_lengths: WORD_LENGTHS.to_vec(),
            normalize_options: NORM_OPTIONS.to_vec(),
            remaining: Vec::new(),
        };
        grid.enumerate();
        Ok(grid)
    }


    /// Replace the word lengths searched.
    /// Default is `[16, 14, 12, 10, 8]`.
    pub fn word_lengths(mut self, word_lengths: &[usize]) -> Self {
        assert!(
            word_lengths.iter().all(|&l| l > 0),
            "word lengths must be positive"
        );
        self.word_lengths = word_lengths.to_vec();
        self.enumerate();
        self
    }


    /// Replace the normalization flags searched.
    /// Default is `[true, false]`.
    pub fn normalize_options(mut self, options: &[bool]) -> Self {
        self.normalize_options = options.to_vec();
        self.enumerate();
        self
    }


    fn enumerate(&mut self) {
        let windows = (self.min_window..=self.max_window)
            .step_by(self.window_increment)
            .collect::<Vec<_>>();

        let words = &self.word_lengths;
        let remaining = self.normalize_options.iter()
            .flat_map(|&norm| {
                windows.iter().flat_map(move |&w| {
                    words.iter().map(move |&l| Candidate::new(w, l, norm))
                })
            })
            .collect::<Vec<_>>();
        self.remaining = remaining;
    }


    /// Returns the minimal window length.
    #[inline]
    pub fn min_window(&self) -> usize {
        self.min_window
    }


    /// Returns the maximal window length.
    #[inline]
    pub fn max_window(&self) -> usize {
        self.max_window
    }


    /// Returns the step between two consecutive window lengths.
    #[inline]
    pub fn window_increment(&self) -> usize {
        self.window_increment
    }


    /// Returns the number of candidates not yet drawn.
    #[inline]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }


    /// Returns `true` if every candidate has been drawn.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }


    /// Returns the candidates not yet drawn, in grid order.
    #[inline]
    pub fn remaining(&self) -> &[Candidate] {
        &self.remaining[..]
    }


    /// Draws a candidate uniformly at random and removes it from the grid.
    /// Returns `None` once the grid is exhausted.
    pub fn sample<R: Rng>(&mut self, rng: &mut R) -> Option<Candidate> {
        if self.remaining.is_empty() {
            return None;
        }
        let k = rng.gen_range(0..self.remaining.len());
        Some(self.remaining.remove(k))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn increment_scales_with_series_length() {
        // (100 - 10) / (100 / 4) = 3.6
        let grid = ParameterGrid::new(100, 10, 1f64).unwrap();
        assert_eq!(grid.max_window(), 100);
        assert_eq!(grid.window_increment(), 3);
    }

    #[test]
    fn short_series_uses_unit_increment() {
        let grid = ParameterGrid::new(24, 10, 1f64).unwrap();
        assert_eq!(grid.window_increment(), 2);
        let grid = ParameterGrid::new(12, 10, 1f64).unwrap();
        assert_eq!(grid.window_increment(), 1);
    }

    #[test]
    fn grid_order_is_norm_window_word() {
        let grid = ParameterGrid::new(12, 11, 1f64).unwrap();
        let first = grid.remaining()[0];
        assert_eq!(first, Candidate::new(11, 16, true));
        let last = *grid.remaining().last().unwrap();
        assert_eq!(last, Candidate::new(12, 8, false));
        // 2 flags * 2 windows * 5 word lengths
        assert_eq!(grid.len(), 20);
    }

    #[test]
    fn min_window_one_above_max_gives_an_empty_grid() {
        let grid = ParameterGrid::new(24, 25, 1f64).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn min_window_too_large_fails() {
        let res = ParameterGrid::new(24, 26, 1f64);
        assert!(matches!(
            res,
            Err(CbossError::InvalidWindow { min_window: 26, max_window: 24, .. })
        ));
    }

    #[test]
    fn sampling_drains_the_grid() {
        let mut grid = ParameterGrid::new(20, 10, 1f64).unwrap();
        let total = grid.len();
        let mut rng = StdRng::seed_from_u64(1);
        let mut n = 0;
        while grid.sample(&mut rng).is_some() {
            n += 1;
        }
        assert_eq!(n, total);
        assert!(grid.sample(&mut rng).is_none());
    }
}
