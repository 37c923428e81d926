use std::ops::Index;

use crate::error::{CbossError, Result};


/// A collection of univariate, equal-length time series.
/// The values are stored row-major:
/// the `i`-th series occupies `data[i * len..(i + 1) * len]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    data: Vec<f64>,
    n_instances: usize,
    series_length: usize,
}


impl Series {
    /// Construct a [`Series`] from a buffer shaped
    /// `(n_instances, n_channels, series_length)`.
    /// Only single-channel input is supported.
    pub fn from_shape_vec(
        shape: (usize, usize, usize),
        data: Vec<f64>,
    ) -> Result<Self>
    {
        let (n_instances, n_channels, series_length) = shape;
        if n_channels != 1 {
            return Err(CbossError::UnsupportedInput(format!(
                "expected a single channel, got {n_channels} channels"
            )));
        }
        let expected = n_instances * series_length;
        if data.len() != expected {
            return Err(CbossError::ShapeMismatch {
                expected: format!("{expected} values"),
                actual: format!("{} values", data.len()),
            });
        }
        Ok(Self { data, n_instances, series_length })
    }


    /// Construct a [`Series`] from one vector per instance.
    /// Every row must have the same length.
    pub fn from_rows<T>(rows: &[T]) -> Result<Self>
        where T: AsRef<[f64]>,
    {
        let n_instances = rows.len();
        let series_length = rows.first()
            .map(|row| row.as_ref().len())
            .unwrap_or(0);

        let mut data = Vec::with_capacity(n_instances * series_length);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != series_length {
                return Err(CbossError::UnsupportedInput(format!(
                    "unequal length series: row 0 has {series_length} \
                     values, row {i} has {}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, n_instances, series_length })
    }


    /// Returns the pair `(n_instances, series_length)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_instances, self.series_length)
    }


    /// Returns the number of series.
    #[inline]
    pub fn n_instances(&self) -> usize {
        self.n_instances
    }


    /// Returns the length shared by all series.
    #[inline]
    pub fn series_length(&self) -> usize {
        self.series_length
    }


    /// Returns the `row`-th series.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.series_length;
        &self.data[start..start + self.series_length]
    }


    /// Returns an iterator over the series.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.n_instances).map(move |i| self.row(i))
    }


    /// Returns a new [`Series`] holding the given rows, in the given order.
    pub fn select(&self, indices: &[usize]) -> Self {
        let mut data = Vec::with_capacity(indices.len() * self.series_length);
        for &i in indices {
            data.extend_from_slice(self.row(i));
        }
        Self {
            data,
            n_instances: indices.len(),
            series_length: self.series_length,
        }
    }
}


impl Index<usize> for Series {
    type Output = [f64];
    fn index(&self, row: usize) -> &Self::Output {
        self.row(row)
    }
}
