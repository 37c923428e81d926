//! This file defines some functions that checks some pre-conditions
//! E.g., the domain of each hyper-parameter.

use crate::error::{CbossError, Result};
use crate::common::constants::SIMPLEX_TOLERANCE;

use std::time::Duration;


/// Check the retention cap.
#[inline(always)]
pub(crate) fn max_ensemble_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(CbossError::InvalidParameter {
            name: "max_ensemble_size",
            reason: "the ensemble must keep at least one member".into(),
        });
    }
    Ok(())
}


/// Check the maximal window proportion; it must be in `(0, 1]`.
#[inline(always)]
pub(crate) fn max_win_len_prop(prop: f64) -> Result<()> {
    if !(prop > 0f64 && prop <= 1f64) {
        return Err(CbossError::InvalidParameter {
            name: "max_win_len_prop",
            reason: format!("must be in (0, 1]. got {prop}"),
        });
    }
    Ok(())
}


/// Check the time contract; it must be non-negative
/// and representable as a `Duration`.
#[inline(always)]
pub(crate) fn time_limit(minutes: f64) -> Result<()> {
    if !minutes.is_finite() || minutes < 0f64 {
        return Err(CbossError::InvalidParameter {
            name: "time_limit_in_minutes",
            reason: format!("must be a finite non-negative number. got {minutes}"),
        });
    }
    if Duration::try_from_secs_f64(minutes * 60f64).is_err() {
        return Err(CbossError::InvalidParameter {
            name: "time_limit_in_minutes",
            reason: format!("{minutes} minutes overflows a `Duration`"),
        });
    }
    Ok(())
}


/// Check the minimal window.
#[inline(always)]
pub(crate) fn min_window(window: usize) -> Result<()> {
    if window == 0 {
        return Err(CbossError::InvalidParameter {
            name: "min_window",
            reason: "window length must be positive".into(),
        });
    }
    Ok(())
}


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn training_sample(n_instances: usize, n_labels: usize)
    -> Result<()>
{
    if n_instances != n_labels {
        return Err(CbossError::ShapeMismatch {
            expected: format!("{n_instances} labels"),
            actual: format!("{n_labels} labels"),
        });
    }
    // The subsample keeps 70% of the instances,
    // so a single instance yields an empty subsample.
    if n_instances < 2 {
        return Err(CbossError::InsufficientData {
            required: 2,
            actual: n_instances,
        });
    }
    Ok(())
}


/// Check that a probability row sums to one.
#[inline(always)]
pub(crate) fn probability_row(row: &[f64]) {
    let sum = row.iter().sum::<f64>();
    assert!(
        (sum - 1f64).abs() < SIMPLEX_TOLERANCE,
        "sum(row[..]) = {sum}, row = {row:?}"
    );
}
