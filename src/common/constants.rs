//! Default hyper-parameters and numeric constants.

/// Default number of parameter candidates tried without a time contract.
pub const DEFAULT_N_PARAMETER_SAMPLES: usize = 250;
/// Default number of base learners retained.
pub const DEFAULT_MAX_ENSEMBLE_SIZE:   usize =  50;
/// Default minimal window length.
pub const DEFAULT_MIN_WINDOW:          usize =  10;
/// Default maximal window length as a proportion of the series length.
pub const DEFAULT_MAX_WIN_LEN_PROP:      f64 = 1f64;
/// Default time contract. `0` means no contract.
pub const DEFAULT_TIME_LIMIT_MINUTES:    f64 = 0f64;
/// Default degree of parallelism.
pub const DEFAULT_N_JOBS:                i32 = 1;

/// Word lengths searched, in the order they appear in the grid.
pub const WORD_LENGTHS:    [usize; 5] = [16, 14, 12, 10, 8];
/// Normalization flags searched, in the order they appear in the grid.
pub const NORM_OPTIONS:    [bool;  2] = [true, false];

/// Fraction of the training instances each base learner is fit on.
pub const SUBSAMPLE_RATIO:   f64 = 0.7;
/// Exponent applied to an accuracy to obtain a member weight.
pub const WEIGHT_EXPONENT:   i32 = 4;
/// Weight given to members whose accuracy is not positive.
pub const WEIGHT_FLOOR:      f64 = 1e-9;
/// Accuracy reported when leave-one-out evaluation was abandoned.
pub const ABANDONED_ACCURACY: f64 = -1f64;

/// The window grid has roughly `series_length / WINDOW_SEARCH_DIVISOR`
/// positions.
pub const WINDOW_SEARCH_DIVISOR: f64 = 4f64;

/// Tolerance used when checking that probability rows sum to one.
pub const SIMPLEX_TOLERANCE: f64 = 1e-5;

/// `n_jobs` value meaning "use every available core".
pub const ALL_CORES: i32 = -1;

pub(crate) const PRINT_WIDTH: usize = 60;
pub(crate) const STAT_WIDTH:  usize = (PRINT_WIDTH - 4) / 2;
