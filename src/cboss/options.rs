use serde::{Serialize, Deserialize};

use crate::{
    common::{checker, constants::*},
    error::Result,
};


/// The recognized options of [`ContractableBoss`](crate::ContractableBoss).
///
/// Missing fields take their default value when deserializing:
/// ```
/// use cboss::CbossConfig;
///
/// let config = CbossConfig::from_json(r#"{ "max_ensemble_size": 10 }"#)
///     .unwrap();
/// assert_eq!(config.max_ensemble_size, 10);
/// assert_eq!(config.n_parameter_samples, 250);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CbossConfig {
    /// Number of candidates to try. Ignored under a time contract.
    pub n_parameter_samples: usize,
    /// Maximal number of base learners retained.
    pub max_ensemble_size: usize,
    /// Maximal window length as a proportion of the series length.
    pub max_win_len_prop: f64,
    /// Minimal window length.
    pub min_window: usize,
    /// Time contract in minutes. `0` disables the contract.
    pub time_limit_in_minutes: f64,
    /// Degree of parallelism. `-1` uses every core,
    /// values `<= 1` run sequentially.
    pub n_jobs: i32,
    /// Seed of every random draw. `None` draws a seed from entropy.
    pub random_state: Option<u64>,
}


impl Default for CbossConfig {
    fn default() -> Self {
        Self {
            n_parameter_samples:   DEFAULT_N_PARAMETER_SAMPLES,
            max_ensemble_size:     DEFAULT_MAX_ENSEMBLE_SIZE,
            max_win_len_prop:      DEFAULT_MAX_WIN_LEN_PROP,
            min_window:            DEFAULT_MIN_WINDOW,
            time_limit_in_minutes: DEFAULT_TIME_LIMIT_MINUTES,
            n_jobs:                DEFAULT_N_JOBS,
            random_state:          None,
        }
    }
}


impl CbossConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }


    /// Serialize the configuration into a JSON string.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }


    /// Check every option that does not depend on the data.
    /// The window bounds are checked against the series length at fit time.
    pub fn validate(&self) -> Result<()> {
        checker::max_ensemble_size(self.max_ensemble_size)?;
        checker::max_win_len_prop(self.max_win_len_prop)?;
        checker::min_window(self.min_window)?;
        checker::time_limit(self.time_limit_in_minutes)?;
        Ok(())
    }
}
