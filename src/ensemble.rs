//! The ensemble construction and selection machinery of cBOSS:
//! candidate enumeration, subsampling, leave-one-out scoring,
//! bounded selection, the search contract, and aggregation.

mod candidate;
mod workers;

/// Defines the hyper-parameter grid.
pub mod parameter_grid;

/// Defines the subsample drawn for each candidate.
pub mod subsample;

/// Defines the leave-one-out accuracy estimators.
pub mod accuracy;

/// Defines the bounded ensemble.
pub mod selector;

/// Defines the stopping rule of the search.
pub mod contract;

/// Defines the weighted vote over the retained members.
pub mod aggregator;

pub use candidate::Candidate;
pub use workers::Workers;
pub use parameter_grid::ParameterGrid;
pub use subsample::SubsampleSelector;
pub use accuracy::{
    AccuracyEstimator,
    SequentialEstimator,
    ParallelEstimator,
};
pub use selector::{
    member_weight,
    Ensemble,
    Selection,
    TrainedMember,
};
pub use contract::{
    SearchContract,
    SearchProgress,
};
