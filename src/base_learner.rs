//! The files in `base_learner/` directory defines
//! the `BaseLearner` trait and a reference base learner.

/// Provides the `BaseLearner` and `SeriesClassifier` traits.
pub mod core;

/// Defines the windowed PAA nearest-neighbor learner.
pub mod paa_nn;

pub use self::core::{
    BaseLearner,
    SeriesClassifier,
};

pub use self::paa_nn::{
    PaaNearestNeighbor,
    PaaNNClassifier,
};
