//! Exports the ensemble, its configuration, and the learner traits.
//!
pub use crate::cboss::{
    ContractableBoss,
    CbossConfig,
    FittedCboss,
};


pub use crate::base_learner::{
    // Base learner traits
    BaseLearner,
    SeriesClassifier,

    // Reference learner
    PaaNearestNeighbor,
    PaaNNClassifier,
};


pub use crate::ensemble::{
    Candidate,
    TrainedMember,
};


pub use crate::sample::{
    Series,
    ClassIndex,
};


pub use crate::error::CbossError;
