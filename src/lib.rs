#![warn(missing_docs)]

//!
//! A crate that provides the contractable BOSS (cBOSS) ensemble
//! for univariate time series classification.
//!
//! cBOSS searches a finite grid of hyper-parameters
//! `(window size, word length, normalize)` at random.
//! For each drawn candidate it
//!
//! - fits one base learner on a random 70% subsample,
//! - scores it by leave-one-out accuracy on that subsample,
//!   abandoning the scoring early once it cannot enter the ensemble, and
//! - keeps it if it beats the weakest retained member.
//!
//! The search stops after a fixed number of candidates,
//! or once a time contract elapsed.
//! Predictions are the vote of the retained members,
//! weighted by `accuracy^4`.
//!
//! The base learner is pluggable through [`BaseLearner`].
//! [`PaaNearestNeighbor`] is provided as a reference learner.

pub mod common;
pub mod error;
pub mod sample;
pub mod base_learner;
pub mod ensemble;
pub mod cboss;
pub mod prelude;

mod report;


pub use error::{CbossError, Result};

pub use sample::{Series, ClassIndex};

pub use base_learner::{
    BaseLearner,
    SeriesClassifier,
    PaaNearestNeighbor,
    PaaNNClassifier,
};

pub use ensemble::Candidate;

pub use cboss::{
    CbossConfig,
    ContractableBoss,
    FittedCboss,
};
