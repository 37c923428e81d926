//! The contractable BOSS ensemble and its fitted model.

mod options;
mod cboss_algorithm;
mod fitted;

pub use options::CbossConfig;
pub use cboss_algorithm::ContractableBoss;
pub use fitted::FittedCboss;
