//! Defines some common functions used in this library.

/// Defines default hyper-parameters and numeric constants.
pub mod constants;

/// Defines some useful functions such as tie-broken argmax.
pub mod utils;

/// Defines some checker functions.
pub(crate) mod checker;
