//! Containers for the training/test series and their labels.

mod series;
mod class_index;

pub use series::Series;
pub use class_index::ClassIndex;
