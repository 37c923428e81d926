use serde::{Serialize, Deserialize};

use crate::error::{CbossError, Result};


/// A bijection between the labels observed in training data
/// and the dense indices `0..n_classes`.
/// Labels are sorted in ascending order,
/// so the smallest label gets index `0`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassIndex<L> {
    classes: Vec<L>,
}


impl<L> ClassIndex<L>
    where L: Ord + Clone,
{
    /// Construct the class index from the training labels.
    pub fn fit(labels: &[L]) -> Self {
        let mut classes = labels.to_vec();
        classes.sort();
        classes.dedup();
        Self { classes }
    }


    /// Returns the dense index of `label`, if `label` was seen in training.
    #[inline]
    pub fn index_of(&self, label: &L) -> Option<usize> {
        self.classes.binary_search(label).ok()
    }


    /// Encodes every label into its dense index.
    pub fn encode(&self, labels: &[L]) -> Result<Vec<usize>> {
        labels.iter()
            .enumerate()
            .map(|(i, label)| {
                self.index_of(label)
                    .ok_or_else(|| CbossError::ShapeMismatch {
                        expected: "a label seen during fit".into(),
                        actual: format!("unknown label at position {i}"),
                    })
            })
            .collect()
    }
}


impl<L> ClassIndex<L> {
    /// Returns the label of the dense index `k`.
    #[inline]
    pub fn label(&self, k: usize) -> &L {
        &self.classes[k]
    }


    /// Returns the sorted, unique labels.
    #[inline]
    pub fn classes(&self) -> &[L] {
        &self.classes[..]
    }


    /// Returns the number of classes.
    #[inline]
    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }
}
