//! Draws the training subsample of each candidate.
use rand::Rng;
use rand::seq::index;

use crate::common::constants::SUBSAMPLE_RATIO;


/// Draws `floor(0.7 * n_instances)` distinct instance indices,
/// independently for every call.
#[derive(Debug, Clone, Copy)]
pub struct SubsampleSelector {
    n_instances: usize,
    size: usize,
}


impl SubsampleSelector {
    /// Construct a new selector over `n_instances` training instances.
    #[inline]
    pub fn new(n_instances: usize) -> Self {
        let size = (n_instances as f64 * SUBSAMPLE_RATIO) as usize;
        Self { n_instances, size }
    }


    /// Returns the number of indices each draw returns.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }


    /// Returns the number of instances drawn from.
    #[inline]
    pub fn n_instances(&self) -> usize {
        self.n_instances
    }


    /// Draws a subsample without replacement.
    /// The order of the returned indices is the order
    /// the base learner sees its training instances in.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        index::sample(rng, self.n_instances, self.size).into_vec()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn size_is_seventy_percent_rounded_down() {
        assert_eq!(SubsampleSelector::new(10).size(), 7);
        assert_eq!(SubsampleSelector::new(9).size(), 6);
        assert_eq!(SubsampleSelector::new(2).size(), 1);
    }

    #[test]
    fn draws_are_distinct_and_in_range() {
        let selector = SubsampleSelector::new(50);
        let mut rng = StdRng::seed_from_u64(3);
        let ix = selector.draw(&mut rng);
        assert_eq!(ix.len(), 35);
        let set = ix.iter().copied().collect::<HashSet<_>>();
        assert_eq!(set.len(), 35);
        assert!(ix.iter().all(|&i| i < 50));
    }
}
