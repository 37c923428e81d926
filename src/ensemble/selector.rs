//! Bounded, accuracy-weighted retention of base learners.
use fixedbitset::FixedBitSet;

use crate::{
    Candidate,
    common::constants::{WEIGHT_EXPONENT, WEIGHT_FLOOR},
};


/// Returns the ensemble weight of a member with the given accuracy:
/// `accuracy^4` if the accuracy is positive,
/// a tiny positive floor otherwise.
#[inline(always)]
pub fn member_weight(accuracy: f64) -> f64 {
    if accuracy > 0f64 {
        accuracy.powi(WEIGHT_EXPONENT)
    } else {
        WEIGHT_FLOOR
    }
}


/// A fitted base learner together with the data it was fit on
/// and its estimated quality.
#[derive(Debug, Clone)]
pub struct TrainedMember<M> {
    model: M,
    candidate: Candidate,
    subsample: Vec<usize>,
    membership: FixedBitSet,
    accuracy: f64,
    weight: f64,
}


impl<M> TrainedMember<M> {
    /// Bind `model` to its subsample and estimated accuracy.
    /// `n_instances` is the size of the full training set.
    pub fn new(
        model: M,
        candidate: Candidate,
        subsample: Vec<usize>,
        n_instances: usize,
        accuracy: f64,
    ) -> Self
    {
        let mut membership = FixedBitSet::with_capacity(n_instances);
        subsample.iter()
            .for_each(|&i| { membership.put(i); });
        let weight = member_weight(accuracy);
        Self { model, candidate, subsample, membership, accuracy, weight }
    }


    /// Returns the fitted base learner.
    #[inline]
    pub fn model(&self) -> &M {
        &self.model
    }


    /// Returns the hyper-parameters of this member.
    #[inline]
    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }


    /// Returns the training instances of this member,
    /// in the order the base learner saw them.
    #[inline]
    pub fn subsample(&self) -> &[usize] {
        &self.subsample[..]
    }


    /// Returns the position of the training instance `i`
    /// inside this member's subsample, if it was drawn.
    pub fn local_index(&self, i: usize) -> Option<usize> {
        if !self.membership.contains(i) {
            return None;
        }
        self.subsample.iter().position(|&j| j == i)
    }


    /// Returns the estimated leave-one-out accuracy.
    #[inline]
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }


    /// Returns the ensemble weight.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}


/// The outcome of [`Ensemble::offer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The ensemble was not full; the member was appended at this slot.
    Appended(usize),
    /// The member replaced the weakest member at this slot.
    Replaced(usize),
    /// The member was not better than the weakest member.
    Rejected,
}


/// A fixed-capacity set of [`TrainedMember`]s
/// with a parallel weight array.
///
/// Until the capacity is reached every offered member is kept.
/// Afterwards a member is kept only if its accuracy
/// exceeds the lowest retained accuracy,
/// in which case it overwrites the first member attaining that minimum.
#[derive(Debug, Clone)]
pub struct Ensemble<M> {
    capacity: usize,
    members: Vec<TrainedMember<M>>,
    weights: Vec<f64>,
    weight_sum: f64,
    lowest_acc: f64,
    lowest_idx: usize,
}


impl<M> Ensemble<M> {
    /// Construct an empty ensemble holding at most `capacity` members.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "an ensemble must hold at least one member");
        Self {
            capacity,
            members: Vec::with_capacity(capacity),
            weights: Vec::with_capacity(capacity),
            weight_sum: 0f64,
            lowest_acc: 1f64,
            lowest_idx: 0,
        }
    }


    /// Returns `true` if no more member can be appended.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }


    /// Returns the accuracy a new candidate must beat to be worth
    /// evaluating completely:
    /// `0` while the ensemble is filling up,
    /// the lowest retained accuracy afterwards.
    #[inline]
    pub fn threshold(&self) -> f64 {
        if self.is_full() { self.lowest_acc } else { 0f64 }
    }


    /// Returns the pair `(lowest accuracy, its slot)`.
    /// While no member has an accuracy below `1`,
    /// the pair is `(1, 0)`.
    #[inline]
    pub fn lowest(&self) -> (f64, usize) {
        (self.lowest_acc, self.lowest_idx)
    }


    /// Offers a scored member to the ensemble.
    ///
    /// Time complexity: `O(k)` on replacement,
    /// where `k` is the capacity.
    pub fn offer(&mut self, member: TrainedMember<M>) -> Selection {
        let accuracy = member.accuracy;
        let selection = if !self.is_full() {
            let slot = self.members.len();
            if accuracy < self.lowest_acc {
                self.lowest_acc = accuracy;
                self.lowest_idx = slot;
            }
            self.weights.push(member.weight);
            self.members.push(member);
            Selection::Appended(slot)
        } else if accuracy > self.lowest_acc {
            let slot = self.lowest_idx;
            self.weights[slot] = member.weight;
            self.members[slot] = member;
            (self.lowest_acc, self.lowest_idx) = self.worst();
            Selection::Replaced(slot)
        } else {
            Selection::Rejected
        };

        if selection != Selection::Rejected {
            self.weight_sum = self.weights.iter().sum::<f64>();
        }
        selection
    }


    /// Full scan for the first member attaining the lowest accuracy.
    fn worst(&self) -> (f64, usize) {
        self.members.iter()
            .enumerate()
            .fold((1f64, 0), |(acc, idx), (i, m)| {
                if m.accuracy < acc { (m.accuracy, i) } else { (acc, idx) }
            })
    }


    /// Returns the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }


    /// Returns `true` if the ensemble has no member.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }


    /// Returns the maximal number of members.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }


    /// Returns the members.
    #[inline]
    pub fn members(&self) -> &[TrainedMember<M>] {
        &self.members[..]
    }


    /// Returns the member weights, in member order.
    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights[..]
    }


    /// Returns the sum of the member weights.
    #[inline]
    pub fn weight_sum(&self) -> f64 {
        self.weight_sum
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn member(accuracy: f64) -> TrainedMember<()> {
        TrainedMember::new(
            (), Candidate::new(10, 8, true), vec![0, 2], 4, accuracy,
        )
    }

    #[test]
    fn weight_is_fourth_power_or_floor() {
        assert_eq!(member_weight(0.5), 0.0625);
        assert_eq!(member_weight(0f64), WEIGHT_FLOOR);
        assert_eq!(member_weight(-1f64), WEIGHT_FLOOR);
    }

    #[test]
    fn local_index_routes_through_the_subsample() {
        let m = TrainedMember::new(
            (), Candidate::new(10, 8, true), vec![3, 0, 2], 5, 0.5,
        );
        assert_eq!(m.local_index(0), Some(1));
        assert_eq!(m.local_index(2), Some(2));
        assert_eq!(m.local_index(1), None);
        assert_eq!(m.local_index(4), None);
    }

    #[test]
    fn fills_up_then_replaces_the_weakest() {
        let mut ensemble = Ensemble::with_capacity(3);
        assert_eq!(ensemble.threshold(), 0f64);
        assert_eq!(ensemble.offer(member(0.7)), Selection::Appended(0));
        assert_eq!(ensemble.offer(member(0.5)), Selection::Appended(1));
        assert_eq!(ensemble.offer(member(0.9)), Selection::Appended(2));
        assert_eq!(ensemble.threshold(), 0.5);

        assert_eq!(ensemble.offer(member(0.4)), Selection::Rejected);
        assert_eq!(ensemble.offer(member(0.5)), Selection::Rejected);
        assert_eq!(ensemble.offer(member(0.8)), Selection::Replaced(1));
        assert_eq!(ensemble.lowest(), (0.7, 0));
        assert_eq!(ensemble.len(), 3);
    }

    #[test]
    fn ties_replace_the_first_seen() {
        let mut ensemble = Ensemble::with_capacity(2);
        ensemble.offer(member(0.6));
        ensemble.offer(member(0.6));
        assert_eq!(ensemble.offer(member(0.7)), Selection::Replaced(0));
        assert_eq!(ensemble.offer(member(0.8)), Selection::Replaced(1));
    }

    #[test]
    fn weight_sum_is_recomputed() {
        let mut ensemble = Ensemble::with_capacity(1);
        ensemble.offer(member(0.6));
        assert_eq!(ensemble.weight_sum(), 0.6f64.powi(4));
        assert_eq!(ensemble.offer(member(0.8)), Selection::Replaced(0));
        assert_eq!(ensemble.weight_sum(), 0.8f64.powi(4));
        assert_eq!(ensemble.weights(), &[0.8f64.powi(4)]);
    }
}
