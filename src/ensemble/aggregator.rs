//! Combines the retained members into class probabilities.
use rand::Rng;

use crate::{
    Series,
    SeriesClassifier,
    common::{checker, utils},
    error::{CbossError, Result},
};
use super::{
    selector::TrainedMember,
    workers::Workers,
};


/// Adds `weight` to the bucket of class `k` of `row`.
#[inline(always)]
fn vote(row: &mut [f64], k: usize, weight: f64) -> Result<()> {
    let n_classes = row.len();
    let bucket = row.get_mut(k)
        .ok_or_else(|| {
            CbossError::BaseLearner(format!(
                "predicted class index {k} but there are {n_classes} classes"
            ))
        })?;
    *bucket += weight;
    Ok(())
}


/// Computes the class probabilities of every series in `series`.
///
/// Every member votes for one class with its weight.
/// Each row is divided by `weight_sum`, the total weight of the ensemble.
/// An empty ensemble yields uniform rows.
pub fn predict_proba<M>(
    members: &[TrainedMember<M>],
    weight_sum: f64,
    series: &Series,
    n_classes: usize,
    workers: &Workers,
) -> Result<Vec<Vec<f64>>>
    where M: SeriesClassifier,
{
    let n_instances = series.n_instances();
    if members.is_empty() || weight_sum <= 0f64 {
        log::warn!("predicting with an empty ensemble; returning uniform rows");
        return Ok(vec![utils::uniform(n_classes); n_instances]);
    }

    let predictions = workers.try_map(members, |member| {
        member.model().predict_all(series)
    })?;

    let mut sums = vec![vec![0f64; n_classes]; n_instances];
    for (member, preds) in members.iter().zip(predictions) {
        for (row, k) in sums.iter_mut().zip(preds) {
            vote(row, k, member.weight())?;
        }
    }

    sums.iter_mut()
        .for_each(|row| {
            utils::scale(row, weight_sum);
            checker::probability_row(row);
        });
    Ok(sums)
}


/// Computes the out-of-bag class probabilities
/// of the `n_instances` training instances.
///
/// For instance `i`, every member whose subsample contains `i`
/// votes with its leave-one-out prediction of `i`.
/// The row is divided by the total weight of those members.
/// An instance no member was fit on gets the uniform distribution.
pub fn train_proba<M>(
    members: &[TrainedMember<M>],
    n_instances: usize,
    n_classes: usize,
    workers: &Workers,
) -> Result<Vec<Vec<f64>>>
    where M: SeriesClassifier,
{
    // (instance, member, position in the member's subsample)
    let routes = (0..n_instances)
        .flat_map(move |i| {
            members.iter()
                .enumerate()
                .filter_map(move |(k, m)| m.local_index(i).map(|j| (i, k, j)))
        })
        .collect::<Vec<_>>();

    let predictions = workers.try_map(&routes, |&(_, k, j)| {
        members[k].model().train_predict(j)
    })?;

    let mut sums = vec![vec![0f64; n_classes]; n_instances];
    let mut divisors = vec![0f64; n_instances];
    for (&(i, k, _), p) in routes.iter().zip(predictions) {
        let weight = members[k].weight();
        vote(&mut sums[i], p, weight)?;
        divisors[i] += weight;
    }

    for (i, (row, &divisor)) in sums.iter_mut().zip(&divisors).enumerate() {
        if divisor == 0f64 {
            log::trace!("instance {i} is in no member's subsample");
            *row = utils::uniform(n_classes);
        } else {
            utils::scale(row, divisor);
            checker::probability_row(row);
        }
    }
    Ok(sums)
}


/// Picks the most probable class of every row.
/// Ties are broken uniformly at random with `rng`.
pub fn break_ties<R: Rng>(probas: &[Vec<f64>], rng: &mut R) -> Vec<usize> {
    probas.iter()
        .map(|row| utils::argmax_random_tie(row, rng))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Candidate;
    use crate::ensemble::member_weight;

    /// Predicts a constant class on unseen series
    /// and a fixed leave-one-out answer per training position.
    struct Constant {
        test: usize,
        loo: Vec<usize>,
    }

    impl SeriesClassifier for Constant {
        fn predict(&self, _: &Series, _: usize) -> Result<usize> {
            Ok(self.test)
        }

        fn train_predict(&self, j: usize) -> Result<usize> {
            Ok(self.loo[j])
        }
    }

    fn member(test: usize, subsample: Vec<usize>, loo: Vec<usize>, acc: f64)
        -> TrainedMember<Constant>
    {
        TrainedMember::new(
            Constant { test, loo },
            Candidate::new(4, 8, true),
            subsample,
            4,
            acc,
        )
    }

    fn series(n: usize) -> Series {
        Series::from_rows(&vec![vec![0f64; 4]; n]).unwrap()
    }

    #[test]
    fn test_time_votes_are_weighted() {
        let members = vec![
            member(0, vec![0, 1], vec![0, 0], 1f64),
            member(1, vec![0, 1], vec![0, 0], 0.5),
        ];
        let sum = members.iter().map(|m| m.weight()).sum::<f64>();
        let p = predict_proba(&members, sum, &series(2), 2, &Workers::sequential())
            .unwrap();
        let w1 = member_weight(0.5);
        for row in p {
            assert!((row[0] - 1f64 / (1f64 + w1)).abs() < 1e-12);
            assert!((row[1] - w1 / (1f64 + w1)).abs() < 1e-12);
        }
    }

    #[test]
    fn out_of_bag_uses_only_covering_members() {
        let members = vec![
            // covers instances 0 and 2
            member(0, vec![2, 0], vec![1, 0], 1f64),
            // covers instance 2 only
            member(0, vec![2], vec![2], 1f64),
        ];
        let p = train_proba(&members, 4, 3, &Workers::sequential()).unwrap();
        assert_eq!(p[0], vec![1f64, 0f64, 0f64]);
        assert_eq!(p[2], vec![0f64, 0.5, 0.5]);
        // instances 1 and 3 are in no subsample
        assert_eq!(p[1], vec![1f64 / 3f64; 3]);
        assert_eq!(p[3], vec![1f64 / 3f64; 3]);
    }

    #[test]
    fn unknown_class_index_is_an_error() {
        let members = vec![member(5, vec![0], vec![0], 1f64)];
        let res = predict_proba(&members, 1f64, &series(1), 2, &Workers::sequential());
        assert!(matches!(res, Err(CbossError::BaseLearner(_))));
    }

    #[test]
    fn empty_ensemble_is_uniform() {
        let members: Vec<TrainedMember<Constant>> = Vec::new();
        let p = predict_proba(&members, 0f64, &series(3), 4, &Workers::sequential())
            .unwrap();
        assert_eq!(p, vec![vec![0.25; 4]; 3]);
    }
}
