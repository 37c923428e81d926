//! This file provides some small numeric helpers.
use rand::Rng;


/// Returns every index whose entry attains the maximal value.
/// The indices are in ascending order.
pub fn argmax_all(arr: &[f64]) -> Vec<usize> {
    let max = arr.iter()
        .copied()
        .fold(f64::MIN, f64::max);
    arr.iter()
        .enumerate()
        .filter_map(|(i, &a)| if a == max { Some(i) } else { None })
        .collect()
}


/// Returns an index attaining the maximal value of `arr`.
/// Ties are broken uniformly at random with `rng`.
pub fn argmax_random_tie<R: Rng>(arr: &[f64], rng: &mut R) -> usize {
    let candidates = argmax_all(arr);
    assert!(
        !candidates.is_empty(),
        "failed to execute argmax. array is {arr:?}"
    );
    candidates[rng.gen_range(0..candidates.len())]
}


/// Returns the uniform distribution over `n_classes` classes.
#[inline(always)]
pub fn uniform(n_classes: usize) -> Vec<f64> {
    vec![1f64 / n_classes as f64; n_classes]
}


/// Divides every entry of `items` by `z`.
#[inline(always)]
pub fn scale(items: &mut [f64], z: f64) {
    assert!(z > 0f64, "cannot scale by a non-positive value {z}");
    items.iter_mut()
        .for_each(|item| { *item /= z; });
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_argmax_all_single() {
        assert_eq!(argmax_all(&[0.1, 0.7, 0.2]), vec![1]);
    }

    #[test]
    fn test_argmax_all_ties() {
        assert_eq!(argmax_all(&[0.4, 0.2, 0.4]), vec![0, 2]);
    }

    #[test]
    fn test_argmax_random_tie_stays_in_the_tie() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            let k = argmax_random_tie(&[0.4, 0.2, 0.4], &mut rng);
            assert!(k == 0 || k == 2, "got {k}");
        }
    }

    #[test]
    fn test_uniform() {
        let u = uniform(4);
        assert_eq!(u, vec![0.25; 4]);
    }

    #[test]
    fn test_scale() {
        let mut v = vec![1f64, 3f64];
        scale(&mut v, 4f64);
        assert_eq!(v, vec![0.25, 0.75]);
    }
}
