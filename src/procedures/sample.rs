/*!
Sampling a route from an atom pool.

Each assumption of a route is drawn in a round of two draws from a source of randomness:
1. A polarity, `true` with probability given by the polarity lean.
2. An atom, uniformly from the pool.

Atoms are drawn with replacement, so an atom may appear in a route more than once, with either polarity.

Draws are made from the given source and nothing else, so a route is determined by the state of the source and the pool.
*/

use rand::{seq::IndexedRandom, Rng};

use crate::{
    config::PolarityLean,
    misc::log::targets::{self},
    structures::{assumption::Assumption, atom::Atom, route::Route},
    types::err::{self},
};

/// Draws a route of `length` assumptions from `pool`.
///
/// If the pool is empty or the lean is not a probability an error is returned, and no draws are made.
///
/// ```rust
/// # use ccg_assumptions::procedures::sample::sample_route;
/// # use ccg_assumptions::generic::random::MinimalPCG32;
/// # use rand::SeedableRng;
/// let mut rng = MinimalPCG32::seed_from_u64(1210993);
/// let route = sample_route(&[5, 7], 3, 0.5, &mut rng).unwrap();
///
/// assert_eq!(route.len(), 3);
/// assert!(route.iter().all(|a| a.atom() == 5 || a.atom() == 7));
/// ```
pub fn sample_route(
    pool: &[Atom],
    length: usize,
    polarity_lean: PolarityLean,
    rng: &mut impl Rng,
) -> Result<Route, err::SampleError> {
    if pool.is_empty() {
        return Err(err::SampleError::EmptyPool);
    }

    if !(0.0..=1.0).contains(&polarity_lean) {
        return Err(err::SampleError::InvalidLean);
    }

    let mut route = Route::with_capacity(length);

    for round in 0..length {
        let polarity = rng.random_bool(polarity_lean);

        let atom = match pool.choose(rng) {
            Some(atom) => *atom,
            None => return Err(err::SampleError::EmptyPool),
        };

        let assumption = Assumption::new(atom, polarity);
        log::trace!(target: targets::SAMPLE, "Round {round}: {assumption}");
        route.push(assumption);
    }

    Ok(route)
}

#[cfg(test)]
mod sample_tests {
    use super::*;
    use crate::generic::random::MinimalPCG32;
    use rand::SeedableRng;

    #[test]
    fn empty_pool() {
        let mut rng = MinimalPCG32::seed_from_u64(0);
        assert_eq!(
            sample_route(&[], 3, 0.5, &mut rng),
            Err(err::SampleError::EmptyPool)
        );
    }

    #[test]
    fn no_draws_on_error() {
        let mut rng = MinimalPCG32::seed_from_u64(0);
        let mut untouched = MinimalPCG32::seed_from_u64(0);

        assert!(sample_route(&[], 3, 0.5, &mut rng).is_err());
        assert!(sample_route(&[1], 3, 1.5, &mut rng).is_err());
        assert!(sample_route(&[1], 3, f64::NAN, &mut rng).is_err());

        assert_eq!(rng.random::<u64>(), untouched.random::<u64>());
    }

    #[test]
    fn members_of_pool() {
        let mut rng = MinimalPCG32::seed_from_u64(73);
        let pool = [2, 3, 5, 7, 11];

        for _ in 0..64 {
            let route = sample_route(&pool, 3, 0.5, &mut rng).unwrap();
            assert_eq!(route.len(), 3);
            for assumption in &route {
                assert!(pool.contains(&assumption.atom()));
                assert!(pool.contains(&(assumption.as_int().abs() as Atom)));
            }
        }
    }

    #[test]
    fn singleton_pool() {
        let mut rng = MinimalPCG32::seed_from_u64(2);
        let route = sample_route(&[4], 3, 0.5, &mut rng).unwrap();

        assert!(route.iter().all(|a| a.atom() == 4));
    }

    #[test]
    fn fixed_polarity() {
        let mut rng = MinimalPCG32::seed_from_u64(2);

        let positive = sample_route(&[1, 2, 3], 3, 1.0, &mut rng).unwrap();
        assert!(positive.iter().all(|a| a.polarity()));

        let negative = sample_route(&[1, 2, 3], 3, 0.0, &mut rng).unwrap();
        assert!(negative.iter().all(|a| !a.polarity()));
    }

    #[test]
    fn both_polarities() {
        let mut rng = MinimalPCG32::seed_from_u64(1210993);
        let route = sample_route(&[1], 64, 0.5, &mut rng).unwrap();

        assert!(route.iter().any(|a| a.polarity()));
        assert!(route.iter().any(|a| !a.polarity()));
    }

    #[test]
    fn reproducible() {
        let pool = [5, 7, 9, 13];

        let mut rng = MinimalPCG32::seed_from_u64(1210993);
        let first = sample_route(&pool, 3, 0.5, &mut rng).unwrap();
        let second = sample_route(&pool, 3, 0.5, &mut rng).unwrap();

        let mut rng = MinimalPCG32::seed_from_u64(1210993);
        assert_eq!(sample_route(&pool, 3, 0.5, &mut rng), Ok(first));
        assert_eq!(sample_route(&pool, 3, 0.5, &mut rng), Ok(second));
    }
}
