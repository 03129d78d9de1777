//! Reproducible random sampling for SMOG and FORCAST.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Build a generator from an optional seed.
///
/// `Some(seed)` always yields the same sequence; `None` draws from OS entropy.
pub fn rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Draw a fresh seed, for callers that want to report which seed they used.
pub fn fresh_seed() -> u64 {
    rand::random()
}

/// Pick up to `amount` items uniformly at random without replacement.
///
/// Returns every item (in a shuffled order) when the slice has `amount` or
/// fewer elements.
pub fn sample<'a, T>(items: &'a [T], amount: usize, rng: &mut ChaCha8Rng) -> Vec<&'a T> {
    items
        .choose_multiple(rng, amount.min(items.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn same_seed_same_sample() {
        let items: Vec<u32> = (0..500).collect();
        let a = sample(&items, 150, &mut rng(Some(7)));
        let b = sample(&items, 150, &mut rng(Some(7)));
        assert_eq!(a, b);
    }

    #[test]
    fn sample_has_no_repeats() {
        let items: Vec<u32> = (0..200).collect();
        let picked = sample(&items, 150, &mut rng(Some(1)));
        assert_eq!(picked.len(), 150);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 150);
    }

    #[test]
    fn small_population_is_taken_whole() {
        let items = ["a", "b", "c"];
        let mut picked = sample(&items, 30, &mut rng(Some(3)));
        picked.sort();
        assert_eq!(picked, vec![&"a", &"b", &"c"]);
    }

    #[test]
    fn empty_population() {
        let items: [u8; 0] = [];
        assert!(sample(&items, 10, &mut rng(None)).is_empty());
    }
}
