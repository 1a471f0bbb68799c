//! Uniform random selection used by rollouts and tie-breaking.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Draws uniformly random elements from slices.
///
/// Every search owns one; seed it for reproducible runs.
#[derive(Debug, Clone)]
pub struct TieBreaker<R = ChaCha20Rng> {
    rng: R,
}

impl TieBreaker<ChaCha20Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }
}

impl Default for TieBreaker<ChaCha20Rng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> TieBreaker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A uniformly random element, or `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// The highest-scoring element, with exact ties broken uniformly at
    /// random. `None` for an empty slice.
    pub fn pick_best<'a, T, F>(&mut self, items: &'a [T], mut score: F) -> Option<&'a T>
    where
        F: FnMut(&T) -> f64,
    {
        let mut best = f64::NEG_INFINITY;
        let mut tied: Vec<usize> = Vec::new();

        for (i, item) in items.iter().enumerate() {
            let s = score(item);
            if s > best {
                best = s;
                tied.clear();
                tied.push(i);
            } else if s == best {
                tied.push(i);
            }
        }

        let &index = self.pick(&tied)?;
        Some(&items[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_empty() {
        let mut picker = TieBreaker::seeded(1);
        let empty: [u8; 0] = [];
        assert!(picker.pick(&empty).is_none());
        assert!(picker.pick_best(&empty, |_| 0.0).is_none());
    }

    #[test]
    fn test_pick_single() {
        let mut picker = TieBreaker::seeded(1);
        for _ in 0..10 {
            assert_eq!(picker.pick(&[7]), Some(&7));
        }
    }

    #[test]
    fn test_pick_is_roughly_uniform() {
        let mut picker = TieBreaker::seeded(42);
        let items = [0usize, 1, 2, 3];
        let mut counts = [0u32; 4];
        for _ in 0..4000 {
            counts[*picker.pick(&items).unwrap()] += 1;
        }
        for count in counts {
            assert!((800..1200).contains(&count), "counts: {counts:?}");
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let items: Vec<u32> = (0..100).collect();
        let mut a = TieBreaker::seeded(9);
        let mut b = TieBreaker::seeded(9);
        for _ in 0..50 {
            assert_eq!(a.pick(&items), b.pick(&items));
        }
    }

    #[test]
    fn test_pick_best_unique_maximum() {
        let mut picker = TieBreaker::seeded(3);
        let items = [1.0, 5.0, 2.0];
        for _ in 0..20 {
            assert_eq!(picker.pick_best(&items, |x| *x), Some(&5.0));
        }
    }

    #[test]
    fn test_pick_best_breaks_ties_randomly() {
        let mut picker = TieBreaker::seeded(11);
        let items = [(0, 1.0), (1, 3.0), (2, 3.0), (3, -1.0)];
        let mut seen = [0u32; 4];
        for _ in 0..1000 {
            let (id, _) = picker.pick_best(&items, |(_, s)| *s).unwrap();
            seen[*id] += 1;
        }
        assert_eq!(seen[0], 0);
        assert_eq!(seen[3], 0);
        assert!(seen[1] > 400 && seen[2] > 400, "seen: {seen:?}");
    }
}
