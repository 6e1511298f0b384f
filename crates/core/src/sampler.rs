//! Seeded selection without replacement.
//!
//! The RNG is built fresh for every call from the seed's SHA-256 digest, and
//! candidates are ordered by display name before shuffling, so the result
//! depends only on (set of names, seed, k).

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::error::{CoreError, CoreResult};
use crate::hashing::sha256_bytes;
use crate::record::CharacterRecord;
use crate::seed::TimeSeed;

/// Default number of characters per selection.
pub const DEFAULT_SELECTION_SIZE: usize = 30;

/// Build the RNG for a seed.
pub fn rng_for(seed: &TimeSeed) -> ChaCha20Rng {
    ChaCha20Rng::from_seed(sha256_bytes(seed.as_str().as_bytes()))
}

/// Draw `k` distinct records from `eligible` for `seed`.
///
/// Display names are assumed unique (the record store guarantees it). The
/// input order of `eligible` has no effect on the result.
pub fn sample<'a>(
    eligible: &'a [CharacterRecord],
    seed: &TimeSeed,
    k: usize,
) -> CoreResult<Vec<&'a CharacterRecord>> {
    if eligible.len() < k {
        return Err(CoreError::InsufficientData {
            required: k,
            available: eligible.len(),
        });
    }

    let mut candidates: Vec<&CharacterRecord> = eligible.iter().collect();
    candidates.sort_by(|a, b| a.name().cmp(b.name()));

    let mut rng = rng_for(seed);
    let (chosen, _) = candidates.partial_shuffle(&mut rng, k);

    Ok(chosen.to_vec())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use assert_matches::assert_matches;

    use super::*;
    use crate::test_helpers::{fixture, names};

    #[test]
    fn same_seed_same_sequence() {
        let records = fixture(40);
        let seed = TimeSeed::new("202501011200");

        let first = sample(&records, &seed, 30).expect("sample");
        let second = sample(&records, &seed, 30).expect("sample");
        assert_eq!(names(&first), names(&second));
    }

    #[test]
    fn input_order_does_not_matter() {
        let records = fixture(40);
        let mut reversed = records.clone();
        reversed.reverse();
        let mut rotated = records.clone();
        rotated.rotate_left(13);
        let seed = TimeSeed::new("202501011200");

        let expected = names(&sample(&records, &seed, 30).expect("sample"));
        assert_eq!(names(&sample(&reversed, &seed, 30).expect("sample")), expected);
        assert_eq!(names(&sample(&rotated, &seed, 30).expect("sample")), expected);
    }

    #[test]
    fn selection_is_distinct_members_of_input() {
        let records = fixture(40);
        let all: HashSet<&str> = records.iter().map(|r| r.name()).collect();

        let chosen = sample(&records, &TimeSeed::new("202501011200"), 30).expect("sample");
        assert_eq!(chosen.len(), 30);

        let unique: HashSet<&str> = chosen.iter().map(|r| r.name()).collect();
        assert_eq!(unique.len(), 30);
        assert!(unique.is_subset(&all));
    }

    #[test]
    fn distinct_seeds_give_distinct_selections() {
        let records = fixture(40);
        for minute in 0..25 {
            let a = TimeSeed::new(format!("2025010112{minute:02}"));
            let b = TimeSeed::new(format!("2025010112{:02}", minute + 30));
            let left = names(&sample(&records, &a, 30).expect("sample"));
            let right = names(&sample(&records, &b, 30).expect("sample"));
            assert_ne!(left, right, "seeds {a} and {b} collided");
        }
    }

    #[test]
    fn exact_size_is_a_permutation() {
        let records = fixture(30);
        let chosen = sample(&records, &TimeSeed::new("202501011200"), 30).expect("sample");
        let mut sorted = names(&chosen);
        sorted.sort();
        let expected: Vec<String> = records.iter().map(|r| r.name().to_string()).collect();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn too_few_records_is_rejected() {
        let records = fixture(29);
        let result = sample(&records, &TimeSeed::new("202501011200"), 30);
        assert_matches!(
            result,
            Err(CoreError::InsufficientData {
                required: 30,
                available: 29
            })
        );
    }

    #[test]
    fn zero_size_selection_is_empty() {
        let chosen = sample(&[], &TimeSeed::new("202501011200"), 0).expect("sample");
        assert!(chosen.is_empty());
    }
}
