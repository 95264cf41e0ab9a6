//! # mbakit-bench: Benchmarks for mbakit
//!
//! Deterministic inputs shared by the criterion benches.
//!
//! ## Benchmarks
//!
//! - **text**: cleaning, counting, number extraction, similarity
//! - **stats**: construction, spread, mode, frequency distribution
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench -p mbakit-bench
//!
//! # Save baseline for comparison
//! cargo bench -p mbakit-bench --bench text -- --save-baseline main
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Fragments mixing words, markup, links, digits, and punctuation.
const FRAGMENTS: [&str; 12] = [
    "I love teaching.",
    "%tea@cher%,",
    "revenue",
    "grew",
    "12%",
    "<b>growth</b>",
    "https://example.com/report",
    "[draft]",
    "the",
    "quarter\n",
    "sales@acme.com",
    "-42",
];

/// Seed shared by every generator.
const SEED: u64 = 42;

fn bench_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(SEED)
}

/// A text of `words` fragments chosen from a fixed seed.
pub fn lesson_text(words: usize) -> String {
    let mut rng = bench_rng();
    let mut text = String::new();
    for _ in 0..words {
        if let Some(fragment) = FRAGMENTS.choose(&mut rng) {
            text.push_str(fragment);
            text.push(' ');
        }
    }
    text
}

/// `len` integer ages between 18 and 65 from a fixed seed.
pub fn age_sample(len: usize) -> Vec<f64> {
    let mut rng = bench_rng();
    (0..len).map(|_| f64::from(rng.gen_range(18_u32..=65))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_are_repeatable() {
        assert_eq!(lesson_text(50), lesson_text(50));
        assert_eq!(age_sample(50), age_sample(50));
    }

    #[test]
    fn ages_stay_in_range() {
        assert!(age_sample(1000).iter().all(|age| (18.0..=65.0).contains(age)));
    }

    #[test]
    fn text_has_one_fragment_per_word() {
        let text = lesson_text(40);
        assert!(text.matches(' ').count() >= 40);
        assert!(FRAGMENTS.iter().any(|fragment| text.contains(fragment)));
    }
}
