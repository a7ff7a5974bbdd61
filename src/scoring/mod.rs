pub mod embedding;

pub use embedding::{EmbeddingModel, ModelError};

use crate::util::round2;
use tracing::debug;

/// Semantic similarity between words, with knowledge of its own vocabulary
pub trait SimilarityModel {
    fn is_out_of_vocabulary(&self, word: &str) -> bool;

    /// Similarity in roughly `[-1, 1]`; real words usually land in `[0, 1]`
    fn similarity(&self, a: &str, b: &str) -> f64;
}

fn has_unknown_word<M: SimilarityModel + ?Sized>(model: &M, text: &str) -> bool {
    text.split_whitespace()
        .any(|word| model.is_out_of_vocabulary(word))
}

/// Mean semantic similarity between guesses and answers, rounded to two
/// decimals.
///
/// Mismatched or empty inputs score zero and an exact match scores one
/// without consulting the model. Pairs with an out-of-vocabulary word on
/// either side are left out of the total but still count towards the
/// divisor.
pub fn calculate_score<G, A, M>(guesses: &[G], answers: &[A], model: &M) -> f64
where
    G: AsRef<str>,
    A: AsRef<str>,
    M: SimilarityModel + ?Sized,
{
    if guesses.len() != answers.len() || answers.is_empty() {
        return 0.0;
    }

    if guesses
        .iter()
        .zip(answers)
        .all(|(g, a)| g.as_ref() == a.as_ref())
    {
        return 1.0;
    }

    let mut total = 0.0;
    for (guess, answer) in guesses.iter().zip(answers) {
        let (guess, answer) = (guess.as_ref(), answer.as_ref());
        if has_unknown_word(model, guess) || has_unknown_word(model, answer) {
            debug!(guess, answer, "skipping out-of-vocabulary pair");
            continue;
        }
        let similarity = model.similarity(guess, answer);
        if similarity.is_finite() {
            total += similarity;
        }
    }

    round2(total / answers.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    /// Fixed similarity table; counts how often it is asked for a score
    struct TableModel {
        vocabulary: Vec<String>,
        scores: HashMap<(String, String), f64>,
        calls: Cell<usize>,
    }

    impl TableModel {
        fn new() -> Self {
            Self {
                vocabulary: ["cat", "dog", "car", "run", "walk", "big", "large"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                scores: [
                    ("dog", "cat", 0.8),
                    ("car", "cat", 0.2),
                    ("walk", "run", 0.6),
                    ("large", "big", 0.9),
                ]
                .into_iter()
                .map(|(a, b, s)| ((a.to_string(), b.to_string()), s))
                .collect(),
                calls: Cell::new(0),
            }
        }
    }

    impl SimilarityModel for TableModel {
        fn is_out_of_vocabulary(&self, word: &str) -> bool {
            !self.vocabulary.iter().any(|w| w.as_str() == word)
        }

        fn similarity(&self, a: &str, b: &str) -> f64 {
            self.calls.set(self.calls.get() + 1);
            if a == b {
                return 1.0;
            }
            self.scores
                .get(&(a.to_string(), b.to_string()))
                .copied()
                .unwrap_or(0.0)
        }
    }

    #[test]
    fn test_should_return_0_for_empty_input() {
        let model = TableModel::new();
        let empty: [&str; 0] = [];
        assert_eq!(calculate_score(&empty, &empty, &model), 0.0);
    }

    #[test]
    fn test_should_return_0_for_imbalanced_input() {
        let model = TableModel::new();
        assert_eq!(calculate_score(&["cat"], &["cat", "dog"], &model), 0.0);
        assert_eq!(calculate_score(&["cat", "dog"], &["cat"], &model), 0.0);
    }

    #[test]
    fn test_should_return_highest_score_without_model() {
        let model = TableModel::new();
        assert_eq!(calculate_score(&["cat", "dog"], &["cat", "dog"], &model), 1.0);
        assert_eq!(calculate_score(&["xxtt"], &["xxtt"], &model), 1.0);
        assert_eq!(model.calls.get(), 0);
    }

    #[test]
    fn test_exact_match_is_case_sensitive() {
        let model = TableModel::new();
        assert_eq!(calculate_score(&["Cat"], &["cat"], &model), 0.0);
    }

    #[test]
    fn test_should_ignore_out_of_vocab_words() {
        let model = TableModel::new();
        assert_eq!(calculate_score(&["xttx"], &["cat"], &model), 0.0);
        assert_eq!(calculate_score(&["cat"], &["xttx"], &model), 0.0);
        assert_eq!(model.calls.get(), 0);
    }

    #[test]
    fn test_skipped_pairs_still_count_in_divisor() {
        let model = TableModel::new();
        // (0.8 + skipped) / 2
        assert_eq!(calculate_score(&["dog", "xttx"], &["cat", "run"], &model), 0.4);
    }

    #[test]
    fn test_any_unknown_word_in_a_phrase_skips_the_pair() {
        let model = TableModel::new();
        assert_eq!(calculate_score(&["big xttx"], &["large"], &model), 0.0);
    }

    #[test]
    fn test_mean_is_rounded_to_two_decimals() {
        let model = TableModel::new();
        // (0.8 + 0.6 + 0.2) / 3 = 0.5333...
        let score = calculate_score(&["dog", "walk", "car"], &["cat", "run", "cat"], &model);
        assert_eq!(score, 0.53);
    }

    #[test]
    fn test_identical_permutation_preserves_score() {
        let model = TableModel::new();
        let forward = calculate_score(&["dog", "walk"], &["cat", "run"], &model);
        let swapped = calculate_score(&["walk", "dog"], &["run", "cat"], &model);
        assert_eq!(forward, swapped);
    }

    #[test]
    fn test_score_is_order_sensitive() {
        let model = TableModel::new();
        let aligned = calculate_score(&["dog", "large"], &["cat", "big"], &model);
        let misaligned = calculate_score(&["large", "dog"], &["cat", "big"], &model);
        assert_ne!(aligned, misaligned);
    }

    #[test]
    fn test_bundled_model_scores() {
        let model = EmbeddingModel::bundled();
        assert_eq!(calculate_score(&["xttx"], &["cat"], &model), 0.0);

        let close = calculate_score(&["dog"], &["cat"], &model);
        let far = calculate_score(&["bread"], &["cat"], &model);
        assert!(close > far, "dog ({close}) should beat bread ({far})");
        assert!((0.0..=1.0).contains(&close));
    }
}
