use crate::corpus::{MAX_FETCH_ATTEMPTS, MIN_WORDS};
use crate::util::mean;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub min_words: usize,
    pub max_fetch_attempts: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            min_words: MIN_WORDS,
            max_fetch_attempts: MAX_FETCH_ATTEMPTS,
        }
    }
}

/// Result of one played round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    pub sentence: String,
    pub guesses: Vec<String>,
    pub answers: Vec<String>,
    pub score: f64,
}

impl RoundOutcome {
    /// `(guess, answer)` for each blank, left to right
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.guesses
            .iter()
            .map(String::as_str)
            .zip(self.answers.iter().map(String::as_str))
    }
}

/// Scores across every round of a session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSummary {
    pub scores: Vec<f64>,
}

impl SessionSummary {
    pub fn record(&mut self, outcome: &RoundOutcome) {
        self.scores.push(outcome.score);
    }

    pub fn rounds(&self) -> usize {
        self.scores.len()
    }

    pub fn mean_score(&self) -> f64 {
        mean(&self.scores).unwrap_or(0.0)
    }
}
