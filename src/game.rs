use rand::Rng;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, info};

use crate::corpus::{CorpusError, CorpusSource};
use crate::input::PlayerInput;
use crate::language::{
    formatter, mark_blanks, tokenize, Category, TagError, TagIndex, Tagger, Token,
};
use crate::scoring::{calculate_score, SimilarityModel};
use crate::session::{GameSettings, RoundOutcome, SessionSummary};
use crate::ui::{self, Segment};
use crate::util::word_count;

#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Tagger(#[from] TagError),

    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("no playable sentence found after {attempts} attempts")]
    NoPlayableSentence { attempts: usize },
}

/// A sentence with its blanks chosen
#[derive(Debug, Clone)]
pub struct Round {
    pub sentence: String,
    pub tokens: Vec<Token>,
    pub tag_index: TagIndex,
}

impl Round {
    pub fn blank_positions(&self) -> Vec<usize> {
        formatter::blank_positions(&self.tokens)
    }

    /// Hint for the blank at `position`, looked up through the tag index
    pub fn hint(&self, position: usize) -> Option<Category> {
        self.tag_index
            .iter()
            .find(|(_, positions)| positions.contains(&position))
            .and_then(|(tag, _)| formatter::hint(*tag))
    }

    /// Hidden words, left to right
    pub fn answers(&self) -> Vec<String> {
        self.blank_positions()
            .into_iter()
            .map(|p| self.tokens[p].text().to_string())
            .collect()
    }
}

/// Runs rounds of mad libs against its collaborators
pub struct Game<R: Rng> {
    tagger: Box<dyn Tagger>,
    model: Box<dyn SimilarityModel>,
    corpus: Box<dyn CorpusSource>,
    settings: GameSettings,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(
        tagger: Box<dyn Tagger>,
        model: Box<dyn SimilarityModel>,
        corpus: Box<dyn CorpusSource>,
        settings: GameSettings,
        rng: R,
    ) -> Self {
        Self {
            tagger,
            model,
            corpus,
            settings,
            rng,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Fetch sentences until one is long enough and has at least one blank
    pub fn prepare_round(&mut self) -> Result<Round, GameError> {
        let attempts = self.settings.max_fetch_attempts.max(1);

        for attempt in 1..=attempts {
            let sentence = self.corpus.fetch_sentence(
                self.settings.min_words,
                self.settings.max_fetch_attempts,
                &mut self.rng,
            )?;

            let words = word_count(&sentence);
            if words < self.settings.min_words {
                debug!(attempt, words, "sentence too short");
                continue;
            }

            let (tokens, tag_index) = tokenize(&sentence, self.tagger.as_ref())?;
            let tokens = mark_blanks(tokens, &tag_index, &mut self.rng);
            if formatter::first_blank(&tokens).is_none() {
                debug!(attempt, "sentence has no blankable words");
                continue;
            }

            info!(attempt, words, "prepared round");
            return Ok(Round {
                sentence,
                tokens,
                tag_index,
            });
        }

        Err(GameError::NoPlayableSentence { attempts })
    }

    /// Play one round: reveal blanks one at a time, collect guesses, score them
    pub fn play_round<W: Write>(
        &mut self,
        input: &mut dyn PlayerInput,
        out: &mut W,
    ) -> Result<RoundOutcome, GameError> {
        ui::print_banner(out, "Creating a madlib sentence ...")?;
        let mut round = self.prepare_round()?;

        let blanks = round.blank_positions();
        let answers = round.answers();
        let mut guessed = ui::segments(&round.tokens);
        let mut actual = guessed.clone();
        let mut guesses = Vec::with_capacity(blanks.len());

        for &position in &blanks {
            let upto = formatter::first_blank(&round.tokens).map_or(round.tokens.len(), |p| p + 1);
            writeln!(out)?;
            ui::print_sentence(out, &round.tokens, &guessed, upto)?;
            if let Some(category) = round.hint(position) {
                ui::print_hint(out, category)?;
            }

            let guess = input.read_line("Enter blank word:")?;
            round.tokens[position].reveal();
            guessed[position] = Segment::Guess(guess.clone());
            actual[position] = Segment::Answer(round.tokens[position].text().to_string());
            guesses.push(guess);
        }

        let score = calculate_score(&guesses, &answers, self.model.as_ref());
        info!(blanks = blanks.len(), score, "round finished");
        ui::print_results(out, &round.tokens, &guessed, &actual, score)?;
        out.flush()?;

        Ok(RoundOutcome {
            sentence: round.sentence,
            guesses,
            answers,
            score,
        })
    }

    /// Play `rounds` rounds back to back, then show the average score
    pub fn play<W: Write>(
        &mut self,
        rounds: usize,
        input: &mut dyn PlayerInput,
        out: &mut W,
    ) -> Result<SessionSummary, GameError> {
        let mut summary = SessionSummary::default();

        for round in 1..=rounds {
            if rounds > 1 {
                writeln!(out)?;
                ui::print_banner(out, &format!("Round {round} of {rounds}"))?;
            }
            let outcome = self.play_round(input, out)?;
            summary.record(&outcome);
        }

        if summary.rounds() > 1 {
            ui::print_summary(out, &summary.scores, summary.mean_score())?;
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::FixedCorpus;
    use crate::input::ScriptedInput;
    use crate::language::LexiconTagger;
    use crate::scoring::EmbeddingModel;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game(sentence: &str, seed: u64) -> Game<StdRng> {
        Game::new(
            Box::new(LexiconTagger::bundled()),
            Box::new(EmbeddingModel::bundled()),
            Box::new(FixedCorpus::new(sentence)),
            GameSettings::default(),
            StdRng::seed_from_u64(seed),
        )
    }

    #[test]
    fn prepare_round_marks_at_least_one_blank() {
        let mut game = game("The old king built a huge castle near the river", 1);
        let round = game.prepare_round().unwrap();
        assert!(!round.blank_positions().is_empty());
        assert_eq!(round.answers().len(), round.blank_positions().len());
    }

    #[test]
    fn hints_come_from_the_tag_index() {
        let round = game("The old king built a huge castle near the river", 4)
            .prepare_round()
            .unwrap();

        for position in round.blank_positions() {
            let hint = round.hint(position);
            assert!(hint.is_some());
            assert_eq!(hint, round.tokens[position].tag().category());
        }
        // "The" is a determiner and never gets a hint.
        assert_eq!(round.hint(0), None);
        assert_eq!(round.hint(usize::MAX), None);
    }

    #[test]
    fn short_sentences_are_rejected() {
        let mut game = game("Too short", 1);
        assert_matches!(
            game.prepare_round(),
            Err(GameError::NoPlayableSentence { attempts: 5 })
        );
    }

    #[test]
    fn sentences_without_blankable_words_are_rejected() {
        let mut game = game("it is what it is", 1);
        assert_matches!(
            game.prepare_round(),
            Err(GameError::NoPlayableSentence { .. })
        );
    }

    #[test]
    fn exact_answers_score_one() {
        let sentence = "The old king built a huge castle near the river";
        let round = game(sentence, 9).prepare_round().unwrap();
        let answers = round.answers();

        // Same seed, same blanks: answer every blank correctly.
        let mut input = ScriptedInput::new(answers.clone());
        let mut out = Vec::new();
        let outcome = game(sentence, 9).play_round(&mut input, &mut out).unwrap();

        assert_eq!(outcome.answers, answers);
        assert_eq!(outcome.guesses, answers);
        assert_eq!(outcome.score, 1.0);
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn running_out_of_input_is_an_error() {
        let mut input = ScriptedInput::new(Vec::<String>::new());
        let mut out = Vec::new();
        let result = game("The old king built a huge castle near the river", 2)
            .play_round(&mut input, &mut out);
        assert_matches!(result, Err(GameError::Io(_)));
    }
}
