use super::pos::PartOfSpeech;
use crate::assets::asset;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Error, Debug)]
pub enum TagError {
    #[error("tagger unavailable: {0}")]
    Unavailable(String),

    #[error("invalid lexicon: {0}")]
    Lexicon(#[from] serde_json::Error),
}

/// A word-like unit of a sentence and its part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    pub text: String,
    pub tag: PartOfSpeech,
}

/// Splits a sentence into word-like units, tagging each one, left to right
pub trait Tagger {
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedWord>, TagError>;
}

#[derive(Deserialize, Clone, Debug)]
pub struct Lexicon {
    pub name: String,
    pub words: HashMap<String, PartOfSpeech>,
}

/// Dictionary tagger with shape-based fallbacks for unknown words
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    lexicon: Lexicon,
}

const SYMBOLS: &str = "$%&+<=>^|~#@*/\\";

const ADJECTIVE_SUFFIXES: [&str; 8] = ["ous", "ful", "ive", "able", "ible", "less", "ical", "ish"];

impl LexiconTagger {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn from_json(json: &str) -> Result<Self, TagError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Tagger backed by the embedded english lexicon
    pub fn bundled() -> Self {
        let json = asset("lexicon.json").expect("Lexicon file not found");
        Self::from_json(json).expect("Unable to deserialize lexicon json")
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn tag_word(&self, word: &str) -> PartOfSpeech {
        if word.chars().all(|c| !c.is_alphanumeric()) {
            return if word.chars().all(|c| SYMBOLS.contains(c)) {
                PartOfSpeech::Sym
            } else {
                PartOfSpeech::Punct
            };
        }

        if word.chars().any(|c| c.is_ascii_digit()) {
            return PartOfSpeech::Num;
        }

        let lower = word.to_lowercase();
        if let Some(tag) = self.lexicon.words.get(&lower) {
            return *tag;
        }

        if word.chars().next().is_some_and(char::is_uppercase) {
            return PartOfSpeech::Propn;
        }

        if lower.ends_with("ly") {
            PartOfSpeech::Adv
        } else if lower.ends_with("ing") || lower.ends_with("ed") {
            PartOfSpeech::Verb
        } else if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            PartOfSpeech::Adj
        } else {
            PartOfSpeech::Noun
        }
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedWord>, TagError> {
        Ok(sentence
            .split_word_bounds()
            .filter(|unit| !unit.trim().is_empty())
            .map(|unit| TaggedWord {
                text: unit.to_string(),
                tag: self.tag_word(unit),
            })
            .collect())
    }
}
