use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tags (Universal Dependencies tag set)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum PartOfSpeech {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
    Space,
}

/// Grammatical category shown to the player as a hint for a blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Category {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

/// Tags eligible to become blanks, with the hint shown for each
pub const BLANK_TYPES: [(PartOfSpeech, Category); 5] = [
    (PartOfSpeech::Propn, Category::Noun),
    (PartOfSpeech::Verb, Category::Verb),
    (PartOfSpeech::Noun, Category::Noun),
    (PartOfSpeech::Adj, Category::Adjective),
    (PartOfSpeech::Adv, Category::Adverb),
];

impl PartOfSpeech {
    pub fn category(self) -> Option<Category> {
        BLANK_TYPES
            .iter()
            .find(|(tag, _)| *tag == self)
            .map(|(_, category)| *category)
    }

    pub fn is_blankable(self) -> bool {
        self.category().is_some()
    }
}
