use super::{pos::PartOfSpeech, tagger::Tagger, tagger::TagError};
use std::collections::{BTreeMap, BTreeSet};

/// One word-like unit of a mad libs sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    tag: PartOfSpeech,
    pub visible: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, tag: PartOfSpeech) -> Self {
        Self {
            text: text.into(),
            tag,
            visible: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tag(&self) -> PartOfSpeech {
        self.tag
    }

    pub fn is_blank(&self) -> bool {
        !self.visible
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn reveal(&mut self) {
        self.visible = true;
    }
}

/// Token positions grouped by their part-of-speech tag
pub type TagIndex = BTreeMap<PartOfSpeech, BTreeSet<usize>>;

/// Tag a sentence and build its tokens along with the tag index.
///
/// Every token starts visible. An empty sentence yields no tokens and an empty
/// index.
pub fn tokenize<T: Tagger + ?Sized>(
    sentence: &str,
    tagger: &T,
) -> Result<(Vec<Token>, TagIndex), TagError> {
    let tagged = tagger.tag(sentence)?;

    let mut index = TagIndex::new();
    let mut tokens = Vec::with_capacity(tagged.len());
    for (position, word) in tagged.into_iter().enumerate() {
        index.entry(word.tag).or_default().insert(position);
        tokens.push(Token::new(word.text, word.tag));
    }

    Ok((tokens, index))
}
