pub mod bundled;
pub mod file;
pub mod generated;
#[cfg(feature = "wikipedia")]
pub mod wikipedia;

pub use bundled::BundledCorpus;
pub use file::FileCorpus;
pub use generated::GeneratedCorpus;

use clap::ValueEnum;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Shortest sentence worth turning into a game
pub const MIN_WORDS: usize = 5;

/// Attempts made before giving up on a corpus
pub const MAX_FETCH_ATTEMPTS: usize = 5;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("page not found: {0}")]
    MissingPage(String),

    #[error("gave up after {attempts} missing pages")]
    RetriesExhausted { attempts: usize },

    #[error("corpus has no text")]
    Empty,

    #[error("corpus unavailable: {0}")]
    Unavailable(String),

    #[error("unable to read corpus: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid corpus: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where sentences come from
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CorpusKind {
    /// encyclopedia articles shipped with the game
    #[default]
    Bundled,
    /// randomly generated english sentences
    Generated,
    /// paragraphs of a local text file
    File,
    /// random wikipedia articles (needs the `wikipedia` feature)
    Wikipedia,
}

/// A source of pages of natural text
pub trait CorpusSource {
    /// The text of a randomly chosen page
    fn random_page(&mut self, rng: &mut dyn RngCore) -> Result<String, CorpusError>;

    /// A sentence drawn from a random page. It may be shorter than
    /// `min_words` once `max_retries` draws are spent; callers check.
    fn fetch_sentence(
        &mut self,
        min_words: usize,
        max_retries: usize,
        rng: &mut dyn RngCore,
    ) -> Result<String, CorpusError> {
        let content = fetch_page(self, max_retries, rng)?;
        Ok(extract_sentence(&content, min_words, max_retries, rng))
    }
}

/// Fetch a page, retrying missing pages up to `max_retries` times
pub fn fetch_page<C: CorpusSource + ?Sized>(
    corpus: &mut C,
    max_retries: usize,
    rng: &mut dyn RngCore,
) -> Result<String, CorpusError> {
    let mut missing = 0;
    loop {
        match corpus.random_page(rng) {
            Ok(content) => return Ok(content),
            Err(CorpusError::MissingPage(title)) => {
                missing += 1;
                if missing > max_retries {
                    return Err(CorpusError::RetriesExhausted { attempts: missing });
                }
                warn!(%title, attempt = missing, "page unavailable, retrying");
            }
            Err(e) => return Err(e),
        }
    }
}

/// Pick a random sentence of at least `min_words` words out of `content`.
///
/// Sentences are split on full stops. Ones containing `=` are markup and
/// skipped. After `max_retries` draws the last accepted sentence is returned
/// even if it is short, and an empty string if none was accepted.
pub fn extract_sentence<R: Rng + ?Sized>(
    content: &str,
    min_words: usize,
    max_retries: usize,
    rng: &mut R,
) -> String {
    let sentences: Vec<&str> = content.split('.').collect();
    let mut words: Vec<&str> = Vec::new();
    let mut draws = 0;

    while words.len() < min_words && draws < max_retries {
        if let Some(sentence) = sentences.choose(rng) {
            if !sentence.contains('=') {
                words = sentence.split_whitespace().collect();
            }
        }
        draws += 1;
    }

    debug!(words = words.len(), draws, "extracted sentence");
    words.join(" ")
}

/// Always yields the same sentence, untouched
#[derive(Debug, Clone)]
pub struct FixedCorpus {
    sentence: String,
}

impl FixedCorpus {
    pub fn new(sentence: impl Into<String>) -> Self {
        Self {
            sentence: sentence.into(),
        }
    }
}

impl CorpusSource for FixedCorpus {
    fn random_page(&mut self, _rng: &mut dyn RngCore) -> Result<String, CorpusError> {
        Ok(self.sentence.clone())
    }

    fn fetch_sentence(
        &mut self,
        _min_words: usize,
        _max_retries: usize,
        _rng: &mut dyn RngCore,
    ) -> Result<String, CorpusError> {
        Ok(self.sentence.clone())
    }
}

/// Open the corpus of the given kind
pub fn open(kind: CorpusKind, file: Option<&Path>) -> Result<Box<dyn CorpusSource>, CorpusError> {
    match kind {
        CorpusKind::Bundled => Ok(Box::new(BundledCorpus::bundled()?)),
        CorpusKind::Generated => Ok(Box::new(GeneratedCorpus::default())),
        CorpusKind::File => {
            let path = file.ok_or_else(|| {
                CorpusError::Unavailable("no corpus file configured".to_string())
            })?;
            Ok(Box::new(FileCorpus::from_path(path)?))
        }
        CorpusKind::Wikipedia => wikipedia_corpus(),
    }
}

#[cfg(feature = "wikipedia")]
fn wikipedia_corpus() -> Result<Box<dyn CorpusSource>, CorpusError> {
    Ok(Box::new(wikipedia::WikipediaCorpus::new()?))
}

#[cfg(not(feature = "wikipedia"))]
fn wikipedia_corpus() -> Result<Box<dyn CorpusSource>, CorpusError> {
    Err(CorpusError::Unavailable(
        "built without the `wikipedia` feature".to_string(),
    ))
}
