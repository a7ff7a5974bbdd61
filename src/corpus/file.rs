use super::{CorpusError, CorpusSource};
use rand::seq::SliceRandom;
use rand::RngCore;
use std::fs;
use std::path::Path;
use tracing::info;

/// Paragraphs of a plain text file, each one a page
#[derive(Debug, Clone)]
pub struct FileCorpus {
    paragraphs: Vec<String>,
}

impl FileCorpus {
    pub fn from_text(text: &str) -> Result<Self, CorpusError> {
        let paragraphs: Vec<String> = text
            .split("\n\n")
            .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|p| !p.is_empty())
            .collect();

        if paragraphs.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(Self { paragraphs })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let text = fs::read_to_string(path.as_ref())?;
        let corpus = Self::from_text(&text)?;
        info!(
            path = %path.as_ref().display(),
            paragraphs = corpus.paragraphs.len(),
            "loaded corpus file"
        );
        Ok(corpus)
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

impl CorpusSource for FileCorpus {
    fn random_page(&mut self, rng: &mut dyn RngCore) -> Result<String, CorpusError> {
        self.paragraphs
            .choose(rng)
            .cloned()
            .ok_or(CorpusError::Empty)
    }
}
