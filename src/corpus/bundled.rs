use super::{CorpusError, CorpusSource};
use crate::assets::asset;
use rand::seq::SliceRandom;
use rand::RngCore;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Article {
    pub title: String,
    pub content: String,
}

/// Encyclopedia articles shipped inside the binary
#[derive(Deserialize, Clone, Debug)]
pub struct BundledCorpus {
    pub name: String,
    pub articles: Vec<Article>,
}

impl BundledCorpus {
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let corpus: Self = serde_json::from_str(json)?;
        if corpus.articles.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(corpus)
    }

    pub fn bundled() -> Result<Self, CorpusError> {
        let json = asset("corpus.json")
            .ok_or_else(|| CorpusError::Unavailable("corpus.json is not bundled".to_string()))?;
        Self::from_json(json)
    }
}

impl CorpusSource for BundledCorpus {
    fn random_page(&mut self, rng: &mut dyn RngCore) -> Result<String, CorpusError> {
        let article = self.articles.choose(rng).ok_or(CorpusError::Empty)?;
        tracing::debug!(title = %article.title, "picked bundled article");
        Ok(article.content.clone())
    }
}
