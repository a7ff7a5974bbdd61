use super::{CorpusError, CorpusSource};
use cgisf_lib::cgisf;
use rand::{Rng, RngCore};

/// Random english sentences assembled by `cgisf`
#[derive(Debug, Clone)]
pub struct GeneratedCorpus {
    sentences_per_page: usize,
}

impl GeneratedCorpus {
    pub fn new(sentences_per_page: usize) -> Self {
        Self {
            sentences_per_page: sentences_per_page.max(1),
        }
    }
}

impl Default for GeneratedCorpus {
    fn default() -> Self {
        Self::new(3)
    }
}

impl CorpusSource for GeneratedCorpus {
    fn random_page(&mut self, rng: &mut dyn RngCore) -> Result<String, CorpusError> {
        let page: String = (0..self.sentences_per_page)
            .map(|_| {
                cgisf(
                    rng.gen_range(1..3),
                    rng.gen_range(1..3),
                    rng.gen_range(1..5),
                    rng.gen_bool(0.5),
                    rng.gen_range(1..3),
                    rng.gen_bool(0.5),
                )
            })
            .collect();
        Ok(page)
    }
}
