use super::SimilarityModel;
use crate::assets::asset;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("unable to read word vectors: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected {expected} dimensions, found {found}")]
    Dimensions {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid number {value:?}")]
    Number { line: usize, value: String },

    #[error("no word vectors found")]
    Empty,
}

/// Word vectors keyed by lower-cased word
#[derive(Debug, Clone)]
pub struct EmbeddingModel {
    dimensions: usize,
    vectors: HashMap<String, Vec<f32>>,
}

impl EmbeddingModel {
    /// Parse vectors in GloVe text format: one `word v1 v2 ...` per line
    pub fn from_glove<R: BufRead>(reader: R) -> Result<Self, ModelError> {
        let mut dimensions = 0;
        let mut vectors = HashMap::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };

            let vector = fields
                .map(|value| {
                    value.parse::<f32>().map_err(|_| ModelError::Number {
                        line: i + 1,
                        value: value.to_string(),
                    })
                })
                .collect::<Result<Vec<f32>, _>>()?;

            if dimensions == 0 {
                dimensions = vector.len();
            } else if vector.len() != dimensions {
                return Err(ModelError::Dimensions {
                    line: i + 1,
                    expected: dimensions,
                    found: vector.len(),
                });
            }

            vectors.insert(word.to_lowercase(), vector);
        }

        if vectors.is_empty() || dimensions == 0 {
            return Err(ModelError::Empty);
        }

        Ok(Self {
            dimensions,
            vectors,
        })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let model = Self::from_glove(BufReader::new(File::open(path.as_ref())?))?;
        info!(
            path = %path.as_ref().display(),
            words = model.len(),
            dimensions = model.dimensions,
            "loaded word vectors"
        );
        Ok(model)
    }

    /// The small vector table embedded in the binary
    pub fn bundled() -> Self {
        let text = asset("vectors.txt").expect("Vector file not found");
        Self::from_glove(Cursor::new(text)).expect("Unable to parse bundled vectors")
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vector(&self, word: &str) -> Option<&[f32]> {
        self.vectors.get(&word.to_lowercase()).map(Vec::as_slice)
    }

    /// Mean vector of the known words in `text`
    fn text_vector(&self, text: &str) -> Option<Vec<f64>> {
        let mut sum = vec![0.0_f64; self.dimensions];
        let mut count = 0;
        for vector in text.split_whitespace().filter_map(|w| self.vector(w)) {
            for (total, value) in sum.iter_mut().zip(vector) {
                *total += f64::from(*value);
            }
            count += 1;
        }

        match count {
            0 => None,
            n => Some(sum.into_iter().map(|v| v / n as f64).collect()),
        }
    }
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

impl SimilarityModel for EmbeddingModel {
    fn is_out_of_vocabulary(&self, word: &str) -> bool {
        self.vector(word).is_none()
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        match (self.text_vector(a), self.text_vector(b)) {
            (Some(va), Some(vb)) => cosine(&va, &vb),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "cat 1.0 0.0 0.0\ndog 0.9 0.1 0.0\ncar 0.0 0.0 1.0\n";

    fn small_model() -> EmbeddingModel {
        EmbeddingModel::from_glove(Cursor::new(SMALL)).unwrap()
    }

    #[test]
    fn test_parse_glove_text() {
        let model = small_model();
        assert_eq!(model.len(), 3);
        assert_eq!(model.dimensions(), 3);
        assert_eq!(model.vector("CAT"), Some(&[1.0_f32, 0.0, 0.0][..]));
    }

    #[test]
    fn test_identical_words_have_similarity_one() {
        let model = small_model();
        assert!((model.similarity("cat", "cat") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_related_words_are_closer() {
        let model = small_model();
        assert!(model.similarity("cat", "dog") > model.similarity("cat", "car"));
        assert_eq!(model.similarity("cat", "car"), 0.0);
    }

    #[test]
    fn test_unknown_words_have_zero_similarity() {
        let model = small_model();
        assert!(model.is_out_of_vocabulary("xttx"));
        assert!(!model.is_out_of_vocabulary("Dog"));
        assert_eq!(model.similarity("xttx", "cat"), 0.0);
        assert_eq!(model.similarity("", "cat"), 0.0);
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let result = EmbeddingModel::from_glove(Cursor::new("cat 1.0 0.0\ndog 1.0\n"));
        assert!(matches!(
            result,
            Err(ModelError::Dimensions {
                line: 2,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_bad_number_is_an_error() {
        let result = EmbeddingModel::from_glove(Cursor::new("cat 1.0 abc\n"));
        assert!(matches!(result, Err(ModelError::Number { line: 1, .. })));
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let result = EmbeddingModel::from_glove(Cursor::new("\n\n"));
        assert!(matches!(result, Err(ModelError::Empty)));
    }

    #[test]
    fn test_bundled_vectors_load() {
        let model = EmbeddingModel::bundled();
        assert!(!model.is_empty());
        assert!(!model.is_out_of_vocabulary("cat"));
        assert!(model.similarity("cat", "dog") > model.similarity("cat", "bread"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = EmbeddingModel::from_path("/nonexistent/vectors.txt");
        assert!(matches!(result, Err(ModelError::Io(_))));
    }
}
