pub mod blanks;
pub mod formatter;
pub mod pos;
pub mod tagger;
pub mod token;

// Re-export the main types for convenience
pub use blanks::mark_blanks;
pub use pos::{Category, PartOfSpeech, BLANK_TYPES};
pub use tagger::{LexiconTagger, TagError, TaggedWord, Tagger};
pub use token::{tokenize, TagIndex, Token};
