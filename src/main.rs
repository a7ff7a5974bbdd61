use clap::Parser;
use madlibs::{
    config::{Config, ConfigStore, FileConfigStore},
    corpus::{self, CorpusKind, CorpusSource, FixedCorpus},
    input::StdinInput,
    language::LexiconTagger,
    scoring::{EmbeddingModel, SimilarityModel},
    Game, GameSettings,
};
use rand::{rngs::StdRng, SeedableRng};
use std::{error::Error, io, path::PathBuf};
use tracing_subscriber::EnvFilter;

/// procedurally generated mad libs, scored by how close your guesses come
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Fill in the blanks of a real sentence. Each guess is scored by its semantic similarity to the hidden word, so a close miss still earns points."
)]
pub struct Cli {
    /// number of rounds to play
    #[clap(short = 'r', long)]
    rounds: Option<usize>,

    /// where sentences come from
    #[clap(short = 'c', long, value_enum)]
    corpus: Option<CorpusKind>,

    /// text file to draw sentences from (used with --corpus file)
    #[clap(long)]
    corpus_file: Option<PathBuf>,

    /// play this sentence instead of drawing one from the corpus
    #[clap(short = 's', long)]
    sentence: Option<String>,

    /// minimum number of words in a drawn sentence
    #[clap(short = 'w', long)]
    min_words: Option<usize>,

    /// attempts at finding a playable sentence before giving up
    #[clap(long)]
    max_fetch_attempts: Option<usize>,

    /// word vectors in GloVe text format, used for scoring
    #[clap(long)]
    vectors: Option<PathBuf>,

    /// seed the random generator for a reproducible game
    #[clap(long)]
    seed: Option<u64>,

    /// config file to read instead of the default location
    #[clap(long)]
    config: Option<PathBuf>,

    /// store the resulting settings as the new defaults
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Command line values take precedence over the stored config
    fn apply(&self, mut cfg: Config) -> Config {
        if let Some(rounds) = self.rounds {
            cfg.rounds = rounds;
        }
        if let Some(corpus) = self.corpus {
            cfg.corpus = corpus;
        }
        if let Some(ref path) = self.corpus_file {
            cfg.corpus_file = Some(path.clone());
            if self.corpus.is_none() {
                cfg.corpus = CorpusKind::File;
            }
        }
        if let Some(min_words) = self.min_words {
            cfg.min_words = min_words;
        }
        if let Some(attempts) = self.max_fetch_attempts {
            cfg.max_fetch_attempts = attempts;
        }
        if let Some(ref path) = self.vectors {
            cfg.vectors = Some(path.clone());
        }
        cfg
    }

    fn settings(&self, cfg: &Config) -> GameSettings {
        let mut settings = GameSettings::from(cfg);
        // A sentence given on the command line is played whatever its length.
        if self.sentence.is_some() {
            settings.min_words = 1;
        }
        settings
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let store = cli
        .config
        .as_ref()
        .map_or_else(FileConfigStore::new, FileConfigStore::with_path);
    let cfg = cli.apply(store.load());
    if cli.save_config {
        store.save(&cfg)?;
    }

    let model: Box<dyn SimilarityModel> = match cfg.vectors {
        Some(ref path) => Box::new(EmbeddingModel::from_path(path)?),
        None => Box::new(EmbeddingModel::bundled()),
    };

    let corpus: Box<dyn CorpusSource> = match cli.sentence {
        Some(ref sentence) => Box::new(FixedCorpus::new(sentence.clone())),
        None => corpus::open(cfg.corpus, cfg.corpus_file.as_deref())?,
    };

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game = Game::new(
        Box::new(LexiconTagger::bundled()),
        model,
        corpus,
        cli.settings(&cfg),
        rng,
    );

    let mut input = StdinInput::stdio();
    let mut stdout = io::stdout();
    game.play(cfg.rounds.max(1), &mut input, &mut stdout)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_values_override_config() {
        let cli = Cli::parse_from([
            "madlibs",
            "--rounds",
            "3",
            "--corpus",
            "generated",
            "--min-words",
            "7",
        ]);
        let cfg = cli.apply(Config::default());
        assert_eq!(cfg.rounds, 3);
        assert_eq!(cfg.corpus, CorpusKind::Generated);
        assert_eq!(cfg.min_words, 7);
        assert_eq!(cfg.max_fetch_attempts, Config::default().max_fetch_attempts);
    }

    #[test]
    fn corpus_file_implies_file_corpus() {
        let cli = Cli::parse_from(["madlibs", "--corpus-file", "notes.txt"]);
        let cfg = cli.apply(Config::default());
        assert_eq!(cfg.corpus, CorpusKind::File);
        assert_eq!(cfg.corpus_file, Some(PathBuf::from("notes.txt")));
    }

    #[test]
    fn fixed_sentence_ignores_min_words() {
        let cli = Cli::parse_from(["madlibs", "-s", "Cats sleep"]);
        let settings = cli.settings(&Config::default());
        assert_eq!(settings.min_words, 1);
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
