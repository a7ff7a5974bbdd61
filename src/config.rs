use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::app_dirs::AppDirs;
use crate::corpus::{CorpusKind, MAX_FETCH_ATTEMPTS, MIN_WORDS};
use crate::session::GameSettings;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub min_words: usize,
    pub max_fetch_attempts: usize,
    pub rounds: usize,
    pub corpus: CorpusKind,
    pub corpus_file: Option<PathBuf>,
    pub vectors: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_words: MIN_WORDS,
            max_fetch_attempts: MAX_FETCH_ATTEMPTS,
            rounds: 1,
            corpus: CorpusKind::Bundled,
            corpus_file: None,
            vectors: None,
        }
    }
}

impl From<&Config> for GameSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            min_words: cfg.min_words,
            max_fetch_attempts: cfg.max_fetch_attempts,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            return Config::default();
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable config");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).map_err(std::io::Error::other)?;
        fs::write(&self.path, data)
    }
}
