use super::{CorpusError, CorpusSource};
use rand::RngCore;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const RANDOM_SUMMARY_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/random/summary";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize, Debug)]
struct Summary {
    title: String,
    #[serde(default)]
    extract: String,
}

/// Summaries of random Wikipedia articles
#[derive(Debug, Clone)]
pub struct WikipediaCorpus {
    client: Client,
}

impl WikipediaCorpus {
    pub fn new() -> Result<Self, CorpusError> {
        let client = Client::builder()
            .user_agent(concat!("madlibs/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CorpusError::Unavailable(e.to_string()))?;
        Ok(Self { client })
    }
}

impl CorpusSource for WikipediaCorpus {
    // Wikipedia picks the article; the injected generator is not needed here.
    fn random_page(&mut self, _rng: &mut dyn RngCore) -> Result<String, CorpusError> {
        let response = self
            .client
            .get(RANDOM_SUMMARY_URL)
            .send()
            .map_err(|e| CorpusError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CorpusError::MissingPage(response.url().to_string()));
        }
        if !status.is_success() {
            return Err(CorpusError::Unavailable(format!("HTTP {status}")));
        }

        let summary: Summary = response
            .json()
            .map_err(|e| CorpusError::Unavailable(e.to_string()))?;
        if summary.extract.trim().is_empty() {
            return Err(CorpusError::MissingPage(summary.title));
        }

        debug!(title = %summary.title, "fetched wikipedia article");
        Ok(summary.extract)
    }
}
