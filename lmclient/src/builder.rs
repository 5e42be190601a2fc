use clap::Parser;
use lmcore::pagination::DEFAULT_ITEMS_PER_PAGE;
use std::time::Duration;
use url::Url;

use crate::{
    client::HttpBackend,
    error::ConfigError,
};

#[derive(Clone, Debug, Parser)]
pub struct Builder {
    /// Base url of the server hosting the `api/` collections.
    #[clap(long, value_name = "LM_API_URL", env = "LM_API_URL")]
    pub lm_api_url: String,
    #[clap(
        long,
        value_name = "LM_ITEMS_PER_PAGE",
        env = "LM_ITEMS_PER_PAGE",
        default_value_t = DEFAULT_ITEMS_PER_PAGE,
    )]
    pub lm_items_per_page: u64,
    /// Request timeout, in seconds.
    #[clap(
        long,
        value_name = "LM_TIMEOUT",
        env = "LM_TIMEOUT",
        default_value_t = 30,
    )]
    pub lm_timeout: u64,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            lm_api_url: String::new(),
            lm_items_per_page: DEFAULT_ITEMS_PER_PAGE,
            lm_timeout: 30,
        }
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lm_api_url(mut self, value: impl Into<String>) -> Self {
        self.lm_api_url = value.into();
        self
    }

    pub fn lm_items_per_page(mut self, value: u64) -> Self {
        self.lm_items_per_page = value;
        self
    }

    pub fn lm_timeout(mut self, value: u64) -> Self {
        self.lm_timeout = value;
        self
    }

    /// The configured url, normalized to always end with a `/` so that
    /// collection paths are joined beneath it.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let mut url = Url::parse(&self.lm_api_url)?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::NotABase(self.lm_api_url.clone()));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    pub fn build(self) -> Result<HttpBackend, ConfigError> {
        let base = self.base_url()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.lm_timeout))
            .build()?;
        log::debug!("using collection api at {base}");
        Ok(HttpBackend::new(client, base))
    }
}
