use crate::{Error, Result, soundcloud_models::track::Track};
use reqwest::StatusCode;
use std::{fmt::Display, future::Future, time::Duration};
use tracing::debug;
use url::Url;

/// Everything the scope needs to talk to the catalog API. Constructed once
/// by the host (or the cli) and handed to [`Client::new`]; tests override
/// individual fields instead of patching globals.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
    pub limit: u32,
    pub order: String,
    pub timeout: Duration,
    pub provider_name: String,
    pub provider_icon: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://api.soundcloud.com/".to_string(),
            api_key: "916e2a744323e1f28e8f1fe50728f86d".to_string(),
            limit: 30,
            order: "hotness".to_string(),
            timeout: Duration::from_secs(5),
            provider_name: "SoundCloud".to_string(),
            provider_icon: "/usr/share/icons/unity-icon-theme/places/svg/service-soundcloud.svg"
                .to_string(),
        }
    }
}

impl Config {
    /// Append the consumer key to a stream url. The API authorizes playback
    /// through this query parameter, separately from the key sent with the
    /// search call itself.
    pub fn sign_stream_url(&self, stream_url: &str) -> String {
        format!("{stream_url}?consumer_key={}", self.api_key)
    }
}

enum Endpoint {
    Tracks,
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let endpoint = match self {
            Endpoint::Tracks => "tracks.json",
        };

        f.write_str(endpoint)
    }
}

/// The outbound HTTP seam. Production uses [`HttpFetcher`]; tests substitute
/// stubs that return canned bodies or failures.
pub trait Fetcher {
    fn fetch(&self, url: Url) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: Url) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(Error::Status {
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[derive(Debug, Clone)]
pub struct Client<F> {
    config: Config,
    fetcher: F,
}

impl Client<HttpFetcher> {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.timeout)?;

        Ok(Self::with_fetcher(config, fetcher))
    }
}

impl<F: Fetcher> Client<F> {
    pub fn with_fetcher(config: Config, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one track search. The query is passed through as-is; the url
    /// builder takes care of percent-encoding. Result order is the API's
    /// own relevance ranking and is preserved.
    pub async fn search_tracks(&self, query: &str) -> Result<Vec<Track>> {
        let limit = self.config.limit.to_string();
        let params = [
            ("q", query),
            ("consumer_key", self.config.api_key.as_str()),
            ("order", self.config.order.as_str()),
            ("limit", limit.as_str()),
        ];

        let url = self.endpoint_url(Endpoint::Tracks, &params)?;
        debug!("calling {url}");

        let response = self.fetcher.fetch(url).await?;

        match serde_json::from_str(response.as_str()) {
            Ok(tracks) => Ok(tracks),
            Err(error) => Err(Error::Deserialize {
                message: error.to_string(),
            }),
        }
    }

    fn endpoint_url(&self, endpoint: Endpoint, params: &[(&str, &str)]) -> Result<Url> {
        let endpoint = format!("{}{}", self.config.base_url, endpoint);

        Url::parse_with_params(&endpoint, params).map_err(|_| Error::InvalidUrl { url: endpoint })
    }
}
