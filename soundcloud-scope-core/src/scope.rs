use soundcloud_scope_client::{
    Result,
    client::{Client, Config, Fetcher, HttpFetcher},
};
use tracing::{debug, warn};

use crate::{
    models::{SearchResult, parse_track},
    preview::{Preview, build_preview},
};

/// The two operations the host surface calls: `search` and `preview`.
///
/// Stateless between calls; overlapping searches are independent requests
/// and ordering between them is the host's concern.
#[derive(Debug, Clone)]
pub struct Scope<F = HttpFetcher> {
    client: Client<F>,
}

impl Scope<HttpFetcher> {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            client: Client::new(config)?,
        })
    }
}

impl<F: Fetcher> Scope<F> {
    pub fn with_fetcher(config: Config, fetcher: F) -> Self {
        Self {
            client: Client::with_fetcher(config, fetcher),
        }
    }

    /// Search the catalog and reply with normalized results in the API's
    /// own order.
    ///
    /// Fail-soft by contract: a flaky remote API must never take the host
    /// search surface down with it. Transport failures, bad status codes
    /// and undecodable bodies are logged and reported as zero results, and
    /// no error ever escapes this method.
    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let tracks = match self.client.search_tracks(query).await {
            Ok(tracks) => tracks,
            Err(error) => {
                warn!("search failed, replying with no results: {error}");
                return Vec::new();
            }
        };

        tracks
            .into_iter()
            .map(|track| parse_track(track, self.client.config()))
            .filter(|result| {
                let usable = result.is_usable();
                if !usable {
                    debug!("dropping result without permalink: {:?}", result.title);
                }
                usable
            })
            .collect()
    }

    /// Build the detail view for a result returned by an earlier `search`.
    pub fn preview(&self, result: &SearchResult) -> Preview {
        build_preview(result, self.client.config())
    }
}
