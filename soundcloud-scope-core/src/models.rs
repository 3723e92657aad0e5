use serde::{Deserialize, Serialize};
use soundcloud_scope_client::{client::Config, soundcloud_models::track::Track};

/// Results always render as web pages in the host surface.
pub const MIMETYPE: &str = "text/html";

/// The scope registers a single category; every result lands in it.
pub const CATEGORY: u32 = 0;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    #[default]
    Default,
}

/// One row of the host's result list. Every field is always populated:
/// whatever the API left out degrades to an empty string during
/// [`parse_track`], never to an absent field.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub uri: String,
    pub icon: String,
    pub category: u32,
    pub result_type: ResultType,
    pub mimetype: String,
    pub title: String,
    pub comment: String,
    pub dnd_uri: String,
    pub metadata: ResultMetadata,
}

/// Extension metadata the host exposes alongside the row.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMetadata {
    /// Reserved in the result schema, never populated by this API.
    pub album: String,
    pub artist: String,
    pub genre: String,
    pub label: String,
    pub license: String,
    /// Playable url, already signed with the consumer key. Empty when the
    /// track has no stream.
    pub stream: String,
    /// Track length in milliseconds, string encoded. Empty when unknown.
    pub duration: String,
}

impl SearchResult {
    /// A result without a uri points at nothing the host can open; the
    /// scope drops it before replying.
    pub fn is_usable(&self) -> bool {
        !self.uri.is_empty()
    }
}

/// Map one raw track onto the result schema. Total: absent or empty source
/// fields become empty strings, each independently of the others.
pub fn parse_track(track: Track, config: &Config) -> SearchResult {
    let user = track.user.unwrap_or_default();

    let uri = filled(track.permalink_url).unwrap_or_default();
    let icon = filled(track.artwork_url)
        .or_else(|| filled(user.avatar_url))
        .unwrap_or_default();
    let stream = filled(track.stream_url)
        .map(|url| config.sign_stream_url(&url))
        .unwrap_or_default();

    SearchResult {
        dnd_uri: uri.clone(),
        uri,
        icon,
        category: CATEGORY,
        result_type: ResultType::Default,
        mimetype: MIMETYPE.to_string(),
        title: track.title.unwrap_or_default(),
        comment: track.description.unwrap_or_default(),
        metadata: ResultMetadata {
            album: String::new(),
            artist: user.username.unwrap_or_default(),
            genre: track.genre.unwrap_or_default(),
            label: track.label_name.unwrap_or_default(),
            license: track.license.unwrap_or_default(),
            stream,
            duration: track.duration.map(|ms| ms.to_string()).unwrap_or_default(),
        },
    }
}

fn filled(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
