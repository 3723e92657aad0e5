use serde::{Deserialize, Serialize};
use soundcloud_scope_client::client::Config;

use crate::models::SearchResult;

/// The detail view for one selected result.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub title: String,
    /// The artist, shown under the title.
    pub subtitle: String,
    pub comment: String,
    /// High resolution artwork when the API has it, otherwise the list icon
    /// unchanged.
    pub art: String,
    /// Present only when the result carries a playable stream.
    pub track: Option<PreviewTrack>,
    pub action: Action,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewTrack {
    pub source: String,
    pub number: u32,
    pub title: String,
    pub author: String,
    pub album: String,
    pub length_seconds: u64,
}

impl PreviewTrack {
    /// Track length as `M:SS` for display.
    pub fn formatted_duration(&self) -> String {
        format!("{}:{:02}", self.length_seconds / 60, self.length_seconds % 60)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub uri: String,
}

/// Swap the standard artwork size for the original upload. The API encodes
/// the size as a literal filename suffix, so this is a plain substring
/// replacement and a no-op for icons that are not artwork urls.
pub fn original_artwork(icon: &str) -> String {
    icon.replace("large.jpg", "original.jpg")
}

/// Build the detail view for one previously returned result. Purely a data
/// transform: no network, no failure path. Absent fields degrade to empty
/// strings or zero.
pub fn build_preview(result: &SearchResult, config: &Config) -> Preview {
    let track = (!result.metadata.stream.is_empty()).then(|| PreviewTrack {
        source: result.metadata.stream.clone(),
        number: 1,
        title: result.title.clone(),
        author: result.metadata.artist.clone(),
        album: String::new(),
        // Stored as milliseconds; the preview shows whole seconds.
        length_seconds: result.metadata.duration.parse::<u64>().unwrap_or(0) / 1000,
    });

    Preview {
        title: result.title.clone(),
        subtitle: result.metadata.artist.clone(),
        comment: result.comment.trim().to_string(),
        art: original_artwork(&result.icon),
        track,
        action: Action {
            id: "open".to_string(),
            label: format!("Open in {}", config.provider_name),
            icon: config.provider_icon.clone(),
            uri: result.uri.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResultMetadata;

    fn test_result() -> SearchResult {
        SearchResult {
            uri: "http://soundcloud.com/vibecatt/echos".to_string(),
            icon: "http://i1.sndcdn.com/artworks-42-large.jpg".to_string(),
            title: "Echos".to_string(),
            comment: "  side a \n".to_string(),
            metadata: ResultMetadata {
                artist: "vibecatt".to_string(),
                stream: "http://api.soundcloud.com/tracks/42/stream?consumer_key=k".to_string(),
                duration: "192500".to_string(),
                ..ResultMetadata::default()
            },
            ..SearchResult::default()
        }
    }

    #[test]
    fn streamable_result_gets_one_track() {
        let preview = build_preview(&test_result(), &Config::default());

        let track = preview.track.unwrap();
        assert_eq!(
            track.source,
            "http://api.soundcloud.com/tracks/42/stream?consumer_key=k"
        );
        assert_eq!(track.number, 1);
        assert_eq!(track.title, "Echos");
        assert_eq!(track.author, "vibecatt");
        assert_eq!(track.album, "");
    }

    #[test]
    fn result_without_stream_gets_no_track() {
        let mut result = test_result();
        result.metadata.stream = String::new();

        let preview = build_preview(&result, &Config::default());
        assert_eq!(preview.track, None);
    }

    #[test]
    fn duration_truncates_to_whole_seconds() {
        let preview = build_preview(&test_result(), &Config::default());

        // 192500 ms floors to 192 s, no rounding up.
        assert_eq!(preview.track.unwrap().length_seconds, 192);
    }

    #[test]
    fn unparsable_duration_degrades_to_zero() {
        let mut result = test_result();
        result.metadata.duration = String::new();

        let preview = build_preview(&result, &Config::default());
        assert_eq!(preview.track.unwrap().length_seconds, 0);
    }

    #[test]
    fn artwork_is_upgraded_to_original_size() {
        let preview = build_preview(&test_result(), &Config::default());
        assert_eq!(preview.art, "http://i1.sndcdn.com/artworks-42-original.jpg");
    }

    #[test]
    fn artwork_substitution_is_a_noop_for_avatars() {
        let mut result = test_result();
        result.icon = "http://i1.sndcdn.com/avatars-7.jpg".to_string();

        let preview = build_preview(&result, &Config::default());
        assert_eq!(preview.art, "http://i1.sndcdn.com/avatars-7.jpg");
    }

    #[test]
    fn comment_is_trimmed() {
        let preview = build_preview(&test_result(), &Config::default());
        assert_eq!(preview.comment, "side a");
    }

    #[test]
    fn action_opens_the_result_uri() {
        let preview = build_preview(&test_result(), &Config::default());

        assert_eq!(preview.action.id, "open");
        assert_eq!(preview.action.label, "Open in SoundCloud");
        assert_eq!(preview.action.uri, "http://soundcloud.com/vibecatt/echos");
    }

    #[test]
    fn formats_duration_for_display() {
        let track = PreviewTrack {
            length_seconds: 192,
            ..PreviewTrack::default()
        };
        assert_eq!(track.formatted_duration(), "3:12");

        let track = PreviewTrack {
            length_seconds: 59,
            ..PreviewTrack::default()
        };
        assert_eq!(track.formatted_duration(), "0:59");
    }
}
