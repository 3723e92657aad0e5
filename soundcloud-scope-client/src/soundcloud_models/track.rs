use serde::{Deserialize, Serialize};

use crate::soundcloud_models::User;

/// One track as returned by the search endpoint.
///
/// The API does not guarantee any of these fields: what is present varies
/// with track visibility and type. Every field is optional and unknown
/// fields are ignored, so a response never fails to decode because of a
/// sparse record.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<i64>,
    pub permalink_url: Option<String>,
    pub artwork_url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub stream_url: Option<String>,
    pub genre: Option<String>,
    pub label_name: Option<String>,
    pub license: Option<String>,
    /// Track length in milliseconds.
    pub duration: Option<i64>,
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_record() {
        let body = r#"{
            "id": 42,
            "permalink_url": "http://soundcloud.com/vibecatt/echos",
            "artwork_url": "http://i1.sndcdn.com/artworks-42-large.jpg",
            "title": "Echos",
            "description": "side a",
            "stream_url": "http://api.soundcloud.com/tracks/42/stream",
            "genre": "Ambient",
            "label_name": "Self released",
            "license": "all-rights-reserved",
            "duration": 192000,
            "user": {"id": 7, "username": "vibecatt", "avatar_url": "http://i1.sndcdn.com/avatars-7.jpg"}
        }"#;

        let track: Track = serde_json::from_str(body).unwrap();
        assert_eq!(track.title.as_deref(), Some("Echos"));
        assert_eq!(track.duration, Some(192_000));
        assert_eq!(track.user.unwrap().username.as_deref(), Some("vibecatt"));
    }

    #[test]
    fn decodes_sparse_record() {
        let track: Track = serde_json::from_str(r#"{"title": "Ganymede"}"#).unwrap();
        assert_eq!(track.title.as_deref(), Some("Ganymede"));
        assert_eq!(track.permalink_url, None);
        assert_eq!(track.user, None);
    }

    #[test]
    fn ignores_unknown_fields() {
        let body = r#"{"title": "Echos", "waveform_url": "http://w1.sndcdn.com/42.png", "playback_count": 9000}"#;
        let track: Track = serde_json::from_str(body).unwrap();
        assert_eq!(track.title.as_deref(), Some("Echos"));
    }
}
