use serde::{Deserialize, Serialize};

pub mod track;

/// The uploader attached to a track. Tracks from private or removed accounts
/// can arrive without one, so it is optional everywhere it appears.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub username: Option<String>,
    pub permalink_url: Option<String>,
    pub avatar_url: Option<String>,
}
