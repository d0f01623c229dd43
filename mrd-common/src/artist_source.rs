use serde::{Deserialize, Serialize};
use std::fmt;

/// Upstream catalog an artist record comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ArtistSource {
    #[serde(alias = "Discogs", alias = "discogs")]
    Discogs,
    #[serde(alias = "Spotify", alias = "spotify")]
    Spotify,
}

impl ArtistSource {
    /// Lower-case form used in REST paths (`/follow/{source}/{id}`).
    pub fn path_segment(&self) -> &'static str {
        match self {
            ArtistSource::Discogs => "discogs",
            ArtistSource::Spotify => "spotify",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ArtistSource::Discogs => "Discogs",
            ArtistSource::Spotify => "Spotify",
        }
    }
}

impl fmt::Display for ArtistSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
