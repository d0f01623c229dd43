//! Display types for UI components
//!
//! Lightweight, already-mapped versions of the REST payloads. Views take
//! these as props so they can be rendered from live responses or fixtures.

use chrono::NaiveDate;
use mrd_common::ArtistSource;

/// Artist as shown on a search result or "my artists" card
#[derive(Clone, Debug, PartialEq)]
pub struct ArtistSummary {
    pub external_id: String,
    pub name: String,
    pub source: ArtistSource,
    pub image_url: Option<String>,
    /// Server-side follow state at the time the page was fetched
    pub followed: bool,
    pub followed_since: Option<NaiveDate>,
}

impl ArtistSummary {
    /// List key; external ids are only unique within one source.
    pub fn key(&self) -> String {
        format!("{}-{}", self.source, self.external_id)
    }
}

/// A release row in the releases table and dashboard lists
#[derive(Clone, Debug, PartialEq)]
pub struct ReleaseEntry {
    pub id: String,
    pub artist: String,
    pub album_title: String,
    pub release_date: Option<NaiveDate>,
    /// Free-text estimate for releases without a fixed date ("Spring 2025")
    pub estimated_release_date: Option<String>,
    pub genre: Option<String>,
    pub release_type: Option<String>,
    pub cover_url: Option<String>,
}

impl ReleaseEntry {
    /// Release date for display, falling back to the estimate.
    pub fn date_label(&self) -> String {
        match (&self.release_date, &self.estimated_release_date) {
            (Some(date), _) => crate::format_release_date(*date),
            (None, Some(estimate)) => estimate.clone(),
            (None, None) => "TBA".to_string(),
        }
    }
}

/// Content of one dashboard section
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardItems {
    Artists(Vec<ArtistSummary>),
    Releases(Vec<ReleaseEntry>),
}

impl DashboardItems {
    pub fn is_empty(&self) -> bool {
        match self {
            DashboardItems::Artists(artists) => artists.is_empty(),
            DashboardItems::Releases(releases) => releases.is_empty(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSection {
    pub title: String,
    pub items: DashboardItems,
}

/// Dashboard payload, reduced to its non-empty sections in display order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dashboard {
    pub sections: Vec<DashboardSection>,
}

impl Dashboard {
    /// Build from titled sections, dropping empty ones.
    pub fn from_sections(sections: impl IntoIterator<Item = DashboardSection>) -> Self {
        Self {
            sections: sections
                .into_iter()
                .filter(|section| !section.items.is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_key_separates_sources() {
        let discogs = ArtistSummary {
            external_id: "42".to_string(),
            name: "Mayhem".to_string(),
            source: ArtistSource::Discogs,
            image_url: None,
            followed: false,
            followed_since: None,
        };
        let spotify = ArtistSummary {
            source: ArtistSource::Spotify,
            ..discogs.clone()
        };
        assert_ne!(discogs.key(), spotify.key());
        assert!(discogs.key().ends_with("-42"));
    }

    #[test]
    fn test_dashboard_drops_empty_sections() {
        let dashboard = Dashboard::from_sections([
            DashboardSection {
                title: "Recently followed".to_string(),
                items: DashboardItems::Artists(vec![]),
            },
            DashboardSection {
                title: "Upcoming releases".to_string(),
                items: DashboardItems::Releases(vec![ReleaseEntry {
                    id: "1".to_string(),
                    artist: "Darkthrone".to_string(),
                    album_title: "It Beckons Us All".to_string(),
                    release_date: None,
                    estimated_release_date: Some("Spring".to_string()),
                    genre: None,
                    release_type: None,
                    cover_url: None,
                }]),
            },
        ]);
        assert_eq!(dashboard.sections.len(), 1);
        assert_eq!(dashboard.sections[0].title, "Upcoming releases");
    }

    #[test]
    fn test_date_label_fallbacks() {
        let mut release = ReleaseEntry {
            id: "1".to_string(),
            artist: "Mgła".to_string(),
            album_title: "Age of Excuse".to_string(),
            release_date: NaiveDate::from_ymd_opt(2019, 9, 2),
            estimated_release_date: Some("Autumn".to_string()),
            genre: None,
            release_type: None,
            cover_url: None,
        };
        assert_eq!(release.date_label(), "Sep 2, 2019");
        release.release_date = None;
        assert_eq!(release.date_label(), "Autumn");
        release.estimated_release_date = None;
        assert_eq!(release.date_label(), "TBA");
    }
}
