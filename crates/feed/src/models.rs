// ABOUTME: Canonical feed and episode models produced by the feed builder.
// ABOUTME: Includes the provider/format/quality/sort enums shared with Config.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Video platform a feed was sourced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    YouTube,
    Rumble,
}

impl Provider {
    /// Human-readable platform name, used in synthesized descriptions.
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::YouTube => "YouTube",
            Provider::Rumble => "Rumble",
        }
    }

    /// Canonical watch URL for a video id on this platform.
    pub fn video_url(&self, id: &str) -> String {
        match self {
            Provider::YouTube => format!("https://youtube.com/watch?v={id}"),
            Provider::Rumble => format!("https://rumble.com/{id}"),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Shape of the source a locator points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Channel,
    Playlist,
    User,
    Handle,
}

/// Media kind the feed serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Audio,
    #[default]
    Video,
}

impl From<&str> for Format {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "audio" => Format::Audio,
            _ => Format::Video,
        }
    }
}

/// Two-level quality switch for thumbnails and bitrate estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Low,
    #[default]
    High,
}

impl From<&str> for Quality {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => Quality::Low,
            _ => Quality::High,
        }
    }
}

/// Requested episode ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sorting {
    #[default]
    Asc,
    Desc,
}

impl From<&str> for Sorting {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "desc" | "descending" => Sorting::Desc,
            _ => Sorting::Asc,
        }
    }
}

/// Lifecycle state of an episode. Freshly built feeds only contain new episodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpisodeStatus {
    #[default]
    New,
}

/// Provider identity resolved from a source URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    pub item_id: String,
    pub provider: Provider,
    pub link_type: LinkType,
}

/// One playable item within a feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: u64,
    pub pub_date: DateTime<Utc>,
    pub thumbnail: String,
    pub video_url: String,
    pub size: u64,
    pub status: EpisodeStatus,
}

/// A channel or playlist normalized into a podcast-like series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub item_id: String,
    pub provider: Provider,
    pub link_type: LinkType,
    pub format: Format,
    pub quality: Quality,
    pub page_size: usize,
    pub playlist_sort: Sorting,
    pub cover_art_quality: Quality,
    pub title: String,
    pub description: String,
    pub author: String,
    pub item_url: String,
    pub cover_art: String,
    pub pub_date: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    pub episodes: Vec<Episode>,
}
