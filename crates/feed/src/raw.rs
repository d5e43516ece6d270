// ABOUTME: Raw playlist metadata as dumped by yt-dlp, before normalization.
// ABOUTME: Every field is optional on the wire and defaults to empty.

use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit JSON `null` like a missing key.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// A single thumbnail candidate. Sequences are ordered low to high quality.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawThumbnail {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl RawThumbnail {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// One entry of a playlist dump.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Seconds, fractional in yt-dlp output.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub release_timestamp: Option<i64>,
    /// `YYYYMMDD`
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub webpage_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnails: Vec<RawThumbnail>,
}

impl RawEntry {
    /// Duration truncated to whole seconds; negative or missing values are zero.
    pub fn duration_seconds(&self) -> u64 {
        match self.duration {
            Some(d) if d.is_finite() && d > 0.0 => d as u64,
            _ => 0,
        }
    }
}

/// Channel or playlist metadata plus its entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPlaylist {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub channel: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub channel_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub webpage_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnails: Vec<RawThumbnail>,
    /// `None` marks an entry yt-dlp could not resolve.
    #[serde(default, deserialize_with = "null_as_default")]
    pub entries: Vec<Option<RawEntry>>,
}
