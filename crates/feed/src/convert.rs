// ABOUTME: Raw entry to Episode conversion with page-size truncation in fetch order.
// ABOUTME: Entries without an id are skipped and do not count toward the page size.

use chrono::{DateTime, Utc};

use crate::models::{Episode, EpisodeStatus, Feed};
use crate::normalize::first_non_empty;
use crate::raw::RawEntry;
use crate::size::estimate_size;
use crate::thumbnail::select_thumbnail;
use crate::time_parse::published_at;

/// Video page URL for an entry: webpage URL, then entry URL, then the provider's canonical URL.
pub fn resolve_video_url(entry: &RawEntry, feed: &Feed) -> String {
    match first_non_empty([entry.webpage_url.as_str(), entry.url.as_str()]) {
        "" => feed.provider.video_url(&entry.id),
        url => url.to_string(),
    }
}

/// Converts one entry, or returns None when it is absent or has no id.
///
/// `now` stands in for the publish date when the entry carries none.
pub fn convert_entry(entry: Option<&RawEntry>, feed: &Feed, now: DateTime<Utc>) -> Option<Episode> {
    let entry = entry.filter(|e| !e.id.is_empty())?;
    let duration = entry.duration_seconds();

    Some(Episode {
        id: entry.id.clone(),
        title: entry.title.clone(),
        description: entry.description.clone(),
        duration,
        pub_date: published_at(entry).unwrap_or(now),
        thumbnail: select_thumbnail(&entry.thumbnails, feed.quality),
        video_url: resolve_video_url(entry, feed),
        size: estimate_size(duration, feed.format, feed.quality),
        status: EpisodeStatus::New,
    })
}

/// Converts entries in order until `feed.page_size` episodes are collected.
pub fn convert_entries(entries: &[Option<RawEntry>], feed: &Feed, now: DateTime<Utc>) -> Vec<Episode> {
    let mut episodes = Vec::with_capacity(feed.page_size.min(entries.len()));

    for (idx, entry) in entries.iter().enumerate() {
        if episodes.len() >= feed.page_size {
            tracing::debug!(
                page_size = feed.page_size,
                dropped = entries.len() - idx,
                "page size reached, ignoring remaining entries"
            );
            break;
        }

        match convert_entry(entry.as_ref(), feed, now) {
            Some(episode) => episodes.push(episode),
            None => tracing::debug!(index = idx, "skipping entry without id"),
        }
    }

    episodes
}
