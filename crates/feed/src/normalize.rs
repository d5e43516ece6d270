// ABOUTME: Feed-level metadata fallback chains over raw playlist data.
// ABOUTME: Each chain returns the first non-empty candidate and always has a terminal value.

use crate::config::Config;
use crate::models::{Feed, Locator, Provider};
use crate::raw::RawPlaylist;
use crate::thumbnail::select_thumbnail;

/// Returns the first candidate that is not empty, or an empty string.
pub fn first_non_empty<'a, I>(candidates: I) -> &'a str
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .find(|c| !c.is_empty())
        .unwrap_or_default()
}

pub fn resolve_title(playlist: &RawPlaylist, locator: &Locator) -> String {
    first_non_empty([playlist.title.as_str(), locator.item_id.as_str()]).to_string()
}

pub fn resolve_description(playlist: &RawPlaylist, provider: Provider, title: &str) -> String {
    if playlist.description.is_empty() {
        format!("{} feed for {}", provider.display_name(), title)
    } else {
        playlist.description.clone()
    }
}

pub fn resolve_author(playlist: &RawPlaylist, title: &str) -> String {
    first_non_empty([playlist.channel.as_str(), title]).to_string()
}

pub fn resolve_item_url(playlist: &RawPlaylist, config_url: &str) -> String {
    first_non_empty([
        playlist.channel_url.as_str(),
        playlist.webpage_url.as_str(),
        config_url,
    ])
    .to_string()
}

/// Fills title, description, author, item URL and cover art on `feed`.
pub fn apply_playlist_metadata(feed: &mut Feed, playlist: &RawPlaylist, locator: &Locator, cfg: &Config) {
    feed.title = resolve_title(playlist, locator);
    feed.description = resolve_description(playlist, locator.provider, &feed.title);
    feed.author = resolve_author(playlist, &feed.title);
    feed.item_url = resolve_item_url(playlist, &cfg.url);
    feed.cover_art = select_thumbnail(&playlist.thumbnails, feed.cover_art_quality);
}
