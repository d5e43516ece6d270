// ABOUTME: Thumbnail selection over quality-ordered candidate lists.
// ABOUTME: Low quality takes the first candidate, anything else takes the last.

use crate::models::Quality;
use crate::raw::RawThumbnail;

/// Picks a thumbnail URL from a list ordered low to high quality.
/// Returns an empty string when there are no candidates.
pub fn select_thumbnail(thumbnails: &[RawThumbnail], quality: Quality) -> String {
    let picked = match quality {
        Quality::Low => thumbnails.first(),
        _ => thumbnails.last(),
    };
    picked.map(|t| t.url.clone()).unwrap_or_default()
}
