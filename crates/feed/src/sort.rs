// ABOUTME: Stable chronological episode ordering.
// ABOUTME: Equal publish dates keep their incoming order.

use crate::models::{Episode, Sorting};

/// Sorts episodes by publish date: newest first for `Desc`, oldest first otherwise.
pub fn sort_episodes(episodes: &mut [Episode], sort: Sorting) {
    match sort {
        Sorting::Desc => episodes.sort_by(|a, b| b.pub_date.cmp(&a.pub_date)),
        Sorting::Asc => episodes.sort_by(|a, b| a.pub_date.cmp(&b.pub_date)),
    }
}
