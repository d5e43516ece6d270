// ABOUTME: FeedBuilder orchestrates locator resolution, metadata fetch, and normalization.
// ABOUTME: Produces a fully populated Feed or fails before constructing anything.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::convert::convert_entries;
use crate::downloader::MetadataDownloader;
use crate::error::{BuildError, DownloadError};
use crate::locator::{LocatorResolver, UrlLocator};
use crate::models::Feed;
use crate::normalize::apply_playlist_metadata;
use crate::sort::sort_episodes;

/// Builds feeds from a downloader, a locator resolver and a clock.
///
/// # Example
///
/// ```no_run
/// use tokio_util::sync::CancellationToken;
/// use vidcast_feed::{Config, FeedBuilder, YtdlDownloader};
///
/// # async fn run() -> Result<(), vidcast_feed::BuildError> {
/// let builder = FeedBuilder::new(YtdlDownloader::default());
/// let cfg = Config::builder("https://rumble.com/c/example").page_size(10).build();
/// let feed = builder.build(&CancellationToken::new(), &cfg).await?;
/// println!("{} episodes", feed.episodes.len());
/// # Ok(())
/// # }
/// ```
pub struct FeedBuilder<D> {
    downloader: D,
    locator: Arc<dyn LocatorResolver>,
    clock: Arc<dyn Clock>,
}

impl<D: MetadataDownloader> FeedBuilder<D> {
    /// Create a builder using the URL locator and the system clock.
    pub fn new(downloader: D) -> Self {
        Self {
            downloader,
            locator: Arc::new(UrlLocator),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the locator resolver.
    pub fn with_locator(mut self, locator: impl LocatorResolver + 'static) -> Self {
        self.locator = Arc::new(locator);
        self
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn downloader(&self) -> &D {
        &self.downloader
    }

    /// Build a feed for `cfg`.
    ///
    /// Locator errors are returned unchanged. Download failures, including
    /// cancellation through `cancel`, are wrapped in [`BuildError::MetadataFetch`].
    pub async fn build(&self, cancel: &CancellationToken, cfg: &Config) -> Result<Feed, BuildError> {
        let locator = self.locator.resolve(&cfg.url)?;

        let fetch = self.downloader.playlist_entries(cancel, &cfg.url, cfg.page_size);
        let fetched = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(DownloadError::Cancelled),
            res = fetch => res,
        };
        let playlist = fetched.map_err(|e| {
            tracing::warn!(url = %cfg.url, error = %e, "metadata fetch failed");
            BuildError::metadata_fetch(e)
        })?;

        let now = self.clock.now();
        let mut feed = Feed {
            item_id: locator.item_id.clone(),
            provider: locator.provider,
            link_type: locator.link_type,
            format: cfg.format,
            quality: cfg.quality,
            page_size: cfg.page_size,
            playlist_sort: cfg.playlist_sort,
            cover_art_quality: cfg.cover_art_quality,
            title: String::new(),
            description: String::new(),
            author: String::new(),
            item_url: String::new(),
            cover_art: String::new(),
            pub_date: None,
            updated_at: now,
            episodes: Vec::new(),
        };

        apply_playlist_metadata(&mut feed, &playlist, &locator, cfg);

        feed.episodes = convert_entries(&playlist.entries, &feed, now);
        sort_episodes(&mut feed.episodes, feed.playlist_sort);

        if feed.pub_date.is_none() {
            feed.pub_date = feed.episodes.first().map(|e| e.pub_date);
        }

        tracing::info!(
            item_id = %feed.item_id,
            provider = %feed.provider,
            episodes = feed.episodes.len(),
            "feed built"
        );

        Ok(feed)
    }
}
