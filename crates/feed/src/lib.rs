// ABOUTME: Core library for turning video channel/playlist metadata into podcast feeds.
// ABOUTME: Provides the FeedBuilder pipeline, its collaborators, and the feed/episode model.

pub mod builder;
pub mod clock;
pub mod config;
pub mod convert;
pub mod downloader;
pub mod error;
pub mod locator;
pub mod models;
pub mod normalize;
pub mod raw;
pub mod size;
pub mod sort;
pub mod thumbnail;
pub mod time_parse;

pub use builder::FeedBuilder;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, ConfigBuilder, ConfigError, DEFAULT_PAGE_SIZE};
pub use convert::{convert_entries, convert_entry};
pub use downloader::{JsonFileDownloader, MetadataDownloader, YtdlDownloader};
pub use error::{BuildError, DownloadError, LocatorError};
pub use locator::{parse_locator, LocatorResolver, UrlLocator};
pub use models::{
    Episode, EpisodeStatus, Feed, Format, LinkType, Locator, Provider, Quality, Sorting,
};
pub use raw::{RawEntry, RawPlaylist, RawThumbnail};
pub use size::estimate_size;
pub use sort::sort_episodes;
pub use thumbnail::select_thumbnail;
pub use time_parse::{parse_upload_date, published_at};
