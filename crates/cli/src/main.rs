// ABOUTME: CLI for building podcast feeds from video channels and playlists.
// ABOUTME: Resolves config from a JSON file and flags, runs FeedBuilder, prints the feed as JSON.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use vidcast_feed::{
    Config, Feed, FeedBuilder, Format, JsonFileDownloader, MetadataDownloader, Quality, Sorting,
    YtdlDownloader,
};

/// Build a podcast feed from a video channel or playlist and print it as JSON.
#[derive(Parser, Debug)]
#[command(name = "vidcast-cli")]
#[command(about = "Build a podcast feed from a video channel or playlist", long_about = None)]
struct Args {
    /// Channel, user or playlist URL. Overrides the url in --config.
    url: Option<String>,

    /// JSON config file; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum number of episodes.
    #[arg(long)]
    page_size: Option<usize>,

    /// Media format: audio or video.
    #[arg(long)]
    format: Option<String>,

    /// Playback quality: low or high.
    #[arg(long)]
    quality: Option<String>,

    /// Episode order: asc or desc.
    #[arg(long)]
    sort: Option<String>,

    /// Cover art quality: low or high.
    #[arg(long)]
    cover_art_quality: Option<String>,

    /// Read playlist metadata from a yt-dlp JSON dump instead of running yt-dlp.
    #[arg(long)]
    metadata_file: Option<PathBuf>,

    /// Path to the yt-dlp executable.
    #[arg(long, default_value = "yt-dlp")]
    yt_dlp: PathBuf,

    /// Abort the metadata fetch after this many seconds.
    #[arg(long)]
    timeout: Option<u64>,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn resolve_config(args: &Args) -> Result<Config> {
    let mut cfg = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<Config>(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => match &args.url {
            Some(url) => Config::builder(url.clone()).build(),
            None => bail!("a source url is required (positional or in --config)"),
        },
    };

    if let Some(url) = &args.url {
        cfg.url = url.clone();
    }
    if let Some(page_size) = args.page_size {
        cfg.page_size = page_size;
    }
    if let Some(format) = args.format.as_deref() {
        cfg.format = Format::from(format);
    }
    if let Some(quality) = args.quality.as_deref() {
        cfg.quality = Quality::from(quality);
    }
    if let Some(sort) = args.sort.as_deref() {
        cfg.playlist_sort = Sorting::from(sort);
    }
    if let Some(quality) = args.cover_art_quality.as_deref() {
        cfg.cover_art_quality = Quality::from(quality);
    }

    cfg.validate()?;
    Ok(cfg)
}

async fn build_with<D: MetadataDownloader>(
    downloader: D,
    cancel: &CancellationToken,
    cfg: &Config,
) -> Result<Feed> {
    Ok(FeedBuilder::new(downloader).build(cancel, cfg).await?)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let cfg = resolve_config(&args)?;

    let cancel = CancellationToken::new();
    if let Some(secs) = args.timeout {
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(secs)).await;
            trigger.cancel();
        });
    }

    let feed = match &args.metadata_file {
        Some(path) => build_with(JsonFileDownloader::new(path), &cancel, &cfg).await?,
        None => build_with(YtdlDownloader::new(&args.yt_dlp), &cancel, &cfg).await?,
    };

    if args.compact {
        println!("{}", serde_json::to_string(&feed)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&feed)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Args {
        Args::parse_from(std::iter::once("vidcast-cli").chain(list.iter().copied()))
    }

    #[test]
    fn flags_build_config() {
        let cfg = resolve_config(&args(&[
            "https://rumble.com/c/example",
            "--page-size",
            "3",
            "--format",
            "audio",
            "--quality",
            "low",
            "--sort",
            "desc",
        ]))
        .unwrap();
        assert_eq!(cfg.url, "https://rumble.com/c/example");
        assert_eq!(cfg.page_size, 3);
        assert_eq!(cfg.format, Format::Audio);
        assert_eq!(cfg.quality, Quality::Low);
        assert_eq!(cfg.playlist_sort, Sorting::Desc);
        assert_eq!(cfg.cover_art_quality, Quality::High);
    }

    #[test]
    fn url_is_required_without_config() {
        assert!(resolve_config(&args(&[])).is_err());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(resolve_config(&args(&["https://rumble.com/c/x", "--page-size", "0"])).is_err());
    }

    #[test]
    fn positional_url_fills_config_file_without_url() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{"page_size": 4, "format": "audio"}"#).unwrap();

        let cfg = resolve_config(&args(&[
            "https://rumble.com/c/positional",
            "--config",
            path.to_str().unwrap(),
        ]))
        .unwrap();
        assert_eq!(cfg.url, "https://rumble.com/c/positional");
        assert_eq!(cfg.page_size, 4);
        assert_eq!(cfg.format, Format::Audio);

        assert!(resolve_config(&args(&["--config", path.to_str().unwrap()])).is_err());
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(
            &path,
            r#"{"url": "https://rumble.com/c/fromfile", "page_size": 9, "quality": "low"}"#,
        )
        .unwrap();

        let cfg = resolve_config(&args(&[
            "--config",
            path.to_str().unwrap(),
            "--quality",
            "high",
        ]))
        .unwrap();
        assert_eq!(cfg.url, "https://rumble.com/c/fromfile");
        assert_eq!(cfg.page_size, 9);
        assert_eq!(cfg.quality, Quality::High);
    }
}
