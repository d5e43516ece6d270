// ABOUTME: Metadata downloader seam plus yt-dlp and JSON-file implementations.
// ABOUTME: Every fetch honors a CancellationToken so callers can abort promptly.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;

use crate::error::DownloadError;
use crate::raw::RawPlaylist;

/// Fetches channel/playlist metadata with up to `page_size` entries.
#[async_trait]
pub trait MetadataDownloader: Send + Sync {
    async fn playlist_entries(
        &self,
        cancel: &CancellationToken,
        url: &str,
        page_size: usize,
    ) -> Result<RawPlaylist, DownloadError>;
}

/// Runs `yt-dlp` and decodes its single-JSON playlist dump.
#[derive(Debug, Clone)]
pub struct YtdlDownloader {
    program: PathBuf,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl YtdlDownloader {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: None,
        }
    }

    /// Add an argument passed ahead of the standard playlist flags.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Kill the process if it runs longer than `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn command(&self, url: &str, page_size: usize) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg("--dump-single-json")
            .arg("--flat-playlist")
            .arg("--no-warnings")
            .arg("--playlist-end")
            .arg(page_size.to_string())
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

impl Default for YtdlDownloader {
    fn default() -> Self {
        Self::new("yt-dlp")
    }
}

#[async_trait]
impl MetadataDownloader for YtdlDownloader {
    async fn playlist_entries(
        &self,
        cancel: &CancellationToken,
        url: &str,
        page_size: usize,
    ) -> Result<RawPlaylist, DownloadError> {
        let program = self.program_name();
        tracing::debug!(%program, url, page_size, "running playlist dump");

        let child = self
            .command(url, page_size)
            .spawn()
            .map_err(|source| DownloadError::Spawn {
                program: program.clone(),
                source,
            })?;

        let timeout = self.timeout;
        let wait = async move {
            match timeout {
                Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
                    Ok(res) => res.map_err(DownloadError::from),
                    Err(_) => Err(DownloadError::Timeout(limit)),
                },
                None => child.wait_with_output().await.map_err(DownloadError::from),
            }
        };

        // Dropping `wait` drops the child, which kills it.
        let output = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(DownloadError::Cancelled),
            res = wait => res?,
        };

        if !output.status.success() {
            return Err(DownloadError::Exited {
                program,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(serde_json::from_slice(&output.stdout)?)
    }
}

/// Reads a previously dumped playlist JSON document from disk.
///
/// The page size is not applied here; the feed builder truncates.
#[derive(Debug, Clone)]
pub struct JsonFileDownloader {
    path: PathBuf,
}

impl JsonFileDownloader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl MetadataDownloader for JsonFileDownloader {
    async fn playlist_entries(
        &self,
        cancel: &CancellationToken,
        url: &str,
        _page_size: usize,
    ) -> Result<RawPlaylist, DownloadError> {
        tracing::debug!(path = %self.path.display(), url, "reading playlist dump");

        let bytes = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(DownloadError::Cancelled),
            res = tokio::fs::read(&self.path) => res?,
        };

        Ok(serde_json::from_slice(&bytes)?)
    }
}
