// ABOUTME: Error types for locator resolution, metadata downloads, and feed builds.
// ABOUTME: BuildError passes locator errors through and wraps download errors with context.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Why a source URL could not be resolved to a provider identity.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocatorError {
    /// The string is not a URL.
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The host is not a supported video platform.
    #[error("unsupported host {0:?}")]
    UnsupportedHost(String),

    /// The host is supported but the path is not a channel, user or playlist.
    #[error("unsupported path {path:?} for {host}")]
    UnsupportedPath { host: String, path: String },

    /// The URL has a recognized shape but an empty identifier.
    #[error("missing item id in {0:?}")]
    MissingId(String),
}

impl LocatorError {
    pub fn invalid_url(url: impl Into<String>, reason: impl fmt::Display) -> Self {
        LocatorError::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

/// Failures reported by a metadata downloader.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The fetch process could not be started.
    #[error("failed to start {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The fetch process ran but reported failure.
    #[error("{program} exited with {code:?}: {stderr}")]
    Exited {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The metadata could not be decoded.
    #[error("failed to decode metadata: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("cancelled")]
    Cancelled,

    #[error("{0}")]
    Other(String),
}

impl DownloadError {
    pub fn other(msg: impl Into<String>) -> Self {
        DownloadError::Other(msg.into())
    }

    /// Returns true if the download was aborted by cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DownloadError::Cancelled)
    }
}

/// Errors that abort a feed build. No partial feed accompanies them.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The source URL could not be resolved; reported as-is.
    #[error(transparent)]
    Locator(#[from] LocatorError),

    /// The downloader failed.
    #[error("failed to load playlist metadata")]
    MetadataFetch {
        #[source]
        source: DownloadError,
    },
}

impl BuildError {
    pub fn metadata_fetch(source: DownloadError) -> Self {
        BuildError::MetadataFetch { source }
    }

    pub fn is_locator(&self) -> bool {
        matches!(self, BuildError::Locator(_))
    }

    pub fn is_metadata_fetch(&self) -> bool {
        matches!(self, BuildError::MetadataFetch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn locator_error_is_transparent() {
        let inner = LocatorError::UnsupportedHost("example.com".to_string());
        let err = BuildError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert!(err.is_locator());
    }

    #[test]
    fn fetch_error_has_fixed_message_and_source() {
        let err = BuildError::metadata_fetch(DownloadError::other("boom"));
        assert_eq!(err.to_string(), "failed to load playlist metadata");
        assert!(err.is_metadata_fetch());
        assert_eq!(err.source().map(|s| s.to_string()), Some("boom".to_string()));
    }

    #[test]
    fn cause_text_appears_once_in_chain() {
        let spawn = DownloadError::Spawn {
            program: "yt-dlp".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let err = BuildError::metadata_fetch(spawn);

        let mut chain = Vec::new();
        let mut cur: Option<&(dyn std::error::Error + 'static)> = Some(&err);
        while let Some(e) = cur {
            chain.push(e.to_string());
            cur = e.source();
        }
        assert_eq!(
            chain,
            vec![
                "failed to load playlist metadata",
                "failed to start yt-dlp",
                "no such file",
            ]
        );
    }
}
