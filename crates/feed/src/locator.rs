// ABOUTME: Source URL resolution into (item id, provider, link type).
// ABOUTME: UrlLocator recognizes Rumble and YouTube channel, user, handle and playlist URLs.

use url::Url;

use crate::error::LocatorError;
use crate::models::{LinkType, Locator, Provider};

/// Resolves a configured source URL into a provider identity.
pub trait LocatorResolver: Send + Sync {
    fn resolve(&self, url: &str) -> Result<Locator, LocatorError>;
}

/// URL-shape based resolver for the supported platforms.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlLocator;

impl LocatorResolver for UrlLocator {
    fn resolve(&self, url: &str) -> Result<Locator, LocatorError> {
        parse_locator(url)
    }
}

/// Parses a source URL. A missing scheme is treated as https.
pub fn parse_locator(raw: &str) -> Result<Locator, LocatorError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LocatorError::invalid_url(raw, "empty url"));
    }

    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let parsed = Url::parse(&with_scheme).map_err(|e| LocatorError::invalid_url(raw, e))?;
    let host = parsed
        .host_str()
        .map(normalize_host)
        .ok_or_else(|| LocatorError::invalid_url(raw, "missing host"))?;

    let segments: Vec<&str> = parsed
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    match host.as_str() {
        "rumble.com" => parse_rumble(&parsed, &segments, raw),
        "youtube.com" => parse_youtube(&parsed, &segments, raw),
        _ => Err(LocatorError::UnsupportedHost(host)),
    }
}

fn normalize_host(host: &str) -> String {
    let host = host.to_lowercase();
    for prefix in ["www.", "m."] {
        if let Some(rest) = host.strip_prefix(prefix) {
            return rest.to_string();
        }
    }
    host
}

fn parse_rumble(url: &Url, segments: &[&str], raw: &str) -> Result<Locator, LocatorError> {
    let link_type = match segments.first() {
        Some(&"c") => LinkType::Channel,
        Some(&"user") => LinkType::User,
        _ => return Err(unsupported_path(url)),
    };
    let id = segments.get(1).ok_or_else(|| LocatorError::MissingId(raw.to_string()))?;
    Ok(locator(id, Provider::Rumble, link_type))
}

fn parse_youtube(url: &Url, segments: &[&str], raw: &str) -> Result<Locator, LocatorError> {
    let missing = || LocatorError::MissingId(raw.to_string());

    match segments.first() {
        Some(&"playlist") => {
            let list = url
                .query_pairs()
                .find(|(k, _)| k == "list")
                .map(|(_, v)| v.into_owned())
                .filter(|v| !v.is_empty())
                .ok_or_else(missing)?;
            Ok(locator(&list, Provider::YouTube, LinkType::Playlist))
        }
        Some(&"channel") | Some(&"c") => {
            let id = segments.get(1).ok_or_else(missing)?;
            Ok(locator(id, Provider::YouTube, LinkType::Channel))
        }
        Some(&"user") => {
            let id = segments.get(1).ok_or_else(missing)?;
            Ok(locator(id, Provider::YouTube, LinkType::User))
        }
        Some(seg) if seg.starts_with('@') => {
            let handle = seg.trim_start_matches('@');
            if handle.is_empty() {
                return Err(missing());
            }
            Ok(locator(handle, Provider::YouTube, LinkType::Handle))
        }
        _ => Err(unsupported_path(url)),
    }
}

fn unsupported_path(url: &Url) -> LocatorError {
    LocatorError::UnsupportedPath {
        host: url.host_str().unwrap_or_default().to_string(),
        path: url.path().to_string(),
    }
}

fn locator(id: &str, provider: Provider, link_type: LinkType) -> Locator {
    Locator {
        item_id: id.to_string(),
        provider,
        link_type,
    }
}
