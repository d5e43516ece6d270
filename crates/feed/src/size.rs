// ABOUTME: Episode byte-size estimation from duration and a fixed bitrate table.
// ABOUTME: The result is an approximation for feed enclosure metadata only.

use crate::models::{Format, Quality};

pub const HIGH_AUDIO_BYTES_PER_SECOND: u64 = 128_000 / 8;
pub const LOW_AUDIO_BYTES_PER_SECOND: u64 = 48_000 / 8;
pub const HIGH_VIDEO_BYTES_PER_SECOND: u64 = 350_000;
pub const LOW_VIDEO_BYTES_PER_SECOND: u64 = 100_000;

/// Bytes per second assumed for a format/quality pair.
pub fn bytes_per_second(format: Format, quality: Quality) -> u64 {
    match (format, quality) {
        (Format::Audio, Quality::High) => HIGH_AUDIO_BYTES_PER_SECOND,
        (Format::Audio, Quality::Low) => LOW_AUDIO_BYTES_PER_SECOND,
        (Format::Video, Quality::High) => HIGH_VIDEO_BYTES_PER_SECOND,
        (Format::Video, Quality::Low) => LOW_VIDEO_BYTES_PER_SECOND,
    }
}

/// Estimates the media size in bytes. Saturates instead of overflowing.
pub fn estimate_size(duration_seconds: u64, format: Format, quality: Quality) -> u64 {
    duration_seconds.saturating_mul(bytes_per_second(format, quality))
}
