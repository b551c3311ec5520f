//! crates/yt_learning_core/src/youtube.rs
//!
//! YouTube URL normalization and video ID extraction, plus the request path
//! understood by the transcript provider.

use tracing::debug;
use url::Url;

use crate::domain::{LanguageCode, VideoUrl};
use crate::error::ValidationError;

const YOUTUBE_HOSTS: [&str; 4] = ["youtube.com", "www.youtube.com", "m.youtube.com", "youtu.be"];

/// Validates a raw, user-supplied YouTube URL and extracts its video ID.
///
/// Surrounding whitespace is trimmed and `https://` is prepended when no scheme
/// is present. Empty or unparsable input is a [`ValidationError::Invalid`]; any
/// other host, or a recognised host without a video ID, is a
/// [`ValidationError::InvalidUrl`].
pub fn normalize_youtube_url(raw: &str) -> Result<VideoUrl, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Invalid("YouTube URL is required".to_string()));
    }

    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let parsed = Url::parse(&normalized)
        .map_err(|e| ValidationError::Invalid(format!("Invalid URL format: {e}")))?;

    // Only a bare host is accepted: an explicit port or user info makes it foreign.
    let host = parsed.host_str().unwrap_or_default();
    let has_extras =
        parsed.port().is_some() || !parsed.username().is_empty() || parsed.password().is_some();
    if has_extras || !YOUTUBE_HOSTS.contains(&host) {
        return Err(ValidationError::InvalidUrl(
            "Must be a valid YouTube URL".to_string(),
        ));
    }

    let video_id = extract_video_id(&parsed, host)?;
    debug!(url = %normalized, video_id = %video_id, "YouTube URL validated");

    Ok(VideoUrl {
        normalized,
        video_id,
    })
}

fn extract_video_id(parsed: &Url, host: &str) -> Result<String, ValidationError> {
    let path = parsed.path();

    if host == "youtu.be" {
        return first_segment(path.trim_start_matches('/')).ok_or_else(|| {
            ValidationError::InvalidUrl("Invalid YouTube short URL format".to_string())
        });
    }

    if path == "/watch" {
        return parsed
            .query_pairs()
            .find(|(key, value)| key == "v" && !value.is_empty())
            .map(|(_, value)| value.into_owned())
            .ok_or_else(|| {
                ValidationError::InvalidUrl("Missing video ID in YouTube URL".to_string())
            });
    }

    for prefix in ["/embed/", "/v/", "/shorts/"] {
        if let Some(rest) = path.strip_prefix(prefix) {
            return first_segment(rest).ok_or_else(|| {
                ValidationError::InvalidUrl("Invalid YouTube embed URL format".to_string())
            });
        }
    }

    Err(ValidationError::InvalidUrl(
        "Unsupported YouTube URL: no video ID found".to_string(),
    ))
}

fn first_segment(path: &str) -> Option<String> {
    path.split('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// Builds the transcript provider path for a video, requesting flattened plain text.
///
/// The same string is used as the transcript cache key, so it must stay stable.
pub fn transcript_request_path(video: &VideoUrl, language: &LanguageCode) -> String {
    format!(
        "/api/transcript-with-url?url={}&flat_text=true&lang={}",
        urlencoding::encode(&video.watch_url()),
        language
    )
}
