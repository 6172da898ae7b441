//! Form-level input validation
//!
//! Checks run on user input before any request is built. A value that fails
//! here never reaches the transport.

use thiserror::Error;
use url::Url;

/// Length of a YouTube video id
const VIDEO_ID_LEN: usize = 11;

/// Rejected user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a concept")]
    EmptyConcept,

    #[error("Please enter a YouTube URL")]
    EmptyYouTubeUrl,

    #[error("Invalid YouTube URL: {0}")]
    InvalidYouTubeUrl(String),
}

/// Validate a concept, returning it trimmed
pub fn validate_concept(concept: &str) -> Result<String, ValidationError> {
    let concept = concept.trim();
    if concept.is_empty() {
        return Err(ValidationError::EmptyConcept);
    }
    Ok(concept.to_string())
}

/// Validate a YouTube URL, returning it trimmed
///
/// The URL must point at a recognizable video (watch, short link, embed or
/// shorts form) so the backend can extract its transcript.
pub fn validate_youtube_url(youtube_url: &str) -> Result<String, ValidationError> {
    let youtube_url = youtube_url.trim();
    if youtube_url.is_empty() {
        return Err(ValidationError::EmptyYouTubeUrl);
    }

    match extract_video_id(youtube_url) {
        Some(_) => Ok(youtube_url.to_string()),
        None => Err(ValidationError::InvalidYouTubeUrl(youtube_url.to_string())),
    }
}

/// Extract the video id from a YouTube URL
///
/// Supported forms:
/// - `https://www.youtube.com/watch?v=VIDEO_ID`
/// - `https://youtu.be/VIDEO_ID`
/// - `https://www.youtube.com/embed/VIDEO_ID`
/// - `https://www.youtube.com/shorts/VIDEO_ID`
pub fn extract_video_id(youtube_url: &str) -> Option<String> {
    let url = Url::parse(youtube_url.trim()).ok()?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }

    let host = url.host_str()?.to_ascii_lowercase();
    let host = host
        .strip_prefix("www.")
        .or_else(|| host.strip_prefix("m."))
        .unwrap_or(&host);

    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());

    let candidate = match host {
        "youtu.be" => segments.next().map(str::to_string),
        "youtube.com" => match segments.next()? {
            "watch" => url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned()),
            "embed" | "shorts" | "v" => segments.next().map(str::to_string),
            _ => None,
        },
        _ => None,
    }?;

    is_video_id(&candidate).then_some(candidate)
}

fn is_video_id(candidate: &str) -> bool {
    candidate.len() == VIDEO_ID_LEN
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_concept() {
        assert_eq!(validate_concept("  Bitcoin "), Ok("Bitcoin".to_string()));
        assert_eq!(validate_concept(""), Err(ValidationError::EmptyConcept));
        assert_eq!(validate_concept(" \t\n"), Err(ValidationError::EmptyConcept));
    }

    #[test]
    fn test_extract_video_id_supported_forms() {
        let id = Some("dQw4w9WgXcQ".to_string());
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), id);
        assert_eq!(extract_video_id("https://youtube.com/watch?t=42&v=dQw4w9WgXcQ"), id);
        assert_eq!(extract_video_id("http://m.youtube.com/watch?v=dQw4w9WgXcQ"), id);
        assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ?t=10"), id);
        assert_eq!(extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"), id);
        assert_eq!(extract_video_id("https://www.youtube.com/shorts/dQw4w9WgXcQ"), id);
    }

    #[test]
    fn test_extract_video_id_rejects_other_urls() {
        assert_eq!(extract_video_id("https://vimeo.com/123456"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v=short"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/channel/UCabcdefghij"), None);
        assert_eq!(extract_video_id("ftp://youtu.be/dQw4w9WgXcQ"), None);
        assert_eq!(extract_video_id("not a url"), None);
        assert_eq!(extract_video_id("https://youtu.be/"), None);
    }

    #[test]
    fn test_validate_youtube_url() {
        assert_eq!(
            validate_youtube_url(" https://youtu.be/dQw4w9WgXcQ "),
            Ok("https://youtu.be/dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            validate_youtube_url("   "),
            Err(ValidationError::EmptyYouTubeUrl)
        );
        assert!(matches!(
            validate_youtube_url("https://example.com/video"),
            Err(ValidationError::InvalidYouTubeUrl(_))
        ));
    }
}
