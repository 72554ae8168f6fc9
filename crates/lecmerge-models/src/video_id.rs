//! Video ID extraction from watch links.

/// Errors that can occur during video ID extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoIdError {
    /// The link has no `watch?v=` segment
    IdNotFound,
    /// The `watch?v=` segment carries an empty value
    EmptyId,
}

impl std::fmt::Display for VideoIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VideoIdError::IdNotFound => write!(f, "cannot extract video id from link"),
            VideoIdError::EmptyId => write!(f, "link carries an empty video id"),
        }
    }
}

impl std::error::Error for VideoIdError {}

/// Result type for video ID extraction.
pub type VideoIdResult<T> = Result<T, VideoIdError>;

/// Extract the video ID from a watch link.
///
/// The ID is the value of the `v` query parameter: everything after
/// `watch?v=` up to the next delimiter, so trailing parameters like `&t=5`
/// are not part of the ID. Extraction failure means no download is attempted
/// for this link.
pub fn extract_video_id(link: &str) -> VideoIdResult<String> {
    const MARKER: &str = "watch?v=";
    let start = link.find(MARKER).map(|p| p + MARKER.len()).ok_or(VideoIdError::IdNotFound)?;
    let remaining = &link[start..];

    let delimiters = ['&', '#', '?', '/', '\\'];
    let end = remaining
        .find(|c| delimiters.contains(&c))
        .unwrap_or(remaining.len());
    let id = remaining[..end].trim();

    if id.is_empty() {
        return Err(VideoIdError::EmptyId);
    }
    Ok(id.to_string())
}

/// Canonical watch URL for a video ID.
pub fn watch_url(id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", id)
}
