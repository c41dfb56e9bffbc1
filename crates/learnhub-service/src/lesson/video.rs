//! YouTube video-id extraction for lesson embedding.

/// Length of a YouTube video id.
const VIDEO_ID_LEN: usize = 11;

/// Markers that precede the video id in the supported URL shapes.
const MARKERS: [&str; 5] = ["youtu.be/", "watch?v=", "&v=", "embed/", "/v/"];

/// Extracts the 11-character YouTube video id from a URL.
///
/// Supports the usual shapes: `watch?v=`, `youtu.be/`, `embed/`, `/v/`,
/// and a trailing `&v=` parameter. When several markers appear, the
/// rightmost one wins. Returns `None` when the candidate after the
/// marker is not exactly 11 characters; the caller then falls back to an
/// "unsupported video" message instead of embedding.
pub fn youtube_video_id(url: &str) -> Option<String> {
    let start = MARKERS
        .iter()
        .filter_map(|marker| url.rfind(marker).map(|pos| pos + marker.len()))
        .max()?;

    let tail = &url[start..];
    let id = tail
        .split(['#', '&', '?'])
        .next()
        .unwrap_or_default();

    (id.len() == VIDEO_ID_LEN).then(|| id.to_string())
}
