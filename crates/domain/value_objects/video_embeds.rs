use serde::Serialize;
use url::Url;

use crate::domain::value_objects::enums::video_platforms::VideoPlatform;

/// Thumbnail shown for videos that are not hosted on a recognised platform.
pub const GENERIC_VIDEO_THUMBNAIL: &str = "/api/placeholder?width=640&height=360&text=Video";

const MAX_VIDEO_ID_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEmbed {
    pub platform: VideoPlatform,
    pub video_id: Option<String>,
    pub embed_url: String,
    pub thumbnail_url: String,
}

/// Classifies a video URL and derives its embed and thumbnail URLs.
///
/// Never fails: anything that is not a recognisable YouTube or Vimeo link is
/// treated as a direct file and embedded as-is.
pub fn classify_video_url(raw: &str) -> VideoEmbed {
    match parse_lenient(raw).and_then(|url| extract_platform_id(&url)) {
        Some((VideoPlatform::YouTube, id)) => VideoEmbed {
            platform: VideoPlatform::YouTube,
            embed_url: format!("https://www.youtube.com/embed/{}", id),
            thumbnail_url: format!("https://img.youtube.com/vi/{}/hqdefault.jpg", id),
            video_id: Some(id),
        },
        Some((VideoPlatform::Vimeo, id)) => VideoEmbed {
            platform: VideoPlatform::Vimeo,
            embed_url: format!("https://player.vimeo.com/video/{}", id),
            thumbnail_url: format!("https://vumbnail.com/{}.jpg", id),
            video_id: Some(id),
        },
        _ => VideoEmbed {
            platform: VideoPlatform::Direct,
            video_id: None,
            embed_url: raw.to_string(),
            thumbnail_url: GENERIC_VIDEO_THUMBNAIL.to_string(),
        },
    }
}

pub fn detect_platform(raw: &str) -> VideoPlatform {
    classify_video_url(raw).platform
}

pub fn get_embed_url(raw: &str) -> String {
    classify_video_url(raw).embed_url
}

pub fn get_thumbnail_url(raw: &str) -> String {
    classify_video_url(raw).thumbnail_url
}

fn parse_lenient(raw: &str) -> Option<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().any(|c| c.is_control()) {
        return None;
    }

    match Url::parse(trimmed) {
        Ok(url) => Some(url),
        // Links pasted without a scheme, e.g. "youtu.be/abc".
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{}", trimmed)).ok()
        }
        Err(_) => None,
    }
}

fn extract_platform_id(url: &Url) -> Option<(VideoPlatform, String)> {
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    let host = url.host_str()?.to_ascii_lowercase();
    let host = host
        .strip_prefix("www.")
        .or_else(|| host.strip_prefix("m."))
        .unwrap_or(&host)
        .to_string();
    let segments: Vec<&str> = url
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    match host.as_str() {
        "youtube.com" | "youtube-nocookie.com" => {
            let id = match segments.as_slice() {
                ["watch"] => url
                    .query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned()),
                ["embed" | "shorts" | "live" | "v", id, ..] => Some(id.to_string()),
                _ => None,
            }?;
            valid_youtube_id(&id).then_some((VideoPlatform::YouTube, id))
        }
        "youtu.be" => {
            let id = segments.first()?.to_string();
            valid_youtube_id(&id).then_some((VideoPlatform::YouTube, id))
        }
        "vimeo.com" => {
            // Covers vimeo.com/123, vimeo.com/channels/staffpicks/123 and similar.
            let id = segments
                .iter()
                .rev()
                .find(|segment| is_numeric_id(segment))?;
            Some((VideoPlatform::Vimeo, id.to_string()))
        }
        "player.vimeo.com" => match segments.as_slice() {
            ["video", id, ..] if is_numeric_id(id) => Some((VideoPlatform::Vimeo, id.to_string())),
            _ => None,
        },
        _ => None,
    }
}

fn valid_youtube_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_VIDEO_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn is_numeric_id(segment: &str) -> bool {
    !segment.is_empty()
        && segment.len() <= MAX_VIDEO_ID_LEN
        && segment.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_variants_share_the_same_id() {
        let urls = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?t=42",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
            "youtu.be/dQw4w9WgXcQ",
        ];

        for url in urls {
            let embed = classify_video_url(url);
            assert_eq!(embed.platform, VideoPlatform::YouTube, "{url}");
            assert_eq!(embed.video_id.as_deref(), Some("dQw4w9WgXcQ"), "{url}");
            assert_eq!(embed.embed_url, "https://www.youtube.com/embed/dQw4w9WgXcQ");
            assert_eq!(
                embed.thumbnail_url,
                "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
            );
        }
    }

    #[test]
    fn vimeo_links_use_the_numeric_id() {
        for url in [
            "https://vimeo.com/76979871",
            "https://vimeo.com/channels/staffpicks/76979871",
            "https://player.vimeo.com/video/76979871?h=abc",
        ] {
            let embed = classify_video_url(url);
            assert_eq!(embed.platform, VideoPlatform::Vimeo, "{url}");
            assert_eq!(embed.embed_url, "https://player.vimeo.com/video/76979871");
            assert_eq!(embed.thumbnail_url, "https://vumbnail.com/76979871.jpg");
        }
    }

    #[test]
    fn unrecognised_urls_are_embedded_unmodified() {
        for url in [
            "https://cdn.example.com/highlights/game-1.mp4",
            "https://www.youtube.com/channel/UC123",
            "https://vimeo.com/about",
            "not a url at all",
            "",
            "ftp://youtube.com/watch?v=dQw4w9WgXcQ",
        ] {
            let embed = classify_video_url(url);
            assert_eq!(embed.platform, VideoPlatform::Direct, "{url}");
            assert_eq!(embed.embed_url, url);
            assert_eq!(embed.thumbnail_url, GENERIC_VIDEO_THUMBNAIL);
            assert!(embed.video_id.is_none());
        }
    }

    #[test]
    fn helpers_delegate_to_classification() {
        let url = "https://youtu.be/abc123XYZ_-";
        assert_eq!(detect_platform(url), VideoPlatform::YouTube);
        assert_eq!(get_embed_url(url), "https://www.youtube.com/embed/abc123XYZ_-");
        assert_eq!(
            get_thumbnail_url(url),
            "https://img.youtube.com/vi/abc123XYZ_-/hqdefault.jpg"
        );
    }
}
