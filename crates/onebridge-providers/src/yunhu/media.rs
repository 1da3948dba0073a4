use onebridge_types::{MediaData, MessageSegment};
use serde_json::Value;

use super::schema::{i64_field, str_field};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MediaKind {
    Image,
    Video,
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MediaExtra {
    Width,
    Height,
    Duration,
    Size,
}

/// Content keys used by one media kind
struct MediaFields {
    kind: MediaKind,
    url_key: &'static str,
    name_key: &'static str,
    extras: &'static [(MediaExtra, &'static str)],
}

const MEDIA_FIELDS: &[MediaFields] = &[
    MediaFields {
        kind: MediaKind::Image,
        url_key: "imageUrl",
        name_key: "imageName",
        extras: &[
            (MediaExtra::Width, "imageWidth"),
            (MediaExtra::Height, "imageHeight"),
        ],
    },
    MediaFields {
        kind: MediaKind::Video,
        url_key: "videoUrl",
        name_key: "videoName",
        extras: &[
            (MediaExtra::Width, "videoWidth"),
            (MediaExtra::Height, "videoHeight"),
            (MediaExtra::Duration, "videoDuration"),
        ],
    },
    MediaFields {
        kind: MediaKind::File,
        url_key: "fileUrl",
        name_key: "fileName",
        extras: &[(MediaExtra::Size, "fileSize")],
    },
];

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::File => "file",
        }
    }

    fn fields(&self) -> Option<&'static MediaFields> {
        MEDIA_FIELDS.iter().find(|row| row.kind == *self)
    }

    pub fn into_segment(self, data: MediaData) -> MessageSegment {
        match self {
            MediaKind::Image => MessageSegment::Image(data),
            MediaKind::Video => MessageSegment::Video(data),
            MediaKind::File => MessageSegment::File(data),
        }
    }

    /// `alt_message` placeholder, e.g. `[image:cat.png]`
    pub fn alt_text(&self, file_name: &str) -> String {
        format!("[{}:{}]", self.as_str(), file_name)
    }
}

/// Build the attachment record for a media message
///
/// The platform has no file-id concept, so `file_id` reuses the URL. Numeric
/// extras the kind does not define stay unset; defined ones default to `0`.
pub(crate) fn build_media_data(content: &Value, kind: MediaKind) -> MediaData {
    let Some(fields) = kind.fields() else {
        return MediaData::default();
    };

    let url = str_field(content, fields.url_key);
    let mut data = MediaData {
        file_id: url.clone(),
        url,
        file_name: str_field(content, fields.name_key),
        ..Default::default()
    };

    for (extra, key) in fields.extras {
        let value = Some(i64_field(content, key, 0));
        match extra {
            MediaExtra::Width => data.width = value,
            MediaExtra::Height => data.height = value,
            MediaExtra::Duration => data.duration = value,
            MediaExtra::Size => data.size = value,
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_kind_has_a_row() {
        for kind in [MediaKind::Image, MediaKind::Video, MediaKind::File] {
            assert!(kind.fields().is_some(), "{}", kind.as_str());
        }
    }

    #[test]
    fn test_image() {
        let content = json!({
            "imageUrl": "https://chat-img.jwznb.com/a.png",
            "imageName": "a.png",
            "imageWidth": 1080,
            "imageHeight": 720
        });
        let data = build_media_data(&content, MediaKind::Image);

        assert_eq!(data.file_id, "https://chat-img.jwznb.com/a.png");
        assert_eq!(data.url, data.file_id);
        assert_eq!(data.file_name, "a.png");
        assert_eq!(data.width, Some(1080));
        assert_eq!(data.height, Some(720));
        assert_eq!(data.duration, None);
        assert_eq!(data.size, None);
    }

    #[test]
    fn test_video() {
        let content = json!({
            "videoUrl": "https://v/clip.mp4",
            "videoName": "clip.mp4",
            "videoDuration": 15
        });
        let data = build_media_data(&content, MediaKind::Video);

        assert_eq!(data.file_name, "clip.mp4");
        assert_eq!(data.width, Some(0));
        assert_eq!(data.height, Some(0));
        assert_eq!(data.duration, Some(15));
        assert_eq!(data.size, None);
    }

    #[test]
    fn test_file() {
        let content = json!({"fileUrl": "https://f/r.pdf", "fileName": "r.pdf", "fileSize": 20480});
        let data = build_media_data(&content, MediaKind::File);

        assert_eq!(data.size, Some(20480));
        assert_eq!(data.width, None);
    }

    #[test]
    fn test_loosely_typed_dimensions() {
        let content = json!({"imageWidth": "1080", "imageHeight": 720.5});
        let data = build_media_data(&content, MediaKind::Image);

        assert_eq!(data.width, Some(1080));
        assert_eq!(data.height, Some(720));

        let content = json!({"imageWidth": "wide", "imageHeight": null});
        let data = build_media_data(&content, MediaKind::Image);
        assert_eq!(data.width, Some(0));
        assert_eq!(data.height, Some(0));
    }

    #[test]
    fn test_missing_content_defaults() {
        let data = build_media_data(&Value::Null, MediaKind::File);
        assert_eq!(data.url, "");
        assert_eq!(data.file_name, "");
        assert_eq!(data.size, Some(0));
    }

    #[test]
    fn test_alt_text_and_segment() {
        assert_eq!(MediaKind::Image.alt_text("a.png"), "[image:a.png]");
        assert_eq!(MediaKind::File.alt_text(""), "[file:]");

        let segment = MediaKind::Video.into_segment(MediaData::default());
        assert_eq!(segment.kind(), "video");
    }
}
