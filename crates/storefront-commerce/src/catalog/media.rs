//! Product media (images and videos).

use crate::ids::MediaId;
use serde::{Deserialize, Serialize};

/// Media type for product images/videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
    #[serde(other)]
    Unknown,
}

/// An image reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInfo {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub alt_text: Option<String>,
}

/// One encoded rendition of a video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFile {
    pub url: String,
    /// Container format (e.g. "mp4").
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
}

/// Video media.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfo {
    #[serde(default)]
    pub files: Vec<VideoFile>,
    /// Media ID of the still frame used for previews.
    #[serde(default)]
    pub still_frame_media_id: Option<String>,
}

/// A single gallery item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    #[serde(rename = "_id", default)]
    pub id: MediaId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub media_type: MediaType,
    #[serde(default)]
    pub image: Option<ImageInfo>,
    #[serde(default)]
    pub video: Option<VideoInfo>,
    #[serde(default)]
    pub thumbnail: Option<ImageInfo>,
}

impl MediaItem {
    /// Create an image item.
    pub fn image(id: impl Into<MediaId>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            media_type: MediaType::Image,
            image: Some(ImageInfo {
                url: url.into(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Whether this item is a playable video.
    pub fn is_video(&self) -> bool {
        self.image.is_none() && self.video_file().is_some()
    }

    /// First video rendition, if any.
    pub fn video_file(&self) -> Option<&VideoFile> {
        self.video.as_ref().and_then(|v| v.files.first())
    }

    /// Alt text of the image or, failing that, of the video.
    pub fn alt_text(&self) -> Option<&str> {
        self.image
            .as_ref()
            .and_then(|i| i.alt_text.as_deref())
            .or_else(|| self.video_file().and_then(|f| f.alt_text.as_deref()))
    }

    /// URL for the gallery thumbnail strip.
    ///
    /// Images use their own URL. Videos use the thumbnail URL cut right after
    /// the still-frame media ID, which drops the platform's resize suffix.
    pub fn preview_url(&self) -> Option<String> {
        if let Some(image) = &self.image {
            return Some(image.url.clone());
        }
        let still = self.video.as_ref()?.still_frame_media_id.as_deref()?;
        let thumb = self.thumbnail.as_ref()?.url.as_str();
        let head = thumb.split(still).next().unwrap_or_default();
        Some(format!("{head}{still}"))
    }
}

/// Product media gallery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaGallery {
    #[serde(default)]
    pub main_media: Option<MediaItem>,
    #[serde(default)]
    pub items: Vec<MediaItem>,
}

impl MediaGallery {
    /// Main image for cards and link previews.
    pub fn main_image(&self) -> Option<&ImageInfo> {
        self.main_media
            .as_ref()
            .or_else(|| self.items.first())
            .and_then(|m| m.image.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
