//! Items shown by the carousel.

use serde::{Deserialize, Serialize};

/// Anything the carousel can display.
///
/// Only a source locator is required. Labels and thumbnails fall back to
/// generated text and the source locator respectively.
pub trait CarouselItem {
    /// Locator of the full-size image.
    fn src(&self) -> &str;

    /// Human-readable label, if any.
    fn label(&self) -> Option<&str> {
        None
    }

    /// Locator of a smaller preview, if distinct from [`CarouselItem::src`].
    fn thumbnail_src(&self) -> Option<&str> {
        None
    }
}

/// An image entry as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselImage {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CarouselImage {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Default::default()
        }
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn thumbnail(mut self, src: impl Into<String>) -> Self {
        self.thumbnail_src = Some(src.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

impl CarouselItem for CarouselImage {
    fn src(&self) -> &str {
        &self.src
    }

    /// Caption wins over alt text.
    fn label(&self) -> Option<&str> {
        self.caption.as_deref().or(self.alt.as_deref())
    }

    fn thumbnail_src(&self) -> Option<&str> {
        self.thumbnail_src.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_prefers_caption() {
        let image = CarouselImage::new("a.jpg").alt("Alt").caption("Caption");
        assert_eq!(image.label(), Some("Caption"));

        let image = CarouselImage::new("a.jpg").alt("Alt");
        assert_eq!(image.label(), Some("Alt"));

        assert_eq!(CarouselImage::new("a.jpg").label(), None);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let image: CarouselImage = serde_json::from_str(
            r#"{"src": "a.jpg", "thumbnailSrc": "a-small.jpg", "width": 640}"#,
        )
        .unwrap();
        assert_eq!(image.thumbnail_src(), Some("a-small.jpg"));
        assert_eq!(image.width, Some(640));
        assert_eq!(image.caption, None);
    }
}
