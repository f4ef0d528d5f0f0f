//! Loading the image list and settings for the demo.

use std::fs;
use std::path::Path;

use carousel::{CarouselConfig, CarouselImage};
use log::info;
use serde::Deserialize;

use crate::error::TuiError;

fn default_cell_width() -> f32 {
    8.0
}

/// Contents of a manifest file.
///
/// ```json
/// {
///   "images": [{ "src": "https://example.com/1.jpg", "alt": "Harbour" }],
///   "carousel": { "aria_label": "Trip", "gestures": { "long_press_ms": 500 } },
///   "cell_width_px": 8.0
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub images: Vec<CarouselImage>,
    #[serde(default)]
    pub carousel: CarouselConfig,
    /// Pixels per terminal column, used to turn mouse columns into x positions.
    #[serde(default = "default_cell_width")]
    pub cell_width_px: f32,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self, TuiError> {
        let text = fs::read_to_string(path)?;
        let manifest: Manifest = serde_json::from_str(&text)?;
        if manifest.images.is_empty() {
            return Err(TuiError::EmptyManifest(path.to_path_buf()));
        }
        manifest.validate()?;
        info!("Loaded {} images from {}", manifest.images.len(), path.display());
        Ok(manifest)
    }

    pub fn validate(&self) -> Result<(), TuiError> {
        if !(self.cell_width_px.is_finite() && self.cell_width_px > 0.0) {
            return Err(TuiError::InvalidCellWidth(self.cell_width_px));
        }
        self.carousel.validate()?;
        Ok(())
    }

    /// Built-in set used when no manifest is given.
    pub fn demo() -> Self {
        let images = [
            ("harbour", "Harbour at dawn"),
            ("market", "Fish market"),
            ("lighthouse", "Lighthouse"),
            ("dunes", "Dunes"),
            ("ferry", "Evening ferry"),
            ("storm", "Storm over the bay"),
        ]
        .into_iter()
        .map(|(name, caption)| {
            CarouselImage::new(format!("https://example.com/photos/{name}.jpg"))
                .thumbnail(format!("https://example.com/photos/{name}-thumb.jpg"))
                .caption(caption)
        })
        .collect();

        Self {
            images,
            carousel: CarouselConfig::new().aria_label("Coastal photos"),
            cell_width_px: default_cell_width(),
        }
    }
}
