//! ZoomConfig - lookup keys and zoom factors for the hover zoom

use crate::primitives::Scale;

/// Class marker of the element whose rectangle drives the zoom
pub const ZOOM_CONTAINER_CLASS: &str = "zoom-container";
/// Id of the image that receives the transform
pub const ZOOM_IMAGE_ID: &str = "zoomImage";
/// Multiplier from "percent off centre" to translate percentage
pub const DEFAULT_GAIN: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ZoomConfig {
    /// CSS selector; the first match is used
    pub container_selector: String,
    pub image_id: String,
    pub gain: f64,
    pub scale: Scale,
}

impl ZoomConfig {
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            container_selector: format!(".{ZOOM_CONTAINER_CLASS}"),
            image_id: ZOOM_IMAGE_ID.to_string(),
            gain: DEFAULT_GAIN,
            scale: Scale::DOUBLE,
        }
    }
}
