//! ContainerRect - on-screen bounding box of the zoom container
//!
//! Read fresh from layout on every pointer move; never cached, so it
//! tracks scrolling and resizing.

use super::PointerPos;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Pointer position relative to the rect origin
    pub fn offset_of(&self, pointer: PointerPos) -> (f64, f64) {
        (pointer.x - self.left, pointer.y - self.top)
    }

    pub fn has_area(&self) -> bool {
        self.width != 0.0 && self.height != 0.0
    }
}
