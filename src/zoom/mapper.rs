//! Pointer-to-transform mapping
//!
//! ```text
//! mouse      = pointer - rect.origin
//! percent    = mouse / rect.size * 100
//! translate  = (percent - 50) * gain
//! ```
//!
//! Nothing is clamped: a pointer outside the container produces
//! translate values beyond ±100% and those are emitted as-is.

use std::fmt;

use super::config::ZoomConfig;
use super::error::{Axis, ZoomError};
use crate::primitives::{ContainerRect, Percent, PointerPos, Scale};

/// Translate then scale, in that order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    pub translate_x: Percent,
    pub translate_y: Percent,
    pub scale: Scale,
}

impl ZoomTransform {
    pub fn to_css(&self) -> String {
        format!(
            "translate({}, {}) {}",
            self.translate_x.to_css(),
            self.translate_y.to_css(),
            self.scale.to_css()
        )
    }
}

impl fmt::Display for ZoomTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Compute the image transform for `pointer` over `rect`.
///
/// Fails with [`ZoomError::DivideByZero`] for a rect with zero width or
/// height, and [`ZoomError::NonFinitePointer`] for NaN/infinite input.
pub fn map_pointer(
    pointer: PointerPos,
    rect: ContainerRect,
    config: &ZoomConfig,
) -> Result<ZoomTransform, ZoomError> {
    if !pointer.is_finite() {
        return Err(ZoomError::NonFinitePointer { x: pointer.x, y: pointer.y });
    }
    if !rect.has_area() {
        let axis = if rect.width == 0.0 { Axis::X } else { Axis::Y };
        return Err(ZoomError::DivideByZero { axis });
    }

    let (mouse_x, mouse_y) = rect.offset_of(pointer);
    let percent_x = mouse_x / rect.width * 100.0;
    let percent_y = mouse_y / rect.height * 100.0;

    Ok(ZoomTransform {
        translate_x: Percent::new((percent_x - 50.0) * config.gain),
        translate_y: Percent::new((percent_y - 50.0) * config.gain),
        scale: config.scale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: ContainerRect = ContainerRect::new(100.0, 50.0, 200.0, 100.0);

    fn css(x: f64, y: f64) -> String {
        map_pointer(PointerPos::new(x, y), RECT, &ZoomConfig::default())
            .unwrap()
            .to_css()
    }

    #[test]
    fn centre_is_identity_translate() {
        assert_eq!(css(200.0, 100.0), "translate(0%, 0%) scale(2)");
    }

    #[test]
    fn top_left_corner() {
        assert_eq!(css(100.0, 50.0), "translate(-100%, -100%) scale(2)");
    }

    #[test]
    fn bottom_right_corner() {
        assert_eq!(css(300.0, 150.0), "translate(100%, 100%) scale(2)");
    }

    #[test]
    fn outside_container_is_not_clamped() {
        let t = map_pointer(PointerPos::new(0.0, 0.0), RECT, &ZoomConfig::default()).unwrap();
        // percent = (-50%, -50%)
        assert_eq!(t.translate_x.value(), -200.0);
        assert_eq!(t.translate_y.value(), -200.0);
        assert_eq!(t.to_css(), "translate(-200%, -200%) scale(2)");
    }

    #[test]
    fn fractional_values_are_not_rounded() {
        // mouse (25, 12.5) -> percent (12.5, 12.5) -> translate (-75, -75)
        assert_eq!(css(125.0, 62.5), "translate(-75%, -75%) scale(2)");
        let rect = ContainerRect::new(0.0, 0.0, 128.0, 128.0);
        let t = map_pointer(PointerPos::new(65.0, 48.0), rect, &ZoomConfig::default()).unwrap();
        // percent (50.78125, 37.5)
        assert_eq!(t.to_css(), "translate(1.5625%, -25%) scale(2)");
    }

    #[test]
    fn identical_inputs_identical_output() {
        assert_eq!(css(173.0, 91.0), css(173.0, 91.0));
    }

    #[test]
    fn zero_width_is_divide_by_zero() {
        let rect = ContainerRect::new(0.0, 0.0, 0.0, 100.0);
        let err = map_pointer(PointerPos::new(5.0, 5.0), rect, &ZoomConfig::default()).unwrap_err();
        assert_eq!(err, ZoomError::DivideByZero { axis: Axis::X });
    }

    #[test]
    fn zero_height_is_divide_by_zero() {
        let rect = ContainerRect::new(0.0, 0.0, 100.0, 0.0);
        let err = map_pointer(PointerPos::new(5.0, 5.0), rect, &ZoomConfig::default()).unwrap_err();
        assert_eq!(err, ZoomError::DivideByZero { axis: Axis::Y });
    }

    #[test]
    fn zero_area_reports_width_first() {
        let rect = ContainerRect::new(0.0, 0.0, 0.0, 0.0);
        let err = map_pointer(PointerPos::new(5.0, 5.0), rect, &ZoomConfig::default()).unwrap_err();
        assert_eq!(err, ZoomError::DivideByZero { axis: Axis::X });
    }

    #[test]
    fn non_finite_pointer_rejected() {
        let err = map_pointer(PointerPos::new(f64::NAN, 1.0), RECT, &ZoomConfig::default())
            .unwrap_err();
        assert!(matches!(err, ZoomError::NonFinitePointer { .. }));
    }

    #[test]
    fn gain_and_scale_follow_config() {
        let config = ZoomConfig { gain: 1.0, ..ZoomConfig::default() }.with_scale(Scale::new(3.0));
        let t = map_pointer(PointerPos::new(100.0, 50.0), RECT, &config).unwrap();
        assert_eq!(t.to_string(), "translate(-50%, -50%) scale(3)");
    }
}
