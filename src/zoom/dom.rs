//! DOM adapter for the hover zoom
//!
//! Element lookup and the style write live here; the math stays in
//! [`map_pointer`]. The traits let tests drive [`apply_zoom`] without a
//! browser.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::config::ZoomConfig;
use super::error::{Lookup, ZoomError};
use super::mapper::{ZoomTransform, map_pointer};
use crate::primitives::{ContainerRect, PointerPos};

/// Anything that can report its current on-screen rectangle
pub trait RectSource {
    fn bounding_rect(&self) -> ContainerRect;
}

/// Receives the transform string, replacing any previous value
pub trait StyleSink {
    fn set_transform(&self, css: &str) -> Result<(), ZoomError>;
}

impl RectSource for Element {
    fn bounding_rect(&self) -> ContainerRect {
        let rect = self.get_bounding_client_rect();
        ContainerRect::new(rect.x(), rect.y(), rect.width(), rect.height())
    }
}

impl StyleSink for HtmlElement {
    fn set_transform(&self, css: &str) -> Result<(), ZoomError> {
        self.style()
            .set_property("transform", css)
            .map_err(|err| ZoomError::StyleRejected(format!("{err:?}")))
    }
}

/// Map `pointer` over `container` and write the result to `image`.
///
/// Both lookups are checked before anything is read or written, so a
/// miss leaves the image untouched.
pub fn apply_zoom<R, S>(
    pointer: PointerPos,
    container: Option<&R>,
    image: Option<&S>,
    config: &ZoomConfig,
) -> Result<ZoomTransform, ZoomError>
where
    R: RectSource + ?Sized,
    S: StyleSink + ?Sized,
{
    let container = container.ok_or_else(|| ZoomError::NotFound {
        what: Lookup::Container,
        key: config.container_selector.clone(),
    })?;
    let image = image.ok_or_else(|| ZoomError::NotFound {
        what: Lookup::Image,
        key: config.image_id.clone(),
    })?;

    let transform = map_pointer(pointer, container.bounding_rect(), config)?;
    image.set_transform(&transform.to_css())?;
    tracing::trace!(
        x = transform.translate_x.value(),
        y = transform.translate_y.value(),
        scale = transform.scale.value(),
        "zoom applied"
    );
    Ok(transform)
}

/// Pointer-move handler: find the container and image in the live
/// document and apply the zoom.
pub fn zoom_image(pointer: PointerPos, config: &ZoomConfig) -> Result<ZoomTransform, ZoomError> {
    let document = web_sys::window().and_then(|w| w.document());

    // An invalid selector is reported the same as no match
    let container = document
        .as_ref()
        .and_then(|doc| doc.query_selector(&config.container_selector).ok().flatten());
    let image = document
        .as_ref()
        .and_then(|doc| doc.get_element_by_id(&config.image_id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    apply_zoom(pointer, container.as_ref(), image.as_ref(), config)
}
