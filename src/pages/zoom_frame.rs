//! Hover-zoom frame
//!
//! Structure:
//!   container div (class `zoom-container`, clips the overflow)
//!     img (id `zoomImage`, receives the transform)
//!
//! Each mouse move goes through the same class/id lookup the rest of
//! the page could use, so only one frame should be mounted at a time.

use dioxus::prelude::*;

use crate::primitives::{PointerPos, Scale};
use crate::zoom::config::{ZOOM_CONTAINER_CLASS, ZOOM_IMAGE_ID};
use crate::zoom::{ZoomConfig, zoom_image};

#[component]
pub fn ZoomFrame(
    src: String,
    alt: String,
    #[props(default = Scale::DOUBLE)] scale: Scale,
) -> Element {
    let config = use_hook(|| ZoomConfig::default().with_scale(scale));

    rsx! {
        div {
            class: ZOOM_CONTAINER_CLASS,
            style: "width: 400px; height: 400px; overflow: hidden; border-radius: 10px; background: #1a1a2e; cursor: zoom-in;",
            onmousemove: move |e: Event<MouseData>| {
                let client = e.client_coordinates();
                if let Err(err) = zoom_image(PointerPos::new(client.x, client.y), &config) {
                    tracing::warn!(%err, "zoom frame skipped");
                }
            },
            img {
                id: ZOOM_IMAGE_ID,
                src: "{src}",
                alt: "{alt}",
                style: "width: 100%; height: 100%; object-fit: cover; display: block; transform-origin: center center;",
            }
        }
    }
}
