//! Value types for the hover zoom
//!
//! Each CSS-facing primitive has a `to_css()` that renders the exact
//! fragment written into the `transform` property.

#[macro_use]
pub mod bounded;
pub mod percent;
pub mod pointer;
pub mod rect;
pub mod scale;

pub use percent::Percent;
pub use pointer::PointerPos;
pub use rect::ContainerRect;
pub use scale::Scale;
