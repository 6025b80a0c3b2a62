//! Hover zoom - maps the pointer inside a container to an image transform
//!
//! The mapper is a pure function of pointer position and container
//! rectangle. The DOM adapter looks up the two elements, reads the
//! rectangle fresh, and overwrites the image's `transform` property.

pub mod config;
pub mod dom;
pub mod error;
pub mod mapper;

pub use config::ZoomConfig;
pub use dom::zoom_image;
