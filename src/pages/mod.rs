//! Gallery views, one per route

mod category;
mod error_panel;
mod gallery;
mod item;
mod zoom_frame;

pub use category::CategoryView;
pub use gallery::Gallery;
pub use item::ItemView;

pub(crate) use error_panel::ErrorPanel;
pub(crate) use zoom_frame::ZoomFrame;

pub(crate) const PAGE_STYLE: &str = "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; padding: 40px 20px; font-family: system-ui, sans-serif; color: #e5e7eb;";
pub(crate) const LINK_STYLE: &str = "color: #9ca3af; text-decoration: none; font-size: 14px;";
