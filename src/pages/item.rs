use dioxus::prelude::*;

use crate::Route;
use crate::catalog::{self, Catalog, ItemPage, ItemRef};

use super::{ErrorPanel, ZoomFrame};

/// Item page; the route captures every segment after `/item/` so that
/// short paths reach [`ItemRef::parse`] and get a proper error.
#[component]
pub fn ItemView(segments: Vec<String>) -> Element {
    let catalog = use_context::<Catalog>();

    let page = ItemRef::parse(&segments.join("/")).and_then(|item| catalog.item(&item));
    match page {
        Ok(page) => {
            let key = format!("{}/{}", page.category, page.item);
            rsx! { ItemDetail { key: "{key}", page } }
        }
        Err(err) => {
            tracing::warn!(%err, "item page failed");
            rsx! { ErrorPanel { message: err.to_string() } }
        }
    }
}

const THUMB_STYLE: &str = "width: 64px; height: 64px; object-fit: cover; border-radius: 6px; border: 2px solid transparent; opacity: 0.7;";
const THUMB_SELECTED_STYLE: &str = "width: 64px; height: 64px; object-fit: cover; border-radius: 6px; border: 2px solid #3b82f6;";

/// Thumbnail chosen on one item page
#[derive(Debug, Clone, Default, PartialEq)]
struct Selection {
    item: String,
    index: usize,
}

impl Selection {
    fn new(item: &str, index: usize) -> Self {
        Self { item: item.to_string(), index }
    }

    /// Index to show for `item`; falls back to the first image when the
    /// selection belongs to another item or is past the end.
    fn index_for(&self, item: &str, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else if self.item == item && self.index < len {
            Some(self.index)
        } else {
            Some(0)
        }
    }
}

#[component]
fn ItemDetail(page: ItemPage) -> Element {
    let mut selection = use_signal(Selection::default);

    let category = page.category.clone();
    let item = page.item.clone();
    let item_key = format!("{category}/{item}");
    let shown = selection.read().index_for(&item_key, page.images.len());
    let current = shown.and_then(|i| page.images.get(i)).cloned();

    let main_view = match current {
        Some(file) => rsx! {
            ZoomFrame {
                src: catalog::image_url(&category, &item, &file),
                alt: "{item} {file}",
            }
        },
        None => rsx! {
            div {
                style: "width: 400px; height: 400px; display: flex; align-items: center; justify-content: center; background: #1a1a2e; border-radius: 10px; color: #6b7280;",
                "No images"
            }
        },
    };

    let thumbs: Vec<(usize, String, &'static str)> = page
        .images
        .iter()
        .enumerate()
        .map(|(i, file)| {
            let style = if Some(i) == shown { THUMB_SELECTED_STYLE } else { THUMB_STYLE };
            (i, catalog::image_url(&category, &item, file), style)
        })
        .collect();

    rsx! {
        div {
            style: super::PAGE_STYLE,
            div {
                style: "width: 800px; margin-bottom: 16px;",
                Link {
                    to: Route::CategoryView { category: category.clone() },
                    style: super::LINK_STYLE,
                    "\u{2190} {category}"
                }
            }
            div {
                style: "display: flex; gap: 32px; width: 800px;",
                div {
                    style: "display: flex; flex-direction: column; gap: 12px;",
                    {main_view}
                    div {
                        style: "display: flex; gap: 8px;",
                        for (i, url, style) in thumbs {
                            img {
                                key: "{url}",
                                src: "{url}",
                                cursor: "pointer",
                                style: "{style}",
                                onclick: {
                                    let item_key = item_key.clone();
                                    move |_| selection.set(Selection::new(&item_key, i))
                                },
                            }
                        }
                    }
                }
                div {
                    style: "flex: 1;",
                    h1 { style: "font-size: 28px; margin: 0 0 12px 0;", "{item}" }
                    p { style: "color: #9ca3af; font-size: 15px; line-height: 1.6; white-space: pre-wrap;", "{page.description}" }
                }
            }
        }
    }
}
