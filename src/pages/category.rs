use dioxus::prelude::*;

use crate::Route;
use crate::catalog::{Catalog, CategoryPage};

use super::ErrorPanel;

#[component]
pub fn CategoryView(category: String) -> Element {
    let catalog = use_context::<Catalog>();

    match catalog.category(&category) {
        Ok(page) => rsx! { CategoryGrid { page } },
        Err(err) => {
            tracing::warn!(%err, "category page failed");
            rsx! { ErrorPanel { message: err.to_string() } }
        }
    }
}

#[component]
fn CategoryGrid(page: CategoryPage) -> Element {
    let category = page.category.clone();

    rsx! {
        div {
            style: super::PAGE_STYLE,
            div {
                style: "width: 800px; margin-bottom: 16px;",
                Link { to: Route::Gallery {}, style: super::LINK_STYLE, "\u{2190} All categories" }
            }
            h1 {
                style: "font-size: 32px; margin: 0 0 24px 0; text-transform: capitalize;",
                "{category}"
            }
            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 20px; width: 800px;",
                for entry in page.items {
                    Link {
                        key: "{entry.name}",
                        to: Route::ItemView {
                            segments: vec![category.clone(), entry.name.clone()],
                        },
                        style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; overflow: hidden; color: #e5e7eb; text-decoration: none;",
                        img {
                            src: "{entry.thumbnail}",
                            alt: "{entry.name}",
                            style: "width: 100%; height: 180px; object-fit: cover; display: block; background: #2a2a4a;",
                        }
                        div { style: "padding: 12px 16px; font-size: 14px;", "{entry.name}" }
                    }
                }
            }
        }
    }
}
