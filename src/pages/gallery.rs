use dioxus::prelude::*;

use crate::Route;
use crate::catalog::Catalog;

/// Index page: one card per category
#[component]
pub fn Gallery() -> Element {
    let catalog = use_context::<Catalog>();
    let categories = catalog.categories();

    rsx! {
        div {
            style: super::PAGE_STYLE,
            h1 {
                style: "font-size: 40px; font-weight: 700; margin: 0 0 32px 0; letter-spacing: -1px;",
                "Gallery"
            }
            if categories.is_empty() {
                p { style: "color: #6b7280;", "Nothing here yet." }
            }
            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 20px; max-width: 800px; width: 100%;",
                for category in categories {
                    Link {
                        key: "{category}",
                        to: Route::CategoryView { category: category.clone() },
                        style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 24px; color: #e5e7eb; text-decoration: none; font-size: 18px; font-weight: 600; text-transform: capitalize;",
                        "{category}"
                    }
                }
            }
        }
    }
}
