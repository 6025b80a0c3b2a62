use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn ErrorPanel(message: String) -> Element {
    rsx! {
        div {
            style: super::PAGE_STYLE,
            div {
                style: "background: #1a1a2e; border: 1px solid #7f1d1d; border-radius: 10px; padding: 24px; max-width: 480px;",
                h3 { style: "margin: 0 0 8px 0; color: #fca5a5; font-size: 16px;", "Not available" }
                p { style: "margin: 0 0 16px 0; color: #9ca3af; font-size: 14px;", "{message}" }
                Link { to: Route::Gallery {}, style: super::LINK_STYLE, "\u{2190} Back to gallery" }
            }
        }
    }
}
