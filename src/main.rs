mod catalog;
mod pages;
mod primitives;
mod zoom;

use dioxus::prelude::*;
use catalog::Catalog;
use pages::{CategoryView, Gallery, ItemView};

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Gallery {},
    #[route("/category/:category")]
    CategoryView { category: String },
    #[route("/item/:..segments")]
    ItemView { segments: Vec<String> },
}

#[allow(non_snake_case)]
fn App() -> Element {
    use_context_provider(Catalog::with_builtins);

    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
