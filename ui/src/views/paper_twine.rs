use dioxus::prelude::*;

use crate::views::detail::DetailPage;

#[component]
pub fn PaperTwine() -> Element {
    rsx! { DetailPage { parent: None, prefix: "twine" } }
}
