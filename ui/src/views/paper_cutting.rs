use dioxus::prelude::*;

use crate::views::detail::DetailPage;

#[component]
pub fn PaperCutting() -> Element {
    rsx! { DetailPage { parent: None, prefix: "cutting" } }
}
