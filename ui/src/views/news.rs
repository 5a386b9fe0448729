use dioxus::prelude::*;

use crate::{use_i18n, use_nav};

/// Serves both the `news` and legacy `blog` page ids.
#[component]
pub fn News() -> Element {
    let nav = use_nav();
    let i18n = use_i18n();
    let lang = nav.read().lang();

    rsx! {
        section { class: "page page-news",
            h1 { {i18n.tr(lang, "news-title")} }
            p { class: "page__lead", {i18n.tr(lang, "news-subtitle")} }
            p { class: "page-news__coming", {i18n.tr(lang, "news-coming")} }
        }
    }
}
