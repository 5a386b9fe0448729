use dioxus::prelude::*;

use crate::{use_i18n, use_nav};

#[component]
pub fn ArtworkRequirements() -> Element {
    let nav = use_nav();
    let i18n = use_i18n();
    let lang = nav.read().lang();

    rsx! {
        section { class: "page page-artwork",
            h1 { {i18n.tr(lang, "artwork-title")} }
            p { class: "page__lead", {i18n.tr(lang, "artwork-subtitle")} }

            ol { class: "page-artwork__requirements",
                for n in 1..=5 {
                    li { key: "{n}", {i18n.tr(lang, &format!("artwork-req-{n}"))} }
                }
            }

            h2 { {i18n.tr(lang, "artwork-formats-title")} }
            p { {i18n.tr(lang, "artwork-formats")} }

            p { class: "page-artwork__note", {i18n.tr(lang, "artwork-note")} }
        }
    }
}
