use dioxus::prelude::*;

use crate::core::page::PageId;
use crate::{use_i18n, use_nav};

#[component]
pub fn Prices() -> Element {
    let mut nav = use_nav();
    let i18n = use_i18n();
    let lang = nav.read().lang();

    rsx! {
        section { class: "page page-prices",
            h1 { {i18n.tr(lang, "prices-title")} }
            p { class: "page__lead", {i18n.tr(lang, "prices-subtitle")} }

            h2 { {i18n.tr(lang, "prices-factors-title")} }
            ul { class: "page-prices__factors",
                for n in 1..=4 {
                    li { key: "{n}", {i18n.tr(lang, &format!("prices-factor-{n}"))} }
                }
            }

            p { class: "page-prices__note", {i18n.tr(lang, "prices-note")} }

            button {
                class: "btn btn--primary",
                onclick: move |_| nav.write().navigate(PageId::Contact),
                {i18n.tr(lang, "prices-cta")}
            }
        }
    }
}
