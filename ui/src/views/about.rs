use dioxus::prelude::*;

use crate::{use_i18n, use_nav};

// Headline figures shown under the company description.
const STATS: [(&str, &str); 3] = [
    ("15+", "about-experience"),
    ("20+", "about-products"),
    ("1000+", "about-clients"),
];

#[component]
pub fn About() -> Element {
    let nav = use_nav();
    let i18n = use_i18n();
    let lang = nav.read().lang();

    rsx! {
        section { class: "page page-about",
            h1 { {i18n.tr(lang, "about-title")} }
            p { class: "page__lead", {i18n.tr(lang, "about-subtitle")} }
            p { class: "page-about__description", {i18n.tr(lang, "about-description")} }

            div { class: "page-about__stats",
                for (value, key) in STATS {
                    div { key: "{key}", class: "stat",
                        span { class: "stat__value", "{value}" }
                        span { class: "stat__label", {i18n.tr(lang, key)} }
                    }
                }
            }
        }
    }
}
