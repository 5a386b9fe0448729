use dioxus::prelude::*;

use crate::{use_i18n, use_nav};

#[component]
pub fn HowWeWork() -> Element {
    let nav = use_nav();
    let i18n = use_i18n();
    let lang = nav.read().lang();

    rsx! {
        section { class: "page page-how",
            h1 { {i18n.tr(lang, "how-title")} }
            p { class: "page__lead", {i18n.tr(lang, "how-subtitle")} }

            div { class: "page-how__steps",
                for n in 1..=4 {
                    div { key: "{n}", class: "step",
                        span { class: "step__number", "{n}" }
                        h3 { {i18n.tr(lang, &format!("how-step-{n}-title"))} }
                        p { {i18n.tr(lang, &format!("how-step-{n}-desc"))} }
                    }
                }
            }
        }
    }
}
