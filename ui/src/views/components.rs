//! Bag components catalog: landing page plus the three detail pages.

use dioxus::prelude::*;

use crate::core::page::PageId;
use crate::views::detail::DetailPage;
use crate::{use_i18n, use_nav};

pub const COMPONENT_PAGES: [(PageId, &str); 3] = [
    (PageId::PaperHandles, "components-handles"),
    (PageId::HandlesWithTips, "components-tips"),
    (PageId::Eyelets, "components-eyelets"),
];

#[component]
pub fn ComponentsLanding() -> Element {
    let mut nav = use_nav();
    let i18n = use_i18n();
    let lang = nav.read().lang();

    rsx! {
        section { class: "page page-components",
            h1 { {i18n.tr(lang, "components-title")} }
            p { class: "page__lead", {i18n.tr(lang, "components-subtitle")} }

            div { class: "card-grid",
                for (page, prefix) in COMPONENT_PAGES {
                    article { key: "{prefix}", class: "card",
                        h3 { {i18n.tr(lang, &format!("{prefix}-title"))} }
                        p { {i18n.tr(lang, &format!("{prefix}-desc"))} }
                        button {
                            class: "btn",
                            onclick: move |_| nav.write().navigate(page),
                            {i18n.tr(lang, "products-details")}
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PaperHandles() -> Element {
    rsx! { DetailPage { parent: Some(PageId::Components), prefix: "components-handles" } }
}

#[component]
pub fn HandlesWithTips() -> Element {
    rsx! { DetailPage { parent: Some(PageId::Components), prefix: "components-tips" } }
}

#[component]
pub fn Eyelets() -> Element {
    rsx! { DetailPage { parent: Some(PageId::Components), prefix: "components-eyelets" } }
}
