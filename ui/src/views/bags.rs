//! Bag catalog: landing page plus the six detail pages.

use dioxus::prelude::*;

use crate::core::page::PageId;
use crate::views::detail::DetailPage;
use crate::{use_i18n, use_nav};

pub const BAG_PAGES: [(PageId, &str); 6] = [
    (PageId::PaperBags, "bags-paper"),
    (PageId::LaminatedBags, "bags-laminated"),
    (PageId::KraftBagsWithPrint, "bags-kraft-print"),
    (PageId::KraftBagsWithHandles, "bags-kraft-handles"),
    (PageId::ClutchBags, "bags-clutch"),
    (PageId::EcoCardboardBags, "bags-eco"),
];

#[component]
pub fn BagsLanding() -> Element {
    let mut nav = use_nav();
    let i18n = use_i18n();
    let lang = nav.read().lang();

    rsx! {
        section { class: "page page-bags",
            h1 { {i18n.tr(lang, "bags-title")} }
            p { class: "page__lead", {i18n.tr(lang, "bags-subtitle")} }

            div { class: "card-grid",
                for (page, prefix) in BAG_PAGES {
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
pub fn PaperBags() -> Element {
    rsx! { DetailPage { parent: Some(PageId::Bags), prefix: "bags-paper" } }
}

#[component]
pub fn LaminatedBags() -> Element {
    rsx! { DetailPage { parent: Some(PageId::Bags), prefix: "bags-laminated" } }
}

#[component]
pub fn KraftBagsWithPrint() -> Element {
    rsx! { DetailPage { parent: Some(PageId::Bags), prefix: "bags-kraft-print" } }
}

#[component]
pub fn KraftBagsWithHandles() -> Element {
    rsx! { DetailPage { parent: Some(PageId::Bags), prefix: "bags-kraft-handles" } }
}

#[component]
pub fn ClutchBags() -> Element {
    rsx! { DetailPage { parent: Some(PageId::Bags), prefix: "bags-clutch" } }
}

#[component]
pub fn EcoCardboardBags() -> Element {
    rsx! { DetailPage { parent: Some(PageId::Bags), prefix: "bags-eco" } }
}
