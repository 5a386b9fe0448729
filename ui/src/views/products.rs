//! Products landing: the four catalog categories with their contents.

use dioxus::prelude::*;

use crate::core::page::PageId;
use crate::core::seo::title_key;
use crate::{use_i18n, use_nav};

struct Category {
    page: PageId,
    desc_key: &'static str,
    children: &'static [PageId],
    is_new: bool,
}

const CATEGORIES: [Category; 4] = [
    Category {
        page: PageId::Bags,
        desc_key: "products-bags-desc",
        children: &[
            PageId::PaperBags,
            PageId::LaminatedBags,
            PageId::KraftBagsWithPrint,
            PageId::KraftBagsWithHandles,
            PageId::ClutchBags,
            PageId::EcoCardboardBags,
        ],
        is_new: false,
    },
    Category {
        page: PageId::Components,
        desc_key: "products-components-desc",
        children: &[PageId::PaperHandles, PageId::HandlesWithTips, PageId::Eyelets],
        is_new: false,
    },
    Category {
        page: PageId::PaperTwine,
        desc_key: "twine-desc",
        children: &[],
        is_new: false,
    },
    Category {
        page: PageId::PaperCutting,
        desc_key: "cutting-desc",
        children: &[],
        is_new: true,
    },
];

#[component]
pub fn Products() -> Element {
    let mut nav = use_nav();
    let i18n = use_i18n();
    let lang = nav.read().lang();

    rsx! {
        section { class: "page page-products",
            h1 { {i18n.tr(lang, "products-title")} }
            p { class: "page__lead", {i18n.tr(lang, "products-subtitle")} }

            div { class: "card-grid card-grid--wide",
                for (idx, category) in CATEGORIES.iter().enumerate() {
                    article { key: "{idx}", class: "card card--category",
                        if category.is_new {
                            span { class: "card__badge", {i18n.tr(lang, "products-new")} }
                        }
                        h2 { {i18n.tr(lang, title_key(category.page))} }
                        p { {i18n.tr(lang, category.desc_key)} }

                        if !category.children.is_empty() {
                            h4 { {i18n.tr(lang, "products-includes")} }
                            ul { class: "card__includes",
                                for (child_idx, child) in category.children.iter().enumerate() {
                                    li { key: "{child_idx}",
                                        button {
                                            class: "card__include-link",
                                            onclick: {
                                                let child = *child;
                                                move |_| nav.write().navigate(child)
                                            },
                                            {i18n.tr(lang, title_key(*child))}
                                        }
                                    }
                                }
                            }
                        }

                        button {
                            class: "btn",
                            onclick: {
                                let page = category.page;
                                move |_| nav.write().navigate(page)
                            },
                            {i18n.tr(lang, "products-details")}
                        }
                    }
                }
            }
        }
    }
}
