//! Breadcrumb trail for nested catalog pages.

use dioxus::prelude::*;

use crate::core::page::PageId;
use crate::{use_i18n, use_nav};

/// One trail entry. Entries with a target navigate on click; the last entry
/// (the current page) is rendered as plain text.
#[derive(Debug, Clone, PartialEq)]
pub struct Crumb {
    pub label: String,
    pub target: Option<PageId>,
}

#[component]
pub fn Breadcrumbs(trail: Vec<Crumb>) -> Element {
    let mut nav = use_nav();
    let i18n = use_i18n();
    let lang = nav.read().lang();

    rsx! {
        nav { class: "breadcrumbs",
            button {
                class: "breadcrumbs__link",
                onclick: move |_| nav.write().navigate(PageId::Home),
                {i18n.tr(lang, "nav-home")}
            }
            for (idx, crumb) in trail.into_iter().enumerate() {
                span { key: "{idx}", class: "breadcrumbs__item",
                    span { class: "breadcrumbs__sep", "›" }
                    if let Some(target) = crumb.target {
                        button {
                            class: "breadcrumbs__link",
                            onclick: move |_| nav.write().navigate(target),
                            "{crumb.label}"
                        }
                    } else {
                        span { class: "breadcrumbs__current", "{crumb.label}" }
                    }
                }
            }
        }
    }
}
