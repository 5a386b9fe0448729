//! Shared scaffold for catalog detail pages.
//!
//! The source material had a near-identical page component per product with
//! hand-duplicated markup; here every detail page is the same scaffold fed by
//! a translation-key prefix (`bags-paper`, `twine`, …): lead paragraph, three
//! selling points, a fixed specification table, and an order CTA.

use dioxus::prelude::*;

use crate::components::breadcrumbs::{Breadcrumbs, Crumb};
use crate::core::page::PageId;
use crate::core::seo::title_key;
use crate::{use_i18n, use_nav};

// Shared spec labels; values come from `{prefix}-{suffix}` keys.
const SPEC_ROWS: [(&str, &str); 4] = [
    ("spec-material", "material"),
    ("spec-sizes", "sizes"),
    ("spec-printing", "printing"),
    ("spec-min-qty", "min-qty"),
];

#[component]
pub fn DetailPage(parent: Option<PageId>, prefix: &'static str) -> Element {
    let mut nav = use_nav();
    let i18n = use_i18n();
    let lang = nav.read().lang();

    let title = i18n.tr(lang, &format!("{prefix}-title"));

    let mut trail = Vec::new();
    if let Some(parent) = parent {
        trail.push(Crumb {
            label: i18n.tr(lang, title_key(parent)),
            target: Some(parent),
        });
    }
    trail.push(Crumb {
        label: title.clone(),
        target: None,
    });

    rsx! {
        section { class: "page page-detail",
            Breadcrumbs { trail }

            h1 { "{title}" }
            p { class: "page__lead", {i18n.tr(lang, &format!("{prefix}-desc"))} }

            h2 { {i18n.tr(lang, "catalog-features-title")} }
            ul { class: "page-detail__points",
                for n in 1..=3 {
                    li { key: "{n}", {i18n.tr(lang, &format!("{prefix}-point-{n}"))} }
                }
            }

            h2 { {i18n.tr(lang, "catalog-specs-title")} }
            dl { class: "page-detail__specs",
                for (label, suffix) in SPEC_ROWS {
                    div { key: "{suffix}", class: "page-detail__spec",
                        dt { {i18n.tr(lang, label)} }
                        dd { {i18n.tr(lang, &format!("{prefix}-{suffix}"))} }
                    }
                }
            }

            button {
                class: "btn btn--primary",
                onclick: move |_| nav.write().navigate(PageId::Contact),
                {i18n.tr(lang, "hero-order-now")}
            }
        }
    }
}
