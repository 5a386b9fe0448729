use dioxus::prelude::*;

use crate::core::page::PageId;
use crate::{use_i18n, use_nav};

const FEATURES: [&str; 3] = [
    "home-feature-eco",
    "home-feature-quality",
    "home-feature-delivery",
];

#[component]
pub fn Home() -> Element {
    let mut nav = use_nav();
    let i18n = use_i18n();
    let lang = nav.read().lang();

    rsx! {
        section { class: "page page-home",
            // Hero
            section { class: "hero",
                h1 { {i18n.tr(lang, "hero-title")} }
                p { class: "hero__subtitle", {i18n.tr(lang, "hero-subtitle")} }
                div { class: "hero__actions",
                    button {
                        class: "btn btn--primary",
                        onclick: move |_| nav.write().navigate(PageId::Contact),
                        {i18n.tr(lang, "hero-cta")}
                    }
                    button {
                        class: "btn btn--outline",
                        onclick: move |_| nav.write().navigate(PageId::Products),
                        {i18n.tr(lang, "home-view-products")}
                    }
                }
            }

            // Why choose us
            section { class: "page-home__features",
                h2 { {i18n.tr(lang, "home-why-title")} }
                p { class: "page__lead", {i18n.tr(lang, "home-why-subtitle")} }
                div { class: "card-grid",
                    for prefix in FEATURES {
                        article { key: "{prefix}", class: "card",
                            h3 { {i18n.tr(lang, &format!("{prefix}-title"))} }
                            p { {i18n.tr(lang, &format!("{prefix}-desc"))} }
                        }
                    }
                }
            }

            // Products preview
            section { class: "page-home__products",
                h2 { {i18n.tr(lang, "products-title")} }
                p { class: "page__lead", {i18n.tr(lang, "products-subtitle")} }
                button {
                    class: "btn",
                    onclick: move |_| nav.write().navigate(PageId::Products),
                    {i18n.tr(lang, "home-view-all")}
                }
            }

            // Bottom CTA
            section { class: "page-home__cta",
                h2 { {i18n.tr(lang, "home-cta-title")} }
                p { class: "page__lead", {i18n.tr(lang, "home-cta-subtitle")} }
                button {
                    class: "btn btn--primary",
                    onclick: move |_| nav.write().navigate(PageId::Contact),
                    {i18n.tr(lang, "hero-cta")}
                }
            }
        }
    }
}
