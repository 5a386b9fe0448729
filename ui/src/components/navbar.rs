//! Top navigation bar: brand block, primary nav items, phone, and the
//! УКР/ENG language switcher. Every click goes through the navigation
//! controller; the navbar itself holds no state.

use dioxus::prelude::*;

use crate::core::page::PageId;
use crate::i18n::Lang;
use crate::{use_i18n, use_nav};

// Primary items keep the legacy alias ids (`Blog`, `Contact`) on purpose:
// the controller folds them to the canonical /news and /contacts paths.
const NAV_ITEMS: [(PageId, &str); 6] = [
    (PageId::Home, "nav-home"),
    (PageId::About, "nav-about"),
    (PageId::Products, "nav-products"),
    (PageId::HowWeWork, "nav-how-we-work"),
    (PageId::Blog, "nav-blog"),
    (PageId::Contact, "nav-contact"),
];

pub const PHONE_DISPLAY: &str = "+38 067 487 4902";
pub const PHONE_HREF: &str = "tel:+380674874902";

#[component]
pub fn AppNavbar() -> Element {
    let mut nav = use_nav();
    let i18n = use_i18n();
    let state = nav.read().state();
    let lang = state.lang;
    let active = state.page.canonical();

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                // Brand
                div {
                    class: "navbar__brand",
                    onclick: move |_| nav.write().navigate(PageId::Home),
                    span { class: "navbar__brand-mark", "PB" }
                    div { class: "navbar__brand-text",
                        span { class: "navbar__brand-name", "PaperBag" }
                        span { class: "navbar__brand-subtitle", {i18n.tr(lang, "nav-tagline")} }
                    }
                }

                // Primary navigation
                nav { class: "navbar__links",
                    for (page, key) in NAV_ITEMS {
                        button {
                            key: "{key}",
                            class: if page.canonical() == active {
                                "navbar__link navbar__link--active"
                            } else {
                                "navbar__link"
                            },
                            onclick: move |_| nav.write().navigate(page),
                            {i18n.tr(lang, key)}
                        }
                    }
                }

                // Contact shortcut + locale switcher
                div { class: "navbar__side",
                    a { class: "navbar__phone", href: PHONE_HREF, "{PHONE_DISPLAY}" }
                    LangSwitcher {}
                }
            }
        }
    }
}

/// Two-button switcher; the language slice is independent of the page slice,
/// so switching never navigates.
#[component]
fn LangSwitcher() -> Element {
    let mut nav = use_nav();
    let current = nav.read().lang();

    rsx! {
        div { class: "navbar__locale",
            button {
                class: if current == Lang::Uk { "lang-switch lang-switch--active" } else { "lang-switch" },
                onclick: move |_| nav.write().set_lang(Lang::Uk),
                "УКР"
            }
            button {
                class: if current == Lang::En { "lang-switch lang-switch--active" } else { "lang-switch" },
                onclick: move |_| nav.write().set_lang(Lang::En),
                "ENG"
            }
        }
    }
}
