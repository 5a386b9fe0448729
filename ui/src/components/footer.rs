//! Site footer: company blurb, product and company link columns, contact
//! info, and the bottom bar. All links navigate through the controller.

use dioxus::prelude::*;

use crate::components::navbar::{PHONE_DISPLAY, PHONE_HREF};
use crate::core::page::PageId;
use crate::core::seo::title_key;
use crate::{use_i18n, use_nav};

const PRODUCT_LINKS: [PageId; 4] = [
    PageId::PaperBags,
    PageId::LaminatedBags,
    PageId::KraftBagsWithPrint,
    PageId::ClutchBags,
];

const COMPANY_LINKS: [(PageId, &str); 4] = [
    (PageId::About, "nav-about"),
    (PageId::HowWeWork, "nav-how-we-work"),
    (PageId::Blog, "nav-blog"),
    (PageId::Contact, "nav-contact"),
];

#[component]
pub fn Footer() -> Element {
    let mut nav = use_nav();
    let i18n = use_i18n();
    let lang = nav.read().lang();

    rsx! {
        footer { class: "footer",
            div { class: "footer__columns",
                // Company info
                div { class: "footer__col",
                    div { class: "footer__brand",
                        span { class: "footer__brand-mark", "PB" }
                        div {
                            h3 { "PaperBag" }
                            p { class: "footer__tagline", {i18n.tr(lang, "nav-tagline")} }
                        }
                    }
                    p { class: "footer__blurb", {i18n.tr(lang, "footer-blurb")} }
                }

                // Products
                div { class: "footer__col",
                    h4 { {i18n.tr(lang, "nav-products")} }
                    ul {
                        for (idx, page) in PRODUCT_LINKS.into_iter().enumerate() {
                            li { key: "{idx}",
                                button {
                                    class: "footer__link",
                                    onclick: move |_| nav.write().navigate(page),
                                    {i18n.tr(lang, title_key(page))}
                                }
                            }
                        }
                    }
                }

                // Company
                div { class: "footer__col",
                    h4 { {i18n.tr(lang, "footer-company")} }
                    ul {
                        for (page, key) in COMPANY_LINKS {
                            li { key: "{key}",
                                button {
                                    class: "footer__link",
                                    onclick: move |_| nav.write().navigate(page),
                                    {i18n.tr(lang, key)}
                                }
                            }
                        }
                    }
                }

                // Contact info
                div { class: "footer__col",
                    h4 { {i18n.tr(lang, "nav-contact")} }
                    p {
                        a { class: "footer__link", href: PHONE_HREF, "{PHONE_DISPLAY}" }
                    }
                    p { class: "footer__muted", {i18n.tr(lang, "contact-phone-hours")} }
                    p {
                        a {
                            class: "footer__link",
                            href: "mailto:info@paperbag.org.ua",
                            "info@paperbag.org.ua"
                        }
                    }
                    p { {i18n.tr(lang, "contact-address-value")} }
                    p { class: "footer__muted", {i18n.tr(lang, "contact-address-desc")} }
                }
            }

            div { class: "footer__bottom",
                p { class: "footer__muted", "© 2024 PaperBag. " {i18n.tr(lang, "footer-rights")} }
                div { class: "footer__legal",
                    span { {i18n.tr(lang, "footer-privacy")} }
                    span { {i18n.tr(lang, "footer-terms")} }
                }
            }
        }
    }
}
