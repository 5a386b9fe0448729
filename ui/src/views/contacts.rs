//! Contacts page: contact info cards, working hours, and the message form.
//!
//! The form validates required fields client-side but submission is
//! intentionally disabled: there is no backend endpoint yet, so a valid
//! submit only shows the "coming soon" notice and changes nothing else.

use dioxus::prelude::*;

use crate::components::navbar::{PHONE_DISPLAY, PHONE_HREF};
use crate::{use_i18n, use_nav};

/// Serves both the `contacts` and legacy `contact` page ids.
#[component]
pub fn Contacts() -> Element {
    let nav = use_nav();
    let i18n = use_i18n();
    let lang = nav.read().lang();

    rsx! {
        section { class: "page page-contacts",
            h1 { {i18n.tr(lang, "contact-title")} }
            p { class: "page__lead", {i18n.tr(lang, "contact-subtitle")} }

            div { class: "page-contacts__grid",
                div { class: "page-contacts__info",
                    h2 { {i18n.tr(lang, "contact-info-title")} }

                    div { class: "card",
                        h3 { {i18n.tr(lang, "contact-phone")} }
                        a { href: PHONE_HREF, "{PHONE_DISPLAY}" }
                        p { class: "card__muted", {i18n.tr(lang, "contact-phone-hours")} }
                    }
                    div { class: "card",
                        h3 { {i18n.tr(lang, "contact-email")} }
                        a { href: "mailto:info@paperbag.org.ua", "info@paperbag.org.ua" }
                        p { class: "card__muted", {i18n.tr(lang, "contact-email-desc")} }
                    }
                    div { class: "card",
                        h3 { {i18n.tr(lang, "contact-address")} }
                        p { {i18n.tr(lang, "contact-address-value")} }
                        p { class: "card__muted", {i18n.tr(lang, "contact-address-desc")} }
                    }

                    div { class: "card",
                        h3 { {i18n.tr(lang, "contact-hours-title")} }
                        p { {i18n.tr(lang, "contact-hours-weekdays")} }
                        p { {i18n.tr(lang, "contact-hours-weekend")} }
                    }
                }

                ContactForm {}
            }
        }
    }
}

#[component]
fn ContactForm() -> Element {
    let nav = use_nav();
    let i18n = use_i18n();
    let lang = nav.read().lang();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut consent = use_signal(|| false);
    // Translation key of the notice under the form, if any.
    let mut notice = use_signal(|| None::<&'static str>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let incomplete = name().trim().is_empty()
            || email().trim().is_empty()
            || message().trim().is_empty()
            || !consent();
        if incomplete {
            notice.set(Some("contact-form-error-required"));
            return;
        }
        // No backend yet; the form stays decorative until one exists.
        notice.set(Some("contact-form-soon"));
    };

    rsx! {
        form { class: "contact-form", onsubmit: submit,
            h2 { {i18n.tr(lang, "contact-form-title")} }

            input {
                class: "contact-form__field",
                placeholder: i18n.tr(lang, "contact-form-name"),
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            input {
                class: "contact-form__field",
                r#type: "email",
                placeholder: i18n.tr(lang, "contact-form-email"),
                value: "{email}",
                oninput: move |evt| email.set(evt.value()),
            }
            input {
                class: "contact-form__field",
                r#type: "tel",
                placeholder: i18n.tr(lang, "contact-form-phone"),
                value: "{phone}",
                oninput: move |evt| phone.set(evt.value()),
            }
            textarea {
                class: "contact-form__field contact-form__field--message",
                placeholder: i18n.tr(lang, "contact-form-message"),
                value: "{message}",
                oninput: move |evt| message.set(evt.value()),
            }

            label { class: "contact-form__consent",
                input {
                    r#type: "checkbox",
                    checked: consent(),
                    oninput: move |evt| consent.set(evt.checked()),
                }
                {i18n.tr(lang, "contact-form-consent")}
            }

            if let Some(key) = notice() {
                p {
                    class: if key == "contact-form-error-required" {
                        "contact-form__notice contact-form__notice--error"
                    } else {
                        "contact-form__notice"
                    },
                    {i18n.tr(lang, key)}
                }
            }

            button { class: "btn btn--primary", r#type: "submit",
                {i18n.tr(lang, "contact-form-send")}
            }
        }
    }
}
