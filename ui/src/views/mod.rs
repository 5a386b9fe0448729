//! One canonical view per page. Dispatch is a match over the canonical
//! `PageId`, so totality (and the shared fallback policy with the path codec)
//! is enforced by the compiler rather than maintained by hand.

use dioxus::prelude::*;

use crate::core::page::PageId;
use crate::core::seo::PageMeta;
use crate::{use_i18n, use_nav};

mod about;
mod artwork_requirements;
mod bags;
mod components;
mod contacts;
mod detail;
mod home;
mod how_we_work;
mod news;
mod paper_cutting;
mod paper_twine;
mod prices;
mod products;

pub use about::About;
pub use contacts::Contacts;
pub use home::Home;
pub use news::News;
pub use products::Products;

/// Renders the active page and refreshes the document head for it. Alias ids
/// collapse to one view; both arms are spelled out so the compiler keeps the
/// mapping total.
#[component]
pub fn PageContent() -> Element {
    let nav = use_nav();
    let i18n = use_i18n();
    let state = nav.read().state();

    // Head metadata tracks every page/language change.
    PageMeta::for_page(state.page, state.lang, &i18n).apply(state.lang);

    match state.page.canonical() {
        PageId::Home => rsx! { home::Home {} },
        PageId::About => rsx! { about::About {} },
        PageId::Products => rsx! { products::Products {} },
        PageId::Bags => rsx! { bags::BagsLanding {} },
        PageId::PaperBags => rsx! { bags::PaperBags {} },
        PageId::LaminatedBags => rsx! { bags::LaminatedBags {} },
        PageId::KraftBagsWithPrint => rsx! { bags::KraftBagsWithPrint {} },
        PageId::KraftBagsWithHandles => rsx! { bags::KraftBagsWithHandles {} },
        PageId::ClutchBags => rsx! { bags::ClutchBags {} },
        PageId::EcoCardboardBags => rsx! { bags::EcoCardboardBags {} },
        PageId::Components => rsx! { components::ComponentsLanding {} },
        PageId::PaperHandles => rsx! { components::PaperHandles {} },
        PageId::HandlesWithTips => rsx! { components::HandlesWithTips {} },
        PageId::Eyelets => rsx! { components::Eyelets {} },
        PageId::PaperTwine => rsx! { paper_twine::PaperTwine {} },
        PageId::PaperCutting => rsx! { paper_cutting::PaperCutting {} },
        PageId::Prices => rsx! { prices::Prices {} },
        PageId::ArtworkRequirements => rsx! { artwork_requirements::ArtworkRequirements {} },
        PageId::HowWeWork => rsx! { how_we_work::HowWeWork {} },
        PageId::News | PageId::Blog => rsx! { news::News {} },
        PageId::Contacts | PageId::Contact => rsx! { contacts::Contacts {} },
    }
}
