//! SEO metadata side channel.
//!
//! Each rendered page writes its title, description, social tags, and
//! canonical link straight into the document head. Write-only: nothing here
//! feeds back into navigation state. On non-wasm targets the whole thing is a
//! no-op so the logic stays testable off-browser.

use crate::core::page::PageId;
use crate::i18n::{I18n, Lang};

/// Canonical origin used for `link[rel=canonical]` and Open Graph URLs.
pub const ORIGIN: &str = "https://paperbag.org.ua";

/// Head metadata for one `(page, language)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical: String,
}

/// Translation key of a page's display title (also used by breadcrumbs).
pub fn title_key(page: PageId) -> &'static str {
    match page.canonical() {
        PageId::Home => "meta-site-title",
        PageId::About => "about-title",
        PageId::Products => "products-title",
        PageId::Bags => "bags-title",
        PageId::PaperBags => "bags-paper-title",
        PageId::LaminatedBags => "bags-laminated-title",
        PageId::KraftBagsWithPrint => "bags-kraft-print-title",
        PageId::KraftBagsWithHandles => "bags-kraft-handles-title",
        PageId::ClutchBags => "bags-clutch-title",
        PageId::EcoCardboardBags => "bags-eco-title",
        PageId::Components => "components-title",
        PageId::PaperHandles => "components-handles-title",
        PageId::HandlesWithTips => "components-tips-title",
        PageId::Eyelets => "components-eyelets-title",
        PageId::PaperTwine => "twine-title",
        PageId::PaperCutting => "cutting-title",
        PageId::Prices => "prices-title",
        PageId::ArtworkRequirements => "artwork-title",
        PageId::HowWeWork => "how-title",
        PageId::News | PageId::Blog => "news-title",
        PageId::Contacts | PageId::Contact => "contact-title",
    }
}

/// Translation key of a page's one-line description.
fn description_key(page: PageId) -> &'static str {
    match page.canonical() {
        PageId::Home => "meta-default-desc",
        PageId::About => "about-description",
        PageId::Products => "products-subtitle",
        PageId::Bags => "bags-subtitle",
        PageId::PaperBags => "bags-paper-desc",
        PageId::LaminatedBags => "bags-laminated-desc",
        PageId::KraftBagsWithPrint => "bags-kraft-print-desc",
        PageId::KraftBagsWithHandles => "bags-kraft-handles-desc",
        PageId::ClutchBags => "bags-clutch-desc",
        PageId::EcoCardboardBags => "bags-eco-desc",
        PageId::Components => "components-subtitle",
        PageId::PaperHandles => "components-handles-desc",
        PageId::HandlesWithTips => "components-tips-desc",
        PageId::Eyelets => "components-eyelets-desc",
        PageId::PaperTwine => "twine-desc",
        PageId::PaperCutting => "cutting-desc",
        PageId::Prices => "prices-subtitle",
        PageId::ArtworkRequirements => "artwork-subtitle",
        PageId::HowWeWork => "how-subtitle",
        PageId::News | PageId::Blog => "news-subtitle",
        PageId::Contacts | PageId::Contact => "contact-subtitle",
    }
}

impl PageMeta {
    pub fn for_page(page: PageId, lang: Lang, i18n: &I18n) -> Self {
        let site = i18n.tr(lang, "meta-site-title");
        let title = if page.canonical() == PageId::Home {
            site
        } else {
            format!("{} | {}", i18n.tr(lang, title_key(page)), site)
        };
        Self {
            title,
            description: i18n.tr(lang, description_key(page)),
            keywords: i18n.tr(lang, "meta-keywords"),
            canonical: format!("{ORIGIN}{}", page.path()),
        }
    }

    /// Write this metadata into the document head and set `<html lang>`.
    #[cfg(target_arch = "wasm32")]
    pub fn apply(&self, lang: Lang) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        document.set_title(&self.title);
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("lang", lang.code());
        }

        set_meta(&document, "meta[name='description']", &self.description);
        set_meta(&document, "meta[name='keywords']", &self.keywords);
        set_meta(&document, "meta[property='og:title']", &self.title);
        set_meta(&document, "meta[property='og:description']", &self.description);
        set_meta(&document, "meta[property='og:url']", &self.canonical);
        set_meta(&document, "meta[name='twitter:title']", &self.title);
        set_meta(&document, "meta[name='twitter:description']", &self.description);

        // Canonical link is created on first use; index.html does not ship one.
        let link = match document.query_selector("link[rel='canonical']") {
            Ok(Some(el)) => Some(el),
            Ok(None) => document.create_element("link").ok().and_then(|el| {
                let _ = el.set_attribute("rel", "canonical");
                document.head().map(|head| {
                    let _ = head.append_child(&el);
                    el
                })
            }),
            Err(_) => None,
        };
        if let Some(link) = link {
            let _ = link.set_attribute("href", &self.canonical);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn apply(&self, _lang: Lang) {}
}

#[cfg(target_arch = "wasm32")]
fn set_meta(document: &web_sys::Document, selector: &str, content: &str) {
    if let Ok(Some(el)) = document.query_selector(selector) {
        let _ = el.set_attribute("content", content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_page_title_carries_the_site_suffix() {
        let i18n = I18n::load();
        let meta = PageMeta::for_page(PageId::PaperBags, Lang::En, &i18n);
        assert!(meta.title.contains(" | "));
        assert_eq!(meta.canonical, format!("{ORIGIN}/bags/paper-bags"));
    }

    #[test]
    fn home_title_is_the_site_title() {
        let i18n = I18n::load();
        let meta = PageMeta::for_page(PageId::Home, Lang::Uk, &i18n);
        assert_eq!(meta.title, i18n.tr(Lang::Uk, "meta-site-title"));
        assert_eq!(meta.canonical, format!("{ORIGIN}/"));
    }

    #[test]
    fn aliases_share_metadata_with_their_canonical_page() {
        let i18n = I18n::load();
        let blog = PageMeta::for_page(PageId::Blog, Lang::En, &i18n);
        let news = PageMeta::for_page(PageId::News, Lang::En, &i18n);
        assert_eq!(blog, news);
    }
}
