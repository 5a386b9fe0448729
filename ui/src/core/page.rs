//! Page registry and path codec.
//!
//! The site is a small, fixed set of pages, so the codec is a direct
//! enumeration rather than a pattern-matching router: every page is a variant
//! of [`PageId`], and the URL mapping is a pair of total functions over that
//! closed set. Two pairs of variants are aliases kept for legacy links
//! (`Blog`/`News` and `Contact`/`Contacts`); they render identically and fold
//! to a single canonical path.

/// Identifier of a logical page. Closed set; includes alias ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    About,
    Products,
    Bags,
    PaperBags,
    LaminatedBags,
    KraftBagsWithPrint,
    KraftBagsWithHandles,
    ClutchBags,
    EcoCardboardBags,
    Components,
    PaperHandles,
    HandlesWithTips,
    Eyelets,
    PaperTwine,
    PaperCutting,
    Prices,
    ArtworkRequirements,
    HowWeWork,
    News,
    /// Legacy alias of [`PageId::News`].
    Blog,
    Contacts,
    /// Legacy alias of [`PageId::Contacts`].
    Contact,
}

/// The fixed, canonical route list. This is the contract the external
/// prerendering tool consumes: each entry is snapshotted to
/// `<route>/index.html` (the root route to `index.html`).
pub const CANONICAL_ROUTES: [&str; 21] = [
    "/",
    "/about",
    "/products",
    "/bags",
    "/bags/paper-bags",
    "/bags/laminated-bags",
    "/bags/kraft-bags-with-print",
    "/bags/kraft-bags-with-handles",
    "/bags/clutch-bags",
    "/bags/eco-cardboard-bags",
    "/components",
    "/components/paper-handles",
    "/components/handles-with-tips",
    "/components/eyelets",
    "/paper-twine",
    "/paper-cutting",
    "/prices",
    "/contacts",
    "/artwork-requirements",
    "/how-we-work",
    "/news",
];

impl PageId {
    /// Resolve a browser path to a page. Total: any unrecognized input
    /// degrades silently to `Home` (deliberate fallback policy, not an
    /// error). A trailing slash is tolerated because static hosting of the
    /// prerendered snapshots serves `/about/index.html` as `/about/`.
    pub fn from_path(path: &str) -> Self {
        let trimmed = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        match trimmed {
            "/" => Self::Home,
            "/about" => Self::About,
            "/products" => Self::Products,
            "/bags" => Self::Bags,
            "/bags/paper-bags" => Self::PaperBags,
            "/bags/laminated-bags" => Self::LaminatedBags,
            "/bags/kraft-bags-with-print" => Self::KraftBagsWithPrint,
            "/bags/kraft-bags-with-handles" => Self::KraftBagsWithHandles,
            "/bags/clutch-bags" => Self::ClutchBags,
            "/bags/eco-cardboard-bags" => Self::EcoCardboardBags,
            "/components" => Self::Components,
            "/components/paper-handles" => Self::PaperHandles,
            "/components/handles-with-tips" => Self::HandlesWithTips,
            "/components/eyelets" => Self::Eyelets,
            "/paper-twine" => Self::PaperTwine,
            "/paper-cutting" => Self::PaperCutting,
            "/prices" => Self::Prices,
            "/artwork-requirements" => Self::ArtworkRequirements,
            "/how-we-work" => Self::HowWeWork,
            "/news" => Self::News,
            "/contacts" => Self::Contacts,
            _ => Self::Home,
        }
    }

    /// Canonical browser path for this page. Aliases fold: `Blog` and `News`
    /// both yield `/news`, `Contact` and `Contacts` both yield `/contacts`.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Products => "/products",
            Self::Bags => "/bags",
            Self::PaperBags => "/bags/paper-bags",
            Self::LaminatedBags => "/bags/laminated-bags",
            Self::KraftBagsWithPrint => "/bags/kraft-bags-with-print",
            Self::KraftBagsWithHandles => "/bags/kraft-bags-with-handles",
            Self::ClutchBags => "/bags/clutch-bags",
            Self::EcoCardboardBags => "/bags/eco-cardboard-bags",
            Self::Components => "/components",
            Self::PaperHandles => "/components/paper-handles",
            Self::HandlesWithTips => "/components/handles-with-tips",
            Self::Eyelets => "/components/eyelets",
            Self::PaperTwine => "/paper-twine",
            Self::PaperCutting => "/paper-cutting",
            Self::Prices => "/prices",
            Self::ArtworkRequirements => "/artwork-requirements",
            Self::HowWeWork => "/how-we-work",
            Self::News | Self::Blog => "/news",
            Self::Contacts | Self::Contact => "/contacts",
        }
    }

    /// Fold alias ids to their canonical page.
    pub fn canonical(self) -> Self {
        match self {
            Self::Blog => Self::News,
            Self::Contact => Self::Contacts,
            other => other,
        }
    }

    /// The plain id string (`"bags/paper-bags"` style).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Products => "products",
            Self::Bags => "bags",
            Self::PaperBags => "bags/paper-bags",
            Self::LaminatedBags => "bags/laminated-bags",
            Self::KraftBagsWithPrint => "bags/kraft-bags-with-print",
            Self::KraftBagsWithHandles => "bags/kraft-bags-with-handles",
            Self::ClutchBags => "bags/clutch-bags",
            Self::EcoCardboardBags => "bags/eco-cardboard-bags",
            Self::Components => "components",
            Self::PaperHandles => "components/paper-handles",
            Self::HandlesWithTips => "components/handles-with-tips",
            Self::Eyelets => "components/eyelets",
            Self::PaperTwine => "paper-twine",
            Self::PaperCutting => "paper-cutting",
            Self::Prices => "prices",
            Self::ArtworkRequirements => "artwork-requirements",
            Self::HowWeWork => "how-we-work",
            Self::News => "news",
            Self::Blog => "blog",
            Self::Contacts => "contacts",
            Self::Contact => "contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_routes_round_trip() {
        for route in CANONICAL_ROUTES {
            let page = PageId::from_path(route);
            assert_eq!(
                page.path(),
                route,
                "route {route} did not survive the round trip"
            );
        }
    }

    #[test]
    fn aliases_converge_on_one_path() {
        assert_eq!(PageId::Blog.path(), "/news");
        assert_eq!(PageId::News.path(), "/news");
        assert_eq!(PageId::Contact.path(), "/contacts");
        assert_eq!(PageId::Contacts.path(), "/contacts");
    }

    #[test]
    fn aliases_fold_to_canonical_ids() {
        assert_eq!(PageId::Blog.canonical(), PageId::News);
        assert_eq!(PageId::Contact.canonical(), PageId::Contacts);
        assert_eq!(PageId::Bags.canonical(), PageId::Bags);
    }

    #[test]
    fn unknown_paths_degrade_to_home() {
        for garbage in ["", "/unknown-page-xyz", "/bags/unknown", "about", "//x//y"] {
            assert_eq!(PageId::from_path(garbage), PageId::Home, "input: {garbage:?}");
        }
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(PageId::from_path("/about/"), PageId::About);
        assert_eq!(PageId::from_path("/bags/paper-bags/"), PageId::PaperBags);
        assert_eq!(PageId::from_path("/"), PageId::Home);
    }

    #[test]
    fn nested_paths_select_the_detail_page() {
        assert_eq!(
            PageId::from_path("/bags/kraft-bags-with-handles"),
            PageId::KraftBagsWithHandles
        );
        assert_ne!(PageId::from_path("/bags/kraft-bags-with-handles"), PageId::Bags);
    }

    #[test]
    fn route_list_matches_the_registry() {
        // Every canonical page's path must appear in the prerender contract.
        let all = [
            PageId::Home,
            PageId::About,
            PageId::Products,
            PageId::Bags,
            PageId::PaperBags,
            PageId::LaminatedBags,
            PageId::KraftBagsWithPrint,
            PageId::KraftBagsWithHandles,
            PageId::ClutchBags,
            PageId::EcoCardboardBags,
            PageId::Components,
            PageId::PaperHandles,
            PageId::HandlesWithTips,
            PageId::Eyelets,
            PageId::PaperTwine,
            PageId::PaperCutting,
            PageId::Prices,
            PageId::ArtworkRequirements,
            PageId::HowWeWork,
            PageId::News,
            PageId::Contacts,
        ];
        assert_eq!(all.len(), CANONICAL_ROUTES.len());
        for page in all {
            assert!(CANONICAL_ROUTES.contains(&page.path()), "{page:?} missing");
        }
    }
}
