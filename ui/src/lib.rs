//! Shared UI crate for the PaperBag site. All views, shell chrome, and the
//! navigation core live here; the `web` crate is only a launcher.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod breadcrumbs;
    pub mod footer;
    pub mod navbar;

    pub use breadcrumbs::Breadcrumbs;
    pub use footer::Footer;
    pub use navbar::AppNavbar;
}

/// Navigation controller handle, provided via context by the launcher.
pub fn use_nav() -> Signal<core::nav::AppNav> {
    use_context()
}

/// Translation table handle, provided via context by the launcher.
pub fn use_i18n() -> i18n::I18n {
    use_context()
}
