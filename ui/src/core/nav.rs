//! Navigation controller: the single owner of "what page is active".
//!
//! Keeps the in-memory page state, the address bar, and back/forward
//! navigation consistent. Views and the shell hold a read-only snapshot plus
//! the controller handle; every page change goes through [`NavController::navigate`].

use crate::core::history::{HistoryBackend, PlatformHistory};
use crate::core::page::PageId;
use crate::i18n::Lang;

/// Snapshot of the navigation state. The two slices are independent: a page
/// change never touches the language and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub page: PageId,
    pub lang: Lang,
}

pub struct NavController<H: HistoryBackend> {
    state: NavState,
    history: H,
}

/// Controller type used by the application for the current target.
pub type AppNav = NavController<PlatformHistory>;

impl<H: HistoryBackend> NavController<H> {
    /// Create the controller, seeding the page once from whatever path the
    /// address bar currently shows. Unknown paths degrade to the home page.
    pub fn mount(history: H) -> Self {
        let page = PageId::from_path(&history.current_path());
        Self {
            state: NavState {
                page,
                lang: Lang::default(),
            },
            history,
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn page(&self) -> PageId {
        self.state.page
    }

    pub fn lang(&self) -> Lang {
        self.state.lang
    }

    /// Explicit navigation. Last write wins: the in-memory page is updated
    /// first, then the canonical path is pushed as a new history entry.
    /// Navigating to the page already in the address bar updates state only,
    /// so repeated requests never stack duplicate entries.
    pub fn navigate(&mut self, page: PageId) {
        self.state.page = page;
        let path = page.path();
        if self.history.current_path() != path {
            self.history.push(path);
        }
        #[cfg(debug_assertions)]
        println!("[nav] -> {} ({path})", page.as_str());
    }

    /// Switch the interface language. Independent of the page slice; no
    /// history entry is written (the language is never part of the URL).
    pub fn set_lang(&mut self, lang: Lang) {
        self.state.lang = lang;
        #[cfg(debug_assertions)]
        println!("[nav] lang -> {}", lang.code());
    }

    /// Back/forward handler: re-derive the page from the address bar without
    /// pushing a new entry (pushing here would duplicate history).
    pub fn sync_from_location(&mut self) {
        self.state.page = PageId::from_path(&self.history.current_path());
    }

    /// The backing history. Exposed so the host (or a test) can mutate it the
    /// way a real browser would before calling [`Self::sync_from_location`].
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    pub fn history(&self) -> &H {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::history::MemoryHistory;

    fn controller_at(path: &str) -> NavController<MemoryHistory> {
        NavController::mount(MemoryHistory::at(path))
    }

    #[test]
    fn mount_seeds_from_the_current_path() {
        let nav = controller_at("/bags/kraft-bags-with-handles");
        assert_eq!(nav.page(), PageId::KraftBagsWithHandles);
        assert_eq!(nav.lang(), Lang::Uk);
    }

    #[test]
    fn mount_on_unknown_path_lands_on_home() {
        let nav = controller_at("/definitely-not-a-page");
        assert_eq!(nav.page(), PageId::Home);
    }

    #[test]
    fn navigate_updates_state_and_pushes_exactly_one_entry() {
        let mut nav = controller_at("/");
        nav.navigate(PageId::Products);
        assert_eq!(nav.page(), PageId::Products);
        assert_eq!(nav.history().current_path(), "/products");
        assert_eq!(nav.history().len(), 2);
    }

    #[test]
    fn repeated_navigation_is_idempotent() {
        let mut nav = controller_at("/");
        nav.navigate(PageId::Products);
        nav.navigate(PageId::Products);
        assert_eq!(nav.history().len(), 2, "duplicate entry pushed");
        assert_eq!(nav.page(), PageId::Products);
    }

    #[test]
    fn alias_navigation_writes_the_canonical_path() {
        let mut nav = controller_at("/");
        nav.navigate(PageId::Contact);
        assert_eq!(nav.history().current_path(), "/contacts");
        assert_eq!(nav.page().canonical(), PageId::Contacts);

        nav.navigate(PageId::Blog);
        assert_eq!(nav.history().current_path(), "/news");
    }

    #[test]
    fn language_and_page_slices_are_independent() {
        let mut nav = controller_at("/prices");
        nav.set_lang(Lang::En);
        assert_eq!(nav.page(), PageId::Prices, "language switch moved the page");
        assert_eq!(nav.history().len(), 1, "language switch touched history");

        nav.navigate(PageId::About);
        assert_eq!(nav.lang(), Lang::En, "page switch reset the language");
    }

    #[test]
    fn back_resyncs_without_pushing() {
        let mut nav = controller_at("/");
        nav.navigate(PageId::About);
        nav.navigate(PageId::Prices);
        assert_eq!(nav.history().len(), 3);

        // Browser back: the address bar changes first, then we get notified.
        nav.history_mut().pop();
        nav.sync_from_location();
        assert_eq!(nav.page(), PageId::About);
        assert_eq!(nav.history().len(), 2, "pop handler pushed an entry");

        nav.history_mut().pop();
        nav.sync_from_location();
        assert_eq!(nav.page(), PageId::Home);
    }
}
