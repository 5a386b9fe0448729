use dioxus::prelude::*;

use ui::components::{AppNavbar, Footer};
use ui::core::history::PlatformHistory;
use ui::core::nav::{AppNav, NavController};
use ui::i18n::I18n;
use ui::views::PageContent;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The translation table is built once and injected; views never reach for
    // a global.
    use_context_provider(I18n::load);

    // Single writer of navigation state, seeded from whatever path the
    // browser loaded (the prerenderer opens every route directly).
    let nav = use_signal(|| NavController::mount(PlatformHistory::default()));
    use_context_provider(|| nav);

    // Back/forward support: re-derive the page from the address bar, without
    // pushing a fresh history entry.
    use_hook(|| listen_for_history_pops(nav));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { class: "site",
            AppNavbar {}
            main { class: "site__main", PageContent {} }
            Footer {}
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn listen_for_history_pops(mut nav: Signal<AppNav>) {
    use wasm_bindgen::prelude::*;

    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        nav.write().sync_from_location();
    });
    if let Err(err) =
        window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
    {
        eprintln!("[nav] failed to attach popstate listener: {err:?}");
    }
    // The listener lives for the whole session.
    closure.forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn listen_for_history_pops(_nav: Signal<AppNav>) {}
