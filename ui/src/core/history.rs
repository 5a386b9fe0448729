//! History backends for the navigation controller.
//!
//! The controller only ever needs three things from the browser: the path
//! currently in the address bar, a way to push a new entry without reloading,
//! and the entry count (for tests). That seam is [`HistoryBackend`]; the real
//! browser implementation lives behind `wasm32`, everything else (native
//! builds, unit tests) uses the in-memory stack.

/// Minimal view of the browser's navigable history.
pub trait HistoryBackend {
    /// Path currently shown in the address bar.
    fn current_path(&self) -> String;
    /// Push a new entry for `path` without a page reload.
    fn push(&mut self, path: &str);
    /// Number of entries in the session history.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory history stack. Also the backing store for unit tests, which is
/// why it exposes [`MemoryHistory::pop`]: tests drive "browser back" by
/// popping an entry and then asking the controller to resynchronize.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    stack: Vec<String>,
}

impl MemoryHistory {
    /// Start the session at an arbitrary path (the prerenderer hits every
    /// route directly, so seeding is never assumed to happen at `/`).
    pub fn at(path: &str) -> Self {
        Self {
            stack: vec![path.to_string()],
        }
    }

    /// Simulate the browser's back button. The initial entry stays put.
    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::at("/")
    }
}

impl HistoryBackend for MemoryHistory {
    fn current_path(&self) -> String {
        self.stack.last().cloned().unwrap_or_else(|| "/".to_string())
    }

    fn push(&mut self, path: &str) {
        self.stack.push(path.to_string());
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// The real address bar, via `window.history` / `window.location`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DomHistory;

#[cfg(target_arch = "wasm32")]
impl HistoryBackend for DomHistory {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn push(&mut self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(history) = window.history() {
            // pushState never reloads; failures (e.g. sandboxed iframes) are
            // logged and the in-memory state stays authoritative.
            if let Err(err) = history.push_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(path),
            ) {
                #[cfg(debug_assertions)]
                eprintln!("[nav] pushState failed: {err:?}");
                let _ = err;
            }
        }
    }

    fn len(&self) -> usize {
        web_sys::window()
            .and_then(|w| w.history().ok())
            .and_then(|h| h.length().ok())
            .map(|l| l as usize)
            .unwrap_or(0)
    }
}

/// Backend used by the application for the current target.
#[cfg(target_arch = "wasm32")]
pub type PlatformHistory = DomHistory;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformHistory = MemoryHistory;
