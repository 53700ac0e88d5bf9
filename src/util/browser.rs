//! Handles to browser globals. Every accessor returns `None` when the page is
//! not running in a window (workers, tests under `wasm-bindgen-test`).

/// The origin's `localStorage`, if the browser allows access to it.
pub fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// The `<html>` element.
pub fn root_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

/// Whether the operating system asks for a dark color scheme.
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}
