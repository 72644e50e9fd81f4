/// Predatory Detector - Chrome Extension flagging predatory journals
/// Built with Rust + WASM + Yew

pub mod client;
pub mod lookup;
pub mod prediction;
pub mod settings;
pub mod title;
pub mod ui;
pub mod verdict;

use wasm_bindgen::prelude::*;

/// Element in popup.html the verdict is rendered into
const RESULT_ELEMENT_ID: &str = "result";

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export title normalization for JavaScript access
#[wasm_bindgen]
pub fn normalize_title(raw_title: &str) -> String {
    title::normalize(raw_title)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(RESULT_ELEMENT_ID));

    match root {
        Some(root) => {
            yew::Renderer::<ui::popup::App>::with_root(root).render();
        }
        None => {
            log::warn!("No #{} element, rendering into body", RESULT_ELEMENT_ID);
            yew::Renderer::<ui::popup::App>::new().render();
        }
    }
}
