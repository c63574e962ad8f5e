/// Pathmarks - Chrome Extension for site path shortcuts
/// Built with Rust + WASM + Yew

mod config;
mod location;
mod navigate;
mod store;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export core resolution for JavaScript access
#[wasm_bindgen]
pub fn resolve_origin(url: &str) -> String {
    location::resolve(Some(url))
        .map(|current| current.origin)
        .unwrap_or_default()
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

// Start the Yew app for the options page
#[wasm_bindgen]
pub fn start_options() {
    yew::Renderer::<ui::options::Options>::new().render();
}
