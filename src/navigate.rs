/// Destination composition and adjacent-tab creation
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// Bridge to chrome.tabs, resolved at bundle time
#[wasm_bindgen(module = "/tabs.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn createTab(request: JsValue) -> Result<(), JsValue>;
}

/// The focused tab as reported by the tabs bridge. `url` is absent for
/// privileged pages the extension cannot read.
#[derive(Debug, Clone, Deserialize)]
pub struct ActiveTab {
    // Absent when the extension lacks host permission for the page
    #[serde(default)]
    pub url: Option<String>,
    pub index: i32,
}

/// A tab-creation request as handed to the bridge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabRequest {
    pub url: String,
    pub index: i32,
    pub active: bool,
}

/// Target for a pathmark: the current origin plus the stored path.
///
/// Plain concatenation. The stored path keeps its leading "/" and nothing
/// is normalized away; a malformed result surfaces as a browser-level
/// navigation failure, not here.
pub fn path_url(base_origin: &str, relative_path: &str) -> String {
    format!("{}{}", base_origin, relative_path)
}

/// Target for an environment switch: the alternate origin plus the current
/// path, query and fragment.
pub fn env_url(target_origin: &str, current_path: &str) -> String {
    format!("{}{}", target_origin, current_path)
}

/// An active tab right of the current one.
pub fn adjacent_request(url: String, current_index: i32) -> TabRequest {
    TabRequest {
        url,
        index: current_index + 1,
        active: true,
    }
}

/// Query the focused tab. `None` means navigation has nothing to anchor to
/// and callers drop the request without surfacing an error.
pub async fn active_tab() -> Option<ActiveTab> {
    match getActiveTab().await {
        Ok(tab_js) if !tab_js.is_null() && !tab_js.is_undefined() => {
            match serde_wasm_bindgen::from_value(tab_js) {
                Ok(tab) => Some(tab),
                Err(e) => {
                    log::warn!("Failed to parse active tab: {:?}", e);
                    None
                }
            }
        }
        Ok(_) => None,
        Err(e) => {
            log::warn!("Tab query failed: {:?}", e);
            None
        }
    }
}

/// Ask the browser to open `url` next to the current tab. One-way request:
/// a failed create is logged and otherwise dropped.
pub async fn open_adjacent(url: String, current_index: i32) {
    let request = adjacent_request(url, current_index);

    match serde_wasm_bindgen::to_value(&request) {
        Ok(request_js) => {
            if let Err(e) = createTab(request_js).await {
                log::warn!("Tab create failed for {}: {:?}", request.url, e);
            }
        }
        Err(e) => {
            log::warn!("Failed to serialize tab request: {:?}", e);
        }
    }
}

/// Open a pathmark relative to the current origin.
pub async fn go_to_path(base_origin: &str, relative_path: &str, current_index: i32) {
    open_adjacent(path_url(base_origin, relative_path), current_index).await;
}

/// Open the current path on an alternate environment's origin.
pub async fn go_to_env(target_origin: &str, current_path: &str, current_index: i32) {
    open_adjacent(env_url(target_origin, current_path), current_index).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_url_composition() {
        assert_eq!(path_url("https://a.test", "/x/y"), "https://a.test/x/y");
        assert_eq!(path_url("http://localhost:3000", "/"), "http://localhost:3000/");
    }

    #[test]
    fn test_env_url_keeps_query_and_fragment() {
        assert_eq!(
            env_url("https://b.test", "/p?q=1#h"),
            "https://b.test/p?q=1#h"
        );
    }

    #[test]
    fn test_composition_is_not_normalized() {
        // Double slashes and stray segments are the browser's problem.
        assert_eq!(path_url("https://a.test/", "/x"), "https://a.test//x");
        assert_eq!(path_url("https://a.test", "/a/../b"), "https://a.test/a/../b");
    }

    #[test]
    fn test_adjacent_request_for_pathmark() {
        let request = adjacent_request(path_url("https://a.test", "/x/y"), 2);

        assert_eq!(
            request,
            TabRequest {
                url: "https://a.test/x/y".to_string(),
                index: 3,
                active: true,
            }
        );
    }

    #[test]
    fn test_adjacent_request_for_env_switch() {
        let request = adjacent_request(env_url("https://b.test", "/p?q=1#h"), 0);

        assert_eq!(request.url, "https://b.test/p?q=1#h");
        assert_eq!(request.index, 1);
        assert!(request.active);
    }
}
