/// Typed load/save over the extension's key-value store
use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::config::{self, Config, ConfigError, STORAGE_KEY};

// Bridge to chrome.storage.local, resolved at bundle time
#[wasm_bindgen(module = "/storage.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;
}

/// Fetch and normalize the stored document.
///
/// Never fails: absence, a failed bridge call and malformed legacy data
/// all resolve to a best-effort config. Failures are logged, not raised.
pub async fn load() -> Config {
    match raw_value().await {
        Some(raw) => config::normalize(&raw),
        None => Config::default(),
    }
}

/// The stored raw value pretty-printed for the options editor, verbatim
/// (not normalized). A fresh install yields the default document's text.
pub async fn load_text() -> String {
    let raw = raw_value().await.unwrap_or_else(config::default_document);
    config::to_canonical_text(&raw)
}

/// Parse the editor text, returning the value to persist and the canonical
/// re-serialization the editor redisplays. Pure: nothing is written when
/// parsing fails, so a rejected save leaves the store untouched.
pub fn prepare_save(raw_text: &str) -> Result<(Value, String), ConfigError> {
    let parsed: Value = serde_json::from_str(raw_text)?;
    let canonical = config::to_canonical_text(&parsed);
    Ok((parsed, canonical))
}

/// Persist the editor text under the fixed key: exactly one bridge write of
/// the parsed value, verbatim. Last writer wins; concurrent options pages
/// are not coordinated.
pub async fn save(raw_text: &str) -> Result<String, ConfigError> {
    let (parsed, canonical) = prepare_save(raw_text)?;

    let value_js = serde_wasm_bindgen::to_value(&parsed)
        .map_err(|e| ConfigError::Storage(format!("{:?}", e)))?;

    setStorage(STORAGE_KEY, value_js)
        .await
        .map_err(|e| ConfigError::Storage(format!("{:?}", e)))?;

    Ok(canonical)
}

async fn raw_value() -> Option<Value> {
    match getStorage(STORAGE_KEY).await {
        Ok(value_js) if !value_js.is_null() && !value_js.is_undefined() => {
            match serde_wasm_bindgen::from_value(value_js) {
                Ok(raw) => Some(raw),
                Err(e) => {
                    log::warn!("Stored value is not representable as JSON: {:?}", e);
                    None
                }
            }
        }
        Ok(_) => None,
        Err(e) => {
            log::warn!("Storage get failed: {:?}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_save_rejects_invalid_json() {
        assert!(matches!(
            prepare_save("{invalid"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(prepare_save(""), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_prepare_save_formats_canonically() {
        let (parsed, canonical) =
            prepare_save("{\"pathmarks\":[{\"title\":\"A\",\"path\":\"/a\"}]}").unwrap();

        assert_eq!(parsed["pathmarks"][0]["path"], "/a");
        assert_eq!(
            canonical,
            "{\n  \"pathmarks\": [\n    {\n      \"path\": \"/a\",\n      \"title\": \"A\"\n    }\n  ]\n}"
        );
    }

    #[test]
    fn test_prepare_save_keeps_unknown_keys() {
        let (parsed, canonical) = prepare_save("{\"pathmarks\": [], \"note\": \"keep me\"}").unwrap();

        assert_eq!(parsed["note"], "keep me");
        assert!(canonical.contains("\"note\": \"keep me\""));
    }

    #[test]
    fn test_prepare_save_is_parse_gated_only() {
        // The shape gate belongs to the editor's live indicator; anything
        // that parses may be persisted, matching the permissive store.
        assert!(prepare_save("{\"pathmarks\": 5}").is_ok());
        assert!(prepare_save("[1, 2, 3]").is_ok());
    }
}
